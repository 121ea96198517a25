use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    response::Html,
    Form, Json,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::contact::models::{ContactSubmission, DispatchOutcome};
use crate::errors::AppError;
use crate::page::render::{render_page, ContactNotice, PageView};
use crate::state::AppState;

/// POST /contact
/// Browser form post. Always answers with the page; the outcome is shown
/// above the form, and rejected input is echoed back for correction.
pub async fn handle_contact_form(
    State(state): State<AppState>,
    form: Result<Form<ContactSubmission>, FormRejection>,
) -> Html<String> {
    let Form(submission) = match form {
        Ok(form) => form,
        Err(rejection) => {
            warn!("Unreadable contact form post: {}", rejection.body_text());
            let view = PageView {
                notice: Some(ContactNotice::Unreadable),
                form: None,
                webhook_configured: state.webhook_configured(),
            };
            return Html(render_page(&state.profile, &view));
        }
    };

    let submission_id = Uuid::new_v4();
    info!("Contact form submission {submission_id} ({})", submission.subject);

    let view = match state.dispatcher.submit(&submission).await {
        Ok(outcome) => PageView {
            notice: Some(ContactNotice::Outcome(outcome)),
            form: None,
            webhook_configured: state.webhook_configured(),
        },
        Err(err) => {
            info!("Contact form submission {submission_id} rejected: {err}");
            PageView {
                notice: Some(ContactNotice::Invalid(err)),
                form: Some(submission),
                webhook_configured: state.webhook_configured(),
            }
        }
    };

    Html(render_page(&state.profile, &view))
}

/// POST /api/v1/contact
pub async fn handle_contact_api(
    State(state): State<AppState>,
    body: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<DispatchOutcome>, AppError> {
    let Json(submission) = body?;
    let submission_id = Uuid::new_v4();
    info!("Contact API submission {submission_id} ({})", submission.subject);

    let outcome = state.dispatcher.submit(&submission).await?;
    Ok(Json(outcome))
}
