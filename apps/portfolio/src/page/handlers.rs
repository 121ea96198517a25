use axum::{extract::State, response::Html};

use crate::page::render::{render_page, PageView};
use crate::state::AppState;

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    let view = PageView {
        webhook_configured: state.webhook_configured(),
        ..PageView::default()
    };
    Html(render_page(&state.profile, &view))
}
