pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::contact::handlers;
use crate::page::handlers::handle_index;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Page
        .route("/", get(handle_index))
        .route("/contact", post(handlers::handle_contact_form))
        // Contact API
        .route("/api/v1/contact", post(handlers::handle_contact_api))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::contact::dispatcher::ContactDispatcher;
    use crate::page::profile::default_profile;
    use crate::test_support::spawn_webhook;
    use crate::webhook_client::WebhookClient;
    use ammonia::clean_text;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(webhook_url: Option<String>) -> Router {
        let config = Config {
            webhook_url: webhook_url.clone(),
            contact_email: "owner@example.com".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        };
        let dispatcher =
            ContactDispatcher::new(WebhookClient::new(webhook_url), config.contact_email.clone());
        build_router(AppState {
            config,
            dispatcher: Arc::new(dispatcher),
            profile: Arc::new(default_profile()),
        })
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_post(body: &str) -> Request<Body> {
        Request::post("/contact")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn json_post(body: Value) -> Request<Body> {
        Request::post("/api/v1/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(None)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "portfolio");
    }

    #[tokio::test]
    async fn test_index_renders_page() {
        let response = app(None)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));

        let html = body_string(response).await;
        assert!(html.contains("Discord Setup Instructions"));
    }

    #[tokio::test]
    async fn test_form_validation_error_echoes_input() {
        let response = app(None)
            .oneshot(form_post("name=Ada&email=ada.example.com&subject=Other&message=Hi"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains(&clean_text("Please enter a valid email address")));
        assert!(html.contains("value=\"ada.example.com\""));
    }

    #[tokio::test]
    async fn test_form_without_webhook_offers_email_link() {
        let response = app(None)
            .oneshot(form_post(
                "name=Ada&email=ada%40example.com&subject=Job+Opportunity&message=Hello",
            ))
            .await
            .unwrap();

        let html = body_string(response).await;
        assert!(html.contains("id=\"manual-email\""));
        assert!(html.contains(&clean_text("Discord webhook URL not configured")));
    }

    #[tokio::test]
    async fn test_form_delivered_through_webhook() {
        let hook = spawn_webhook(&[204]).await;
        let response = app(Some(hook.url.clone()))
            .oneshot(form_post("name=Ada&email=ada%40example.com&message=Hello"))
            .await
            .unwrap();

        let html = body_string(response).await;
        assert!(html.contains("notice-success"));
        assert!(!html.contains("Discord Setup Instructions"));
        assert_eq!(hook.calls(), 1);
    }

    #[tokio::test]
    async fn test_api_validation_error_is_bad_request() {
        let response = app(None)
            .oneshot(json_post(json!({"name": "", "email": "a@b", "message": "x"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            body["error"]["message"],
            "Please fill in all required fields (*)"
        );
    }

    #[tokio::test]
    async fn test_api_reports_simple_channel() {
        let hook = spawn_webhook(&[429, 204]).await;
        let response = app(Some(hook.url.clone()))
            .oneshot(json_post(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Technical Discussion",
                "message": "Hello"
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body, json!({"status": "delivered", "channel": "simple"}));
        assert_eq!(hook.calls(), 2);
    }

    #[tokio::test]
    async fn test_api_unknown_subject_is_rejected_by_extractor() {
        let response = app(None)
            .oneshot(json_post(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Spam",
                "message": "Hello"
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "INVALID_BODY");
        assert!(body["error"]["message"].as_str().unwrap().contains("Spam"));
    }

    #[tokio::test]
    async fn test_api_wrong_content_type_uses_error_envelope() {
        let response = app(None)
            .oneshot(
                Request::post("/api/v1/contact")
                    .header(header::CONTENT_TYPE, "text/plain")
                    .body(Body::from("hello"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "INVALID_BODY");
    }

    #[tokio::test]
    async fn test_form_empty_subject_uses_default() {
        let hook = spawn_webhook(&[204]).await;
        let response = app(Some(hook.url.clone()))
            .oneshot(form_post("name=Ada&email=ada%40example.com&subject=&message=Hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("notice-success"));
        assert_eq!(
            hook.bodies()[0]["embeds"][0]["description"],
            "**Subject:** General Inquiry"
        );
    }

    #[tokio::test]
    async fn test_form_unknown_subject_renders_page_notice() {
        let hook = spawn_webhook(&[204]).await;
        let response = app(Some(hook.url.clone()))
            .oneshot(form_post("name=Ada&email=ada%40example.com&subject=Spam&message=Hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("notice-error"));
        assert!(html.contains(&clean_text("your message could not be read")));
        assert_eq!(hook.calls(), 0);
    }

    #[tokio::test]
    async fn test_form_transport_failure_keeps_webhook_secret() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let response = app(Some(format!("http://{addr}/api/webhooks/123/SECRET_TOKEN")))
            .oneshot(form_post("name=Ada&email=ada%40example.com&message=Hello"))
            .await
            .unwrap();

        let html = body_string(response).await;
        assert!(html.contains("id=\"manual-email\""));
        assert!(!html.contains("SECRET_TOKEN"));
    }
}
