//! Local stand-in for a webhook endpoint, shared by async tests.

use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::Value;

#[derive(Clone, Default)]
struct Recorder {
    statuses: Arc<Vec<u16>>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

/// Handle to a running fake webhook.
pub struct FakeWebhook {
    pub url: String,
    bodies: Arc<Mutex<Vec<Value>>>,
}

impl FakeWebhook {
    /// Number of requests received so far.
    pub fn calls(&self) -> usize {
        self.bodies.lock().unwrap().len()
    }

    /// JSON bodies in arrival order.
    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }
}

/// Starts a webhook on an ephemeral port. The n-th request is answered with
/// `statuses[n]`; once the list runs out the last status repeats.
pub async fn spawn_webhook(statuses: &[u16]) -> FakeWebhook {
    assert!(!statuses.is_empty(), "at least one status is required");

    let recorder = Recorder {
        statuses: Arc::new(statuses.to_vec()),
        bodies: Arc::default(),
    };
    let bodies = recorder.bodies.clone();

    let app = Router::new()
        .route("/hook", post(record))
        .with_state(recorder);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeWebhook {
        url: format!("http://{addr}/hook"),
        bodies,
    }
}

async fn record(State(recorder): State<Recorder>, Json(body): Json<Value>) -> StatusCode {
    let mut bodies = recorder.bodies.lock().unwrap();
    let index = bodies.len().min(recorder.statuses.len() - 1);
    bodies.push(body);
    StatusCode::from_u16(recorder.statuses[index]).unwrap()
}
