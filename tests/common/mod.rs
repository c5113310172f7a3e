//! Test conventions:
//! - HTTP collaborators are exercised against a `wiremock::MockServer`.
//! - Screens are driven through the in-memory fakes in `xs_client::test_utils`.
//! - Backend bodies always use the `{status, data, error}` envelope unless a test breaks it on purpose.
#![allow(dead_code)]

use std::time::Duration;

use serde_json::{json, Value};
use xs_client::services::BackendClient;

pub fn ok_envelope(data: Value) -> Value {
    json!({ "status": "ok", "data": data, "error": null })
}

pub fn error_envelope(message: &str) -> Value {
    json!({ "status": "error", "data": null, "error": message })
}

pub async fn mount_get(server: &wiremock::MockServer, path: &str, body: Value) {
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path(path))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub fn backend_for(server: &wiremock::MockServer) -> BackendClient {
    BackendClient::new(server.uri(), Duration::from_secs(5)).expect("backend client")
}

pub fn canteen_json(canteen_id: i32, stall_ids: Value) -> Value {
    json!({
        "canteen_id": canteen_id,
        "canteen_name": format!("Canteen {}", canteen_id),
        "canteen_image": "https://img.example/canteen.png",
        "canteen_stalls_ids": stall_ids
    })
}

pub fn stall_json(stall_id: i32, name: &str, cuisine: &str) -> Value {
    json!({
        "stall_id": stall_id,
        "stall_name": name,
        "cuisine": cuisine,
        "stall_image": null
    })
}
