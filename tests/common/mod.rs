#![allow(dead_code)]

use paper_workflow::{ClientConfig, WorkflowClient};
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const WORKFLOW_PATH: &str = "/v1/workflows/run";

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::default().with_base_url(format!("{}/v1", server.uri()))
}

pub fn client_for(server: &MockServer) -> WorkflowClient {
    WorkflowClient::new(config_for(server)).expect("client creation should succeed")
}

/// Answer every workflow call with `template`, expecting exactly `calls` of them
pub async fn mount_workflow(server: &MockServer, template: ResponseTemplate, calls: u64) {
    Mock::given(method("POST"))
        .and(path(WORKFLOW_PATH))
        .respond_with(template)
        .expect(calls)
        .mount(server)
        .await;
}

pub fn json_response(status: u16, body: Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

pub async fn recorded_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .iter()
        .map(|req| serde_json::from_slice(&req.body).expect("json request body"))
        .collect()
}

pub async fn recorded_auth_headers(server: &MockServer) -> Vec<Option<String>> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .iter()
        .map(|req| {
            req.headers
                .get("authorization")
                .map(|v| v.to_str().expect("ascii header").to_string())
        })
        .collect()
}
