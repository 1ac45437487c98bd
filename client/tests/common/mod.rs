//! Common test utilities for integration tests
//!
//! Each test gets its own wiremock server standing in for the weight log
//! service.

#![allow(dead_code)]

use serde_json::{json, Value};
use weight_logs_client::{config::ApiConfig, HttpWeightLogApi, WeightLogsComponent};
use weight_logs_shared::{FormState, Session};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const USER_ID: &str = "7";
pub const TOKEN: &str = "test-token";
pub const LOGS_PATH: &str = "/api/users/7/weight-logs";

/// Mock weight log service
pub struct TestService {
    pub server: MockServer,
}

impl TestService {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn api(&self) -> HttpWeightLogApi {
        HttpWeightLogApi::new(&ApiConfig {
            base_url: self.server.uri(),
            timeout_secs: Some(5),
        })
        .expect("Failed to build API client")
    }

    /// Component addressed to the test user
    pub fn component(&self) -> WeightLogsComponent<HttpWeightLogApi> {
        WeightLogsComponent::new(self.api(), FormState::for_session(session()))
    }

    /// Answer authenticated list requests with `entries`
    pub async fn serve_logs(&self, entries: Value) {
        Mock::given(method("GET"))
            .and(path(LOGS_PATH))
            .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": entries })))
            .mount(&self.server)
            .await;
    }

    /// Answer list requests with a bare status
    pub async fn fail_logs(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(LOGS_PATH))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Answer create requests with `status`
    pub async fn accept_creates(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(LOGS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "data": {} })))
            .mount(&self.server)
            .await;
    }

    pub async fn requests(&self, verb: &str) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.method.as_str() == verb)
            .collect()
    }
}

pub fn session() -> Session {
    Session::new(USER_ID, TOKEN)
}

/// An entry shaped like the service's list payload
pub fn entry_json(id: u32, weight: f64, timestamp: &str) -> Value {
    json!({
        "id": id.to_string(),
        "userId": USER_ID,
        "weight": weight,
        "targetWeight": 65.0,
        "date": &timestamp[..10],
        "timestamp": timestamp,
        "unit": "KG"
    })
}
