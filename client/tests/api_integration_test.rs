//! Integration tests for the HTTP weight log client

mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use common::{entry_json, session, TestService, LOGS_PATH, TOKEN};
use serde_json::{json, Value};
use weight_logs_client::{config::ApiConfig, ClientError, HttpWeightLogApi, WeightLogApi};
use weight_logs_shared::{NewWeightLog, Session, WeightLogQuery, WeightUnit};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_list_sends_bearer_token_and_decodes_data() {
    let service = TestService::start().await;
    service
        .serve_logs(json!([
            entry_json(2, 71.0, "2024-03-02T08:00:00"),
            entry_json(1, 70.5, "2024-03-01T08:00:00"),
        ]))
        .await;

    let logs = service
        .api()
        .list(&session(), &WeightLogQuery::default())
        .await
        .unwrap();

    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].id.as_deref(), Some("2"));
    assert_eq!(logs[0].weight, 71.0);
    assert_eq!(logs[1].date, NaiveDate::from_ymd_opt(2024, 3, 1));

    let requests = service.requests("GET").await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_list_forwards_date_filter() {
    let service = TestService::start().await;
    Mock::given(method("GET"))
        .and(path(LOGS_PATH))
        .and(query_param("date", "2024-03-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&service.server)
        .await;

    let query = WeightLogQuery::on(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    let logs = service.api().list(&session(), &query).await.unwrap();
    assert!(logs.is_empty());
}

#[tokio::test]
async fn test_list_non_success_is_status_error() {
    let service = TestService::start().await;
    Mock::given(method("GET"))
        .and(path(LOGS_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&service.server)
        .await;

    let err = service
        .api()
        .list(&session(), &WeightLogQuery::default())
        .await
        .unwrap_err();

    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(body, "invalid token");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_without_data_wrapper_is_decode_error() {
    let service = TestService::start().await;
    Mock::given(method("GET"))
        .and(path(LOGS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"weight": 70.0}])))
        .mount(&service.server)
        .await;

    let err = service
        .api()
        .list(&session(), &WeightLogQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_service_is_request_error() {
    let api = HttpWeightLogApi::new(&ApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: Some(5),
    })
    .unwrap();

    let err = api
        .list(&session(), &WeightLogQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Request(_)));
}

#[tokio::test]
async fn test_create_posts_json_body() {
    let service = TestService::start().await;
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 15, 0).unwrap();
    let log = NewWeightLog::new(70.5, Some(65.0), WeightUnit::kg(), at);

    Mock::given(method("POST"))
        .and(path(LOGS_PATH))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
        .and(body_json(json!({
            "weight": 70.5,
            "targetWeight": 65.0,
            "timestamp": "2024-03-01T08:15:00.000Z",
            "unit": "KG"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "id": 9 } })))
        .expect(1)
        .mount(&service.server)
        .await;

    service.api().create(&session(), &log).await.unwrap();
}

#[tokio::test]
async fn test_create_ignores_response_body() {
    let service = TestService::start().await;
    Mock::given(method("POST"))
        .and(path(LOGS_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_string("not json"))
        .mount(&service.server)
        .await;

    let log = NewWeightLog::new(70.0, None, WeightUnit::kg(), Utc::now());
    service.api().create(&session(), &log).await.unwrap();

    let sent: Value = service.requests("POST").await[0].body_json().unwrap();
    assert!(sent["targetWeight"].is_null());
}

#[tokio::test]
async fn test_create_rejected_is_status_error() {
    let service = TestService::start().await;
    service.accept_creates(400).await;

    let log = NewWeightLog::new(70.0, None, WeightUnit::kg(), Utc::now());
    let err = service.api().create(&session(), &log).await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
}

#[tokio::test]
async fn test_user_id_is_path_encoded() {
    let service = TestService::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/a%20b/weight-logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&service.server)
        .await;

    service
        .api()
        .list(&Session::new("a b", TOKEN), &WeightLogQuery::default())
        .await
        .unwrap();
}
