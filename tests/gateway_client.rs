mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{api_config, client};
use serde_json::json;
use vehicle_console::config::SecureString;
use vehicle_console::gateway::{ApiClient, GatewayError};
use vehicle_console::model::{AnyRecord, Brand, Credentials, RecordKind, Records, Segment, Vehicle};

fn token(value: &str) -> Option<SecureString> {
    Some(SecureString::new(value.to_string()))
}

#[tokio::test]
async fn login_posts_credentials_and_returns_token() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"token": "abc123"}"#))
        .await;

    let token = client(&mock.base_url())
        .login(&Credentials::new("dummy", "pw"))
        .await
        .unwrap();
    assert_eq!(token.expose(), "abc123");

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/auth/");
    assert_eq!(requests[0].json(), json!({"username": "dummy", "password": "pw"}));
    assert!(requests[0].header("authorization").is_none());
}

#[tokio::test]
async fn login_rejected_is_a_status_error() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse {
        status: 400,
        body: br#"{"non_field_errors": ["Unable to log in with provided credentials."]}"#.to_vec(),
        delay_ms: 0,
    })
    .await;

    let err = client(&mock.base_url())
        .login(&Credentials::new("dummy", "wrong"))
        .await
        .unwrap_err();
    match err {
        GatewayError::Status { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Unable to log in with provided credentials.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn register_ignores_response_body() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::created(r#"{"username": "dummy", "id": 9}"#))
        .await;

    client(&mock.base_url())
        .register(&Credentials::new("dummy", "pw"))
        .await
        .unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/api/create/");
}

#[tokio::test]
async fn authenticated_calls_send_token_header() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"id": 1, "username": "dummy"}"#))
        .await;

    let profile = client(&mock.base_url())
        .with_token(token("abc"))
        .profile()
        .await
        .unwrap();
    assert_eq!(profile.username, "dummy");

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/api/profile/");
    assert_eq!(requests[0].header("authorization"), Some("token abc"));
}

#[tokio::test]
async fn bearer_scheme_is_configurable() {
    let mock = MockBackend::start().await;
    let mut api = api_config(&mock.base_url());
    api.auth_scheme_str = "bearer".to_string();

    ApiClient::new(&api)
        .unwrap()
        .with_token(token("abc"))
        .list::<Brand>()
        .await
        .unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].header("authorization"), Some("Bearer abc"));
}

#[tokio::test]
async fn missing_token_never_reaches_the_server() {
    let mock = MockBackend::start().await;
    let err = client(&mock.base_url())
        .list_kind(RecordKind::Segment)
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::MissingToken));
    assert!(err.is_unauthorized());
    assert!(mock.captured_requests().await.is_empty());
}

#[tokio::test]
async fn list_kind_decodes_each_collection() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"[{"id": 1, "segment_name": "Sedan"}, {"id": 2, "segment_name": "SUV"}]"#,
    ))
    .await;
    mock.enqueue_response(MockResponse::json(
        r#"[{"id": 3, "vehicle_name": "MODEL X", "release_year": 2020, "price": 400.12,
             "segment": 2, "brand": 2, "segment_name": "EV", "brand_name": "Tesla"}]"#,
    ))
    .await;

    let client = client(&mock.base_url()).with_token(token("abc"));
    let segments = client.list_kind(RecordKind::Segment).await.unwrap();
    assert_eq!(
        segments,
        Records::Segments(vec![Segment::new(1, "Sedan"), Segment::new(2, "SUV")])
    );

    let Records::Vehicles(vehicles) = client.list_kind(RecordKind::Vehicle).await.unwrap() else {
        panic!("expected vehicles");
    };
    assert_eq!(vehicles[0].brand_name, "Tesla");

    let paths: Vec<_> = mock
        .captured_requests()
        .await
        .into_iter()
        .map(|r| (r.method, r.path))
        .collect();
    assert_eq!(
        paths,
        vec![
            ("GET".to_string(), "/api/segments/".to_string()),
            ("GET".to_string(), "/api/vehicles/".to_string()),
        ]
    );
}

#[tokio::test]
async fn create_sends_body_without_id() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::created(
        r#"{"id": 3, "vehicle_name": "MODEL X", "release_year": 2020, "price": 400.12,
            "segment": 2, "brand": 2, "segment_name": "EV", "brand_name": "Tesla"}"#,
    ))
    .await;

    let staged = Vehicle {
        name: "MODEL X".to_string(),
        release_year: 2020,
        price: 400.12,
        segment: 2,
        brand: 2,
        ..Vehicle::default()
    };
    let created = client(&mock.base_url())
        .with_token(token("abc"))
        .create_any(&staged.into())
        .await
        .unwrap();

    let AnyRecord::Vehicle(vehicle) = created else {
        panic!("expected a vehicle");
    };
    assert_eq!(vehicle.id, 3);
    assert_eq!(vehicle.segment_name, "EV");

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/vehicles/");
    assert_eq!(
        requests[0].json(),
        json!({
            "vehicle_name": "MODEL X",
            "release_year": 2020,
            "price": 400.12,
            "segment": 2,
            "brand": 2
        })
    );
}

#[tokio::test]
async fn update_puts_to_record_path() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"id": 1, "brand_name": "new Toyota"}"#))
        .await;

    let updated = client(&mock.base_url())
        .with_token(token("abc"))
        .update(&Brand::new(1, "new Toyota"))
        .await
        .unwrap();
    assert_eq!(updated, Brand::new(1, "new Toyota"));

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/api/brands/1/");
    assert_eq!(requests[0].json(), json!({"id": 1, "brand_name": "new Toyota"}));
}

#[tokio::test]
async fn delete_accepts_empty_body() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::no_content()).await;

    client(&mock.base_url())
        .with_token(token("abc"))
        .delete(RecordKind::Segment, 4)
        .await
        .unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/api/segments/4/");
}

#[tokio::test]
async fn expired_token_reports_unauthorized() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(401, "Invalid token.")).await;

    let err = client(&mock.base_url())
        .with_token(token("stale"))
        .list::<Segment>()
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Server error: 401 - Invalid token.");
}

#[tokio::test]
async fn unexpected_body_is_a_decode_error() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"results": []}"#)).await;

    let err = client(&mock.base_url())
        .with_token(token("abc"))
        .list::<Brand>()
        .await
        .unwrap_err();
    assert_eq!(err.error_type(), "decode_error");
}

#[tokio::test]
async fn slow_server_times_out() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json("[]").with_delay(1_500))
        .await;
    let mut api = api_config(&mock.base_url());
    api.timeout_seconds = 1;

    let err = ApiClient::new(&api)
        .unwrap()
        .with_token(token("abc"))
        .list::<Segment>()
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Timeout { duration: 1 }));
}

#[tokio::test]
async fn unreachable_server_is_a_connection_error() {
    let err = client("http://127.0.0.1:9/api/")
        .with_token(token("abc"))
        .list::<Segment>()
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Connection { .. }));
}
