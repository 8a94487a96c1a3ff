//! Tests for the gateway's request/response contract against a live socket.

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use serde_json::json;
use std::sync::{Arc, Mutex};

use onepay::{ApiClient, ApiError};

async fn spawn_service(app: Router) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("local addr should resolve");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock service");
    });
    ApiClient::from_base_url(&format!("http://{addr}")).expect("base url should parse")
}

#[tokio::test]
async fn success_body_is_decoded_as_typed_shape() {
    let app = Router::new().route(
        "/projects",
        get(|| async {
            axum::Json(json!([{
                "id": 1,
                "title": "Baran Tower",
                "slug": "baran-tower",
                "description": "desc",
                "address": "Tehran",
                "status": "active",
                "cover_image": null,
                "available_units": 3,
                "min_price": 9800000000i64
            }]))
        }),
    );
    let client = spawn_service(app).await;

    let projects = client.projects().await.expect("projects should decode");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].available_units, 3);
}

#[tokio::test]
async fn non_success_carries_raw_body_text() {
    let app = Router::new().route(
        "/requests",
        post(|| async {
            (
                StatusCode::CONFLICT,
                r#"{"detail":"Unit already sold"}"#.to_string(),
            )
        }),
    );
    let client = spawn_service(app).await;

    let err = client
        .create_request(
            "tok",
            &onepay_protocol::CreateRequestPayload {
                unit_id: 1,
                note: None,
            },
        )
        .await
        .expect_err("conflict should fail");

    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, r#"{"detail":"Unit already sold"}"#);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_error_body_falls_back_to_http_status() {
    let app = Router::new().route(
        "/auth/me",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let client = spawn_service(app).await;

    let err = client.me("tok").await.expect_err("500 should fail");
    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "HTTP 500");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn bearer_and_no_store_headers_are_attached() {
    let seen: Arc<Mutex<Vec<(Option<String>, Option<String>)>>> = Arc::default();
    let record = seen.clone();
    let app = Router::new()
        .route(
            "/auth/me",
            get(
                |State(record): State<Arc<Mutex<Vec<(Option<String>, Option<String>)>>>>,
                 headers: HeaderMap| async move {
                    let pick = |name: &str| {
                        headers
                            .get(name)
                            .and_then(|v| v.to_str().ok())
                            .map(String::from)
                    };
                    record
                        .lock()
                        .unwrap()
                        .push((pick("authorization"), pick("cache-control")));
                    axum::Json(json!({
                        "id": 7,
                        "full_name": "Someone",
                        "mobile": "09120000000",
                        "email": null,
                        "created_at": "2026-01-05T10:00:00Z"
                    }))
                },
            ),
        )
        .with_state(record);
    let client = spawn_service(app).await;

    client.me("tok-abc").await.expect("me should succeed");

    let seen = seen.lock().unwrap();
    assert_eq!(
        seen.as_slice(),
        &[(
            Some("Bearer tok-abc".to_string()),
            Some("no-store".to_string())
        )]
    );
}

#[tokio::test]
async fn unauthenticated_calls_send_no_authorization_header() {
    let seen: Arc<Mutex<Vec<bool>>> = Arc::default();
    let record = seen.clone();
    let app = Router::new()
        .route(
            "/projects",
            get(
                |State(record): State<Arc<Mutex<Vec<bool>>>>, headers: HeaderMap| async move {
                    record
                        .lock()
                        .unwrap()
                        .push(headers.contains_key("authorization"));
                    axum::Json(json!([]))
                },
            ),
        )
        .with_state(record);
    let client = spawn_service(app).await;

    client.projects().await.expect("projects should succeed");
    assert_eq!(seen.lock().unwrap().as_slice(), &[false]);
}

#[tokio::test]
async fn mismatched_success_body_is_a_decode_error() {
    let app = Router::new().route(
        "/projects",
        get(|| async { axum::Json(json!({"unexpected": true})) }),
    );
    let client = spawn_service(app).await;

    let err = client.projects().await.expect_err("shape mismatch");
    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    // Port 9 (discard) is near-certainly closed on loopback.
    let client = ApiClient::from_base_url("http://127.0.0.1:9").unwrap();
    let err = client.projects().await.expect_err("connection refused");
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}
