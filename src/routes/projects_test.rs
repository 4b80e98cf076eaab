use super::*;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::routes::testing::app_for;

#[tokio::test]
async fn list_without_cookie_never_calls_upstream() {
    let server = MockServer::start().await;
    let app = app_for(&server.uri());
    let response = app
        .oneshot(Request::builder().uri("/api/project").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(server.received_requests().await.unwrap().is_empty());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["message"], "no session token");
}

#[tokio::test]
async fn detail_uses_the_one_prefix_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/project/one/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "p1", "name": "Obra", "description": "Reforma"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server.uri());
    let request = Request::builder()
        .uri("/api/project/one/p1")
        .header(header::COOKIE, "jwt=tok123")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["_id"], "p1");
}
