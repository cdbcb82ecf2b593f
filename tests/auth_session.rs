mod common;

use alblearn::client::ClientError;
use alblearn::client::Session;
use alblearn::client::auth::LoginPayload;
use alblearn::model::User;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use common::{client_with_session, client_for, spawn_stub};

fn stub_user() -> Value {
    json!({
        "id": "u1",
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "email_verified_at": null,
        "roles": ["student"],
        "permissions": [],
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z",
    })
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn auth_router() -> Router {
    Router::new()
        .route(
            "/api/v1/auth/login",
            post(|Json(body): Json<Value>| async move {
                if body["password"] == json!("s3cret") {
                    Json(json!({
                        "success": true,
                        "message": "Logged in",
                        "data": { "user": stub_user(), "token": "tok-1" },
                    }))
                    .into_response()
                } else {
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        Json(json!({ "message": "Invalid credentials." })),
                    )
                        .into_response()
                }
            }),
        )
        .route(
            "/api/v1/auth/user",
            get(|headers: HeaderMap| async move {
                match bearer(&headers) {
                    Some("tok-1") => Json(json!({
                        "success": true,
                        "message": "",
                        "data": stub_user(),
                    }))
                    .into_response(),
                    _ => (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({ "message": "Unauthenticated." })),
                    )
                        .into_response(),
                }
            }),
        )
        .route(
            "/api/v1/auth/logout",
            post(|| async {
                Json(json!({ "success": true, "message": "Logged out", "data": {} }))
            }),
        )
}

#[tokio::test]
async fn login_stores_token_and_authorizes_requests() {
    let server = spawn_stub(auth_router());
    let client = client_for(&server);

    assert!(!client.session().is_authenticated());

    let response = client
        .auth()
        .login(&LoginPayload {
            email: "ada@example.com".to_string(),
            password: "s3cret".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(client.session().token().as_deref(), Some("tok-1"));
    let user = User::from(response.data.user);
    assert_eq!(user.first_name, "Ada");

    // the stored token rides along on subsequent requests
    let me = client.auth().me().await.unwrap();
    assert_eq!(me.data.email, "ada@example.com");

    client.auth().logout().await.unwrap();
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn requests_without_token_are_rejected() {
    let server = spawn_stub(auth_router());
    let client = client_for(&server);

    let error = client.auth().me().await.unwrap_err();
    match error {
        ClientError::ApiError(e) => {
            assert_eq!(e.status, StatusCode::UNAUTHORIZED);
            assert_eq!(e.message, "Unauthenticated.");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn backend_error_message_is_surfaced() {
    let server = spawn_stub(auth_router());
    let client = client_for(&server);

    let error = client
        .auth()
        .login(&LoginPayload {
            email: "ada@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    match error {
        ClientError::ApiError(e) => {
            assert_eq!(e.status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(e.message, "Invalid credentials.");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn session_token_persists_across_clients() {
    let server = spawn_stub(auth_router());
    let dir = tempfile::tempdir().unwrap();
    let token_path = dir.path().join("token");

    let client = client_with_session(&server, Session::with_store(token_path.clone()));
    client
        .auth()
        .login(&LoginPayload {
            email: "ada@example.com".to_string(),
            password: "s3cret".to_string(),
        })
        .await
        .unwrap();

    // a fresh client hydrates the persisted token and is authenticated
    let rehydrated = client_with_session(&server, Session::with_store(token_path));
    let me = rehydrated.auth().me().await.unwrap();
    assert_eq!(me.data.id, "u1");
}
