use httpmock::prelude::*;
use serde_json::json;

use super::*;

#[tokio::test]
async fn login_parses_auth_payload_from_envelope() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(200).json_body(json!({
            "success": true,
            "message": "Logged in",
            "data": {
                "user": {
                    "id": "u1",
                    "name": "Alice",
                    "email": "alice@example.com",
                    "role": "user",
                    "leaveBalance": 14
                },
                "accessToken": "abc",
                "refreshToken": "xyz"
            }
        }));
    });

    let api = ApiClient::new_with_base_url(server.url("/api"));
    let auth = api
        .login(&LoginRequest {
            email: "alice@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    assert_eq!(auth.access_token, "abc");
    assert_eq!(auth.refresh_token, "xyz");
    assert_eq!(auth.identity().unwrap().name, "Alice");
}

#[tokio::test]
async fn login_failure_surfaces_envelope_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(400).json_body(json!({
            "success": false,
            "message": "Invalid credentials",
            "errors": ["Password is incorrect"]
        }));
    });

    let api = ApiClient::new_with_base_url(server.url("/api"));
    let err = api
        .login(&LoginRequest {
            email: "alice@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.message, "Invalid credentials");
    assert_eq!(err.details, vec!["Password is incorrect".to_string()]);
    assert!(!err.unauthorized);
}

#[tokio::test]
async fn only_a_401_status_tags_the_error_as_unauthorized() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(401).json_body(json!({
            "success": false,
            "message": "Invalid credentials"
        }));
    });

    let api = ApiClient::new_with_base_url(server.url("/api"));
    let err = api
        .login(&LoginRequest {
            email: "alice@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert!(err.unauthorized);
    assert_eq!(err.message, "Invalid credentials");
}

#[tokio::test]
async fn register_falls_back_to_errors_list_when_message_empty() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/register");
        then.status(422).json_body(json!({
            "success": false,
            "message": "",
            "errors": ["Email is already taken"]
        }));
    });

    let api = ApiClient::new_with_base_url(server.url("/api"));
    let err = api
        .register(&RegisterRequest {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            password: "secret".into(),
            department: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.message, "Email is already taken");
}

#[tokio::test]
async fn envelope_with_success_false_is_an_error_even_on_200() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(200).json_body(json!({
            "success": false,
            "message": "Account locked"
        }));
    });

    let api = ApiClient::new_with_base_url(server.url("/api"));
    let err = api
        .login(&LoginRequest {
            email: "alice@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.message, "Account locked");
}

#[tokio::test]
async fn garbled_body_maps_to_decode_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(200).body("not json");
    });

    let api = ApiClient::new_with_base_url(server.url("/api"));
    let err = api
        .login(&LoginRequest {
            email: "alice@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap_err();
    assert!(err.message.starts_with("Failed to parse response"));
}

#[tokio::test]
async fn authed_call_without_stored_token_fails_before_sending() {
    // Host builds have no localStorage, so the bearer header can never be
    // built; the client must fail locally instead of issuing the request.
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/leave/me");
        then.status(200).json_body(json!({ "success": true, "data": [] }));
    });

    let api = ApiClient::new_with_base_url(server.url("/api"));
    let err = api.my_leave_requests().await.unwrap_err();
    assert_eq!(err.message, "Not authenticated");
    mock.assert_hits(0);
}
