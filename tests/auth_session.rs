use std::time::Duration;

use serde_json::json;
use xs_client::auth::{AuthError, AuthProvider, HttpAuthProvider, SessionContext};
use xs_client::models::User;
use xs_client::test_utils::StaticAuth;

fn provider_for(server: &wiremock::MockServer, api_key: Option<&str>) -> HttpAuthProvider {
    HttpAuthProvider::new(
        &server.uri(),
        api_key.map(str::to_string),
        Duration::from_secs(5),
    )
    .expect("auth provider")
}

// ── HTTP provider ────────────────────────────────────────────────────────────

#[actix_rt::test]
async fn current_user_sends_bearer_and_api_key() {
    let server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/auth/v1/user"))
        .and(wiremock::matchers::header("authorization", "Bearer token-1"))
        .and(wiremock::matchers::header("apikey", "anon-key"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(json!({
            "id": "7c1f6a3e-0d55-4f3b-9a51-2b1f6c8e4d10",
            "email": "queuer@example.com",
            "aud": "authenticated"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = provider_for(&server, Some("anon-key"))
        .get_current_user("token-1")
        .await
        .expect("user should resolve");
    assert_eq!(user.id, "7c1f6a3e-0d55-4f3b-9a51-2b1f6c8e4d10");
    assert_eq!(user.email.as_deref(), Some("queuer@example.com"));
}

#[actix_rt::test]
async fn rejected_token_is_unauthorized() {
    let server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/auth/v1/user"))
        .respond_with(wiremock::ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = provider_for(&server, None)
        .get_current_user("expired")
        .await
        .err()
        .expect("401 should fail");
    assert!(
        matches!(err, AuthError::Unauthorized(_)),
        "expected Unauthorized, got {:?}",
        err
    );
}

#[actix_rt::test]
async fn user_body_without_id_is_decode_error() {
    let server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/auth/v1/user"))
        .respond_with(
            wiremock::ResponseTemplate::new(200).set_body_json(json!({ "email": "x@y.z" })),
        )
        .mount(&server)
        .await;

    let err = provider_for(&server, None).get_current_user("t").await.err();
    assert!(
        matches!(err, Some(AuthError::Decode(_))),
        "expected Decode, got {:?}",
        err
    );
}

// ── Session lifecycle ────────────────────────────────────────────────────────

#[actix_rt::test]
async fn reader_sees_login_and_logout() {
    let auth = StaticAuth::new().with_user("tok", User::new("a"));
    let session = SessionContext::new();
    let reader = session.reader();
    assert!(reader.user().is_none());

    let before = chrono::Utc::now();
    let user = session.login(&auth, "tok").await.expect("login");
    assert_eq!(user.id, "a");
    let current = reader.current().expect("session after login");
    assert!(current.established_at >= before && current.established_at <= chrono::Utc::now());
    assert_eq!(current.user, User::new("a"));
    assert_eq!(current.access_token, "tok");

    assert!(session.logout());
    assert!(reader.user().is_none());
    assert!(!session.logout(), "second logout has nothing to close");
}

#[actix_rt::test]
async fn failed_login_keeps_previous_session() {
    let auth = StaticAuth::new().with_user("good", User::new("a"));
    let session = SessionContext::new();
    session.login(&auth, "good").await.expect("login");

    let err = session.login(&auth, "bad").await.err();
    assert!(matches!(err, Some(AuthError::Unauthorized(_))));
    assert_eq!(session.reader().user(), Some(User::new("a")));
}

#[actix_rt::test]
async fn relogin_replaces_user() {
    let auth = StaticAuth::new()
        .with_user("one", User::new("a"))
        .with_user("two", User::new("b"));
    let session = SessionContext::new();
    let reader = session.reader();

    session.login(&auth, "one").await.expect("first login");
    let first = reader.current().expect("first session");
    session.login(&auth, "two").await.expect("second login");
    assert_eq!(reader.user(), Some(User::new("b")));
    let second = reader.current().expect("second session");
    assert!(second.established_at >= first.established_at);
}
