use marketingforce::{ClientCredentials, ErrorKind, TokenInfo};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{login_ok, respond_json, setup, LOGIN_PATH};

#[test]
fn test_missing_config_fields() {
    for (host, key, secret, field) in [
        ("", "k", "s", "host"),
        ("https://open.example.com", "", "s", "key"),
        ("https://open.example.com", "k", "", "secret"),
    ] {
        let err = ClientCredentials::new(host, key, secret).unwrap_err();
        assert!(err.is_config_error());
        assert!(
            err.to_string().contains(&format!("[{field}]")),
            "'{err}' should name {field}"
        );
    }
}

#[tokio::test]
async fn test_construction_is_offline() {
    let (server, _client) = setup().await;
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_token_logs_in_once() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .and(body_json(json!({"clientId": "test-key", "clientSecret": "test-secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_ok("tok123", 3600)))
        .expect(1)
        .mount(&server)
        .await;

    let expected = TokenInfo {
        token: "tok123".to_string(),
        expires_in: Some(3600),
    };
    assert_eq!(client.get_token().await.unwrap(), expected);
    assert_eq!(client.get_token().await.unwrap(), expected);
    assert_eq!(client.token(), Some(expected));
}

#[test]
fn test_token_info_serializes_like_login_result() {
    let info = TokenInfo {
        token: "tok123".to_string(),
        expires_in: Some(3600),
    };
    assert_eq!(
        serde_json::to_value(&info).unwrap(),
        json!({"token": "tok123", "expires_in": 3600})
    );
}

#[tokio::test]
async fn test_bad_credentials() {
    let (server, client) = setup().await;
    respond_json(&server, LOGIN_PATH, json!({"code": 1, "message": "bad credentials"})).await;

    let err = client.get_token().await.unwrap_err();
    assert!(err.is_remote_api());
    assert!(matches!(
        err.kind,
        ErrorKind::RemoteApi { ref message, .. } if message == "bad credentials"
    ));
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_non_json_login_is_rejected_login() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login down</html>"))
        .mount(&server)
        .await;

    let err = client.get_token().await.unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::RemoteApi { code: 1, ref message } if message == "unknown error"
    ));
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_login_with_string_fields() {
    let (server, client) = setup().await;
    let body = json!({"code": "0", "data": {"value": "tok", "expiredTime": "3600"}});
    respond_json(&server, LOGIN_PATH, body).await;

    let token = client.get_token().await.unwrap();
    assert_eq!(token.token, "tok");
    assert_eq!(token.expires_in, Some(3600));
}

#[tokio::test]
async fn test_failed_login_is_retried_on_next_call() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 1})))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_ok("second", 60)))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.get_token().await.is_err());
    assert_eq!(client.get_token().await.unwrap().token, "second");
}

#[tokio::test]
async fn test_set_token_keeps_login_expiry() {
    let (server, client) = setup().await;
    respond_json(&server, LOGIN_PATH, login_ok("first", 7200)).await;

    client.get_token().await.unwrap();
    client.set_token("rotated");

    let token = client.get_token().await.unwrap();
    assert_eq!(token.token, "rotated");
    assert_eq!(token.expires_in, Some(7200));
}

#[tokio::test]
async fn test_empty_injected_token_triggers_login() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_ok("fresh", 60)))
        .expect(1)
        .mount(&server)
        .await;

    client.set_token("");
    assert_eq!(client.get_token().await.unwrap().token, "fresh");
}
