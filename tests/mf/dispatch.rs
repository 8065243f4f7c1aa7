use marketingforce::personal::endpoints;
use marketingforce::ErrorKind;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{login_ok, respond_json, setup, LOGIN_PATH};

#[tokio::test]
async fn test_set_token_sets_bearer_header() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(endpoints::PRIVATE_MESSAGE))
        .and(header("Authorization", "Bearer abc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 0, "data": {"ok": 1}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    client.set_token("abc");
    let data = client.send_private_message(&json!({"content": "hi"})).await.unwrap();
    assert_eq!(data, json!({"ok": 1}));
}

#[tokio::test]
async fn test_login_token_used_for_operations() {
    let (server, client) = setup().await;
    respond_json(&server, LOGIN_PATH, login_ok("tok123", 3600)).await;

    Mock::given(method("POST"))
        .and(path(endpoints::MATERIAL_LIST))
        .and(header("Authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "data": []})))
        .expect(2)
        .mount(&server)
        .await;

    client.get_token().await.unwrap();
    client.list_materials(&json!({})).await.unwrap();
    client.list_materials(&json!({})).await.unwrap();

    // One login, two operations.
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_success_returns_data() {
    let (server, client) = setup().await;
    client.set_token("t");
    respond_json(
        &server,
        endpoints::ENTERPRISE_FRIEND_INFO,
        json!({"code": 0, "message": "ok", "data": {"nickname": "Bob", "tags": ["vip"]}}),
    )
    .await;

    let data = client.enterprise_friend_info(&json!({"id": 1})).await.unwrap();
    assert_eq!(data, json!({"nickname": "Bob", "tags": ["vip"]}));
}

#[tokio::test]
async fn test_quota_exceeded() {
    let (server, client) = setup().await;
    client.set_token("t");
    respond_json(
        &server,
        endpoints::SYNC_ROBOT_FRIENDS,
        json!({"code": 5, "message": "quota exceeded"}),
    )
    .await;

    let err = client.sync_robot_friends(&json!({})).await.unwrap_err();
    assert_eq!(err.remote_code(), Some(5));
    assert!(matches!(
        err.kind,
        ErrorKind::RemoteApi { ref message, .. } if message == "quota exceeded"
    ));
}

#[tokio::test]
async fn test_non_json_body_is_invalid_response() {
    let (server, client) = setup().await;
    client.set_token("t");

    Mock::given(method("POST"))
        .and(path(endpoints::PERSONAL_ACCOUNT_LIST))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client.list_personal_accounts(&json!({})).await.unwrap_err();
    assert!(err.is_invalid_response());
    assert!(matches!(err.kind, ErrorKind::InvalidResponse(ref m) if m == "invalid response"));
}

#[tokio::test]
async fn test_loosely_typed_envelopes() {
    let (server, client) = setup().await;
    client.set_token("t");

    respond_json(&server, endpoints::MATERIAL_LIST, json!({"code": 0.0, "data": [1]})).await;
    let data = client.list_materials(&json!({})).await.unwrap();
    assert_eq!(data, json!([1]));

    let body = json!({"code": 5, "message": 123});
    respond_json(&server, endpoints::PRIVATE_MESSAGE, body).await;
    let err = client.send_private_message(&json!({})).await.unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::RemoteApi { code: 5, ref message } if message == "123"
    ));

    respond_json(&server, endpoints::ENTERPRISE_FRIEND_INFO, json!([1])).await;
    let err = client.enterprise_friend_info(&json!({})).await.unwrap_err();
    assert_eq!(err.remote_code(), Some(1));
}

#[tokio::test]
async fn test_empty_body_is_invalid_response() {
    let (server, client) = setup().await;
    client.set_token("t");

    Mock::given(method("POST"))
        .and(path(endpoints::PERSONAL_CALLBACK_SUBSCRIBE))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let err = client.subscribe_personal_callbacks(&json!({})).await.unwrap_err();
    assert!(err.is_invalid_response());
}

#[tokio::test]
async fn test_http_error_propagates_as_transport() {
    let (server, client) = setup().await;
    client.set_token("t");

    Mock::given(method("POST"))
        .and(path(endpoints::ENTERPRISE_PERSONAL_LIST))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"code": 0})))
        .mount(&server)
        .await;

    let err = client.list_enterprise_personal_accounts(&json!({})).await.unwrap_err();
    assert!(err.is_transport());
    assert!(matches!(err.kind, ErrorKind::Http { status: 503, .. }));
}

#[tokio::test]
async fn test_unwrapped_endpoint_via_call() {
    let (server, client) = setup().await;
    client.set_token("t");
    respond_json(&server, "/thirdparty/other/endpoint", json!({"code": "0", "data": 3})).await;

    let data = client.call("/thirdparty/other/endpoint", &json!({})).await.unwrap();
    assert_eq!(data, json!(3));
}
