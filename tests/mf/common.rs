use marketingforce::{ClientConfig, ClientCredentials, MarketingforceClient};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LOGIN_PATH: &str = "/thirdparty/user/login/client";

/// Install a test subscriber once so `RUST_LOG=debug` shows client tracing.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Start a mock server and a client pointed at it. No request is made.
pub async fn setup() -> (MockServer, MarketingforceClient) {
    init_tracing();
    let server = MockServer::start().await;
    let creds = ClientCredentials::new(server.uri(), "test-key", "test-secret")
        .expect("valid credentials");
    let client = MarketingforceClient::with_config(
        creds,
        ClientConfig::builder().with_tracing(true).build(),
    )
    .expect("client builds");
    (server, client)
}

/// Answer every POST to `endpoint` with `body`.
pub async fn respond_json(server: &MockServer, endpoint: &str, body: Value) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub fn login_ok(token: &str, expired_time: i64) -> Value {
    json!({"code": 0, "message": "success", "data": {"value": token, "expiredTime": expired_time}})
}
