use quillbase_remote::{AccountsApi, Connection, PROJECT_HEADER, RemoteConfig, unique_id};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn project_header_name() {
    assert_eq!(PROJECT_HEADER, "X-Quillbase-Project");
}

#[test]
fn connection_exposes_config() {
    let conn = Connection::new(RemoteConfig::new("https://cloud.example.com", "proj_1"));
    assert_eq!(conn.config().project_id, "proj_1");
}

#[test]
fn connection_clone_shares_config() {
    let conn = Connection::new(RemoteConfig::new("https://cloud.example.com", "proj_1"));
    let clone = conn.clone();
    assert_eq!(clone.config(), conn.config());
}

#[tokio::test]
async fn trailing_slash_endpoint_is_normalized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "$id": "user_1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let conn = Connection::new(RemoteConfig::new(format!("{}/", server.uri()), "proj_test"));
    let account = AccountsApi::new(conn).get().await.unwrap();
    assert_eq!(account.id, "user_1");
}

// ── unique_id ───────────────────────────────────────────────────

#[test]
fn unique_id_is_compact_hex() {
    let id = unique_id();
    assert_eq!(id.len(), 32);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn unique_ids_do_not_repeat() {
    assert_ne!(unique_id(), unique_id());
}
