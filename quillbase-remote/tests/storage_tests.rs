use quillbase_remote::{Connection, RemoteConfig, StorageApi};
use quillbase_types::FilePayload;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FILES_PATH: &str = "/v1/storage/buckets/media/files";

fn storage(server: &MockServer) -> StorageApi {
    StorageApi::new(Connection::new(RemoteConfig::new(server.uri(), "proj_test")))
}

#[tokio::test]
async fn create_file_sends_multipart_form() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FILES_PATH))
        .and(header(
            "content-type",
            "multipart/form-data; boundary=quillbase_upload_boundary",
        ))
        .and(body_string_contains("name=\"fileId\""))
        .and(body_string_contains("file_9"))
        .and(body_string_contains("filename=\"cover.png\""))
        .and(body_string_contains("Content-Type: image/png"))
        .and(body_string_contains("PNGDATA"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "$id": "file_9",
            "name": "cover.png",
            "sizeOriginal": 7,
            "mimeType": "image/png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = FilePayload::new("cover.png", b"PNGDATA".to_vec()).with_mime_type("image/png");
    let file = storage(&server)
        .create_file("media", "file_9", &payload)
        .await
        .unwrap();

    assert_eq!(file.id, "file_9");
    assert_eq!(file.size, 7);
}

#[tokio::test]
async fn create_file_failure_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FILES_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("storage offline"))
        .mount(&server)
        .await;

    let payload = FilePayload::new("a.bin", vec![0]);
    let result = storage(&server).create_file("media", "f", &payload).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn delete_file_ok() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{FILES_PATH}/file_9")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    storage(&server).delete_file("media", "file_9").await.unwrap();
}

#[tokio::test]
async fn delete_missing_file_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{FILES_PATH}/gone")))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "file not found"
        })))
        .mount(&server)
        .await;

    let err = storage(&server).delete_file("media", "gone").await.unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn preview_url_is_pure_shaping() {
    let conn = Connection::new(RemoteConfig::new("https://cloud.example.com/", "proj 1"));
    let storage = StorageApi::new(conn);

    let url = storage.file_preview_url("media", "file_1");
    assert_eq!(
        url,
        "https://cloud.example.com/v1/storage/buckets/media/files/file_1/preview?project=proj%201"
    );
}
