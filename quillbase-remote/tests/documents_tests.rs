use quillbase_remote::{Connection, DocumentsApi, Query, RemoteConfig};
use quillbase_types::{PostDocument, PostList};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOCUMENTS_PATH: &str = "/v1/databases/blog/collections/posts/documents";

fn documents(server: &MockServer) -> DocumentsApi {
    DocumentsApi::new(Connection::new(RemoteConfig::new(server.uri(), "proj_test")))
}

fn doc_body(slug: &str) -> serde_json::Value {
    serde_json::json!({
        "$id": slug,
        "title": "Hello",
        "content": "First post",
        "status": "active",
        "userid": "u1"
    })
}

#[tokio::test]
async fn create_wraps_data_under_document_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(DOCUMENTS_PATH))
        .and(body_partial_json(serde_json::json!({
            "documentId": "hello-world",
            "data": { "title": "Hello", "userid": "u1" }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(doc_body("hello-world")))
        .expect(1)
        .mount(&server)
        .await;

    let data = serde_json::json!({
        "title": "Hello",
        "content": "First post",
        "status": "active",
        "userid": "u1"
    });

    let doc: PostDocument = documents(&server)
        .create("blog", "posts", "hello-world", &data)
        .await
        .unwrap();

    assert_eq!(doc.slug, "hello-world");
}

#[tokio::test]
async fn update_patches_document_path() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(format!("{DOCUMENTS_PATH}/hello-world")))
        .and(body_partial_json(serde_json::json!({
            "data": { "title": "Hello again" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(doc_body("hello-world")))
        .expect(1)
        .mount(&server)
        .await;

    let data = serde_json::json!({"title": "Hello again", "status": "active"});
    let doc: PostDocument = documents(&server)
        .update("blog", "posts", "hello-world", &data)
        .await
        .unwrap();

    assert_eq!(doc.slug, "hello-world");
}

#[tokio::test]
async fn get_missing_document_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{DOCUMENTS_PATH}/nope")))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "document not found"
        })))
        .mount(&server)
        .await;

    let err = documents(&server)
        .get::<PostDocument>("blog", "posts", "nope")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_document() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{DOCUMENTS_PATH}/hello-world")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    documents(&server)
        .delete("blog", "posts", "hello-world")
        .await
        .unwrap();
}

#[tokio::test]
async fn list_sends_queries_in_wire_form() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DOCUMENTS_PATH))
        .and(query_param("queries[]", r#"equal("status",["active"])"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total": 1,
            "documents": [doc_body("hello-world")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let queries = vec![Query::equal("status", "active")];
    let list: PostList = documents(&server)
        .list("blog", "posts", &queries)
        .await
        .unwrap();

    assert_eq!(list.total, 1);
    assert_eq!(list.documents[0].slug, "hello-world");
}

#[tokio::test]
async fn list_sends_every_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DOCUMENTS_PATH))
        .and(query_param("queries[]", r#"equal("userid",["u1"])"#))
        .and(query_param("queries[]", "limit(25)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total": 0,
            "documents": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let queries = vec![Query::equal("userid", "u1"), Query::limit(25)];
    let list: PostList = documents(&server)
        .list("blog", "posts", &queries)
        .await
        .unwrap();

    assert_eq!(list.total, 0);
}

#[tokio::test]
async fn list_without_queries_sends_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DOCUMENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total": 0,
            "documents": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let list: PostList = documents(&server).list("blog", "posts", &[]).await.unwrap();
    assert_eq!(list.total, 0);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());
}
