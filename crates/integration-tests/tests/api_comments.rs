//! `/threads/{thread_id}/comments` endpoints over the in-memory store.

use axum::http::{Method, StatusCode};
use integration_tests::http::{request, send};
use integration_tests::TestApp;
use serde_json::{json, Value};

async fn create_thread(app: &TestApp, token: &str) -> String {
    let (_, body) = send(
        app.router(),
        request(Method::POST, "/threads", Some(token), Some(json!({ "title": "t", "body": "b" }))),
    )
    .await;
    body["data"]["addedThread"]["id"].as_str().unwrap().to_string()
}

async fn create_comment(app: &TestApp, token: &str, thread_id: &str, content: &str) -> Value {
    let (status, body) = send(
        app.router(),
        request(
            Method::POST,
            &format!("/threads/{thread_id}/comments"),
            Some(token),
            Some(json!({ "content": content })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn post_comment_returns_added_comment() {
    let app = TestApp::new();
    let token = app.register("user-123", "dicoding");
    let thread_id = create_thread(&app, &token).await;

    let body = create_comment(&app, &token, &thread_id, "sebuah comment").await;

    assert_eq!(body["status"], "success");
    let added = &body["data"]["addedComment"];
    assert!(added["id"].as_str().unwrap().starts_with("comment-"));
    assert_eq!(added["content"], "sebuah comment");
    assert_eq!(added["owner"], "user-123");
}

#[tokio::test]
async fn post_comment_on_missing_thread_is_404() {
    let app = TestApp::new();
    let token = app.register("user-123", "dicoding");

    let (status, body) = send(
        app.router(),
        request(
            Method::POST,
            "/threads/thread-404/comments",
            Some(&token),
            Some(json!({ "content": "halo" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Thread tidak ditemukan");
}

#[tokio::test]
async fn post_comment_validates_content() {
    let app = TestApp::new();
    let token = app.register("user-123", "dicoding");
    let thread_id = create_thread(&app, &token).await;
    let uri = format!("/threads/{thread_id}/comments");

    let (status, body) =
        send(app.router(), request(Method::POST, &uri, Some(&token), Some(json!({})))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Masukkan isi komentar terlebih dahulu");

    let (status, body) = send(
        app.router(),
        request(Method::POST, &uri, Some(&token), Some(json!({ "content": 123 }))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Masukkan isi komentar dengan benar");
}

#[tokio::test]
async fn post_comment_requires_token() {
    let app = TestApp::new();

    let (status, body) = send(
        app.router(),
        request(
            Method::POST,
            "/threads/thread-123/comments",
            None,
            Some(json!({ "content": "x" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Missing authentication");
}

#[tokio::test]
async fn delete_comment_soft_deletes_and_redacts() {
    let app = TestApp::new();
    let token = app.register("user-123", "dicoding");
    let thread_id = create_thread(&app, &token).await;
    let added = create_comment(&app, &token, &thread_id, "kata kasar").await;
    let comment_id = added["data"]["addedComment"]["id"].as_str().unwrap().to_string();
    let uri = format!("/threads/{thread_id}/comments/{comment_id}");

    let (status, body) =
        send(app.router(), request(Method::DELETE, &uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success" }));

    // Deleting again is not an error.
    let (status, _) = send(app.router(), request(Method::DELETE, &uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);

    let detail_uri = format!("/threads/{thread_id}");
    let (_, body) = send(app.router(), request(Method::GET, &detail_uri, None, None)).await;
    let comment = &body["data"]["thread"]["comments"][0];
    assert_eq!(comment["id"], comment_id.as_str());
    assert_eq!(comment["content"], "**komentar telah dihapus**");
    assert_eq!(comment["isDelete"], true);
}

#[tokio::test]
async fn delete_comment_of_someone_else_is_403() {
    let app = TestApp::new();
    let author = app.register("user-123", "dicoding");
    let intruder = app.register("user-456", "johndoe");
    let thread_id = create_thread(&app, &author).await;
    let added = create_comment(&app, &author, &thread_id, "punyaku").await;
    let comment_id = added["data"]["addedComment"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        app.router(),
        request(
            Method::DELETE,
            &format!("/threads/{thread_id}/comments/{comment_id}"),
            Some(&intruder),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Gagal menghapus komentar, komentar bukan milik anda");
    assert_eq!(app.store.is_comment_deleted(&comment_id), Some(false));
}

#[tokio::test]
async fn delete_missing_comment_is_404() {
    let app = TestApp::new();
    let token = app.register("user-123", "dicoding");
    let thread_id = create_thread(&app, &token).await;

    let (status, body) = send(
        app.router(),
        request(
            Method::DELETE,
            &format!("/threads/{thread_id}/comments/comment-404"),
            Some(&token),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Gagal menghapus komentar, komentar tidak ditemukan");
}

#[tokio::test]
async fn delete_comment_on_missing_thread_is_404() {
    let app = TestApp::new();
    let token = app.register("user-123", "dicoding");

    let (status, body) = send(
        app.router(),
        request(Method::DELETE, "/threads/thread-404/comments/comment-123", Some(&token), None),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Thread tidak ditemukan");
}
