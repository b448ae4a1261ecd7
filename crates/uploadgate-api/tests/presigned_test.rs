//! Presigned URL endpoint integration tests.
//!
//! Run with: `cargo test -p uploadgate-api --test presigned_test`

mod helpers;

use helpers::storage::MockStore;
use helpers::{setup_test_app, setup_test_app_with_store, TEST_PUBLIC_BASE_URL};
use serde_json::{json, Value};
use uploadgate_core::decode_key;

#[tokio::test]
async fn test_generate_upload_url() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/generate-upload-url")
        .json(&json!({ "filename": "clip.mp4", "contentType": "video/mp4" }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["filename"], "clip.mp4");
    assert_eq!(body["message"], "Upload URL generated successfully");
    assert_eq!(
        body["publicUrl"],
        format!("{}/clip.mp4", TEST_PUBLIC_BASE_URL)
    );

    let presigned = body["presignedUrl"].as_str().unwrap();
    assert!(presigned.contains("X-Amz-Method=PUT"));
    assert!(presigned.contains("X-Amz-Expires=3600"));
    assert_ne!(Some(presigned), body["publicUrl"].as_str());
}

#[tokio::test]
async fn test_generate_upload_url_without_content_type() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/generate-upload-url")
        .json(&json!({ "filename": "notes.bin" }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_public_url_decodes_to_filename() {
    let app = setup_test_app().await;
    let filename = "holiday photos/été 2024 #1?.jpg";

    let response = app
        .client()
        .post("/generate-upload-url")
        .json(&json!({ "filename": filename }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    let public_url = body["publicUrl"].as_str().unwrap();
    let prefix = format!("{}/", TEST_PUBLIC_BASE_URL);
    let encoded = public_url.strip_prefix(&prefix).unwrap();

    assert!(!encoded.contains(' '));
    assert!(!encoded.contains('/'));
    assert_eq!(decode_key(encoded).as_deref(), Some(filename));
}

#[tokio::test]
async fn test_generate_upload_url_missing_filename() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/generate-upload-url")
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "filename is required");
}

#[tokio::test]
async fn test_generate_upload_url_malformed_body() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/generate-upload-url")
        .content_type("application/json")
        .text("{not json")
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_generate_upload_url_signing_failure() {
    let app = setup_test_app_with_store(MockStore::failing_sign()).await;

    let response = app
        .client()
        .post("/generate-upload-url")
        .json(&json!({ "filename": "clip.mp4" }))
        .await;

    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("missing credentials"));
}

/// Two in-flight requests for one key are served independently. The distinct
/// `presignedUrl` values come from the mock store's per-call nonce; real SigV4
/// URLs for the same key are identical within one signing second (see
/// `uploadgate-storage` s3 tests).
#[tokio::test]
async fn test_concurrent_upload_urls_are_independent() {
    let app = setup_test_app().await;
    let client = app.client();

    let request = || async {
        client
            .post("/generate-upload-url")
            .json(&json!({ "filename": "same.bin" }))
            .await
    };
    let (first, second) = tokio::join!(request(), request());

    assert_eq!(first.status_code(), 200);
    assert_eq!(second.status_code(), 200);
    let first: Value = first.json();
    let second: Value = second.json();
    assert_ne!(first["presignedUrl"], second["presignedUrl"]);
    assert_eq!(first["publicUrl"], second["publicUrl"]);
}

#[tokio::test]
async fn test_generate_download_url() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/generate-download-url")
        .json(&json!({ "filename": "report.pdf" }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["filename"], "report.pdf");
    assert_eq!(body["message"], "Download URL generated successfully");
    assert!(body.get("publicUrl").is_none());
    assert!(body["presignedUrl"]
        .as_str()
        .unwrap()
        .contains("X-Amz-Method=GET"));
}

#[tokio::test]
async fn test_generate_download_url_empty_filename() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/generate-download-url")
        .json(&json!({ "filename": "" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "filename is required");
}

#[tokio::test]
async fn test_generate_download_url_signing_failure() {
    let app = setup_test_app_with_store(MockStore::failing_sign()).await;

    let response = app
        .client()
        .post("/generate-download-url")
        .json(&json!({ "filename": "report.pdf" }))
        .await;

    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}
