//! Integration tests for the search endpoint.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_search_matches_names_paths_and_types() {
    let app = helpers::TestApp::seeded().await;

    let response = app.get("/v1/folders/search?q=doc").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Search completed successfully");
    // Folders match on name or path, files on name or type.
    assert_eq!(
        response.names("/data/folders"),
        ["Documents", "Projects", "React Projects", "Vue Projects", "Work"]
    );
    assert_eq!(response.names("/data/files"), ["requirements.docx"]);
    assert_eq!(
        response.data()["pagination"],
        json!({ "page": 1, "limit": 50, "total": 6, "totalPages": 1 })
    );
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let app = helpers::TestApp::seeded().await;

    let response = app.get("/v1/folders/search?q=MP3").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.names("/data/folders"), Vec::<String>::new());
    assert_eq!(response.names("/data/files"), ["song-1.mp3", "song-2.mp3"]);
}

#[tokio::test]
async fn test_search_pages_folders_and_files_together() {
    let app = helpers::TestApp::seeded().await;

    let first = app.get("/v1/folders/search?q=doc&page=1&limit=2").await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.names("/data/folders"), ["Documents", "Projects"]);
    assert_eq!(first.names("/data/files"), ["requirements.docx"]);
    assert_eq!(
        first.data()["pagination"],
        json!({ "page": 1, "limit": 2, "total": 6, "totalPages": 3 })
    );

    let last = app.get("/v1/folders/search?q=doc&page=3&limit=2").await;
    assert_eq!(last.names("/data/folders"), ["Work"]);
    assert_eq!(last.data()["files"], json!([]));
    assert_eq!(last.data()["pagination"]["page"], 3);
}

#[tokio::test]
async fn test_search_without_matches() {
    let app = helpers::TestApp::seeded().await;

    let response = app.get("/v1/folders/search?q=zzz").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data()["pagination"],
        json!({ "page": 1, "limit": 50, "total": 0, "totalPages": 0 })
    );
}

#[tokio::test]
async fn test_search_requires_query() {
    let app = helpers::TestApp::seeded().await;

    for path in ["/v1/folders/search", "/v1/folders/search?q="] {
        let response = app.get(path).await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body["success"], false);
        assert_eq!(response.body["error"], "VALIDATION");
    }
}

#[tokio::test]
async fn test_search_paging_fallbacks() {
    let app = helpers::TestApp::seeded().await;

    let response = app.get("/v1/folders/search?q=doc&page=abc&limit=0").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["pagination"]["page"], 1);
    assert_eq!(response.data()["pagination"]["limit"], 50);

    let response = app.get("/v1/folders/search?q=doc&limit=-1").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let app = helpers::TestApp::seeded().await;

    let response = app.get("/v1/folders/search?q=%25").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["pagination"]["total"], 0);
}

#[tokio::test]
async fn test_search_pages_far_past_the_end() {
    let app = helpers::TestApp::seeded().await;

    let response = app
        .get("/v1/folders/search?q=a&page=3&limit=9223372036854775807")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["folders"], json!([]));
    assert_eq!(response.data()["files"], json!([]));
    assert_eq!(response.data()["pagination"]["page"], 3);
}

#[tokio::test]
async fn test_search_reads_leading_digits() {
    let app = helpers::TestApp::seeded().await;

    let response = app.get("/v1/folders/search?q=doc&page=2abc&limit=2x").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.names("/data/folders"), ["React Projects", "Vue Projects"]);
    assert_eq!(
        response.data()["pagination"],
        json!({ "page": 2, "limit": 2, "total": 6, "totalPages": 3 })
    );
}
