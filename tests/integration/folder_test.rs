//! Integration tests for the folder tree and folder contents endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use explorer_api::build_state;

#[tokio::test]
async fn test_banner_and_health() {
    let app = helpers::TestApp::empty();

    let banner = app.get("/").await;
    assert_eq!(banner.status, StatusCode::OK);
    assert_eq!(banner.body["message"], "File Explorer API");

    let health = app.get("/health").await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.data()["status"], "ok");
    assert_eq!(health.data()["store"], "memory");
}

#[tokio::test]
async fn test_folder_tree_nests_sample_data() {
    let app = helpers::TestApp::seeded().await;

    let response = app.get("/v1/folders").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Folder tree retrieved successfully");
    assert_eq!(response.names("/data/folders"), ["Root"]);
    assert_eq!(
        response.names("/data/folders/0/children"),
        ["Documents", "Music", "Pictures"]
    );
    assert_eq!(
        response.names("/data/folders/0/children/0/children"),
        ["Projects", "Work"]
    );
    assert_eq!(
        response.names("/data/folders/0/children/0/children/0/children"),
        ["React Projects", "Vue Projects"]
    );

    let root = &response.data()["folders"][0];
    assert_eq!(root["isOpen"], false);
    assert_eq!(root["path"], "/");
    assert!(root["parentId"].is_null());
}

#[tokio::test]
async fn test_folder_tree_empty_store() {
    let app = helpers::TestApp::empty();

    let response = app.get("/v1/folders").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["folders"], json!([]));
}

#[tokio::test]
async fn test_root_contents_list_top_level_folders() {
    let app = helpers::TestApp::seeded().await;

    let response = app.get("/v1/folders/root/contents").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Folder contents retrieved successfully");
    assert_eq!(response.names("/data/folders"), ["Root"]);
    assert_eq!(
        response.data()["folders"][0]["_count"],
        json!({ "children": 3, "files": 2 })
    );
    assert_eq!(response.data()["files"], json!([]));
    assert!(response.data()["currentFolder"].is_null());
}

#[tokio::test]
async fn test_folder_contents_with_counts() {
    let app = helpers::TestApp::seeded().await;
    let documents = app.folder_id("/documents").await;

    let response = app.get(&format!("/v1/folders/{documents}/contents")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.names("/data/folders"), ["Projects", "Work"]);
    assert_eq!(
        response.data()["folders"][0]["_count"],
        json!({ "children": 2, "files": 2 })
    );
    assert_eq!(
        response.data()["folders"][1]["_count"],
        json!({ "children": 0, "files": 1 })
    );
    assert_eq!(response.data()["files"], json!([]));
    assert_eq!(response.data()["currentFolder"]["name"], "Documents");
    assert_eq!(response.data()["currentFolder"]["id"], documents.to_string());
}

#[tokio::test]
async fn test_folder_contents_include_files() {
    let app = helpers::TestApp::seeded().await;
    let music = app.folder_id("/music").await;

    let response = app.get(&format!("/v1/folders/{music}/contents")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["folders"], json!([]));
    assert_eq!(response.names("/data/files"), ["song-1.mp3", "song-2.mp3"]);

    let song = &response.data()["files"][0];
    assert_eq!(song["type"], "audio/mpeg");
    assert_eq!(song["size"], 8_388_608);
    assert_eq!(song["folderId"], music.to_string());
}

#[tokio::test]
async fn test_unknown_folder_is_not_found() {
    let app = helpers::TestApp::seeded().await;

    let response = app
        .get("/v1/folders/00000000-0000-0000-0000-999999999999/contents")
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_folder_id_is_not_found() {
    let app = helpers::TestApp::seeded().await;

    let response = app.get("/v1/folders/not-a-uuid/contents").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_build_state_seeds_on_start() {
    let mut config = helpers::memory_config();
    config.store.seed_on_start = true;
    let state = build_state(config).await.expect("Failed to build state");
    let router = explorer_api::build_app(state);

    let response = helpers::request(&router, "/v1/folders").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.names("/data/folders"), ["Root"]);
}
