//! End-to-end runs of the download and list commands against a mock server.

mod common;

use std::fs;
use std::path::{Path, PathBuf};

use spotify_image_downloader::Error;
use spotify_image_downloader::cli::{self, DownloadOptions};
use spotify_image_downloader::management::{self, CredentialError};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::*;

const STORED_CONFIG: &str = "SPOTIPY_CLIENT_ID = test-id\nSPOTIPY_CLIENT_SECRET = test-secret\n";

fn options(server: &MockServer, workdir: &Path, id: &str) -> DownloadOptions {
    DownloadOptions {
        id: id.to_string(),
        output: None,
        client_id: None,
        client_secret: None,
        one_time: false,
        config_path: config_path(workdir),
        working_dir: workdir.to_path_buf(),
        endpoints: endpoints(server),
    }
}

fn config_path(workdir: &Path) -> PathBuf {
    workdir.join("settings").join("config")
}

fn with_cli_credentials(mut options: DownloadOptions) -> DownloadOptions {
    options.client_id = Some("test-id".to_string());
    options.client_secret = Some("test-secret".to_string());
    options
}

fn write_stored_config(workdir: &Path) {
    let path = config_path(workdir);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, STORED_CONFIG).unwrap();
}

async fn mock_album_flow(server: &MockServer) {
    mock_token(server, TEST_BASIC_AUTH).await;
    mock_lookup(server, "/v1/albums/123", album_payload(server)).await;
    mock_image(server, "large").await;
}

#[tokio::test]
async fn test_first_run_downloads_and_saves_credentials() {
    let mock_server = MockServer::start().await;
    mock_album_flow(&mock_server).await;
    let workdir = TempDir::new().unwrap();

    let mut opts = with_cli_credentials(options(
        &mock_server,
        workdir.path(),
        "https://open.spotify.com/album/123?si=abc",
    ));
    opts.output = Some(PathBuf::from("covers/album.jpg"));

    let saved = cli::download(opts).await.unwrap();

    assert_eq!(saved, workdir.path().join("covers").join("album.jpg"));
    assert_eq!(fs::read(&saved).unwrap(), FAKE_IMAGE_CONTENT);
    assert_eq!(
        fs::read_to_string(config_path(workdir.path())).unwrap(),
        STORED_CONFIG
    );
}

#[tokio::test]
async fn test_one_time_credentials_are_not_saved() {
    let mock_server = MockServer::start().await;
    mock_album_flow(&mock_server).await;
    let workdir = TempDir::new().unwrap();

    let mut opts = with_cli_credentials(options(&mock_server, workdir.path(), "spotify:album:123"));
    opts.one_time = true;

    let saved = cli::download(opts).await.unwrap();

    assert!(saved.exists());
    assert!(!config_path(workdir.path()).exists());
}

#[tokio::test]
async fn test_stored_credentials_and_default_file_name() {
    let mock_server = MockServer::start().await;
    mock_album_flow(&mock_server).await;
    let workdir = TempDir::new().unwrap();
    write_stored_config(workdir.path());

    let saved = cli::download(options(&mock_server, workdir.path(), "spotify:album:123"))
        .await
        .unwrap();

    assert_eq!(saved, workdir.path().join("large.jpg"));
    assert_eq!(fs::read(&saved).unwrap(), FAKE_IMAGE_CONTENT);
    assert_eq!(
        fs::read_to_string(config_path(workdir.path())).unwrap(),
        STORED_CONFIG
    );
}

#[tokio::test]
async fn test_track_downloads_album_image() {
    let mock_server = MockServer::start().await;
    mock_token(&mock_server, TEST_BASIC_AUTH).await;
    mock_lookup(
        &mock_server,
        "/v1/tracks/abc",
        serde_json::json!({ "id": "abc", "album": album_payload(&mock_server) }),
    )
    .await;
    mock_image(&mock_server, "large").await;
    let workdir = TempDir::new().unwrap();
    write_stored_config(workdir.path());

    let saved = cli::download(options(&mock_server, workdir.path(), "spotify:track:abc"))
        .await
        .unwrap();

    assert_eq!(saved, workdir.path().join("large.jpg"));
}

#[tokio::test]
async fn test_auth_failure_writes_nothing() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_client",
            "error_description": "Invalid client secret"
        })))
        .mount(&mock_server)
        .await;
    let workdir = TempDir::new().unwrap();

    let mut opts = with_cli_credentials(options(&mock_server, workdir.path(), "spotify:album:123"));
    opts.output = Some(PathBuf::from("cover.jpg"));

    let result = cli::download(opts).await;

    assert!(matches!(result, Err(Error::Auth(_))));
    assert!(!workdir.path().join("cover.jpg").exists());
    assert!(!config_path(workdir.path()).exists());
}

#[tokio::test]
async fn test_private_playlist_writes_nothing() {
    let mock_server = MockServer::start().await;
    mock_token(&mock_server, TEST_BASIC_AUTH).await;
    Mock::given(method("GET"))
        .and(path("/v1/playlists/private"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    let workdir = TempDir::new().unwrap();

    let mut opts = with_cli_credentials(options(
        &mock_server,
        workdir.path(),
        "https://open.spotify.com/playlist/private",
    ));
    opts.output = Some(PathBuf::from("cover.jpg"));

    let result = cli::download(opts).await;

    assert!(matches!(result, Err(Error::ResourceUnavailable { .. })));
    assert!(!workdir.path().join("cover.jpg").exists());
    assert!(!config_path(workdir.path()).exists());
}

#[tokio::test]
async fn test_resource_without_images_is_empty_set() {
    let mock_server = MockServer::start().await;
    mock_token(&mock_server, TEST_BASIC_AUTH).await;
    mock_lookup(
        &mock_server,
        "/v1/users/someone",
        serde_json::json!({ "id": "someone", "images": [] }),
    )
    .await;
    let workdir = TempDir::new().unwrap();
    write_stored_config(workdir.path());

    let result = cli::download(options(&mock_server, workdir.path(), "spotify:user:someone")).await;

    assert!(matches!(result, Err(Error::EmptySet)));
}

#[tokio::test]
async fn test_invalid_identifier_fails_before_any_request() {
    let mock_server = MockServer::start().await;
    let workdir = TempDir::new().unwrap();

    let result = cli::download(with_cli_credentials(options(
        &mock_server,
        workdir.path(),
        "https://example.com/album/123",
    )))
    .await;

    assert!(matches!(result, Err(Error::InvalidFormat(_))));
    let requests = mock_server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_list_images_ranks_without_downloading() {
    let mock_server = MockServer::start().await;
    mock_token(&mock_server, TEST_BASIC_AUTH).await;
    mock_lookup(&mock_server, "/v1/albums/123", album_payload(&mock_server)).await;
    let workdir = TempDir::new().unwrap();

    let ranked = cli::list_images(with_cli_credentials(options(
        &mock_server,
        workdir.path(),
        "spotify:album:123",
    )))
    .await
    .unwrap();

    let widths: Vec<Option<u32>> = ranked.iter().map(|i| i.width).collect();
    assert_eq!(widths, vec![Some(640), Some(300), None]);
    assert!(!workdir.path().join("large.jpg").exists());
    assert!(!config_path(workdir.path()).exists());
}

#[tokio::test]
async fn test_clear_resets_stored_credentials() {
    let workdir = TempDir::new().unwrap();
    write_stored_config(workdir.path());

    cli::clear(&config_path(workdir.path())).await.unwrap();

    assert_eq!(
        fs::read_to_string(config_path(workdir.path())).unwrap(),
        "SPOTIPY_CLIENT_ID = \nSPOTIPY_CLIENT_SECRET = \n"
    );
}

#[tokio::test]
async fn test_output_creates_nested_directories() {
    let mock_server = MockServer::start().await;
    mock_album_flow(&mock_server).await;
    let workdir = TempDir::new().unwrap();
    write_stored_config(workdir.path());

    let mut opts = options(&mock_server, workdir.path(), "spotify:album:123");
    opts.output = Some(PathBuf::from("covers/sub/art.jpg"));

    let saved = cli::download(opts).await.unwrap();

    let expected = workdir.path().join("covers").join("sub").join("art.jpg");
    assert_eq!(saved, expected);
    assert_eq!(fs::read(&expected).unwrap(), FAKE_IMAGE_CONTENT);
    assert!(!workdir.path().join("large.jpg").exists());
}

#[tokio::test]
async fn test_write_image_into_missing_directory() {
    let workdir = TempDir::new().unwrap();
    let target = management::resolve_output_path(
        Some(Path::new("a/b/c.jpg")),
        "https://i.scdn.co/image/ignored",
        workdir.path(),
    );

    management::write_image(&target, FAKE_IMAGE_CONTENT).await.unwrap();

    assert_eq!(target, workdir.path().join("a").join("b").join("c.jpg"));
    assert_eq!(fs::read(&target).unwrap(), FAKE_IMAGE_CONTENT);
}

#[tokio::test]
async fn test_cli_credentials_replace_malformed_file() {
    let mock_server = MockServer::start().await;
    mock_album_flow(&mock_server).await;
    let workdir = TempDir::new().unwrap();
    let path = config_path(workdir.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "SPOTIPY_CLIENT_ID = \nSPOTIPY_CLIENT_SECRET: \n").unwrap();

    let saved = cli::download(with_cli_credentials(options(
        &mock_server,
        workdir.path(),
        "spotify:album:123",
    )))
    .await
    .unwrap();

    assert!(saved.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), STORED_CONFIG);
}

#[tokio::test]
async fn test_malformed_file_without_cli_credentials_fails() {
    let mock_server = MockServer::start().await;
    let workdir = TempDir::new().unwrap();
    let path = config_path(workdir.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "SPOTIPY_CLIENT_ID = \nSPOTIPY_CLIENT_SECRET: \n").unwrap();

    let result = cli::download(options(&mock_server, workdir.path(), "spotify:album:123")).await;

    match result {
        Err(Error::Credentials(e @ CredentialError::Malformed { .. })) => {
            assert!(e.to_string().contains("--clear"));
        }
        other => panic!("expected malformed credential file, got {:?}", other),
    }
}

#[tokio::test]
async fn test_playlist_with_null_images_is_empty_set() {
    let mock_server = MockServer::start().await;
    mock_token(&mock_server, TEST_BASIC_AUTH).await;
    mock_lookup(
        &mock_server,
        "/v1/playlists/p1",
        serde_json::json!({ "images": null }),
    )
    .await;
    let workdir = TempDir::new().unwrap();
    write_stored_config(workdir.path());

    let result = cli::download(options(&mock_server, workdir.path(), "spotify:playlist:p1")).await;

    assert!(matches!(result, Err(Error::EmptySet)));
}
