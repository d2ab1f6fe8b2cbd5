// SPDX-License-Identifier: MPL-2.0
mod common;

use common::mock_api::{MockApi, MockResponse};
use common::{client_for, search_body, TEST_KEY};
use iced_gallery::application::port::{FetchError, PhotoSearch, SearchRequest};
use iced_gallery::config::{self, Config};
use iced_gallery::domain::{PageNumber, PageSize, PhotoId, Query};
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::infrastructure::{DiskFileSaver, PexelsClient};
use iced_gallery::media::{download_photo, DownloadError};
use iced_gallery::ui::gallery::{Effect, State};
use std::sync::Arc;
use tempfile::tempdir;

fn request(query: &str, page: u32) -> SearchRequest {
    SearchRequest::new(
        Query::parse(query).expect("valid query"),
        PageNumber::new(page),
        PageSize::new(12),
    )
}

#[tokio::test]
async fn search_sends_parameters_and_key() {
    let server = MockApi::start().await;
    server.enqueue(MockResponse::json(&search_body(&[1, 2, 3]))).await;
    let client = client_for(&server);

    let photos = client.search(request("forest", 2)).await.expect("search ok");

    let ids: Vec<u64> = photos.iter().map(|p| p.id().value()).collect();
    assert_eq!(ids, [1, 2, 3]);
    assert_eq!(photos[0].photographer(), "Photographer 1");
    assert_eq!(photos[0].display_url(), "https://images.example/1/medium.jpg");

    let captured = server.captured_requests().await;
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].path, "/v1/search");
    assert_eq!(captured[0].param("query").as_deref(), Some("forest"));
    assert_eq!(captured[0].param("page").as_deref(), Some("2"));
    assert_eq!(captured[0].param("per_page").as_deref(), Some("12"));
    assert_eq!(captured[0].authorization.as_deref(), Some(TEST_KEY));
}

#[tokio::test]
async fn multi_word_query_is_sent_intact() {
    let server = MockApi::start().await;
    server.enqueue(MockResponse::json(&search_body(&[4]))).await;

    client_for(&server)
        .search(request("  red car & bike ", 1))
        .await
        .expect("search ok");

    let captured = server.captured_requests().await;
    assert_eq!(captured[0].param("query").as_deref(), Some("red car & bike"));
}

#[tokio::test]
async fn search_reports_http_status() {
    let server = MockApi::start().await;
    server.enqueue(MockResponse::status(500)).await;

    let result = client_for(&server).search(request("forest", 1)).await;

    assert_eq!(result, Err(FetchError::Status(500)));
}

#[tokio::test]
async fn search_rejects_malformed_body() {
    let server = MockApi::start().await;
    server.enqueue(MockResponse::json("{\"unexpected\": true}")).await;

    let result = client_for(&server).search(request("forest", 1)).await;

    assert!(matches!(result, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn empty_page_is_not_an_error() {
    let server = MockApi::start().await;
    server.enqueue(MockResponse::json(&search_body(&[]))).await;

    let photos = client_for(&server)
        .search(request("forest", 9))
        .await
        .expect("empty page is ok");

    assert!(photos.is_empty());
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("free port")
        .port();
    let api = config::ApiConfig {
        search_url: Some(format!("http://127.0.0.1:{port}/v1/search")),
        ..config::ApiConfig::default()
    };
    let client = PexelsClient::new(&api, None).expect("client builds");

    let result = client.search(request("forest", 1)).await;

    assert!(matches!(result, Err(FetchError::Transport(_))));
}

#[tokio::test]
async fn download_writes_original_to_directory() {
    let server = MockApi::start().await;
    server.enqueue(MockResponse::bytes(b"jpeg-bytes")).await;
    let dir = tempdir().expect("temp dir");
    let client = Arc::new(client_for(&server));
    let saver = Arc::new(DiskFileSaver::new(Some(dir.path().to_path_buf())));

    let path = download_photo(
        client,
        saver,
        server.url("/photos/7/original.jpg"),
        "Jane Doe".to_string(),
    )
    .await
    .expect("download ok");

    assert_eq!(path, dir.path().join("photo-Jane Doe.jpg"));
    assert_eq!(std::fs::read(&path).expect("file written"), b"jpeg-bytes");

    let captured = server.captured_requests().await;
    assert_eq!(captured[0].path, "/photos/7/original.jpg");
    assert_eq!(captured[0].authorization, None);
}

#[tokio::test]
async fn download_failure_writes_nothing() {
    let server = MockApi::start().await;
    server.enqueue(MockResponse::status(404)).await;
    let dir = tempdir().expect("temp dir");
    let client = Arc::new(client_for(&server));
    let saver = Arc::new(DiskFileSaver::new(Some(dir.path().to_path_buf())));

    let result = download_photo(
        client,
        saver,
        server.url("/photos/7/original.jpg"),
        "Jane".to_string(),
    )
    .await;

    assert_eq!(result, Err(DownloadError::Fetch(FetchError::Status(404))));
    let entries = std::fs::read_dir(dir.path()).expect("read dir").count();
    assert_eq!(entries, 0);
}

/// Drives the gallery controller against the mock service the way the
/// application does: each search effect is sent and its result fed back.
#[tokio::test]
async fn search_then_paginate_until_exhausted() {
    let server = MockApi::start().await;
    server.enqueue(MockResponse::json(&search_body(&[1, 2]))).await;
    server.enqueue(MockResponse::json(&search_body(&[3]))).await;
    server.enqueue(MockResponse::json(&search_body(&[]))).await;
    let client = client_for(&server);
    let mut state = State::new(PageSize::new(12), 16);

    let ticket = state.submit_search("  lake ").expect("valid query");
    let result = client.search(ticket.request).await;
    let effects = state.complete_search(ticket.id, result);
    assert!(effects.iter().any(|e| matches!(e, Effect::ScrollToTop)));
    assert_eq!(state.photos().len(), 2);
    assert_eq!(state.page(), PageNumber::new(1));

    let ticket = state.load_more().expect("load more");
    assert_eq!(ticket.request.page, PageNumber::new(2));
    let result = client.search(ticket.request).await;
    state.complete_search(ticket.id, result);
    let ids: Vec<PhotoId> = state.photos().iter().map(|p| p.id()).collect();
    assert_eq!(ids, [PhotoId::new(1), PhotoId::new(2), PhotoId::new(3)]);

    let ticket = state.load_more().expect("load more");
    let result = client.search(ticket.request).await;
    let effects = state.complete_search(ticket.id, result);
    assert_eq!(state.photos().len(), 3);
    assert_eq!(state.page(), PageNumber::new(2));
    assert!(effects.iter().any(|e| matches!(
        e,
        Effect::Notify(n) if n.message_key() == "notification-no-more-results"
    )));

    let pages: Vec<_> = server
        .captured_requests()
        .await
        .iter()
        .map(|r| (r.param("query"), r.param("page")))
        .collect();
    assert_eq!(
        pages,
        [
            (Some("lake".to_string()), Some("1".to_string())),
            (Some("lake".to_string()), Some("2".to_string())),
            (Some("lake".to_string()), Some("3".to_string())),
        ]
    );
}

#[tokio::test]
async fn failed_page_keeps_results_and_retries_same_page() {
    let server = MockApi::start().await;
    server.enqueue(MockResponse::json(&search_body(&[1]))).await;
    server.enqueue(MockResponse::status(503)).await;
    server.enqueue(MockResponse::json(&search_body(&[2]))).await;
    let client = client_for(&server);
    let mut state = State::new(PageSize::new(12), 16);

    let ticket = state.submit_search("lake").expect("valid query");
    let result = client.search(ticket.request).await;
    state.complete_search(ticket.id, result);

    let ticket = state.load_more().expect("load more");
    let result = client.search(ticket.request).await;
    state.complete_search(ticket.id, result);
    assert_eq!(state.photos().len(), 1);
    assert_eq!(state.page(), PageNumber::new(1));
    assert!(!state.is_loading());

    let ticket = state.load_more().expect("retry");
    assert_eq!(ticket.request.page, PageNumber::new(2));
    let result = client.search(ticket.request).await;
    state.complete_search(ticket.id, result);
    assert_eq!(state.photos().len(), 2);
}

#[test]
fn language_follows_saved_config() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut saved = Config::default();
    saved.general.language = Some("fr".to_string());
    config::save_to_path(&saved, &path).expect("write config");

    let loaded = config::load_from_path(&path).expect("read config");
    let i18n = I18n::new(None, &loaded);

    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(loaded.api.initial_query.as_deref(), Some("nature"));
}
