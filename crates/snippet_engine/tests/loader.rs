use std::sync::Arc;

use pretty_assertions::assert_eq;
use snippet_engine::{
    parse_feed, CatalogLoader, DirCacheStore, FailureKind, FetchCache, FetchSettings, LoadError,
    MemoryCacheStore, ReqwestFetcher,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED: &str = r#"{
    "foo": { "prefix": "30_foo", "body": ["/** x */", "export const foo = 1;"] },
    "chunk": {
        "prefix": "30_chunk-array",
        "body": ["/**", " * Chunk an array", " */", "export const chunk = () => [];"]
    },
    "empty": { "prefix": "30_empty", "body": [] },
    "nobody": { "prefix": "30_nobody" },
    "broken": { "body": ["export const x = 1;"] },
    "scalar": 42
}"#;

fn init_logging() {
    snippet_logging::initialize_for_tests();
}

#[test]
fn feed_entries_are_normalized() {
    init_logging();
    let catalog = parse_feed(FEED.as_bytes(), "typescript").unwrap();

    assert_eq!(catalog.ids(), vec!["30_foo", "30_chunk-array"]);

    let foo = &catalog[0];
    assert_eq!(foo.id, "30_foo");
    assert_eq!(foo.name, "FOO");
    assert_eq!(foo.language, "typescript");
    assert_eq!(foo.comment, "/** x */\n");
    assert_eq!(foo.code, "export const foo = 1;");
    assert_eq!(format!("{}{}", foo.comment, foo.code), foo.raw_body);

    let chunk = &catalog[1];
    assert_eq!(chunk.name, "CHUNK");
    assert_eq!(chunk.description.as_deref(), Some(" Chunk an array\n "));
}

#[test]
fn comment_and_code_always_rebuild_the_body() {
    init_logging();
    let feed = r#"{
        "a": { "prefix": "a", "body": ["no marker here"] },
        "b": { "prefix": "b", "body": ["export first", "// export again"] },
        "c": { "prefix": "c", "body": ["// é ü", "  export default 1"] },
        "d": { "prefix": "d", "body": [""] }
    }"#;
    let catalog = parse_feed(feed.as_bytes(), "typescript").unwrap();
    assert_eq!(catalog.len(), 4);
    for snippet in catalog.iter() {
        assert_eq!(format!("{}{}", snippet.comment, snippet.code), snippet.raw_body);
    }
}

#[test]
fn duplicate_prefixes_fail_the_load() {
    init_logging();
    let feed = r#"{
        "a": { "prefix": "30_same", "body": ["export const a = 1;"] },
        "b": { "prefix": "30_same", "body": ["export const b = 2;"] }
    }"#;
    let err = parse_feed(feed.as_bytes(), "typescript").unwrap_err();
    assert!(matches!(err, LoadError::DuplicateId(ref dup) if dup.id == "30_same"));
    assert_eq!(err.to_string(), "duplicate snippet id 30_same");
}

#[test]
fn language_comes_from_loader() {
    init_logging();
    let catalog = parse_feed(FEED.as_bytes(), "javascript").unwrap();
    assert!(catalog.iter().all(|s| s.language == "javascript"));
}

fn loader() -> CatalogLoader {
    let cache = FetchCache::new(
        Arc::new(ReqwestFetcher::new(FetchSettings::default())),
        Arc::new(MemoryCacheStore::new()),
    );
    CatalogLoader::new(cache, "typescript")
}

#[tokio::test]
async fn loader_fetches_and_parses() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/typescript.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(FEED, "text/plain; charset=utf-8"))
        .expect(1)
        .mount(&server)
        .await;

    let loader = loader();
    let url = format!("{}/typescript.json", server.uri());
    let first = loader.load(&url).await.unwrap();
    let second = loader.load(&url).await.unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn loader_reports_malformed_payload() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bad.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{ nope", "application/json"))
        .mount(&server)
        .await;

    let err = loader()
        .load(&format!("{}/bad.json", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)), "{err:?}");
}

#[tokio::test]
async fn loader_reports_fetch_failure() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/down.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = loader()
        .load(&format!("{}/down.json", server.uri()))
        .await
        .unwrap_err();
    match err {
        LoadError::Fetch(fetch) => assert_eq!(fetch.kind, FailureKind::HttpStatus(503)),
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn retry_after_malformed_payload_refetches() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flaky.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{ nope", "application/json"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/flaky.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(FEED, "application/json"))
        .mount(&server)
        .await;

    let loader = loader();
    let url = format!("{}/flaky.json", server.uri());
    let first = loader.load(&url).await.unwrap_err();
    assert!(matches!(first, LoadError::Parse(_)), "{first:?}");

    let retry = loader.load(&url).await.unwrap();
    assert_eq!(retry.ids(), vec!["30_foo", "30_chunk-array"]);
}

#[tokio::test]
async fn duplicate_feed_is_not_cached_across_loaders() {
    init_logging();
    let server = MockServer::start().await;
    let duplicated = r#"{
        "a": { "prefix": "30_same", "body": ["export const a = 1;"] },
        "b": { "prefix": "30_same", "body": ["export const b = 2;"] }
    }"#;
    Mock::given(method("GET"))
        .and(path("/dup.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(duplicated, "application/json"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dup.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(FEED, "application/json"))
        .mount(&server)
        .await;

    let temp = tempfile::TempDir::new().unwrap();
    let store = Arc::new(DirCacheStore::open(temp.path().to_path_buf()).unwrap());
    let fetcher = Arc::new(ReqwestFetcher::new(FetchSettings::default()));
    let url = format!("{}/dup.json", server.uri());

    let first = CatalogLoader::new(FetchCache::new(fetcher.clone(), store.clone()), "typescript");
    assert!(matches!(
        first.load(&url).await,
        Err(LoadError::DuplicateId(_))
    ));

    let restarted = CatalogLoader::new(FetchCache::new(fetcher, store), "typescript");
    assert_eq!(restarted.load(&url).await.unwrap().len(), 2);
}
