use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use async_trait::async_trait;
use pytori::server::router::{PytoriState, pytori_router};
use pytori::store::{RecordStore, parse_merged_on};
use pytori::{Commit, MemoryStore, PytoriError, Repository, SummaryAggregator};
use serde_json::{Value, json};
use std::{sync::Arc, time::Duration};
use tower::ServiceExt;

const SCENARIO_A: &str = r#"{"repositoryId":101,"repositoryName":"team-a","status":1,"shiritoriCount":1,"currentWord":"ぬいぐるみ","reviewComment":"ちょーすごい","mergedOn":"2025-07-10T15:20:00Z"}"#;

fn app() -> Router {
    let store = MemoryStore::new()
        .with_repository(Repository::new(101, "team-a", 1))
        .with_repository(Repository::new(102, "team-b", 1))
        .with_repository(Repository::new(103, "team-c", 0))
        .with_commit(Commit::merged(
            1,
            101,
            "ぬいぐるみ",
            "ちょーすごい",
            parse_merged_on("2025-07-10T15:20:00Z").unwrap(),
        ))
        .with_commit(Commit::merged(
            2,
            102,
            "eval",
            "ナイスコミット！",
            parse_merged_on("2025-07-11T11:45:00Z").unwrap(),
        ))
        .with_commit(Commit::merged(
            3,
            102,
            "list",
            "ナイス!!",
            parse_merged_on("2025-07-12T11:45:00Z").unwrap(),
        ))
        .with_commit(Commit::pending(4, 103, "tuple"));

    let aggregator = SummaryAggregator::new(Arc::new(store), 4);
    pytori_router(PytoriState::new(aggregator), Duration::from_secs(5))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (
        status,
        String::from_utf8(body.to_vec()).expect("response body was not utf-8"),
    )
}

#[tokio::test]
async fn single_repository_summary() {
    let app = app();

    // 1) known id -> 200 + exact body
    let (status, body) = get(&app, "/repo-summary?repository_id=101").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, SCENARIO_A);

    // 2) repeat -> byte-identical
    let (_, again) = get(&app, "/repo-summary?repository_id=101").await;
    assert_eq!(again, body);

    // 3) unknown id -> 404
    let (status, body) = get(&app, "/repo-summary?repository_id=999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"error":"Repository not found"}"#);

    // 4) non-integer id -> 400
    let (status, body) = get(&app, "/repo-summary?repository_id=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Invalid repository_id"}"#);

    // 5) repeated id -> JSON 400, not the extractor's plain-text rejection
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/repo-summary?repository_id=101&repository_id=102")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.headers().get("content-type").unwrap().to_str().unwrap(),
        "application/json"
    );
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert_eq!(&body[..], br#"{"error":"Invalid repository_id"}"#);

    // 6) repository without merges -> nulls
    let (status, body) = get(&app, "/repo-summary?repository_id=103").await;
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["shiritoriCount"], json!(0));
    assert!(value["currentWord"].is_null());
    assert!(value["reviewComment"].is_null());
    assert!(value["mergedOn"].is_null());
}

#[tokio::test]
async fn all_repository_summaries() {
    let app = app();

    for uri in ["/repo-summary", "/repo-summary?repository_id="] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");

        let value: Value = serde_json::from_str(&body).unwrap();
        let items = value.as_array().expect("array body");
        assert_eq!(items.len(), 3);
        assert_eq!(
            items
                .iter()
                .map(|s| s["repositoryId"].as_i64().unwrap())
                .collect::<Vec<_>>(),
            vec![101, 102, 103]
        );
        assert_eq!(items[1]["shiritoriCount"], json!(2));
        assert_eq!(items[1]["currentWord"], json!("list"));
        assert_eq!(items[1]["mergedOn"], json!("2025-07-12T11:45:00Z"));
    }
}

/// Stalls every read well past the router deadline.
struct StalledStore;

#[async_trait]
impl RecordStore for StalledStore {
    async fn get_repository(&self, _id: i64) -> Result<Option<Repository>, PytoriError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(None)
    }

    async fn query_merged_commits(
        &self,
        _repository_id: i64,
    ) -> Result<Vec<Commit>, PytoriError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(Vec::new())
    }

    async fn list_all_repositories(&self) -> Result<Vec<Repository>, PytoriError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn slow_store_hits_request_timeout() {
    let aggregator = SummaryAggregator::new(Arc::new(StalledStore), 4);
    let app = pytori_router(PytoriState::new(aggregator), Duration::from_millis(10));

    for uri in ["/repo-summary", "/repo-summary?repository_id=101"] {
        let (status, _) = get(&app, uri).await;
        assert_eq!(status, StatusCode::REQUEST_TIMEOUT, "{uri}");
    }

    let (status, _) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn empty_store_returns_empty_array() {
    let aggregator = SummaryAggregator::new(Arc::new(MemoryStore::new()), 4);
    let app = pytori_router(PytoriState::new(aggregator), Duration::from_secs(5));

    let (status, body) = get(&app, "/repo-summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn health_fallback_and_request_id() {
    let app = app();

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"ok"}"#);

    let (status, _) = get(&app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(
        resp.headers().get("x-request-id").unwrap().to_str().unwrap(),
        "req-123"
    );

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    let generated = resp.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert_eq!(generated.len(), 16);
}

#[tokio::test]
async fn sqlite_backed_router_serves_scenario_a() {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();
    let path = std::env::temp_dir().join(format!(
        "pytori-route-{}-{nanos}.sqlite",
        std::process::id()
    ));
    let url = format!("sqlite:{}", path.display());

    let pool = pytori::db::connect(&url).await.unwrap();
    pytori::db::apply_schema(&pool).await.unwrap();
    sqlx::query("INSERT INTO pytori_repos (id, name, status) VALUES (101, 'team-a', 1)")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO pytori_commits (id, repository_id, current_word, review_comment, theme, is_merged, merged_on)
         VALUES (1, 101, 'ぬいぐるみ', 'ちょーすごい', '春', 1, '2025-07-10T15:20:00Z')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let db = pytori::db::spawn(&url).await.unwrap();
    let app = pytori_router(
        PytoriState::new(SummaryAggregator::new(Arc::new(db), 4)),
        Duration::from_secs(5),
    );

    let (status, body) = get(&app, "/repo-summary?repository_id=101").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, SCENARIO_A);

    let (status, body) = get(&app, "/repo-summary?repository_id=999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"error":"Repository not found"}"#);

    pool.close().await;
    for suffix in ["-wal", "-shm", ""] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
}
