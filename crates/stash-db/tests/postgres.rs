//! Live-database tests. They need a reachable Postgres configured through the
//! usual `DATABASE_*` variables:
//!
//!     cargo test -p stash-db -- --ignored

use std::collections::HashSet;

use stash_db::{Database, DbConfig, Store};

fn database() -> Database {
    Database::new(DbConfig::from_env())
}

/// Unique per test run so reruns against the same database don't collide.
fn unique(label: &str) -> String {
    format!("{}-{}", label, chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn stored_file_bytes_round_trip_by_filename() {
    let db = database();
    let filename = format!("{}.bin", unique("upload"));
    let contents: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();

    let id = db.store_file(&filename, &contents).await.unwrap();
    let stored = db.fetch_file(&filename).await.unwrap().expect("row exists");

    assert_eq!(stored.id, id);
    assert_eq!(stored.filename, filename);
    assert_eq!(stored.contents, contents);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn message_listing_grows_by_one_per_post() {
    let db = database();
    let before = db.list_messages().await.unwrap().len();

    let text = unique("hello");
    let listed = db.store_message(&text).await.unwrap();

    assert_eq!(listed.len(), before + 1);
    assert!(listed.iter().any(|m| m.content == text));

    let ids: Vec<i32> = listed.iter().map(|m| m.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn schema_assertion_is_repeatable() {
    let db = database();
    for _ in 0..5 {
        db.store_message("repeat").await.unwrap();
        db.store_file(&unique("repeat"), b"x").await.unwrap();
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn concurrent_posts_lose_no_writes() {
    let db = database();
    let texts: Vec<String> = (0..8).map(|i| unique(&format!("concurrent-{}", i))).collect();

    let handles: Vec<_> = texts
        .iter()
        .cloned()
        .map(|text| {
            let db = db.clone();
            tokio::spawn(async move { db.store_message(&text).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stored: HashSet<String> = db
        .list_messages()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.content)
        .collect();
    for text in &texts {
        assert!(stored.contains(text), "missing {}", text);
    }
}

#[tokio::test]
async fn unreachable_database_reports_connect_error() {
    let db = Database::new(DbConfig {
        host: "127.0.0.1".into(),
        port: 1,
        ..DbConfig::default()
    });

    let err = db.store_message("never stored").await.unwrap_err();
    assert!(matches!(err, stash_db::DbError::Connect { port: 1, .. }));
}
