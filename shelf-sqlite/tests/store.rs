mod common;

use common::{COLLECTION, open};
use serde_json::json;
use shelf_core::ports::RemoteStore as _;

// Important:
// The reader and writer pools share one in-memory database, so the tests
// run on a multithreaded runtime like the rest of the sqlite suite.

#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn fresh_collection_is_absent() -> anyhow::Result<()> {
    let db = open().await?;

    assert!(!db.exists(COLLECTION).await?);
    assert_eq!(db.read(COLLECTION).await?, None);

    Ok(())
}

#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn writes_are_read_back_by_key() -> anyhow::Result<()> {
    let db = open().await?;

    db.write(COLLECTION, "b", json!({ "category": "clothing", "rating": 2 }))
        .await?;
    db.write(COLLECTION, "a", json!({ "category": "electronics", "rating": 5 }))
        .await?;
    db.write("other", "z", json!({ "category": "groceries" })).await?;

    assert!(db.exists(COLLECTION).await?);

    let documents = db.read(COLLECTION).await?.expect("collection exists");
    let keys: Vec<_> = documents.keys().cloned().collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(documents["a"], json!({ "category": "electronics", "rating": 5 }));

    Ok(())
}

#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn write_overwrites_the_whole_document() -> anyhow::Result<()> {
    let db = open().await?;

    db.write(COLLECTION, "a", json!({ "category": "clothing", "name": "Hat" }))
        .await?;
    db.write(COLLECTION, "a", json!({ "category": "clothing" })).await?;

    let documents = db.read(COLLECTION).await?.expect("collection exists");
    assert_eq!(documents["a"], json!({ "category": "clothing" }));

    Ok(())
}

#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn merge_touches_only_named_fields() -> anyhow::Result<()> {
    let db = open().await?;

    db.write(
        COLLECTION,
        "a",
        json!({ "category": "clothing", "rating": 4, "name": "Hat", "tags": { "sale": true } }),
    )
    .await?;
    db.merge(
        COLLECTION,
        "a",
        json!({ "rating": 2, "name": null, "tags": { "new": true } }),
    )
    .await?;

    let documents = db.read(COLLECTION).await?.expect("collection exists");
    assert_eq!(
        documents["a"],
        json!({ "category": "clothing", "rating": 2, "tags": { "new": true } })
    );

    Ok(())
}

#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn merge_creates_missing_documents() -> anyhow::Result<()> {
    let db = open().await?;

    db.merge(COLLECTION, "new", json!({ "category": "groceries", "rating": 1 }))
        .await?;

    assert!(db.exists(COLLECTION).await?);
    let documents = db.read(COLLECTION).await?.expect("collection exists");
    assert_eq!(documents["new"], json!({ "category": "groceries", "rating": 1 }));

    Ok(())
}

#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn deleting_the_last_document_removes_the_collection() -> anyhow::Result<()> {
    let db = open().await?;

    db.write(COLLECTION, "a", json!({ "category": "clothing" })).await?;
    db.delete(COLLECTION, "a").await?;
    // deleting a missing document is not an error
    db.delete(COLLECTION, "a").await?;

    assert!(!db.exists(COLLECTION).await?);
    assert_eq!(db.read(COLLECTION).await?, None);

    Ok(())
}
