#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `JsonFileRecordRepository`.

use certimate_app::adapters::JsonFileRecordRepository;
use certimate_core::error::CoreError;
use certimate_core::traits::RecordRepository;
use certimate_core::types::{ConfigMap, RecordFilter, RecordKind, RecordPayload, Reserve};
use serde_json::json;

fn payload(name: &str, provider: &str) -> RecordPayload {
    RecordPayload {
        name: name.to_string(),
        provider: provider.to_string(),
        access_id: None,
        reserve: None,
        config: ConfigMap::new(),
    }
}

#[tokio::test]
async fn missing_file_is_empty_store() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let store = JsonFileRecordRepository::open(tmp.path().join("records.json"))
        .await
        .expect("open failed");

    let records = store.list(RecordKind::Access, None).await.unwrap();
    assert!(records.is_empty());
    assert!(!store.path().exists());
}

#[tokio::test]
async fn records_survive_reopen() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("nested").join("records.json");

    let created = {
        let store = JsonFileRecordRepository::open(&path).await.unwrap();
        let mut p = payload("ca", "letsencrypt");
        p.reserve = Some(Reserve::Ca);
        p.config = json!({ "email": "ops@example.com" })
            .as_object()
            .cloned()
            .unwrap();
        store.create(RecordKind::Access, &p).await.unwrap()
    };
    assert!(path.exists());

    let store = JsonFileRecordRepository::open(&path).await.unwrap();
    let records = store.list(RecordKind::Access, None).await.unwrap();
    assert_eq!(records, vec![created]);
}

#[tokio::test]
async fn update_keeps_id_and_created_at() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let store = JsonFileRecordRepository::open(tmp.path().join("records.json"))
        .await
        .unwrap();

    let created = store
        .create(RecordKind::Notify, &payload("alerts", "email"))
        .await
        .unwrap();
    let updated = store
        .update(RecordKind::Notify, &created.id, &payload("alerts v2", "email"))
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.name, "alerts v2");
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn update_unknown_id_fails() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let store = JsonFileRecordRepository::open(tmp.path().join("records.json"))
        .await
        .unwrap();

    let result = store
        .update(RecordKind::Deploy, "nope", &payload("x", "ssh"))
        .await;
    assert!(matches!(result, Err(CoreError::RecordNotFound(_))));
    assert!(!store.path().exists());
}

#[tokio::test]
async fn list_applies_filter() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let store = JsonFileRecordRepository::open(tmp.path().join("records.json"))
        .await
        .unwrap();

    for (name, provider) in [("a", "aliyun"), ("b", "cloudflare"), ("c", "aliyun")] {
        store
            .create(RecordKind::Access, &payload(name, provider))
            .await
            .unwrap();
    }

    let aliyun = store
        .list(RecordKind::Access, Some(&RecordFilter::provider("aliyun")))
        .await
        .unwrap();
    let names: Vec<_> = aliyun.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["a", "c"]);
}

#[tokio::test]
async fn corrupt_file_is_rejected() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("records.json");
    std::fs::write(&path, "not json").unwrap();

    let result = JsonFileRecordRepository::open(&path).await;
    assert!(matches!(result, Err(CoreError::SerializationError(_))));
}

#[tokio::test]
async fn newer_store_version_is_rejected() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("records.json");
    std::fs::write(&path, r#"{ "version": 99, "records": [] }"#).unwrap();

    let result = JsonFileRecordRepository::open(&path).await;
    assert!(matches!(result, Err(CoreError::StorageError(_))));
}
