#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `AppStateBuilder` and the edit surfaces it hands out.

use std::sync::{Arc, Mutex};

use certimate_app::adapters::MemoryRecordRepository;
use certimate_app::{AppConfig, AppStateBuilder};
use certimate_core::error::CoreError;
use certimate_core::i18n::Language;
use certimate_core::services::{SurfaceProps, SurfaceState};
use certimate_core::traits::{Notice, NoticeLevel, Notifier};
use certimate_core::types::{RecordKind, UsageFilter};
use serde_json::json;

/// Notifier that keeps every notice for assertions.
#[derive(Default)]
struct CollectingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl Notifier for CollectingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[test]
fn build_requires_repository() {
    let result = AppStateBuilder::new().build();
    assert!(matches!(result, Err(CoreError::InvalidState(_))));
}

#[test]
fn localizer_follows_config_language() {
    let config = AppConfig {
        language: Language::ZhCn,
        ..AppConfig::default()
    };
    let state = AppStateBuilder::new()
        .config(config)
        .repository(Arc::new(MemoryRecordRepository::new()))
        .build()
        .expect("build failed");

    let entries = state
        .catalog_service
        .entries(RecordKind::Access, Some(UsageFilter::Ca));
    assert!(!entries.is_empty());
    assert!(entries.iter().all(|e| UsageFilter::Ca.matches(e.capabilities)));
    assert!(entries.iter().any(|e| e.key == "letsencrypt"));
    assert_eq!(state.config.language, Language::ZhCn);
}

#[tokio::test]
async fn access_surface_saves_into_repository() {
    let state = AppStateBuilder::new()
        .repository(Arc::new(MemoryRecordRepository::new()))
        .build()
        .expect("build failed");

    let surface = state.access_surface();
    surface
        .open(SurfaceProps::preset("gotify", Some(UsageFilter::Notification)))
        .await
        .expect("open failed");
    surface
        .edit(|form| {
            form.set_name("home gotify");
            form.set_config_field("url", json!("https://gotify.example.com"));
            form.set_config_field("token", json!("A1b2C3"));
        })
        .await
        .expect("edit failed");

    let saved = surface.save().await.expect("save failed");
    assert_eq!(saved.provider, "gotify");
    assert_eq!(saved.config["url"], "https://gotify.example.com");
    assert_eq!(surface.state(), SurfaceState::Closed);

    let listed = state
        .record_service
        .list(RecordKind::Access, None)
        .await
        .expect("list failed");
    assert_eq!(listed, vec![saved]);
}

#[tokio::test]
async fn failed_validation_does_not_notify() {
    let notifier = Arc::new(CollectingNotifier::default());
    let state = AppStateBuilder::new()
        .repository(Arc::new(MemoryRecordRepository::new()))
        .notifier(notifier.clone())
        .build()
        .expect("build failed");

    let surface = state.access_surface();
    surface
        .open(SurfaceProps::preset("gotify", None))
        .await
        .expect("open failed");

    let result = surface.save().await;
    assert!(matches!(result, Err(CoreError::ValidationFailed(_))));
    assert_eq!(surface.state(), SurfaceState::Open);
    assert!(notifier.notices.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_record_update_is_reported() {
    let notifier = Arc::new(CollectingNotifier::default());
    let state = AppStateBuilder::new()
        .repository(Arc::new(MemoryRecordRepository::new()))
        .notifier(notifier.clone())
        .build()
        .expect("build failed");

    let mut ghost = certimate_core::types::PersistedRecord::create(
        RecordKind::Access,
        &certimate_core::types::RecordPayload {
            name: "ghost".to_string(),
            provider: "gotify".to_string(),
            access_id: None,
            reserve: None,
            config: json!({ "url": "https://gotify.example.com", "token": "t" })
                .as_object()
                .cloned()
                .unwrap(),
        },
    );
    ghost.id = "missing".to_string();

    let surface = state.access_surface();
    surface
        .open(SurfaceProps::edit(ghost))
        .await
        .expect("open failed");
    let result = surface.save().await;
    assert!(matches!(result, Err(CoreError::RecordNotFound(ref id)) if id == "missing"));
    assert_eq!(surface.state(), SurfaceState::Open);

    let notices = notifier.notices.lock().unwrap();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
}

#[cfg(feature = "all-kinds")]
#[tokio::test]
async fn deploy_surface_links_access_record() {
    let state = AppStateBuilder::new()
        .repository(Arc::new(MemoryRecordRepository::new()))
        .build()
        .expect("build failed");

    let access_surface = state.access_surface();
    access_surface
        .open(SurfaceProps::preset("aliyun", None))
        .await
        .expect("open failed");
    access_surface
        .edit(|form| {
            form.set_name("aliyun main");
            form.set_config_field("accessKeyId", json!("LTAI-test"));
            form.set_config_field("accessKeySecret", json!("secret"));
        })
        .await
        .expect("edit failed");
    let access = access_surface.save().await.expect("save access failed");

    let deploy_surface = state.deploy_surface();
    deploy_surface
        .open(SurfaceProps::preset("aliyun-cdn", None))
        .await
        .expect("open failed");
    let accesses = state
        .record_service
        .list_accesses_for(
            deploy_surface
                .edit(|form| form.provider())
                .await
                .expect("edit failed")
                .expect("provider mounted"),
        )
        .await
        .expect("list failed");
    assert_eq!(accesses, vec![access]);
}
