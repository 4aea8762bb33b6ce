// ABOUTME: Integration tests for settings and category storage
// ABOUTME: Defaults, round trips, legacy field handling and the full save flow

use blogroll_settings::{SettingsRecord, SettingsSubmission, LINK_CATEGORY};
use blogroll_storage::{
    open, open_in_memory, CategoryStorage, SettingsService, SettingsStorage, StorageError,
};
use pretty_assertions::assert_eq;
use serde_json::json;

const KEY: &str = "opml_blogroll_settings";

fn sample_record() -> SettingsRecord {
    SettingsRecord {
        url: "https://example.com/opml".to_string(),
        username: "reader".to_string(),
        password: "hunter2".to_string(),
        denylist: "spam.example\r\nads.example".to_string(),
        categories_enabled: true,
        default_category: Some(3),
    }
}

#[tokio::test]
async fn test_load_missing_option_returns_defaults() {
    let pool = open_in_memory().await.unwrap();
    let storage = SettingsStorage::new(pool);

    let loaded = storage.load(KEY).await.unwrap();

    assert_eq!(loaded.record, SettingsRecord::default());
    assert_eq!(loaded.legacy.blacklist, None);
}

#[tokio::test]
async fn test_save_then_load_round_trip() {
    let pool = open_in_memory().await.unwrap();
    let storage = SettingsStorage::new(pool);

    storage.save(KEY, &sample_record()).await.unwrap();
    assert_eq!(storage.load(KEY).await.unwrap().record, sample_record());

    let updated = SettingsRecord {
        url: String::new(),
        ..sample_record()
    };
    storage.save(KEY, &updated).await.unwrap();
    assert_eq!(storage.load(KEY).await.unwrap().record, updated);
}

#[tokio::test]
async fn test_options_are_isolated_by_key() {
    let pool = open_in_memory().await.unwrap();
    let storage = SettingsStorage::new(pool);

    storage.save(KEY, &sample_record()).await.unwrap();

    let other = storage.load("another_option").await.unwrap();
    assert_eq!(other.record, SettingsRecord::default());
}

#[tokio::test]
async fn test_partial_document_fills_defaults() {
    let pool = open_in_memory().await.unwrap();
    let storage = SettingsStorage::new(pool);

    storage
        .save_raw(KEY, &json!({ "url": "https://example.com/opml", "default_category": "4" }))
        .await
        .unwrap();

    let loaded = storage.load(KEY).await.unwrap();
    assert_eq!(
        loaded.record,
        SettingsRecord {
            url: "https://example.com/opml".to_string(),
            default_category: Some(4),
            ..SettingsRecord::default()
        }
    );
}

#[tokio::test]
async fn test_legacy_blacklist_is_read_but_never_written() {
    let pool = open_in_memory().await.unwrap();
    let storage = SettingsStorage::new(pool);

    storage
        .save_raw(KEY, &json!({ "url": "", "blacklist": "legacy.example" }))
        .await
        .unwrap();

    let loaded = storage.load(KEY).await.unwrap();
    assert_eq!(loaded.legacy.blacklist.as_deref(), Some("legacy.example"));
    assert_eq!(loaded.record.denylist, "");

    storage.save(KEY, &loaded.record).await.unwrap();

    let reloaded = storage.load(KEY).await.unwrap();
    assert_eq!(reloaded.legacy.blacklist, None);
}

#[tokio::test]
async fn test_corrupt_document_surfaces_error() {
    let pool = open_in_memory().await.unwrap();
    let storage = SettingsStorage::new(pool);

    storage
        .save_raw(KEY, &json!({ "categories_enabled": "yes" }))
        .await
        .unwrap();

    assert!(matches!(storage.load(KEY).await, Err(StorageError::Json(_))));
}

#[tokio::test]
async fn test_categories_create_list_and_exists() {
    let pool = open_in_memory().await.unwrap();
    let categories = CategoryStorage::new(pool);

    let news = categories.create("News", LINK_CATEGORY).await.unwrap();
    let blogs = categories.create("  blogs ", LINK_CATEGORY).await.unwrap();
    categories.create("Elsewhere", "post_tag").await.unwrap();

    assert_eq!(blogs.name, "blogs");

    let listed = categories.list_all(LINK_CATEGORY).await.unwrap();
    let names: Vec<&str> = listed.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["blogs", "News"]);

    assert_eq!(
        categories.exists(news.id, LINK_CATEGORY).await.unwrap(),
        Some(news.clone())
    );
    assert_eq!(categories.exists(news.id, "post_tag").await.unwrap(), None);
    assert_eq!(categories.exists(9999, LINK_CATEGORY).await.unwrap(), None);
}

#[tokio::test]
async fn test_category_validation() {
    let pool = open_in_memory().await.unwrap();
    let categories = CategoryStorage::new(pool);

    assert!(matches!(
        categories.create("   ", LINK_CATEGORY).await,
        Err(StorageError::Validation(_))
    ));

    categories.create("News", LINK_CATEGORY).await.unwrap();
    assert!(matches!(
        categories.create("News", LINK_CATEGORY).await,
        Err(StorageError::Duplicate(_))
    ));
    assert!(categories.create("News", "post_tag").await.is_ok());
}

#[tokio::test]
async fn test_service_submit_flow() {
    let pool = open_in_memory().await.unwrap();
    let friends = CategoryStorage::new(pool.clone())
        .create("Friends", LINK_CATEGORY)
        .await
        .unwrap();
    let service = SettingsService::new(pool, KEY);

    let submission = SettingsSubmission::from_pairs([
        ("url", "https://example.org/feed.opml".to_string()),
        ("username", "reader".to_string()),
        ("password", "secret".to_string()),
        ("denylist", "foo\nbar".to_string()),
        ("categories_enabled", "1".to_string()),
        ("default_category", friends.id.to_string()),
    ]);

    let outcome = service.submit(&submission, false).await.unwrap();

    assert_eq!(outcome.previous, SettingsRecord::default());
    assert_eq!(
        outcome.saved,
        SettingsRecord {
            url: "https://example.org/feed.opml".to_string(),
            username: "reader".to_string(),
            password: "secret".to_string(),
            denylist: "foo\r\nbar".to_string(),
            categories_enabled: true,
            default_category: Some(friends.id),
        }
    );
    assert_eq!(outcome.changed_fields().len(), 6);
    assert_eq!(service.load().await.unwrap().record, outcome.saved);
}

#[tokio::test]
async fn test_service_submit_degrades_bad_values() {
    let pool = open_in_memory().await.unwrap();
    let service = SettingsService::new(pool.clone(), KEY);
    SettingsStorage::new(pool)
        .save(KEY, &sample_record())
        .await
        .unwrap();

    let submission = SettingsSubmission::from_pairs([
        ("url", "not a url"),
        ("default_category", "9999"),
        ("password", "ignored"),
    ]);

    let outcome = service.submit(&submission, true).await.unwrap();

    assert_eq!(outcome.saved.url, "https://example.com/opml");
    assert_eq!(outcome.saved.default_category, None);
    assert_eq!(outcome.saved.password, "");
    assert!(!outcome.saved.categories_enabled);
    assert_eq!(outcome.saved.denylist, sample_record().denylist);
}

#[tokio::test]
async fn test_service_import() {
    let pool = open_in_memory().await.unwrap();
    let service = SettingsService::new(pool, KEY);

    let outcome = service
        .import(
            &json!({
                "url": "https://example.com/opml",
                "blacklist": "legacy.example",
                "categories_enabled": true
            }),
            false,
        )
        .await
        .unwrap();

    assert_eq!(outcome.saved.url, "https://example.com/opml");
    assert!(outcome.saved.categories_enabled);

    let loaded = service.load().await.unwrap();
    assert_eq!(loaded.record, outcome.saved);
    assert_eq!(loaded.legacy.blacklist.as_deref(), Some("legacy.example"));

    assert!(matches!(
        service.import(&json!(["not", "an", "object"]), false).await,
        Err(StorageError::Validation(_))
    ));
    assert!(matches!(
        service.import(&json!({ "categories_enabled": "yes" }), false).await,
        Err(StorageError::Json(_))
    ));
    assert_eq!(service.load().await.unwrap().record, outcome.saved);
}

#[tokio::test]
async fn test_service_import_sanitizes_document() {
    let pool = open_in_memory().await.unwrap();
    SettingsStorage::new(pool.clone())
        .save(KEY, &sample_record())
        .await
        .unwrap();
    let service = SettingsService::new(pool, KEY);

    let outcome = service
        .import(
            &json!({
                "url": "not a url",
                "password": "leaked",
                "denylist": "  a\nb  ",
                "default_category": 424242
            }),
            true,
        )
        .await
        .unwrap();

    let expected = SettingsRecord {
        url: "https://example.com/opml".to_string(),
        username: "reader".to_string(),
        password: String::new(),
        denylist: "a\r\nb".to_string(),
        categories_enabled: false,
        default_category: None,
    };
    assert_eq!(outcome.saved, expected);
    assert_eq!(service.load().await.unwrap().record, expected);
}

#[tokio::test]
async fn test_service_import_resolves_existing_category() {
    let pool = open_in_memory().await.unwrap();
    let friends = CategoryStorage::new(pool.clone())
        .create("Friends", LINK_CATEGORY)
        .await
        .unwrap();
    let service = SettingsService::new(pool, KEY);

    let outcome = service
        .import(
            &json!({
                "url": "HTTPS://Example.COM",
                "password": "secret",
                "default_category": friends.id.to_string()
            }),
            false,
        )
        .await
        .unwrap();

    assert_eq!(outcome.saved.url, "https://example.com/");
    assert_eq!(outcome.saved.password, "secret");
    assert_eq!(outcome.saved.default_category, Some(friends.id));
}

#[tokio::test]
async fn test_open_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("blogroll.db");

    {
        let pool = open(&path).await.unwrap();
        SettingsStorage::new(pool.clone())
            .save(KEY, &sample_record())
            .await
            .unwrap();
        pool.close().await;
    }

    assert!(path.exists());

    let pool = open(&path).await.unwrap();
    let loaded = SettingsStorage::new(pool).load(KEY).await.unwrap();
    assert_eq!(loaded.record, sample_record());
}
