use shared::domain::{DisplayMode, THEME_PREFERENCE_KEY};
use storage::{PreferenceStore, Storage};

#[tokio::test]
async fn theme_preference_survives_reopening_database_file() {
    let temp_root = tempfile::tempdir().expect("temp dir");
    let db_path = temp_root.path().join("nested").join("site.db");
    let database_url = format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"));

    {
        let storage = Storage::new(&database_url).await.expect("open");
        storage
            .set(THEME_PREFERENCE_KEY, DisplayMode::Dark.as_str())
            .await
            .expect("persist");
        storage.pool().close().await;
    }

    assert!(
        db_path.exists(),
        "database file should exist: {}",
        db_path.display()
    );

    let reopened = Storage::new(&database_url).await.expect("reopen");
    let stored = reopened
        .get(THEME_PREFERENCE_KEY)
        .await
        .expect("read")
        .expect("persisted value");
    assert_eq!(stored.parse::<DisplayMode>(), Ok(DisplayMode::Dark));
}
