use std::sync::Arc;

use shared::domain::DisplayMode;
use storage::Storage;
use theme_engine::{
    derive_style_variable_set, DocumentRoot, StyleToken, ThemeController, ThemeToggleView,
    ToggleIcon,
};

#[tokio::test]
async fn toggled_mode_is_restored_by_next_session() {
    let temp_root = tempfile::tempdir().expect("temp dir");
    let database_url = format!(
        "sqlite://{}",
        temp_root
            .path()
            .join("site.db")
            .to_string_lossy()
            .replace('\\', "/")
    );

    {
        let storage = Arc::new(Storage::new(&database_url).await.expect("open"));
        let mut theme = ThemeController::initialize(storage.clone(), DocumentRoot::new()).await;
        theme.mount().await;
        assert_eq!(theme.current_mode(), DisplayMode::Light);
        assert_eq!(
            ThemeToggleView::for_mode(theme.current_mode()).highlighted,
            ToggleIcon::Sun
        );

        theme.toggle().await;
        storage.pool().close().await;
    }

    let storage = Arc::new(Storage::new(&database_url).await.expect("reopen"));
    let mut theme = ThemeController::initialize(storage, DocumentRoot::new()).await;
    assert_eq!(theme.current_mode(), DisplayMode::Dark);

    theme.mount().await;
    let root = theme.into_surface();
    let dark = derive_style_variable_set(DisplayMode::Dark);
    for token in StyleToken::ALL {
        assert_eq!(root.property(token.css_variable()), Some(dark.get(token)));
    }
    assert!(root.to_css().contains("  --color-primary: #65D984;\n"));

    let view = ThemeToggleView::for_mode(DisplayMode::Dark);
    assert_eq!(view.highlighted, ToggleIcon::Moon);
    assert!(view.track_filled && view.knob_shifted);
    assert_eq!(view.accessible_label, "Toggle theme");
}
