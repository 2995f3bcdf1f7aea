use std::sync::Arc;

use shared::domain::{DisplayMode, THEME_PREFERENCE_KEY};
use storage::PreferenceStore;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::{
    palette::{derive_style_variable_set, StyleVariableSet},
    surface::StyleSurface,
    tokens::design_token_properties,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Persistence {
    Durable,
    MemoryOnly,
}

/// Single writer of the display mode for one application session.
pub struct ThemeController<S: StyleSurface> {
    mode: DisplayMode,
    store: Arc<dyn PreferenceStore>,
    persistence: Persistence,
    surface: S,
    mounted: bool,
    mode_tx: watch::Sender<DisplayMode>,
}

impl<S: StyleSurface> ThemeController<S> {
    /// Loads the persisted mode. Nothing is written to the surface until [`mount`](Self::mount).
    pub async fn initialize(store: Arc<dyn PreferenceStore>, surface: S) -> Self {
        let mut persistence = Persistence::Durable;
        let mode = match store.get(THEME_PREFERENCE_KEY).await {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|error| {
                warn!(%error, "ignoring persisted display mode");
                DisplayMode::default()
            }),
            Ok(None) => DisplayMode::default(),
            Err(error) => {
                warn!(%error, "preference storage unavailable; theme stays in memory");
                persistence = Persistence::MemoryOnly;
                DisplayMode::default()
            }
        };

        let (mode_tx, _) = watch::channel(mode);
        Self {
            mode,
            store,
            persistence,
            surface,
            mounted: false,
            mode_tx,
        }
    }

    /// Applies the current mode to the surface and persists it.
    pub async fn mount(&mut self) {
        if !self.mounted {
            for (name, value) in design_token_properties() {
                self.surface.set_property(&name, &value);
            }
            self.mounted = true;
        }
        self.apply();
        self.persist().await;
    }

    pub fn current_mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn current_style(&self) -> StyleVariableSet {
        derive_style_variable_set(self.mode)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_persistent(&self) -> bool {
        self.persistence == Persistence::Durable
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Read-only handle for consumers that render from the mode.
    pub fn subscribe(&self) -> watch::Receiver<DisplayMode> {
        self.mode_tx.subscribe()
    }

    /// Flips light/dark, restyles the surface and persists the new mode.
    pub async fn toggle(&mut self) -> DisplayMode {
        self.mode = self.mode.toggled();
        self.apply();
        self.mode_tx.send_replace(self.mode);
        self.persist().await;
        debug!(mode = %self.mode, "display mode toggled");
        self.mode
    }

    fn apply(&mut self) {
        for (token, value) in derive_style_variable_set(self.mode).iter() {
            self.surface.set_property(token.css_variable(), value);
        }
        for mode in DisplayMode::ALL {
            self.surface.remove_class(mode.as_str());
        }
        self.surface.add_class(self.mode.as_str());
    }

    async fn persist(&mut self) {
        if self.persistence == Persistence::MemoryOnly {
            return;
        }

        if let Err(error) = self.store.set(THEME_PREFERENCE_KEY, self.mode.as_str()).await {
            warn!(%error, mode = %self.mode, "failed to persist display mode; theme stays in memory");
            self.persistence = Persistence::MemoryOnly;
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
