//! Light/dark theme state for the studio site.
//!
//! [`ThemeController`] owns the active [`DisplayMode`](shared::domain::DisplayMode),
//! derives its [`StyleVariableSet`] and pushes it onto a [`StyleSurface`]
//! (the document root). Consumers read the mode or subscribe to changes; only
//! the controller writes it.

mod controller;
mod palette;
mod surface;
mod toggle;
pub mod tokens;

pub use controller::ThemeController;
pub use palette::{derive_style_variable_set, StyleToken, StyleVariableSet};
pub use surface::{DocumentRoot, StyleSurface};
pub use toggle::{ThemeToggleView, ToggleIcon, TOGGLE_ACCESSIBLE_LABEL};
