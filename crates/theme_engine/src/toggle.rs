use shared::domain::DisplayMode;

pub const TOGGLE_ACCESSIBLE_LABEL: &str = "Toggle theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Sun,
    Moon,
}

/// Visual state of the sun/moon switch for a given mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeToggleView {
    pub highlighted: ToggleIcon,
    pub track_filled: bool,
    pub knob_shifted: bool,
    pub accessible_label: &'static str,
}

impl ThemeToggleView {
    pub fn for_mode(mode: DisplayMode) -> Self {
        let dark = mode == DisplayMode::Dark;
        Self {
            highlighted: if dark { ToggleIcon::Moon } else { ToggleIcon::Sun },
            track_filled: dark,
            knob_shifted: dark,
            accessible_label: TOGGLE_ACCESSIBLE_LABEL,
        }
    }
}
