use shared::domain::DisplayMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleToken {
    Primary,
    BackgroundDark,
    Background,
    BackgroundElevated,
    Text,
    TextMuted,
    Border,
    Success,
    Danger,
    Warning,
}

impl StyleToken {
    pub const ALL: [StyleToken; 10] = [
        StyleToken::Primary,
        StyleToken::BackgroundDark,
        StyleToken::Background,
        StyleToken::BackgroundElevated,
        StyleToken::Text,
        StyleToken::TextMuted,
        StyleToken::Border,
        StyleToken::Success,
        StyleToken::Danger,
        StyleToken::Warning,
    ];

    /// Custom property written on the document root.
    pub fn css_variable(self) -> &'static str {
        match self {
            Self::Primary => "--color-primary",
            Self::BackgroundDark => "--color-bg-dark",
            Self::Background => "--color-bg",
            Self::BackgroundElevated => "--color-bg-light",
            Self::Text => "--color-text",
            Self::TextMuted => "--color-text-muted",
            Self::Border => "--color-border",
            Self::Success => "--color-success",
            Self::Danger => "--color-danger",
            Self::Warning => "--color-warning",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Color value for every [`StyleToken`], in [`StyleToken::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleVariableSet {
    mode: DisplayMode,
    values: [&'static str; 10],
}

impl StyleVariableSet {
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn get(&self, token: StyleToken) -> &'static str {
        self.values[token.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleToken, &'static str)> + '_ {
        StyleToken::ALL
            .into_iter()
            .map(move |token| (token, self.get(token)))
    }
}

// iOS system palette for light, green-accented charcoal for dark.
const LIGHT: StyleVariableSet = StyleVariableSet {
    mode: DisplayMode::Light,
    values: [
        "#007AFF",
        "#F2F2F7",
        "#FFFFFF",
        "#FFFFFF",
        "#000000",
        "#6C6C70",
        "rgba(0, 0, 0, 0.1)",
        "#34C759",
        "#FF3B30",
        "#FFCC00",
    ],
};

const DARK: StyleVariableSet = StyleVariableSet {
    mode: DisplayMode::Dark,
    values: [
        "#65D984",
        "#1C1C1E",
        "#2C2C2E",
        "#3A3A3C",
        "#F2F2F7",
        "#AEAEB2",
        "rgba(255, 255, 255, 0.1)",
        "#32D74B",
        "#FF453A",
        "#FFD60A",
    ],
};

pub fn derive_style_variable_set(mode: DisplayMode) -> StyleVariableSet {
    match mode {
        DisplayMode::Light => LIGHT,
        DisplayMode::Dark => DARK,
    }
}

#[cfg(test)]
#[path = "tests/palette_tests.rs"]
mod tests;
