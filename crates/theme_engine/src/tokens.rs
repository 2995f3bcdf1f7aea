//! Static design tokens shared with the companion mobile app.

pub const SPACING: [(&str, u16); 7] = [
    ("xs", 4),
    ("s", 8),
    ("sm", 12),
    ("m", 16),
    ("l", 24),
    ("xl", 32),
    ("xxl", 48),
];

pub const BORDER_RADIUS: [(&str, u16); 3] = [("sm", 8), ("m", 12), ("l", 20)];

pub const FONT_SIZES: [(&str, u16); 6] = [
    ("xs", 12),
    ("sm", 14),
    ("md", 16),
    ("lg", 20),
    ("xl", 24),
    ("xxl", 28),
];

pub const FONT_WEIGHTS: [(&str, &str); 4] = [
    ("regular", "400"),
    ("medium", "500"),
    ("semibold", "600"),
    ("bold", "700"),
];

/// Mode-independent custom properties, written once when the theme mounts.
pub fn design_token_properties() -> Vec<(String, String)> {
    let px = |prefix: &str, scale: &[(&str, u16)]| {
        scale
            .iter()
            .map(|(name, value)| (format!("--{prefix}-{name}"), format!("{value}px")))
            .collect::<Vec<_>>()
    };

    let mut properties = px("space", &SPACING);
    properties.extend(px("radius", &BORDER_RADIUS));
    properties.extend(px("font-size", &FONT_SIZES));
    properties.extend(
        FONT_WEIGHTS
            .iter()
            .map(|(name, weight)| (format!("--font-weight-{name}"), weight.to_string())),
    );
    properties
}
