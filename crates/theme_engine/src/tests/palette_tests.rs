use super::*;

#[test]
fn every_mode_defines_all_ten_tokens() {
    for mode in DisplayMode::ALL {
        let set = derive_style_variable_set(mode);
        assert_eq!(set.mode(), mode);
        assert_eq!(set.iter().count(), 10);
        for (token, value) in set.iter() {
            assert!(!value.is_empty(), "{mode} leaves {token:?} empty");
        }
    }
}

#[test]
fn css_variable_names_are_unique() {
    let mut names: Vec<_> = StyleToken::ALL.iter().map(|t| t.css_variable()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), StyleToken::ALL.len());
}

#[test]
fn palettes_differ_per_mode() {
    let light = derive_style_variable_set(DisplayMode::Light);
    let dark = derive_style_variable_set(DisplayMode::Dark);

    assert_eq!(light.get(StyleToken::Primary), "#007AFF");
    assert_eq!(dark.get(StyleToken::Primary), "#65D984");
    assert_eq!(dark.get(StyleToken::BackgroundElevated), "#3A3A3C");
    assert_eq!(light.get(StyleToken::Border), "rgba(0, 0, 0, 0.1)");
    for token in StyleToken::ALL {
        assert_ne!(light.get(token), dark.get(token), "{token:?}");
    }
}
