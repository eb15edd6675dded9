use super::*;

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggled_is_an_involution() {
    for theme in Theme::ALL {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn parses_only_exact_lowercase_names() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!(
        "Dark".parse::<Theme>(),
        Err(ParseThemeError("Dark".to_owned()))
    );
    assert!("blue".parse::<Theme>().is_err());
    assert!("".parse::<Theme>().is_err());
    assert!(" dark".parse::<Theme>().is_err());
}

#[test]
fn display_matches_attribute_string() {
    assert_eq!(Theme::Light.to_string(), "light");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn serde_uses_lowercase_strings() {
    assert_eq!(serde_json::to_string(&Theme::Dark).expect("serialize"), "\"dark\"");
    let parsed: Theme = serde_json::from_str("\"light\"").expect("deserialize");
    assert_eq!(parsed, Theme::Light);
    assert!(serde_json::from_str::<Theme>("\"sepia\"").is_err());
}

#[test]
fn prefers_dark_maps_to_theme() {
    assert_eq!(Theme::from_prefers_dark(true), Theme::Dark);
    assert_eq!(Theme::from_prefers_dark(false), Theme::Light);
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}
