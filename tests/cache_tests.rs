//! Integration tests for the `FontCache` facade.

mod common;

use privfont::{
    ConfigError, FontCache, FontError, FontStyle, FontsConfig, InvalidFontPolicy, RegistryState,
    StaticFontProvider,
};
use privfont_fonts::testing;

#[test]
fn test_add_contains_get_dispose() {
    let cache = FontCache::new();
    cache.add("Brand", &testing::regular_font("Roboto")).unwrap();
    cache.add("Brand", &testing::bold_font("Roboto")).unwrap();
    assert!(cache.contains("Brand"));

    let bold = cache
        .get_font("Brand", 12.0, FontStyle::BOLD)
        .unwrap()
        .expect("bold should resolve");
    assert_eq!(bold.family(), "Roboto");
    assert_eq!(bold.weight(), 700);
    assert_eq!(bold.size(), 12.0);

    assert!(
        cache
            .get_font("Brand", 12.0, FontStyle::ITALIC)
            .unwrap()
            .is_none()
    );

    cache.dispose_all();
    assert!(!cache.contains("Brand"));
    assert_eq!(cache.registry().state(), RegistryState::Empty);
}

#[test]
fn test_caller_fallback_on_not_found() {
    let cache = FontCache::new();
    cache.add("Brand", &testing::regular_font("Roboto")).unwrap();
    cache.add("Fallback", &testing::italic_font("System")).unwrap();

    let font = cache
        .get_font("Brand", 12.0, FontStyle::ITALIC)
        .unwrap()
        .or_else(|| {
            cache
                .get_font("Fallback", 12.0, FontStyle::ITALIC)
                .ok()
                .flatten()
        })
        .expect("fallback should resolve");
    assert_eq!(font.family(), "System");
}

#[test]
fn test_default_size_from_config() {
    let cache = FontCache::with_config(FontsConfig {
        default_font_size: 15.0,
        ..FontsConfig::default()
    })
    .unwrap();
    cache.add("Ui", &testing::regular_font("Sans")).unwrap();

    let font = cache
        .get_default_size_font("Ui", FontStyle::REGULAR)
        .unwrap()
        .unwrap();
    assert_eq!(font.size(), 15.0);
}

#[test]
fn test_invalid_policy_through_facade() {
    let strict = FontCache::new();
    assert!(matches!(
        strict.add("Bad", b"not a font"),
        Err(FontError::InvalidFontData { .. })
    ));

    let lenient = FontCache::with_config(FontsConfig {
        invalid_font_policy: InvalidFontPolicy::Ignore,
        ..FontsConfig::default()
    })
    .unwrap();
    assert!(lenient.add("Bad", b"not a font").is_ok());
    assert!(lenient.contains("Bad"));
}

#[test]
fn test_re_add_after_dispose() {
    let cache = FontCache::new();
    cache.add("Brand", &testing::bold_font("Roboto")).unwrap();
    cache.dispose_all();

    cache.add("Brand", &testing::regular_font("Roboto")).unwrap();
    assert!(cache.contains("Brand"));
    assert!(
        cache
            .get_font("Brand", 12.0, FontStyle::BOLD)
            .unwrap()
            .is_none(),
        "bold face from before disposal must not survive"
    );
    assert!(
        cache
            .get_font("Brand", 12.0, FontStyle::REGULAR)
            .unwrap()
            .is_some()
    );
}

#[test]
fn test_load_from_collects_failures() {
    static JUNK: &[u8] = b"definitely not a font";
    let regular: &'static [u8] = testing::regular_font("Roboto").leak();
    let bold: &'static [u8] = testing::bold_font("Roboto").leak();
    let entries: &'static [(&'static str, &'static [u8])] =
        Vec::leak(vec![("Brand", regular), ("Junk", JUNK), ("Brand", bold)]);

    let cache = FontCache::new();
    let report = cache.load_from(&StaticFontProvider::new(entries)).unwrap();

    assert_eq!(report.loaded, 2);
    assert!(!report.is_complete());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].0, "Junk");
    assert!(cache.contains("Junk"));
    assert!(
        cache
            .get_font("Brand", 10.0, FontStyle::BOLD)
            .unwrap()
            .is_some()
    );
}

#[test]
fn test_with_config_validates() {
    let err = FontCache::with_config(FontsConfig {
        default_font_size: f32::NAN,
        ..FontsConfig::default()
    })
    .unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));

    let err = FontCache::with_config(FontsConfig {
        max_font_bytes: 0,
        ..FontsConfig::default()
    })
    .unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}
