//! Desktop services queried by the store.
//!
//! Whether the trash is available, which icon theme is active and what the
//! desktop's default font is are answered by other subsystems.  The store
//! only consumes the answers, through the [`PlatformProbe`] trait.

use filer_settings_core::FontSpec;

/// Icon theme that ships only generic icons; treated like "no theme".
pub const GENERIC_ICON_THEME: &str = "hicolor";

/// Platform-agnostic access to desktop services.
///
/// Implementations live in the infrastructure layer.
#[cfg_attr(test, mockall::automock)]
pub trait PlatformProbe: Send + Sync {
    /// Returns `true` if the desktop supports moving files to the trash.
    fn supports_trash(&self) -> bool;

    /// Returns the name of the active icon theme, if one is configured.
    fn icon_theme_name(&self) -> Option<String>;

    /// Returns the desktop's default UI font.
    fn default_font(&self) -> FontSpec;
}

/// Returns `true` if the icon theme is missing or only provides generic
/// icons, meaning the configured fallback theme should be used instead.
pub fn needs_fallback_icon_theme(theme: Option<&str>) -> bool {
    match theme.map(str::trim) {
        None | Some("") => true,
        Some(name) => name == GENERIC_ICON_THEME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_generic_theme_needs_fallback() {
        assert!(needs_fallback_icon_theme(None));
        assert!(needs_fallback_icon_theme(Some("")));
        assert!(needs_fallback_icon_theme(Some("hicolor")));
    }

    #[test]
    fn test_real_theme_does_not_need_fallback() {
        assert!(!needs_fallback_icon_theme(Some("Papirus")));
        assert!(!needs_fallback_icon_theme(Some("elementary")));
    }
}
