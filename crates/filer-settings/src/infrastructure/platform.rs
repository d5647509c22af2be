//! A fixed-answer [`PlatformProbe`].
//!
//! Desktop integrations that already know the answers (or tests) construct a
//! `StaticPlatform` instead of querying the desktop at store creation.

use filer_settings_core::FontSpec;

use crate::application::platform::PlatformProbe;

#[derive(Debug, Clone, PartialEq)]
pub struct StaticPlatform {
    pub supports_trash: bool,
    pub icon_theme: Option<String>,
    pub default_font: FontSpec,
}

impl StaticPlatform {
    pub fn new(supports_trash: bool, icon_theme: Option<String>, default_font: FontSpec) -> Self {
        Self {
            supports_trash,
            icon_theme,
            default_font,
        }
    }
}

/// Trash available, no icon theme, `Sans 10`.
impl Default for StaticPlatform {
    fn default() -> Self {
        Self::new(true, None, FontSpec::default())
    }
}

impl PlatformProbe for StaticPlatform {
    fn supports_trash(&self) -> bool {
        self.supports_trash
    }

    fn icon_theme_name(&self) -> Option<String> {
        self.icon_theme.clone()
    }

    fn default_font(&self) -> FontSpec {
        self.default_font.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_answers() {
        let platform = StaticPlatform::default();

        assert!(platform.supports_trash());
        assert_eq!(platform.icon_theme_name(), None);
        assert_eq!(platform.default_font(), FontSpec::default());
    }

    #[test]
    fn test_configured_answers_are_returned() {
        let font = FontSpec::new("Inter", 10.5);
        let platform = StaticPlatform::new(false, Some("Adwaita".to_string()), font.clone());

        assert!(!platform.supports_trash());
        assert_eq!(platform.icon_theme_name().as_deref(), Some("Adwaita"));
        assert_eq!(platform.default_font(), font);
    }
}
