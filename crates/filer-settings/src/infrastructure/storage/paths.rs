//! Settings file location.
//!
//! A profile's settings live at
//! `<config-root>/filer/<profile>/settings.conf`, where `<config-root>` is
//! `$XDG_CONFIG_HOME` or `~/.config`:
//!
//! ```text
//! ~/.config/filer/default/settings.conf
//! ~/.config/filer/work/settings.conf
//! ```
//!
//! Distributions can ship preset profiles under the system configuration
//! directories (`$XDG_CONFIG_DIRS`, `/etc/xdg` by default).  When loading,
//! a profile the user has never saved is looked up there; saving always
//! targets the user's own directory.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

use crate::application::store::StoreError;

/// Directory under each configuration root that holds Filer's profiles.
pub const APP_NAMESPACE: &str = "filer";
/// File name of the settings file inside a profile directory.
pub const SETTINGS_FILE_NAME: &str = "settings.conf";
/// Overrides the user configuration root.
pub const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
/// Colon-separated list of system configuration roots.
pub const XDG_CONFIG_DIRS: &str = "XDG_CONFIG_DIRS";
/// System configuration root used when `XDG_CONFIG_DIRS` is unset or empty.
pub const DEFAULT_SYSTEM_CONFIG_DIR: &str = "/etc/xdg";

/// Access to the process environment.
pub trait Environment: Send + Sync {
    /// Returns the value of `name`, or `None` if unset or not valid UTF-8.
    fn var(&self, name: &str) -> Option<String>;

    /// Returns the user's home directory.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// A fixed set of variables and home directory.
///
/// Lets tests and embedders resolve paths without touching the process
/// environment.
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment {
    vars: HashMap<String, String>,
    home: Option<PathBuf>,
}

impl FixedEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }
}

impl Environment for FixedEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }
}

/// Computes profile directories and settings file paths.
pub struct ProfileResolver {
    env: Box<dyn Environment>,
}

impl ProfileResolver {
    pub fn new(env: Box<dyn Environment>) -> Self {
        Self { env }
    }

    /// A resolver reading the real process environment.
    pub fn system() -> Self {
        Self::new(Box::new(SystemEnvironment))
    }

    /// The user configuration root: `$XDG_CONFIG_HOME` if set and non-empty,
    /// otherwise `<home>/.config`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NoConfigRoot`] when neither is available.
    pub fn config_root(&self) -> Result<PathBuf, StoreError> {
        if let Some(dir) = self.env.var(XDG_CONFIG_HOME).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        self.env
            .home_dir()
            .map(|home| home.join(".config"))
            .ok_or(StoreError::NoConfigRoot)
    }

    /// The system configuration roots in search order.
    pub fn system_config_dirs(&self) -> Vec<PathBuf> {
        let dirs: Vec<PathBuf> = self
            .env
            .var(XDG_CONFIG_DIRS)
            .unwrap_or_default()
            .split(':')
            .filter(|d| !d.is_empty())
            .map(PathBuf::from)
            .collect();
        if dirs.is_empty() {
            vec![PathBuf::from(DEFAULT_SYSTEM_CONFIG_DIR)]
        } else {
            dirs
        }
    }

    /// The directory holding `profile`.
    ///
    /// With `use_fallback`, a profile missing from the user root is searched
    /// for in the system roots; the first existing directory wins.  If none
    /// exists, the user directory is returned.
    ///
    /// # Errors
    ///
    /// [`StoreError::NoConfigRoot`] when no user root can be determined.
    pub fn profile_dir(&self, profile: &str, use_fallback: bool) -> Result<PathBuf, StoreError> {
        let user_dir = self.config_root()?.join(APP_NAMESPACE).join(profile);
        if !use_fallback || user_dir.exists() {
            return Ok(user_dir);
        }

        for root in self.system_config_dirs() {
            let candidate = root.join(APP_NAMESPACE).join(profile);
            if candidate.is_dir() {
                debug!("profile {profile:?} found in system dir {}", candidate.display());
                return Ok(candidate);
            }
        }
        Ok(user_dir)
    }

    /// The settings file of `profile`.  See [`profile_dir`](Self::profile_dir).
    pub fn settings_path(&self, profile: &str, use_fallback: bool) -> Result<PathBuf, StoreError> {
        Ok(self.profile_dir(profile, use_fallback)?.join(SETTINGS_FILE_NAME))
    }
}

impl Default for ProfileResolver {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_root(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("filer_paths_{tag}_{}", Uuid::new_v4()))
    }

    fn resolver(env: FixedEnvironment) -> ProfileResolver {
        ProfileResolver::new(Box::new(env))
    }

    #[test]
    fn test_config_root_prefers_xdg_config_home() {
        let r = resolver(
            FixedEnvironment::new()
                .with_var(XDG_CONFIG_HOME, "/xdg")
                .with_home("/home/ann"),
        );

        assert_eq!(r.config_root().unwrap(), PathBuf::from("/xdg"));
    }

    #[test]
    fn test_empty_xdg_config_home_falls_back_to_home() {
        let r = resolver(
            FixedEnvironment::new()
                .with_var(XDG_CONFIG_HOME, "")
                .with_home("/home/ann"),
        );

        assert_eq!(r.config_root().unwrap(), PathBuf::from("/home/ann/.config"));
    }

    #[test]
    fn test_no_home_and_no_override_is_an_error() {
        let r = resolver(FixedEnvironment::new());

        assert!(matches!(r.config_root(), Err(StoreError::NoConfigRoot)));
    }

    #[test]
    fn test_system_dirs_default_and_split() {
        assert_eq!(
            resolver(FixedEnvironment::new()).system_config_dirs(),
            vec![PathBuf::from("/etc/xdg")]
        );
        assert_eq!(
            resolver(FixedEnvironment::new().with_var(XDG_CONFIG_DIRS, "::")).system_config_dirs(),
            vec![PathBuf::from("/etc/xdg")]
        );
        assert_eq!(
            resolver(FixedEnvironment::new().with_var(XDG_CONFIG_DIRS, "/a::/b")).system_config_dirs(),
            vec![PathBuf::from("/a"), PathBuf::from("/b")]
        );
    }

    #[test]
    fn test_settings_path_layout() {
        let r = resolver(FixedEnvironment::new().with_home("/home/ann"));

        let path = r.settings_path("work", false).unwrap();

        assert_eq!(path, PathBuf::from("/home/ann/.config/filer/work/settings.conf"));
    }

    #[test]
    fn test_fallback_finds_first_existing_system_profile() {
        // Arrange
        let base = temp_root("fallback");
        let user = base.join("user");
        let sys_a = base.join("sys_a");
        let sys_b = base.join("sys_b");
        std::fs::create_dir_all(sys_b.join("filer").join("preset")).unwrap();
        let r = resolver(
            FixedEnvironment::new()
                .with_var(XDG_CONFIG_HOME, user.to_string_lossy())
                .with_var(
                    XDG_CONFIG_DIRS,
                    format!("{}:{}", sys_a.display(), sys_b.display()),
                ),
        );

        // Act
        let with_fallback = r.profile_dir("preset", true).unwrap();
        let without_fallback = r.profile_dir("preset", false).unwrap();

        // Assert
        assert_eq!(with_fallback, sys_b.join("filer").join("preset"));
        assert_eq!(without_fallback, user.join("filer").join("preset"));

        let _ = std::fs::remove_dir_all(&base);
    }

    #[test]
    fn test_existing_user_profile_wins_over_system() {
        let base = temp_root("user_wins");
        let user = base.join("user");
        let sys = base.join("sys");
        std::fs::create_dir_all(user.join("filer").join("default")).unwrap();
        std::fs::create_dir_all(sys.join("filer").join("default")).unwrap();
        let r = resolver(
            FixedEnvironment::new()
                .with_var(XDG_CONFIG_HOME, user.to_string_lossy())
                .with_var(XDG_CONFIG_DIRS, sys.to_string_lossy()),
        );

        assert_eq!(
            r.profile_dir("default", true).unwrap(),
            user.join("filer").join("default")
        );

        let _ = std::fs::remove_dir_all(&base);
    }

    #[test]
    fn test_fallback_without_any_match_returns_user_dir() {
        let base = temp_root("no_match");
        let r = resolver(
            FixedEnvironment::new()
                .with_var(XDG_CONFIG_HOME, base.join("user").to_string_lossy())
                .with_var(XDG_CONFIG_DIRS, base.join("sys").to_string_lossy()),
        );

        assert_eq!(
            r.profile_dir("ghost", true).unwrap(),
            base.join("user").join("filer").join("ghost")
        );
    }
}
