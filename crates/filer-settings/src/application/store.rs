//! Settings store: profile tracking, load/save and side-effecting setters.
//!
//! # Load/save protocol
//!
//! ```text
//!  load("work")                            save(None)
//!     │                                       │
//!     ▼                                       ▼
//!  backend.settings_path("work", fallback)  backend.settings_path("work", no fallback)
//!     │                                       │
//!  backend.read ─► KeyFile::parse           backend.read (keeps unknown keys)
//!     │                                       │
//!  schema::read_settings ─► validate        schema::write_settings
//!     │                                       │
//!  publish side-channel values              backend.write (creates parent dirs)
//! ```
//!
//! A missing file or a missing key is never an error.  Only I/O failures on a
//! file that exists, or on the target of a save, are reported.

use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use filer_settings_core::{FontSpec, KeyFile};
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, info};

use super::events::{
    ChannelObserver, SettingChange, SettingValue, SettingsObserver, SideChannelKey,
};
use super::platform::{needs_fallback_icon_theme, PlatformProbe};
use super::schema::{read_settings, write_settings};
use super::settings::Settings;

/// Profile used until `load` names another one.
pub const DEFAULT_PROFILE: &str = "default";

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Neither `XDG_CONFIG_HOME` nor a home directory is available.
    #[error("could not determine the user configuration directory")]
    NoConfigRoot,

    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File access used by the store.
///
/// The production implementation is `infrastructure::storage::FileBackend`.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsBackend: Send + Sync {
    /// Resolves the settings file of `profile`.
    ///
    /// With `use_fallback`, a profile missing from the user directory is
    /// looked up in the system configuration directories.
    fn settings_path(&self, profile: &str, use_fallback: bool) -> Result<PathBuf, StoreError>;

    /// Reads the file at `path`; `Ok(None)` if it does not exist.
    fn read(&self, path: &Path) -> Result<Option<String>, StoreError>;

    /// Replaces the file at `path`, creating parent directories as needed.
    fn write(&self, path: &Path, contents: &str) -> Result<(), StoreError>;
}

/// Owns the [`Settings`] record and persists it per profile.
pub struct SettingsStore {
    settings: Settings,
    profile_name: String,
    backend: Box<dyn SettingsBackend>,
    default_font: FontSpec,
    support_trash: bool,
    use_fallback_icon_theme: bool,
    observers: Vec<Box<dyn SettingsObserver>>,
}

impl SettingsStore {
    /// Creates a store holding default settings.
    ///
    /// The platform is queried once, here, for trash support, the icon theme
    /// and the default desktop font.
    pub fn new(backend: Box<dyn SettingsBackend>, platform: Box<dyn PlatformProbe>) -> Self {
        let default_font = platform.default_font();
        let support_trash = platform.supports_trash();
        let icon_theme = platform.icon_theme_name();
        let use_fallback_icon_theme = needs_fallback_icon_theme(icon_theme.as_deref());
        debug!(
            "platform: trash={support_trash} icon_theme={icon_theme:?} fallback_icons={use_fallback_icon_theme}"
        );

        Self {
            settings: Settings::new(default_font.clone()),
            profile_name: DEFAULT_PROFILE.to_string(),
            backend,
            default_font,
            support_trash,
            use_fallback_icon_theme,
            observers: Vec::new(),
        }
    }

    /// Name of the profile most recently passed to [`load`](Self::load).
    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable access to the whole record.
    ///
    /// Any edit is allowed, including replacing a section or the entire
    /// record.  When the returned guard is dropped, every side-channel value
    /// that now differs from before is published once.
    pub fn settings_mut(&mut self) -> SettingsMut<'_> {
        SettingsMut {
            before: self.settings.side_channel_changes(),
            settings: &mut self.settings,
            observers: &self.observers,
        }
    }

    /// Whether the desktop supports moving files to the trash.
    pub fn support_trash(&self) -> bool {
        self.support_trash
    }

    /// Whether the configured fallback icon theme should be used.
    pub fn use_fallback_icon_theme(&self) -> bool {
        self.use_fallback_icon_theme
    }

    /// Registers an observer for side-channel changes.
    pub fn subscribe(&mut self, observer: Box<dyn SettingsObserver>) {
        self.observers.push(observer);
    }

    /// Returns a stream of side-channel changes.
    ///
    /// Dropping the receiver is allowed; later changes are then discarded.
    pub fn subscribe_channel(&mut self) -> UnboundedReceiver<SettingChange> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribe(Box::new(ChannelObserver::new(tx)));
        rx
    }

    // ── Load / save ───────────────────────────────────────────────────────────

    /// Loads `profile`, searching the system directories if the user has no
    /// copy of it.  Returns the path that was read.
    ///
    /// # Errors
    ///
    /// [`StoreError::NoConfigRoot`] if no configuration directory can be
    /// determined, [`StoreError::Io`] if the file exists but cannot be read.
    pub fn load(&mut self, profile: &str) -> Result<PathBuf, StoreError> {
        self.profile_name = profile.to_string();
        let path = self.backend.settings_path(profile, true)?;
        self.load_file(&path)?;
        Ok(path)
    }

    /// Loads settings from an explicit file.  The profile name is unchanged.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] if the file exists but cannot be read.
    pub fn load_file(&mut self, path: &Path) -> Result<(), StoreError> {
        let file = match self.backend.read(path)? {
            Some(text) => KeyFile::parse(&text),
            None => {
                debug!("no settings at {}; using defaults", path.display());
                KeyFile::new()
            }
        };

        let mut settings = read_settings(&file, &self.default_font);
        settings.validate();
        self.settings = settings;
        info!("loaded settings from {}", path.display());

        for change in self.settings.side_channel_changes() {
            self.publish(&change);
        }
        Ok(())
    }

    /// Saves to the user copy of `profile`, or of the current profile when
    /// `None`.  Returns the path that was written.
    ///
    /// # Errors
    ///
    /// [`StoreError::NoConfigRoot`] if no configuration directory can be
    /// determined, [`StoreError::Io`] if the file cannot be written.
    pub fn save(&self, profile: Option<&str>) -> Result<PathBuf, StoreError> {
        let profile = profile.unwrap_or(&self.profile_name);
        let path = self.backend.settings_path(profile, false)?;
        self.save_file(&path)?;
        Ok(path)
    }

    /// Saves settings to an explicit file.
    ///
    /// Keys already in the file that the schema does not know are kept.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] if the file cannot be read back or written.
    pub fn save_file(&self, path: &Path) -> Result<(), StoreError> {
        let mut file = match self.backend.read(path)? {
            Some(text) => KeyFile::parse(&text),
            None => KeyFile::new(),
        };
        write_settings(&self.settings, &mut file);
        self.backend.write(path, &file.to_string())?;
        info!("saved settings to {}", path.display());
        Ok(())
    }

    // ── Side-channel setters ──────────────────────────────────────────────────

    pub fn set_terminal(&mut self, terminal: impl Into<String>) {
        self.settings.system.terminal = terminal.into();
        let value = self.settings.system.terminal.clone();
        self.publish_value(SideChannelKey::Terminal, value);
    }

    pub fn set_archiver(&mut self, archiver: impl Into<String>) {
        self.settings.system.archiver = archiver.into();
        let value = self.settings.system.archiver.clone();
        self.publish_value(SideChannelKey::Archiver, value);
    }

    pub fn set_single_click(&mut self, single_click: bool) {
        self.settings.behavior.single_click = single_click;
        self.publish_value(SideChannelKey::SingleClick, single_click);
    }

    pub fn set_quick_exec(&mut self, quick_exec: bool) {
        self.settings.behavior.quick_exec = quick_exec;
        self.publish_value(SideChannelKey::QuickExec, quick_exec);
    }

    pub fn set_no_usb_trash(&mut self, no_usb_trash: bool) {
        self.settings.behavior.no_usb_trash = no_usb_trash;
        self.publish_value(SideChannelKey::NoUsbTrash, no_usb_trash);
    }

    pub fn set_backup_as_hidden(&mut self, backup_as_hidden: bool) {
        self.settings.folder_view.backup_as_hidden = backup_as_hidden;
        self.publish_value(SideChannelKey::BackupAsHidden, backup_as_hidden);
    }

    /// Largest file, in KiB, to generate thumbnails for.
    pub fn set_max_thumbnail_file_size(&mut self, size: u32) {
        self.settings.thumbnail.max_thumbnail_file_size = size;
        self.publish_value(SideChannelKey::ThumbnailMaxSize, size);
    }

    pub fn set_thumbnail_local_files_only(&mut self, local_only: bool) {
        self.settings.thumbnail.thumbnail_local_files_only = local_only;
        self.publish_value(SideChannelKey::ThumbnailLocalOnly, local_only);
    }

    pub fn set_only_user_templates(&mut self, only_user: bool) {
        self.settings.system.only_user_templates = only_user;
        self.publish_value(SideChannelKey::OnlyUserTemplates, only_user);
    }

    pub fn set_template_type_once(&mut self, type_once: bool) {
        self.settings.system.template_type_once = type_once;
        self.publish_value(SideChannelKey::TemplateTypeOnce, type_once);
    }

    pub fn set_template_run_app(&mut self, run_app: bool) {
        self.settings.system.template_run_app = run_app;
        self.publish_value(SideChannelKey::TemplateRunApp, run_app);
    }

    fn publish_value(&self, key: SideChannelKey, value: impl Into<SettingValue>) {
        self.publish(&SettingChange::new(key, value));
    }

    fn publish(&self, change: &SettingChange) {
        for observer in &self.observers {
            observer.setting_changed(change);
        }
    }
}

/// Write guard returned by [`SettingsStore::settings_mut`].
///
/// Dereferences to [`Settings`].  On drop it compares the side-channel
/// values with the snapshot taken on creation and publishes the ones that
/// changed, in [`Settings::side_channel_changes`] order.
pub struct SettingsMut<'a> {
    settings: &'a mut Settings,
    observers: &'a [Box<dyn SettingsObserver>],
    before: Vec<SettingChange>,
}

impl Deref for SettingsMut<'_> {
    type Target = Settings;

    fn deref(&self) -> &Settings {
        &*self.settings
    }
}

impl DerefMut for SettingsMut<'_> {
    fn deref_mut(&mut self) -> &mut Settings {
        &mut *self.settings
    }
}

impl Drop for SettingsMut<'_> {
    fn drop(&mut self) {
        let after = self.settings.side_channel_changes();
        for (old, new) in self.before.iter().zip(&after) {
            if old == new {
                continue;
            }
            debug!("{} changed through settings_mut", new.key);
            for observer in self.observers {
                observer.setting_changed(new);
            }
        }
    }
}

impl std::fmt::Debug for SettingsMut<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SettingsMut").field(&*self.settings).finish()
    }
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("profile_name", &self.profile_name)
            .field("support_trash", &self.support_trash)
            .field("use_fallback_icon_theme", &self.use_fallback_icon_theme)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
