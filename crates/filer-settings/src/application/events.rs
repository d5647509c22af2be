//! Change notifications for side-channel settings.
//!
//! A handful of settings are also mirrored into a configuration object owned
//! by the desktop file-management library (which terminal to launch, whether
//! a single click opens files, thumbnail limits, ...).  Other components
//! watch that object, so every write to one of these settings must be
//! announced.
//!
//! The store does not know about that object.  It publishes a typed
//! [`SettingChange`] to each registered [`SettingsObserver`]; the
//! `infrastructure::shared_config` adapter is one such observer and
//! translates the change into the external object's `set field` + `notify`
//! calls.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

/// The settings whose setters have an observable side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SideChannelKey {
    Terminal,
    Archiver,
    SingleClick,
    QuickExec,
    NoUsbTrash,
    BackupAsHidden,
    ThumbnailMaxSize,
    ThumbnailLocalOnly,
    OnlyUserTemplates,
    TemplateTypeOnce,
    TemplateRunApp,
}

impl SideChannelKey {
    /// Every side-channel key.
    pub const ALL: [SideChannelKey; 11] = [
        Self::Terminal,
        Self::Archiver,
        Self::SingleClick,
        Self::QuickExec,
        Self::NoUsbTrash,
        Self::BackupAsHidden,
        Self::ThumbnailMaxSize,
        Self::ThumbnailLocalOnly,
        Self::OnlyUserTemplates,
        Self::TemplateTypeOnce,
        Self::TemplateRunApp,
    ];

    /// The field name used by the shared configuration object, which is also
    /// the suffix of its change notification.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Archiver => "archiver",
            Self::SingleClick => "single_click",
            Self::QuickExec => "quick_exec",
            Self::NoUsbTrash => "no_usb_trash",
            Self::BackupAsHidden => "backup_as_hidden",
            Self::ThumbnailMaxSize => "thumbnail_max",
            Self::ThumbnailLocalOnly => "thumbnail_local",
            Self::OnlyUserTemplates => "only_user_templates",
            Self::TemplateTypeOnce => "template_type_once",
            Self::TemplateRunApp => "template_run_app",
        }
    }
}

impl std::fmt::Display for SideChannelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The new value carried by a [`SettingChange`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingValue {
    Bool(bool),
    UInt(u32),
    Text(String),
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u32> for SettingValue {
    fn from(value: u32) -> Self {
        Self::UInt(value)
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One committed write to a side-channel setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingChange {
    pub key: SideChannelKey,
    pub value: SettingValue,
}

impl SettingChange {
    pub fn new(key: SideChannelKey, value: impl Into<SettingValue>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// Receives every [`SettingChange`] published by the store.
///
/// Called synchronously on the thread that performed the write, after the
/// new value has been committed to the record.
pub trait SettingsObserver: Send + Sync {
    fn setting_changed(&self, change: &SettingChange);
}

/// Forwards changes into an unbounded channel.
///
/// Backs `SettingsStore::subscribe_channel`.  A dropped receiver is not an
/// error; the change is simply discarded.
pub(crate) struct ChannelObserver {
    sender: UnboundedSender<SettingChange>,
}

impl ChannelObserver {
    pub(crate) fn new(sender: UnboundedSender<SettingChange>) -> Self {
        Self { sender }
    }
}

impl SettingsObserver for ChannelObserver {
    fn setting_changed(&self, change: &SettingChange) {
        if self.sender.send(change.clone()).is_err() {
            debug!("change receiver dropped; discarding {} change", change.key);
        }
    }
}
