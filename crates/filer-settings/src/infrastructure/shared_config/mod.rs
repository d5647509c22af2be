//! Mirrors side-channel settings into the desktop's shared configuration.
//!
//! The file-management library used by the UI keeps its own configuration
//! object (terminal command, single-click mode, thumbnail limits, ...) and
//! emits a named change signal whenever one of its fields is set.  The
//! [`SharedConfigAdapter`] subscribes to the store and, for each
//! [`SettingChange`], performs exactly one `set_field` followed by exactly one
//! `notify` with the same key.

pub mod mock;

use std::sync::Arc;

use tracing::trace;

use crate::application::events::{SettingChange, SettingValue, SettingsObserver};

/// The shared configuration object owned by the desktop library.
#[cfg_attr(test, mockall::automock)]
pub trait SharedConfig: Send + Sync {
    /// Stores `value` in the field called `name`.
    fn set_field(&self, name: &str, value: &SettingValue);

    /// Emits the change signal for `change_key`.
    fn notify(&self, change_key: &str);
}

/// Observer translating store changes into [`SharedConfig`] calls.
pub struct SharedConfigAdapter {
    config: Arc<dyn SharedConfig>,
}

impl SharedConfigAdapter {
    pub fn new(config: Arc<dyn SharedConfig>) -> Self {
        Self { config }
    }
}

impl SettingsObserver for SharedConfigAdapter {
    fn setting_changed(&self, change: &SettingChange) {
        let name = change.key.as_str();
        trace!("shared config: {name} = {:?}", change.value);
        self.config.set_field(name, &change.value);
        self.config.notify(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::events::SideChannelKey;
    use mockall::Sequence;

    #[test]
    fn test_change_sets_field_then_notifies_once() {
        // Arrange
        let mut config = MockSharedConfig::new();
        let mut seq = Sequence::new();
        config
            .expect_set_field()
            .withf(|name: &str, value: &SettingValue| {
                name == "terminal" && *value == SettingValue::Text("xterm".to_string())
            })
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        config
            .expect_notify()
            .withf(|key: &str| key == "terminal")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        let adapter = SharedConfigAdapter::new(Arc::new(config));

        // Act
        adapter.setting_changed(&SettingChange::new(SideChannelKey::Terminal, "xterm"));
    }

    #[test]
    fn test_thumbnail_change_uses_external_key() {
        let mut config = MockSharedConfig::new();
        config
            .expect_set_field()
            .withf(|name: &str, value: &SettingValue| {
                name == "thumbnail_max" && *value == SettingValue::UInt(2048)
            })
            .times(1)
            .return_const(());
        config
            .expect_notify()
            .withf(|key: &str| key == "thumbnail_max")
            .times(1)
            .return_const(());
        let adapter = SharedConfigAdapter::new(Arc::new(config));

        adapter.setting_changed(&SettingChange::new(SideChannelKey::ThumbnailMaxSize, 2048u32));
    }
}
