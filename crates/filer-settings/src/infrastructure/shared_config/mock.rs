//! In-memory shared configuration for tests and headless embedding.
//!
//! Records every field write and every notification so assertions can check
//! both the final values and the exact sequence of change signals.
//!
//! # Usage in tests
//!
//! ```ignore
//! let shared = Arc::new(InMemorySharedConfig::new());
//! store.subscribe(Box::new(SharedConfigAdapter::new(shared.clone())));
//!
//! store.set_terminal("xterm");
//!
//! assert_eq!(shared.field("terminal"), Some(SettingValue::Text("xterm".into())));
//! assert_eq!(shared.notifications(), vec!["terminal"]);
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::application::events::SettingValue;

use super::SharedConfig;

#[derive(Debug, Default)]
pub struct InMemorySharedConfig {
    fields: Mutex<HashMap<String, SettingValue>>,
    notifications: Mutex<Vec<String>>,
}

impl InMemorySharedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `name`, if it was ever set.
    pub fn field(&self, name: &str) -> Option<SettingValue> {
        self.fields
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Every change key notified so far, oldest first.
    pub fn notifications(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forgets recorded notifications; field values are kept.
    pub fn clear_notifications(&self) {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl SharedConfig for InMemorySharedConfig {
    fn set_field(&self, name: &str, value: &SettingValue) {
        self.fields
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), value.clone());
    }

    fn notify(&self, change_key: &str) {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(change_key.to_string());
    }
}
