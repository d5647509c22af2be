//! filer-settings library entry point.
//!
//! The typed settings store for the Filer file manager: the [`Settings`]
//! record, the [`SettingsStore`] that loads and saves it per profile, and
//! the adapters that connect it to the file system and to the desktop's
//! shared configuration.
//!
//! # Wiring (for beginners)
//!
//! ```ignore
//! use std::sync::Arc;
//! use filer_settings::infrastructure::{
//!     platform::StaticPlatform,
//!     shared_config::SharedConfigAdapter,
//!     storage::FileBackend,
//! };
//!
//! // Created once at the application root and passed to whoever needs it.
//! let mut store = SettingsStore::new(
//!     Box::new(FileBackend::new()),
//!     Box::new(StaticPlatform::default()),
//! );
//! store.subscribe(Box::new(SharedConfigAdapter::new(Arc::clone(&shared))));
//! store.load("default")?;
//!
//! store.set_terminal("konsole"); // shared config sees `terminal` change
//! store.settings_mut().window.splitter_pos = 200; // no notification
//! *store.settings_mut() = imported; // notifies each side value that changed
//! store.save(None)?;
//! ```
//!
//! The store is a plain single-threaded value.  To use it from several
//! threads, put it behind a `Mutex` at the application root.

pub mod application;
pub mod infrastructure;

pub use application::events::{SettingChange, SettingValue, SettingsObserver, SideChannelKey};
pub use application::platform::PlatformProbe;
pub use application::settings::Settings;
pub use application::store::{
    SettingsBackend, SettingsMut, SettingsStore, StoreError, DEFAULT_PROFILE,
};
