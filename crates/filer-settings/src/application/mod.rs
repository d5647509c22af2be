//! Application layer: the settings record and the store that manages it.
//!
//! # What is the "application" layer? (for beginners)
//!
//! This layer sits between the pure value types of `filer_settings_core`
//! and the infrastructure that touches the outside world (files, environment
//! variables, the desktop's shared configuration).
//!
//! Code in this layer:
//!
//! - **Owns the rules** of the settings schema: which section and key each
//!   field lives under, what its default is, and which fields must be
//!   announced to other components when they change.
//! - **Depends on abstractions** ([`store::SettingsBackend`],
//!   [`platform::PlatformProbe`], [`events::SettingsObserver`]) rather than
//!   on concrete file or desktop access, so tests can swap them out.
//!
//! # Sub-modules
//!
//! - **`settings`** – The [`settings::Settings`] record, its defaults and its
//!   range validation.
//! - **`schema`** – The mapping between the record and the sections/keys of
//!   the settings file.
//! - **`store`**    – [`store::SettingsStore`]: profile tracking, load/save,
//!   and the setters with side effects.
//! - **`events`**   – Change notifications published by the store.
//! - **`platform`** – Desktop services the store queries at construction.

pub mod events;
pub mod platform;
pub mod schema;
pub mod settings;
pub mod store;
