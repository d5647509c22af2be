//! Infrastructure layer: adapters between the store and the outside world.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `filer_settings_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`storage`** – Settings file location (`XDG_CONFIG_HOME`, home
//!   directory, system fallback directories) and the `std::fs` backed
//!   [`storage::FileBackend`].
//!
//! - **`shared_config`** – Observer that mirrors side-channel changes into the
//!   desktop's shared configuration object.
//!
//! - **`platform`** – A configurable [`platform::StaticPlatform`] answering the
//!   store's desktop queries.

pub mod platform;
pub mod shared_config;
pub mod storage;
