//! Storage infrastructure: settings file location and persistence.
//!
//! - `paths` computes where a profile's settings file lives, honouring the
//!   XDG base directory variables and searching the system directories when
//!   the user has no copy of a profile yet.
//! - `file` implements the application's `SettingsBackend` with `std::fs`.

pub mod file;
pub mod paths;

pub use file::FileBackend;
pub use paths::{Environment, FixedEnvironment, ProfileResolver, SystemEnvironment};
