//! # filer-settings-core
//!
//! Shared library for the Filer settings store containing the setting value
//! types, the token codec for enum-valued settings, and the grouped key-file
//! text format the settings are persisted in.
//!
//! It has zero dependencies on the file system, the process environment, or
//! any desktop service.  Everything here is a pure function of its input.
//!
//! # Architecture overview (for beginners)
//!
//! Filer keeps its preferences (how folders are displayed, which terminal to
//! launch, how big the window was when it was closed, ...) in one small text
//! file per *profile*.  This crate is the foundation that both reads and
//! writes that file.  It defines:
//!
//! - **`domain`** – The value types a setting can hold: the six closed
//!   enumerations (view mode, sort column, ...), [`Color`] and [`FontSpec`].
//!
//! - **`codec`** – How those values travel to and from text.  Every enum
//!   variant has exactly one stable lowercase *token* (e.g. `"thumbnail"`),
//!   and the [`KeyFile`] type reads and writes the `[Section]` / `key=value`
//!   file layout.
//!
//! The settings record itself, the load/save protocol and the path lookup
//! live in the `filer-settings` crate, which builds on this one.

pub mod codec;
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `filer_settings_core::ViewMode` instead of `filer_settings_core::domain::modes::ViewMode`.
pub use codec::keyfile::{KeyFile, Section, DEFAULT_SECTION};
pub use codec::tokens::Token;
pub use codec::CodecError;
pub use domain::color::Color;
pub use domain::font::FontSpec;
pub use domain::modes::{OpenTarget, SidePaneMode, SortColumn, SortOrder, ViewMode, WallpaperMode};
