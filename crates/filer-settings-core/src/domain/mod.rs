//! Domain value types for Filer settings.
//!
//! This module contains the types a single setting can hold.  It has no
//! knowledge of sections, keys, files or profiles; those concerns belong to
//! the `filer-settings` crate.
//!
//! # Why dedicated types instead of strings and integers? (for beginners)
//!
//! The settings file stores everything as text.  It would be easy to keep the
//! text around and compare strings at every use site, but then a typo like
//! `"thumbnial"` would only be discovered at runtime, if at all.  Decoding the
//! text once into an enum such as [`modes::ViewMode`] means the rest of the
//! program can only ever see one of the four valid view modes, and the
//! compiler checks every `match` for completeness.

/// Colors used by the desktop (background, text, text shadow).
pub mod color;

/// Font descriptions used by the desktop.
pub mod font;

/// The six enum-valued settings and their token tables.
pub mod modes;
