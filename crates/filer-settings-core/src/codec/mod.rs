//! Codec module: token tables for enum settings and the key-file text format.

pub mod keyfile;
pub mod scalar;
pub mod tokens;

use thiserror::Error;

/// Errors that can occur while converting setting values to or from their
/// encoded form.
///
/// Note that decoding a *token* never fails (an unknown token maps to the
/// field's default variant); these errors cover the strict conversions only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A numeric discriminant does not name any variant of the enum.
    #[error("unknown {kind} discriminant: {value}")]
    UnknownDiscriminant { kind: &'static str, value: u8 },

    /// The text is not a recognised `#rgb`, `#rrggbb`, `#aarrggbb` or named color.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// The text is not a valid comma-separated font description.
    #[error("invalid font description: {0:?}")]
    InvalidFont(String),
}
