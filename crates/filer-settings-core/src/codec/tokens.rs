//! Table-driven token codec for enum-valued settings.
//!
//! Each enum setting is stored on disk as a short lowercase *token*:
//!
//! | Enum            | Tokens                                               | Default       |
//! |-----------------|------------------------------------------------------|---------------|
//! | `OpenTarget`    | current_tab, new_tab, new_window, last_window        | current_tab   |
//! | `WallpaperMode` | none, transparent, stretch, fit, center, tile        | none          |
//! | `ViewMode`      | icon, compact, detailed, thumbnail                   | icon          |
//! | `SidePaneMode`  | places, dirtree, none                                | places        |
//! | `SortOrder`     | ascending, descending                                | ascending     |
//! | `SortColumn`    | name, type, size, mtime, owner                       | name          |
//!
//! # Encode vs. decode
//!
//! - **Encoding** ([`Token::as_token`]) is an exhaustive `match` generated by
//!   [`token_enum!`], so adding a variant without a token is a compile error.
//! - **Decoding** ([`Token::from_token`]) is an exact, case-sensitive lookup in
//!   [`Token::ALL`].  Anything else (typos, tokens from a newer version, an
//!   empty value) yields [`Token::DEFAULT`].  Decoding never fails.
//!
//! Conversions from a numeric discriminant (`TryFrom<u8>`) are strict: an
//! unknown number is a [`CodecError::UnknownDiscriminant`], never a silent
//! default.
//!
//! [`CodecError::UnknownDiscriminant`]: super::CodecError::UnknownDiscriminant

/// A closed set of variants with one stable string token per variant.
pub trait Token: Copy + Eq + 'static {
    /// Human-readable name of the setting kind, used in error messages.
    const KIND: &'static str;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Variant returned when decoding an unrecognised token.
    const DEFAULT: Self;

    /// Returns the canonical token for this variant.
    fn as_token(self) -> &'static str;

    /// Strict decode: `Some` only for an exact token match.
    fn parse_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_token() == token)
    }

    /// Lenient decode: an exact token match, otherwise [`Token::DEFAULT`].
    fn from_token(token: &str) -> Self {
        Self::parse_token(token).unwrap_or(Self::DEFAULT)
    }
}

/// Declares a `#[repr(u8)]` enum together with its [`Token`] table.
///
/// Syntax:
///
/// ```ignore
/// token_enum! {
///     /// Docs for the enum.
///     pub enum SortOrder: "sort order" {
///         Ascending = (0, "ascending"),
///         Descending = (1, "descending"),
///     }
///     default = Ascending;
/// }
/// ```
///
/// Generates `Token`, `Default`, `Display`, `TryFrom<u8>`, `From<Enum> for u8`
/// and token-based `serde` implementations.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = ($disc:literal, $token:literal)
            ),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $disc,
            )+
        }

        impl $crate::codec::tokens::Token for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const DEFAULT: Self = Self::$default;

            fn as_token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::codec::tokens::Token::as_token(*self))
            }
        }

        impl TryFrom<u8> for $name {
            type Error = $crate::codec::CodecError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($disc => Ok(Self::$variant),)+
                    _ => Err($crate::codec::CodecError::UnknownDiscriminant {
                        kind: $kind,
                        value,
                    }),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value as u8
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::codec::tokens::Token::as_token(*self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let token = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(<Self as $crate::codec::tokens::Token>::from_token(&token))
            }
        }
    };
}

pub(crate) use token_enum;
