//! Grouped key-file (INI-style) text codec.
//!
//! File layout:
//! ```text
//! [FolderView]
//! Mode=thumbnail
//! SortColumn=mtime
//!
//! [Desktop]
//! Font="Sans,10,-1,5,50,0,0,0,0,0"
//! ```
//!
//! # Parsing rules
//!
//! - `[Name]` starts a section.  Entries that appear before any header belong
//!   to [`DEFAULT_SECTION`].  A header that repeats an earlier section name
//!   continues that section.
//! - `key=value` lines are split at the first `=`; key and value are trimmed.
//!   Keys are case-sensitive.  A repeated key overwrites the earlier value.
//! - A value wrapped in double quotes is unquoted.  Backslash escapes are
//!   decoded in quoted and bare values alike, using the QSettings INI
//!   conventions: `\\`, `\"`, `\a \b \f \n \r \t \v`, octal `\0NN` and
//!   `\xHHHH` UTF-16 code units.
//! - Blank lines and lines starting with `;` or `#` are ignored.
//! - Anything else is malformed and skipped.  Parsing never fails: a damaged
//!   line must not cost the user every other setting in the file.
//! - A malformed `[header` line also drops the entries that follow it, up to
//!   the next valid header.  They are never filed under the previous section.
//!
//! On output, values get the same escapes, with every character outside
//! printable ASCII written as `\xHHHH`, so the file stays readable by Qt.
//!
//! Section and entry order is preserved, so a file that is parsed, updated
//! and written back keeps its original layout.

use std::fmt;

use tracing::debug;

/// Section that receives entries appearing before the first `[Section]` header.
pub const DEFAULT_SECTION: &str = "General";

/// One `[Name]` group of key/value entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    /// Returns the section name (without brackets).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the section contains `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over `(key, value)` pairs in file order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries in the section.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the section has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn set(&mut self, key: &str, value: String) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }
}

/// An in-memory key file: an ordered list of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyFile {
    sections: Vec<Section>,
}

impl KeyFile {
    /// Creates an empty key file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses key-file text.  Malformed lines are skipped.
    pub fn parse(text: &str) -> Self {
        let mut file = Self::new();
        let mut current: Option<usize> = None;
        let mut orphaned = false;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();

            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                match rest.strip_suffix(']').map(str::trim) {
                    Some(name) if !name.is_empty() => {
                        current = Some(file.section_index(name));
                        orphaned = false;
                    }
                    _ => {
                        debug!("key file line {line_no}: malformed section header {line:?}");
                        orphaned = true;
                    }
                }
                continue;
            }

            if orphaned {
                debug!("key file line {line_no}: dropping entry under malformed header");
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                debug!("key file line {line_no}: expected key=value, got {line:?}");
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                debug!("key file line {line_no}: entry without a key");
                continue;
            }

            let section = match current {
                Some(section) => section,
                None => {
                    let section = file.section_index(DEFAULT_SECTION);
                    current = Some(section);
                    section
                }
            };
            file.sections[section].set(key, unescape(value.trim()));
        }

        file
    }

    /// Returns the section called `name`, if present.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Iterates over sections in file order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Returns the value of `key` in `section`, if present.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// Returns `true` if `section` contains `key`.
    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    /// Sets `key` in `section`, creating either as needed.
    ///
    /// An existing key keeps its position in the file.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        let index = self.section_index(section);
        self.sections[index].set(key, value.into());
    }

    /// Returns the index of `name`, appending an empty section if missing.
    fn section_index(&mut self, name: &str) -> usize {
        match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        }
    }
}

impl fmt::Display for KeyFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "[{}]", section.name)?;
            for (key, value) in &section.entries {
                writeln!(f, "{key}={}", quote(value))?;
            }
        }
        Ok(())
    }
}

// ── Value quoting ─────────────────────────────────────────────────────────────

fn needs_quotes(value: &str) -> bool {
    value.starts_with(char::is_whitespace)
        || value.ends_with(char::is_whitespace)
        || value.chars().any(|c| matches!(c, ',' | ';' | '#' | '"'))
}

fn quote(value: &str) -> String {
    let escaped = escape(value);
    if needs_quotes(value) {
        format!("\"{escaped}\"")
    } else {
        escaped
    }
}

/// Escapes `value` for a key-file line.
///
/// A hex digit directly after a `\xHHHH` escape is escaped too, since the
/// reader consumes hex digits greedily.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut after_hex = false;
    for c in value.chars() {
        let glued_to_hex = after_hex && c.is_ascii_hexdigit();
        after_hex = false;
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ' '..='~' if !glued_to_hex => out.push(c),
            other => {
                let mut units = [0u16; 2];
                for unit in other.encode_utf16(&mut units) {
                    out.push_str(&format!("\\x{unit:04x}"));
                }
                after_hex = true;
            }
        }
    }
    out
}

/// Strips surrounding quotes and decodes backslash escapes.
///
/// Escapes produce UTF-16 code units; an unpaired surrogate decodes to
/// U+FFFD.
fn unescape(value: &str) -> String {
    let inner = value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(value);

    let mut units: Vec<u16> = Vec::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            push_char(&mut units, c);
            continue;
        }
        let Some(kind) = chars.next() else {
            push_char(&mut units, '\\');
            break;
        };
        match kind {
            'a' => units.push(0x07),
            'b' => units.push(0x08),
            'f' => units.push(0x0c),
            'n' => units.push(0x0a),
            'r' => units.push(0x0d),
            't' => units.push(0x09),
            'v' => units.push(0x0b),
            'x' => match take_digits(&mut chars, 16, 0) {
                Some(unit) => units.push(unit),
                None => push_char(&mut units, 'x'),
            },
            '0'..='7' => {
                let first = kind.to_digit(8).unwrap_or(0);
                units.push(take_digits(&mut chars, 8, first).unwrap_or(first as u16));
            }
            other => push_char(&mut units, other),
        }
    }
    String::from_utf16_lossy(&units)
}

/// Consumes digits in `radix`, returning `None` if there were none.
fn take_digits(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    radix: u32,
    seed: u32,
) -> Option<u16> {
    let mut code = seed;
    let mut seen = false;
    while let Some(digit) = chars.peek().and_then(|d| d.to_digit(radix)) {
        code = code.wrapping_mul(radix).wrapping_add(digit);
        chars.next();
        seen = true;
    }
    seen.then_some((code & 0xffff) as u16)
}

fn push_char(units: &mut Vec<u16>, c: char) {
    let mut buf = [0u16; 2];
    units.extend_from_slice(c.encode_utf16(&mut buf));
}

// ── Tests ─────────────────────────────────────────────────────────────────────
