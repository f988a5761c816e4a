//! RGB color value object.
//!
//! The persisted table stores colors as text (`"[0, 0, 220]"`). Parsing and
//! formatting live here so the textual form never leaks past the store.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// A base color with three 8-bit channels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ValueObject for Rgb {}

impl Rgb {
    /// Fallback used whenever a stored color cannot be understood.
    pub const DEFAULT_BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse the persisted text form.
    ///
    /// Accepts a bracketed list (`[0, 0, 255]`), a parenthesised tuple
    /// (`(0, 0, 255)`) or a bare comma list. Exactly three integer channels in
    /// `0..=255` are required. Nothing is evaluated.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        let inner = strip_delimiters(trimmed, '[', ']')
            .or_else(|| strip_delimiters(trimmed, '(', ')'))
            .unwrap_or(trimmed);

        let channels = inner
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|e| DomainError::validation(format!("color {input:?}: {e}")))?;

        match channels.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => Err(DomainError::validation(format!(
                "color {input:?}: expected 3 channels, found {}",
                channels.len()
            ))),
        }
    }

    /// Text form written to the flat file.
    pub fn to_persisted(&self) -> String {
        format!("[{}, {}, {}]", self.r, self.g, self.b)
    }

    /// CSS-style `rgb(r, g, b)` string consumed by chart layers.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

fn strip_delimiters(s: &str, open: char, close: char) -> Option<&str> {
    s.strip_prefix(open)?.strip_suffix(close)
}

impl Default for Rgb {
    fn default() -> Self {
        Self::DEFAULT_BLUE
    }
}

impl FromStr for Rgb {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        [value.r, value.g, value.b]
    }
}

impl core::fmt::Display for Rgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_persisted())
    }
}
