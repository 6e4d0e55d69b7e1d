//! Locator types: the Maidenhead coordinates this tool aggregates and maps.

use std::fmt;

use anyhow::{Result, bail};
use regex::Regex;

/// A validated 4-character Maidenhead locator, e.g. `JO52`.
///
/// The first two characters name the field (18x18 alphabet `A`-`R`), the last
/// two the square within it (`0`-`9` each). Only pre-validated values flow
/// through this type; raw log entries stay plain strings because the log
/// format owns their validity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator(String);

impl Locator {
    /// Parse and validate a locator, uppercasing it first.
    pub fn parse(s: &str) -> Result<Self> {
        let candidate = s.trim().to_ascii_uppercase();
        let pattern = Regex::new(r"^[A-R][A-R][0-9][0-9]$")?;
        if !pattern.is_match(&candidate) {
            bail!("locator not in correct format (must be e.g. JO52): {s:?}");
        }
        Ok(Self(candidate))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 2-character field this locator lies in.
    pub fn field(&self) -> &str {
        &self.0[..2]
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The field prefix of a raw locator string: its first two characters.
///
/// Raw log entries are not validated, so this must not assume well-formed
/// input. Shorter strings yield themselves, multibyte characters are kept
/// whole.
pub fn field_prefix(locator: &str) -> &str {
    match locator.char_indices().nth(2) {
        Some((idx, _)) => &locator[..idx],
        None => locator,
    }
}
