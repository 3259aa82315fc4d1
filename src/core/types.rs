use serde::{Deserialize, Serialize};
use std::fmt;

/// Shortest normalized VAT number accepted, prefix included.
pub const MIN_VAT_LENGTH: usize = 8;

/// Longest normalized VAT number accepted, prefix included.
pub const MAX_VAT_LENGTH: usize = 14;

/// Strip spaces, dashes, and periods from a VAT number and uppercase it.
///
/// Any Unicode whitespace counts as a space. The result is stable:
/// `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '.')
        .flat_map(char::to_uppercase)
        .collect()
}

/// A normalized VAT number, e.g. `DE123456789`.
///
/// Constructing one only normalizes; it says nothing about validity.
/// Numbers returned by the validators have passed the country and
/// length checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VatNumber(String);

impl VatNumber {
    /// Normalize `raw` into a VAT number.
    pub fn parse(raw: &str) -> Self {
        Self(normalize(raw))
    }

    /// The full normalized number.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first two characters, e.g. `DE`.
    pub fn country_code(&self) -> &str {
        &self.0[..self.split_index()]
    }

    /// Everything after the country code, e.g. `123456789`.
    pub fn local_part(&self) -> &str {
        &self.0[self.split_index()..]
    }

    /// Length in characters, prefix included.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn split_index(&self) -> usize {
        self.0
            .char_indices()
            .nth(2)
            .map_or(self.0.len(), |(idx, _)| idx)
    }
}

impl fmt::Display for VatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VatNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
