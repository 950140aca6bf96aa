//! Hex color normalization
//!
//! Accepts the CSS hex notations `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`
//! and reduces them to a lowercase 6-digit form. Alpha is always dropped.
//! Tokens of any other length are kept as-is; they fail to parse later and
//! take the converter's sentinel path.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::hex::{FULL_ALPHA_LEN, FULL_LEN, SHORT_ALPHA_LEN, SHORT_LEN};

/// How 4-digit `#rgba` tokens are normalized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortAlphaPolicy {
    /// Drop the alpha digit and expand the remaining `rgb` digits
    #[default]
    Expand,
    /// Keep the token unchanged; it classifies through the sentinel path
    Passthrough,
}

/// A normalized hex color, stored without the leading `#`
///
/// Displays with the `#` restored.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Hex digits without the leading `#`
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// True if the digits are a canonical 6-digit value
    pub fn is_canonical(&self) -> bool {
        self.0.len() == FULL_LEN && self.0.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl From<String> for HexColor {
    fn from(value: String) -> Self {
        HexNormalizer::default().normalize(&value)
    }
}

/// Hex token normalizer
#[derive(Debug, Clone, Copy, Default)]
pub struct HexNormalizer {
    short_alpha: ShortAlphaPolicy,
}

impl HexNormalizer {
    /// Create a normalizer that expands 4-digit tokens
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer with an explicit 4-digit policy
    pub fn with_policy(short_alpha: ShortAlphaPolicy) -> Self {
        Self { short_alpha }
    }

    /// Normalize a hex token to its canonical form
    ///
    /// # Arguments
    ///
    /// * `token` - Hex token, with or without leading `#`
    ///
    /// # Returns
    ///
    /// `HexColor` with 6 lowercase digits for every accepted notation,
    /// or the lowercased token unchanged for any other length
    pub fn normalize(&self, token: &str) -> HexColor {
        let digits: Vec<char> = token
            .trim_start_matches('#')
            .chars()
            .flat_map(char::to_lowercase)
            .collect();

        let normalized = match digits.len() {
            SHORT_LEN => expand_short(&digits),
            SHORT_ALPHA_LEN if self.short_alpha == ShortAlphaPolicy::Expand => {
                expand_short(&digits[..SHORT_LEN])
            }
            FULL_ALPHA_LEN => digits[..FULL_LEN].iter().collect(),
            _ => digits.into_iter().collect(),
        };

        HexColor(normalized)
    }
}

/// `abc` -> `aabbcc`
fn expand_short(digits: &[char]) -> String {
    digits.iter().flat_map(|&c| [c, c]).collect()
}
