//! Hex token extraction from free text

use regex::Regex;
use std::collections::BTreeSet;

use crate::Result;

/// `#` followed by 3, 4, 6 or 8 hex digits ending on a word boundary
pub const HEX_PATTERN: &str = r"#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})\b";

/// Finds hex color tokens in text
#[derive(Debug, Clone)]
pub struct HexExtractor {
    pattern: Regex,
}

impl HexExtractor {
    /// Compile the extraction pattern
    ///
    /// # Errors
    ///
    /// Returns `ScanError::Pattern` if the pattern fails to compile
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(HEX_PATTERN)?,
        })
    }

    /// All distinct tokens in `text`, each with its leading `#`
    ///
    /// Tokens are returned as written; `#FFF` and `#fff` are both kept and
    /// only collapse during normalization.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
