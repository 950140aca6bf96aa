//! # hexscan
//!
//! Find, categorize, and sort the hex color codes used in a text file.
//!
//! This library provides deterministic color grouping by:
//! - Extracting `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa` tokens from text
//! - Normalizing them to 6-digit lowercase hex (alpha is discarded)
//! - Splitting them into shades and six hue categories using HSL
//! - Letting empty hue categories adopt a borderline shade
//! - Ordering every category by luminance
//!
//! ## Example
//!
//! ```rust
//! use hexscan::{scan_text, Category, ScanConfig};
//!
//! let partition = scan_text("a { color: #f00; background: #ffffff }", &ScanConfig::default())?;
//! assert_eq!(partition.colors(Category::Reds)[0].hex.to_string(), "#ff0000");
//! assert_eq!(partition.shades().len(), 1);
//! # Ok::<(), hexscan::ScanError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod classify;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod loader;
pub mod render;

pub use classify::{ClassifiedColor, ColorClassifier, Partition, Reassignment};
pub use color::{Category, HexColor, HslTriple, ShortAlphaPolicy};
pub use config::{OutputFormat, ScanConfig};
pub use error::{Result, ScanError};
pub use extract::HexExtractor;

/// Serializable summary of a [`Partition`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReport {
    /// Number of unique colors
    pub total_colors: usize,
    /// Shades in luminance order
    pub shades: Vec<String>,
    /// Non-empty hue categories in output order
    pub categories: Vec<CategoryGroup>,
}

/// Colors of one hue category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub colors: Vec<String>,
}

impl From<&Partition> for ColorReport {
    fn from(partition: &Partition) -> Self {
        let hex_list = |colors: &[ClassifiedColor]| -> Vec<String> {
            colors.iter().map(|c| c.hex.to_string()).collect()
        };

        Self {
            total_colors: partition.total(),
            shades: hex_list(partition.shades()),
            categories: partition
                .iter()
                .filter(|(category, colors)| category.is_hue() && !colors.is_empty())
                .map(|(category, colors)| CategoryGroup {
                    category,
                    colors: hex_list(colors),
                })
                .collect(),
        }
    }
}

/// Extract and classify every hex color in `text`
///
/// # Errors
///
/// Returns `ScanError::Pattern` if the extraction pattern fails to compile
pub fn scan_text(text: &str, config: &ScanConfig) -> Result<Partition> {
    let tokens = HexExtractor::new()?.extract(text);
    Ok(ColorClassifier::from_config(config).classify(&tokens))
}

/// Load a text file, then extract and classify its hex colors
///
/// # Errors
///
/// Returns the loader's errors for unreadable files, see [`loader::load_text`]
pub fn scan_file(path: &Path, config: &ScanConfig) -> Result<Partition> {
    let text = loader::load_text(path)?;
    scan_text(&text, config)
}
