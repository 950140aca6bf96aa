//! Color representation and conversion module
//!
//! This module handles hex normalization, color space conversion to HSL
//! and luminance, and the mapping of hues to named categories.

pub mod category;
pub mod conversion;
pub mod hex;

pub use category::{Category, CategoryDescriptor, HueRange, HueTable, HUE_TABLE};
pub use conversion::{ColorConverter, HslTriple};
pub use hex::{HexColor, HexNormalizer, ShortAlphaPolicy};
