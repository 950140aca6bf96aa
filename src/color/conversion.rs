//! Color space conversion utilities
//!
//! Provides conversions from normalized hex values:
//! - Hex to sRGB channels (strict)
//! - Hex to HSL (hue degrees, saturation and lightness percent)
//! - Hex to relative luminance, used as a sort key
//!
//! The HSL and luminance conversions are total: a value that is not exactly
//! six hex digits maps to the black sentinel instead of failing.

use palette::{encoding, FromColor, Hsl, Srgb};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    color::HexColor,
    constants::{hex::FULL_LEN, luminance},
    Result, ScanError,
};

/// Hue, saturation and lightness of a color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslTriple {
    /// Hue in degrees, [0, 360)
    pub hue: f64,
    /// Saturation in percent, [0, 100]
    pub saturation: f64,
    /// Lightness in percent, [0, 100]
    pub lightness: f64,
}

impl HslTriple {
    /// Returned for values that cannot be parsed
    pub const SENTINEL: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        lightness: 0.0,
    };
}

/// Converter from normalized hex values to HSL and luminance
#[derive(Debug, Clone, Copy)]
pub struct ColorConverter {
    /// Channel weights for luminance (R, G, B)
    luminance_weights: [f64; 3],
}

impl Default for ColorConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorConverter {
    /// Create a converter using Rec. 709 luminance weights
    pub fn new() -> Self {
        Self {
            luminance_weights: luminance::WEIGHTS,
        }
    }

    /// Parse normalized hex digits to sRGB
    ///
    /// # Arguments
    ///
    /// * `hex` - Hex digits, with or without a leading `#`
    ///
    /// # Returns
    ///
    /// sRGB color with channels in [0, 1]
    ///
    /// # Errors
    ///
    /// Returns `ScanError::InvalidHex` unless the value is exactly six
    /// ASCII hex digits
    pub fn parse_rgb(&self, hex: &str) -> Result<Srgb<f64>> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != FULL_LEN {
            return Err(ScanError::invalid_hex(
                hex,
                format!("expected {} hex digits, got {}", FULL_LEN, digits.chars().count()),
            ));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ScanError::invalid_hex(hex, "contains non-hex characters"));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|e| ScanError::invalid_hex(hex, e.to_string()))
        };

        Ok(Srgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Convert a color to HSL
    ///
    /// Falls back to [`HslTriple::SENTINEL`] when the digits do not parse.
    pub fn to_hsl(&self, color: &HexColor) -> HslTriple {
        match self.parse_rgb(color.digits()) {
            Ok(rgb) => self.rgb_to_hsl(rgb),
            Err(e) => {
                debug!(color = %color, error = %e, "using HSL sentinel");
                HslTriple::SENTINEL
            }
        }
    }

    /// Relative luminance in [0, 1]; 0 when the digits do not parse
    pub fn to_luminance(&self, color: &HexColor) -> f64 {
        match self.parse_rgb(color.digits()) {
            Ok(rgb) => self.rgb_to_luminance(rgb),
            Err(e) => {
                debug!(color = %color, error = %e, "using luminance sentinel");
                0.0
            }
        }
    }

    /// Convert sRGB to HSL in degrees and percent
    pub fn rgb_to_hsl(&self, rgb: Srgb<f64>) -> HslTriple {
        let hsl: Hsl<encoding::Srgb, f64> = Hsl::from_color(rgb);
        HslTriple {
            hue: hsl.hue.into_positive_degrees(),
            saturation: hsl.saturation * 100.0,
            lightness: hsl.lightness * 100.0,
        }
    }

    /// Weighted sum of the gamma-encoded channels
    pub fn rgb_to_luminance(&self, rgb: Srgb<f64>) -> f64 {
        let [wr, wg, wb] = self.luminance_weights;
        wr * rgb.red + wg * rgb.green + wb * rgb.blue
    }
}
