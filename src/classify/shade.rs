//! Shade detection
//!
//! A shade is a near-neutral color: too dark, too unsaturated, or outside
//! the lightness band in which a moderately saturated color still reads as
//! a hue. The band is bounded by two quadratics in saturation.

use crate::constants::shade::{
    BAND_MARGIN, CEILING_COEFFICIENTS, FLOOR_COEFFICIENTS, MAX_BANDED_SATURATION, MIN_LIGHTNESS,
    MIN_SATURATION,
};

/// Decide whether a color is a shade
///
/// # Arguments
///
/// * `saturation` - HSL saturation in percent
/// * `lightness` - HSL lightness in percent
pub fn is_shade(saturation: f64, lightness: f64) -> bool {
    if lightness < MIN_LIGHTNESS || saturation < MIN_SATURATION {
        return true;
    }
    if saturation > MAX_BANDED_SATURATION {
        return false;
    }

    let lower = lightness_floor(saturation) - BAND_MARGIN;
    let upper = lightness_ceiling(saturation) + BAND_MARGIN;
    !(lower < lightness && lightness < upper)
}

/// Lower lightness bound of the hue band, before the margin
pub fn lightness_floor(saturation: f64) -> f64 {
    quadratic(FLOOR_COEFFICIENTS, saturation)
}

/// Upper lightness bound of the hue band, before the margin
pub fn lightness_ceiling(saturation: f64) -> f64 {
    quadratic(CEILING_COEFFICIENTS, saturation)
}

fn quadratic([a, b, c]: [f64; 3], x: f64) -> f64 {
    a * x * x + b * x + c
}
