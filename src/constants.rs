//! Calibration constants for color classification
//!
//! These values are tuning data for the shade bands and the rebalancing
//! pass. They are not configuration: changing any of them changes which
//! bucket a color lands in.

/// Hex notation lengths, in digits (without the leading `#`)
pub mod hex {
    /// `#rgb`
    pub const SHORT_LEN: usize = 3;

    /// `#rgba`
    pub const SHORT_ALPHA_LEN: usize = 4;

    /// `#rrggbb`, the canonical form
    pub const FULL_LEN: usize = 6;

    /// `#rrggbbaa`
    pub const FULL_ALPHA_LEN: usize = 8;
}

/// Relative luminance weights (Rec. 709 primaries)
///
/// Applied to gamma-encoded channels in [0, 1]. The result is only used as
/// a sort key, so no linearization is performed.
pub mod luminance {
    pub const RED_WEIGHT: f64 = 0.2126;
    pub const GREEN_WEIGHT: f64 = 0.7152;
    pub const BLUE_WEIGHT: f64 = 0.0722;

    pub const WEIGHTS: [f64; 3] = [RED_WEIGHT, GREEN_WEIGHT, BLUE_WEIGHT];
}

/// Shade band thresholds, in HSL percent units
pub mod shade {
    /// Below this lightness every color is a shade
    pub const MIN_LIGHTNESS: f64 = 15.0;

    /// Below this saturation every color is a shade
    pub const MIN_SATURATION: f64 = 12.0;

    /// Above this saturation a color is a hue (unless too dark)
    pub const MAX_BANDED_SATURATION: f64 = 21.0;

    /// Widening applied to both lightness bounds
    pub const BAND_MARGIN: f64 = 5.0;

    /// Lower lightness bound `a·s² + b·s + c`
    pub const FLOOR_COEFFICIENTS: [f64; 3] = [0.15625, -6.375, 94.0];

    /// Upper lightness bound `a·s² + b·s + c`
    pub const CEILING_COEFFICIENTS: [f64; 3] = [0.09375, -0.875, 52.0];
}

/// Rebalancing gate and relaxation
pub mod rebalance {
    /// A shade must be strictly more saturated than this to move
    pub const MIN_SATURATION: f64 = 9.0;

    /// Saturation added before re-testing the shade bands
    pub const SATURATION_BOOST: f64 = 8.0;
}
