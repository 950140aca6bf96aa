//! Color categories and the hue table
//!
//! The hue wheel is split into six contiguous buckets of 60°. Reds wrap
//! around 0°, so they own two ranges. The order of [`HUE_TABLE`] is the
//! order in which categories are enumerated by the rebalancer and by the
//! renderers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output bucket for a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Shades,
    Reds,
    Yellows,
    Greens,
    Cyans,
    Blues,
    Magentas,
}

impl Category {
    /// Every category in output order
    pub const ALL: [Category; 7] = [
        Category::Shades,
        Category::Reds,
        Category::Yellows,
        Category::Greens,
        Category::Cyans,
        Category::Blues,
        Category::Magentas,
    ];

    /// Plural display name, e.g. `Reds`
    pub fn name(self) -> &'static str {
        match self {
            Category::Shades => "Shades",
            Category::Reds => "Reds",
            Category::Yellows => "Yellows",
            Category::Greens => "Greens",
            Category::Cyans => "Cyans",
            Category::Blues => "Blues",
            Category::Magentas => "Magentas",
        }
    }

    /// Lowercase singular used in CSS property names, e.g. `red`
    pub fn singular(self) -> &'static str {
        match self {
            Category::Shades => "shade",
            Category::Reds => "red",
            Category::Yellows => "yellow",
            Category::Greens => "green",
            Category::Cyans => "cyan",
            Category::Blues => "blue",
            Category::Magentas => "magenta",
        }
    }

    pub fn is_hue(self) -> bool {
        self != Category::Shades
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A span of hue degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueRange {
    pub start: f64,
    pub end: f64,
    /// Whether `end` itself belongs to the range
    pub end_inclusive: bool,
}

impl HueRange {
    /// `[start, end)`
    pub const fn half_open(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            end_inclusive: false,
        }
    }

    /// `[start, end]`
    pub const fn closed(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            end_inclusive: true,
        }
    }

    pub fn contains(&self, hue: f64) -> bool {
        hue >= self.start && (hue < self.end || (self.end_inclusive && hue == self.end))
    }
}

/// A hue category and the ranges it owns
#[derive(Debug, Clone, Copy)]
pub struct CategoryDescriptor {
    pub category: Category,
    pub ranges: &'static [HueRange],
}

impl CategoryDescriptor {
    pub fn contains(&self, hue: f64) -> bool {
        self.ranges.iter().any(|range| range.contains(hue))
    }
}

/// Ordered hue-to-category mapping
#[derive(Debug, Clone, Copy)]
pub struct HueTable {
    descriptors: &'static [CategoryDescriptor],
    /// Category for hues no descriptor claims
    fallback: Category,
}

/// Six 60° buckets, Reds first
pub const HUE_TABLE: HueTable = HueTable {
    descriptors: &[
        CategoryDescriptor {
            category: Category::Reds,
            ranges: &[HueRange::half_open(0.0, 30.0), HueRange::closed(330.0, 360.0)],
        },
        CategoryDescriptor {
            category: Category::Yellows,
            ranges: &[HueRange::half_open(30.0, 90.0)],
        },
        CategoryDescriptor {
            category: Category::Greens,
            ranges: &[HueRange::half_open(90.0, 150.0)],
        },
        CategoryDescriptor {
            category: Category::Cyans,
            ranges: &[HueRange::half_open(150.0, 210.0)],
        },
        CategoryDescriptor {
            category: Category::Blues,
            ranges: &[HueRange::half_open(210.0, 270.0)],
        },
        CategoryDescriptor {
            category: Category::Magentas,
            ranges: &[HueRange::half_open(270.0, 330.0)],
        },
    ],
    fallback: Category::Magentas,
};

impl Default for HueTable {
    fn default() -> Self {
        HUE_TABLE
    }
}

impl HueTable {
    /// Map a hue in degrees to its category
    ///
    /// Total: hues outside [0, 360] (and NaN) map to the fallback.
    pub fn categorize(&self, hue: f64) -> Category {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.contains(hue))
            .map_or(self.fallback, |descriptor| descriptor.category)
    }

    /// Hue categories in enumeration order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.descriptors.iter().map(|descriptor| descriptor.category)
    }
}
