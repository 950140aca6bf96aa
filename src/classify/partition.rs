//! Shade/hue partitioning with a single rebalancing pass
//!
//! Classification runs in three steps:
//! - Normalize, deduplicate and measure every token, then sort by luminance
//! - Split the sorted colors into shades and hue categories
//! - Let each empty hue category adopt at most one borderline shade
//!
//! Sorting happens first and every later step is a stable filter, so each
//! output sequence stays in ascending luminance order.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::{
    classify::shade::is_shade,
    color::{Category, ColorConverter, HexColor, HexNormalizer, HslTriple, HueTable, HUE_TABLE},
    config::ScanConfig,
    constants::rebalance::{MIN_SATURATION, SATURATION_BOOST},
};

/// A color with its derived measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedColor {
    pub hex: HexColor,
    pub hsl: HslTriple,
    pub luminance: f64,
}

/// A shade moved into an empty hue category by the rebalancer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reassignment {
    pub hex: HexColor,
    pub category: Category,
}

/// Final assignment of colors to categories
///
/// All six hue categories are always present, possibly empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    shades: Vec<ClassifiedColor>,
    hues: BTreeMap<Category, Vec<ClassifiedColor>>,
    reassignments: Vec<Reassignment>,
}

impl Partition {
    fn empty(table: &HueTable) -> Self {
        Self {
            shades: Vec::new(),
            hues: table.categories().map(|category| (category, Vec::new())).collect(),
            reassignments: Vec::new(),
        }
    }

    /// Shades in ascending luminance order
    pub fn shades(&self) -> &[ClassifiedColor] {
        &self.shades
    }

    /// Colors of one category in ascending luminance order
    pub fn colors(&self, category: Category) -> &[ClassifiedColor] {
        match category {
            Category::Shades => &self.shades,
            hue => self.hues.get(&hue).map(Vec::as_slice).unwrap_or_default(),
        }
    }

    /// Every category with its colors, in output order, empty ones included
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[ClassifiedColor])> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.colors(category)))
    }

    /// Shades moved by the rebalancer, in the order they were moved
    pub fn reassignments(&self) -> &[Reassignment] {
        &self.reassignments
    }

    /// Number of unique colors across all categories
    pub fn total(&self) -> usize {
        self.shades.len() + self.hues.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Classifier turning hex tokens into a [`Partition`]
#[derive(Debug, Clone, Copy)]
pub struct ColorClassifier {
    converter: ColorConverter,
    normalizer: HexNormalizer,
    table: HueTable,
    rebalance: bool,
}

impl Default for ColorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorClassifier {
    /// Create a classifier with the standard hue table and rebalancing on
    pub fn new() -> Self {
        Self {
            converter: ColorConverter::new(),
            normalizer: HexNormalizer::new(),
            table: HUE_TABLE,
            rebalance: true,
        }
    }

    /// Create a classifier from a scan configuration
    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            normalizer: HexNormalizer::with_policy(config.short_alpha),
            rebalance: config.rebalance,
            ..Self::new()
        }
    }

    /// Use a different hue table
    pub fn with_table(mut self, table: HueTable) -> Self {
        self.table = table;
        self
    }

    /// Classify a set of hex tokens
    ///
    /// # Arguments
    ///
    /// * `tokens` - Hex tokens in any accepted notation; spellings that
    ///   normalize to the same value count once
    ///
    /// # Returns
    ///
    /// `Partition` with every unique color in exactly one category
    pub fn classify<I, S>(&self, tokens: I) -> Partition
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = self.measure(tokens);
        let partition = self.partition(colors);
        let partition = if self.rebalance {
            self.rebalance(partition)
        } else {
            partition
        };

        debug!(
            total = partition.total(),
            shades = partition.shades.len(),
            reassigned = partition.reassignments.len(),
            "classified colors"
        );
        partition
    }

    /// Normalize, deduplicate and measure tokens, sorted by luminance
    ///
    /// Ties are broken by hex digits so the order never depends on input
    /// order.
    pub fn measure<I, S>(&self, tokens: I) -> Vec<ClassifiedColor>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: BTreeSet<HexColor> = tokens
            .into_iter()
            .map(|token| self.normalizer.normalize(token.as_ref()))
            .collect();

        let mut colors: Vec<ClassifiedColor> = unique
            .into_iter()
            .map(|hex| ClassifiedColor {
                hsl: self.converter.to_hsl(&hex),
                luminance: self.converter.to_luminance(&hex),
                hex,
            })
            .collect();

        colors.sort_by(|a, b| {
            a.luminance
                .total_cmp(&b.luminance)
                .then_with(|| a.hex.cmp(&b.hex))
        });
        colors
    }

    /// Initial split into shades and hue categories
    ///
    /// `colors` must already be in the desired order.
    pub fn partition(&self, colors: Vec<ClassifiedColor>) -> Partition {
        let mut partition = Partition::empty(&self.table);

        for color in colors {
            if is_shade(color.hsl.saturation, color.hsl.lightness) {
                partition.shades.push(color);
            } else {
                let category = self.table.categorize(color.hsl.hue);
                partition.hues.entry(category).or_default().push(color);
            }
        }

        partition
    }

    /// Fill empty hue categories from borderline shades
    ///
    /// Each empty category, in table order, takes the first shade (in
    /// luminance order) whose hue falls in it and which stops being a shade
    /// once its saturation is boosted. Categories that already hold colors
    /// are left alone.
    pub fn rebalance(&self, mut partition: Partition) -> Partition {
        let mut moved: Vec<usize> = Vec::new();

        for category in self.table.categories() {
            let is_empty = partition.hues.get(&category).map_or(true, Vec::is_empty);
            if !is_empty {
                continue;
            }

            let candidate = partition
                .shades
                .iter()
                .position(|shade| self.fits_relaxed(shade, category));

            if let Some(index) = candidate {
                let shade = partition.shades[index].clone();
                debug!(color = %shade.hex, %category, "reassigning shade to empty category");

                partition.reassignments.push(Reassignment {
                    hex: shade.hex.clone(),
                    category,
                });
                partition.hues.entry(category).or_default().push(shade);
                moved.push(index);
            }
        }

        if !moved.is_empty() {
            let mut index = 0;
            partition.shades.retain(|_| {
                let keep = !moved.contains(&index);
                index += 1;
                keep
            });
        }

        partition
    }

    /// Relaxed test: right hue, some saturation, and a hue once boosted
    fn fits_relaxed(&self, shade: &ClassifiedColor, category: Category) -> bool {
        let HslTriple {
            hue,
            saturation,
            lightness,
        } = shade.hsl;

        self.table.categorize(hue) == category
            && saturation > MIN_SATURATION
            && !is_shade(saturation + SATURATION_BOOST, lightness)
    }
}
