//! Rendering of classification results
//!
//! - [`css`]: CSS custom properties, one block per non-empty category
//! - [`json`]: pretty-printed [`ColorReport`]

use std::fmt::Write;

use crate::{classify::Partition, color::Category, ColorReport, Result, ScanError};

/// Render a partition as CSS custom properties
///
/// The Shades block is always present; hue blocks only when non-empty.
/// Properties are numbered from 1 within each category.
pub fn css(partition: &Partition) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = write_css(&mut out, partition);
    out
}

fn write_css(out: &mut String, partition: &Partition) -> std::fmt::Result {
    writeln!(out, "/* Total unique colors: {} */", partition.total())?;
    writeln!(out)?;

    writeln!(out, "Shades: {{")?;
    for (i, color) in partition.shades().iter().enumerate() {
        writeln!(out, "    --{}-{}: {};", Category::Shades.singular(), i + 1, color.hex)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "Colors {{")?;
    for (category, colors) in partition.iter().filter(|(c, _)| c.is_hue()) {
        if colors.is_empty() {
            continue;
        }
        writeln!(out, "  {} {{", category.name())?;
        for (i, color) in colors.iter().enumerate() {
            writeln!(out, "    --{}-{}: {};", category.singular(), i + 1, color.hex)?;
        }
        writeln!(out, "  }}")?;
        writeln!(out)?;
    }
    writeln!(out, "}}")
}

/// Render a partition as a pretty-printed JSON report
pub fn json(partition: &Partition) -> Result<String> {
    serde_json::to_string_pretty(&ColorReport::from(partition))
        .map_err(|e| ScanError::config("failed to serialize report", e))
}
