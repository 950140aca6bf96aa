//! Integration tests for the scan pipeline
//!
//! These tests validate the end-to-end workflow including:
//! - File loading and error reporting
//! - Token extraction and normalization
//! - Shade/hue partitioning and rebalancing
//! - Ordering and rendering of the result

use hexscan::{
    render, scan_file, scan_text, Category, ColorClassifier, Partition, ScanConfig, ScanError,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::path::PathBuf;

fn hexes(partition: &Partition, category: Category) -> Vec<String> {
    partition
        .colors(category)
        .iter()
        .map(|c| c.hex.to_string())
        .collect()
}

fn temp_file(name: &str, content: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("hexscan-it-{}-{}", std::process::id(), name));
    std::fs::write(&path, content).unwrap();
    path
}

/// A mixed palette covering every category, dark and light tones, and
/// near-neutrals on both sides of the shade bands
const PALETTE: &[&str] = &[
    "#000", "#fff", "#808080", "#1e293b", "#f1f5f9", "#ff0000", "#b91c1c", "#fecaca", "#ffff00",
    "#ca8a04", "#fef08a", "#00ff00", "#15803d", "#bbf7d0", "#00ffff", "#0e7490", "#a5f3fc",
    "#0000ff", "#1d4ed8", "#bfdbfe", "#ff00ff", "#a21caf", "#f5d0fe", "#71718e", "#808099",
    "#7a7a85", "#8a8a70", "#12345", "#FF000080", "#abcd",
];

fn palette_unique() -> BTreeSet<String> {
    let classifier = ColorClassifier::new();
    classifier
        .measure(PALETTE)
        .into_iter()
        .map(|c| c.hex.to_string())
        .collect()
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn test_primaries() {
    let partition = ColorClassifier::new().classify(["#ff0000", "#00ff00", "#0000ff"]);

    assert_eq!(hexes(&partition, Category::Reds), vec!["#ff0000"]);
    assert_eq!(hexes(&partition, Category::Greens), vec!["#00ff00"]);
    assert_eq!(hexes(&partition, Category::Blues), vec!["#0000ff"]);
    assert!(partition.shades().is_empty());
}

#[test]
fn test_neutrals() {
    let partition = ColorClassifier::new().classify(["#ffffff", "#000000", "#808080"]);

    assert_eq!(partition.shades().len(), 3);
    for category in Category::ALL.into_iter().filter(|c| c.is_hue()) {
        assert!(partition.colors(category).is_empty());
    }
}

#[test]
fn test_spellings_collapse_to_one() {
    let partition = ColorClassifier::new().classify(["#fff", "#FFF", "#ffffff"]);

    assert_eq!(hexes(&partition, Category::Shades), vec!["#ffffff"]);
    assert_eq!(partition.total(), 1);
}

#[test]
fn test_alpha_is_discarded() {
    let partition = ColorClassifier::new().classify(["#ff0000ff"]);
    assert_eq!(hexes(&partition, Category::Reds), vec!["#ff0000"]);
}

#[test]
fn test_single_reassignment_into_missing_category() {
    let partition = ColorClassifier::new().classify([
        "#ff0000", "#ffff00", "#00ff00", "#00ffff", "#ff00ff", "#71718e", "#808099",
    ]);

    assert_eq!(partition.reassignments().len(), 1);
    assert_eq!(partition.reassignments()[0].category, Category::Blues);
    assert_eq!(hexes(&partition, Category::Blues), vec!["#71718e"]);
    assert_eq!(hexes(&partition, Category::Shades), vec!["#808099"]);
}

// ============================================================================
// Property Tests
// ============================================================================

#[test]
fn test_partition_is_complete_and_exclusive() {
    let classifier = ColorClassifier::new();
    let expected = palette_unique();

    let initial = classifier.partition(classifier.measure(PALETTE));
    let rebalanced = classifier.rebalance(initial.clone());

    for partition in [&initial, &rebalanced] {
        let listed: Vec<String> = partition
            .iter()
            .flat_map(|(_, colors)| colors.iter().map(|c| c.hex.to_string()))
            .collect();
        let unique: BTreeSet<String> = listed.iter().cloned().collect();

        assert_eq!(listed.len(), unique.len(), "a color appears twice");
        assert_eq!(unique, expected);
        assert_eq!(partition.total(), expected.len());
    }
}

#[test]
fn test_rebalancing_bounds() {
    let classifier = ColorClassifier::new();
    let initial = classifier.partition(classifier.measure(PALETTE));
    let rebalanced = classifier.rebalance(initial.clone());

    assert!(rebalanced.shades().len() <= initial.shades().len());
    for category in Category::ALL.into_iter().filter(|c| c.is_hue()) {
        let before = initial.colors(category);
        let after = rebalanced.colors(category);
        if before.is_empty() {
            assert!(after.len() <= 1);
        } else {
            assert_eq!(after, before);
        }
    }
}

#[test]
fn test_sequences_are_luminance_ordered() {
    let partition = ColorClassifier::new().classify(PALETTE);

    for (category, colors) in partition.iter() {
        let ordered = colors
            .windows(2)
            .all(|pair| pair[0].luminance <= pair[1].luminance);
        assert!(ordered, "{category} is out of luminance order");
    }
}

#[test]
fn test_input_order_does_not_matter() {
    let mut reversed = PALETTE.to_vec();
    reversed.reverse();

    let forward = ColorClassifier::new().classify(PALETTE);
    let backward = ColorClassifier::new().classify(reversed);

    assert_eq!(render::css(&forward), render::css(&backward));
}

#[test]
fn test_malformed_token_sorts_with_black() {
    let partition = ColorClassifier::new().classify(PALETTE);
    let darkest: Vec<String> = partition.shades()[..2]
        .iter()
        .map(|c| c.hex.to_string())
        .collect();

    // luminance ties are broken by hex digits
    assert_eq!(darkest, vec!["#000000", "#12345"]);
    assert_eq!(partition.shades()[1].luminance, 0.0);
}

// ============================================================================
// File Pipeline Tests
// ============================================================================

#[test]
fn test_scan_file() {
    let path = temp_file(
        "theme.css",
        b":root { --a: #F00; --b: #f00; }\n.x { color: #00ff00; border: 1px solid #000; }",
    );

    let partition = scan_file(&path, &ScanConfig::default()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(partition.total(), 3);
    assert_eq!(hexes(&partition, Category::Reds), vec!["#ff0000"]);
    assert_eq!(hexes(&partition, Category::Greens), vec!["#00ff00"]);
    assert_eq!(hexes(&partition, Category::Shades), vec!["#000000"]);
}

#[test]
fn test_scan_file_without_colors() {
    let path = temp_file("plain.txt", b"nothing to see here");

    let partition = scan_file(&path, &ScanConfig::default()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(partition.is_empty());
}

#[test]
fn test_scan_file_not_found() {
    let result = scan_file(
        &std::env::temp_dir().join("hexscan-definitely-missing.css"),
        &ScanConfig::default(),
    );

    match result {
        Err(ScanError::FileNotFound { .. }) => {}
        other => panic!("Expected FileNotFound, got: {:?}", other),
    }
}

#[test]
fn test_scan_file_binary() {
    let path = temp_file("image.png", &[0x89, 0x50, 0x4e, 0x47, 0xff, 0xd8]);

    let result = scan_file(&path, &ScanConfig::default());
    std::fs::remove_file(&path).unwrap();

    let err = result.unwrap_err();
    assert!(matches!(err, ScanError::Decode { .. }));
    assert!(err.to_string().contains("Is it a binary file?"));
}

#[test]
fn test_scan_text_css_output() {
    let partition = scan_text("body { color: #333; background: #fafafa; }", &ScanConfig::default())
        .unwrap();

    let css = render::css(&partition);
    assert!(css.starts_with("/* Total unique colors: 2 */\n"));
    assert!(css.contains("    --shade-1: #333333;\n    --shade-2: #fafafa;\n"));
    assert!(css.ends_with("Colors {\n}\n"));
}
