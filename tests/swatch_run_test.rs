//! End-to-end swatch extraction over synthetic atlases on disk.

mod common;

use std::collections::BTreeMap;
use std::fs;

use hue_swatch::SwatchOptions;
use icontint::error::AtlasError;
use icontint::models::GridConfig;
use icontint::services::{self, Diagnostic, RunReport};
use pretty_assertions::assert_eq;

use common::fixtures::{blank_atlas, fill_cell, item, ICON_SIZE};

#[test]
fn full_run_produces_colors_and_report() {
    let dir = tempfile::tempdir().unwrap();
    let atlas_path = dir.path().join("icons.png");
    let colors_path = dir.path().join("itemColors.json");
    let report_path = dir.path().join("color_log.txt");

    let columns = 4;
    let mut atlas = blank_atlas(columns, 2);
    fill_cell(&mut atlas, columns, 0, [255, 0, 0, 255]); // solid red
    fill_cell(&mut atlas, columns, 1, [128, 128, 128, 255]); // flat grey
    // cell 2 stays fully transparent
    fill_cell(&mut atlas, columns, 3, [255, 0, 0, 40]); // translucent ghost
    atlas.save(&atlas_path).unwrap();

    let grid = GridConfig::new(ICON_SIZE, columns);
    let atlas = services::load_atlas(&atlas_path, &grid).unwrap();

    let items = vec![
        item("magma-rock", "Magma Rock", 0),
        item("steel-gear", "Steel Gear", 1),
        item("ghost", "Ghost", 2),
        item("film", "Film", 3),
        item("beyond", "Beyond", 9), // row 2 of a 2-row atlas
    ];

    let outcome = services::walk_atlas(&atlas, &items, &grid, &SwatchOptions::default());

    let mut expected = BTreeMap::new();
    expected.insert("magma-rock".to_string(), "#ff1a1a".to_string());
    expected.insert("steel-gear".to_string(), "#a6a6a6".to_string());
    assert_eq!(outcome.colors, expected);

    assert_eq!(
        outcome.diagnostics,
        vec![
            Diagnostic::NoValidPixels {
                id: "ghost".into(),
                name: "Ghost".into(),
                icon_index: 2,
                total_opaque: 0,
            },
            Diagnostic::NoValidPixels {
                id: "film".into(),
                name: "Film".into(),
                icon_index: 3,
                total_opaque: 0,
            },
            Diagnostic::OutOfBounds {
                icon_index: 9,
                name: "Beyond".into(),
                atlas_height: 16,
            },
        ]
    );

    services::pack_store::save_colors(&colors_path, &outcome.colors).unwrap();
    let written: BTreeMap<String, String> =
        serde_json::from_str(&fs::read_to_string(&colors_path).unwrap()).unwrap();
    assert_eq!(written, expected);

    let report = RunReport {
        atlas_width: atlas.width(),
        atlas_height: atlas.height(),
        colored: outcome.colors.len(),
        diagnostics: outcome.diagnostics,
    };
    report.write_to(&report_path).unwrap();

    let text = fs::read_to_string(&report_path).unwrap();
    assert!(text.starts_with("Atlas size: 32x16\n"));
    assert!(text.contains("Beyond"));
    assert!(text.ends_with("Done! Calculated colors for 2 items.\n"));
}

#[test]
fn missing_atlas_is_fatal_before_any_item() {
    let dir = tempfile::tempdir().unwrap();
    let error =
        services::load_atlas(&dir.path().join("icons.webp"), &GridConfig::default()).unwrap_err();
    assert!(matches!(error, AtlasError::NotFound(_)));
}

#[test]
fn atlas_width_must_match_grid() {
    let dir = tempfile::tempdir().unwrap();
    let atlas_path = dir.path().join("icons.png");
    blank_atlas(4, 1).save(&atlas_path).unwrap();

    // 5 columns of 8px would need a 40px-wide atlas; this one is 32px.
    let error = services::load_atlas(&atlas_path, &GridConfig::new(ICON_SIZE, 5)).unwrap_err();
    match error {
        AtlasError::GridMismatch {
            actual, expected, ..
        } => {
            assert_eq!(actual, 32);
            assert_eq!(expected, 40);
        }
        other => panic!("expected GridMismatch, got {other:?}"),
    }
}

/// Sources without an alpha channel decode as fully opaque and still get
/// swatches.
#[test]
fn opaque_source_formats_work() {
    let dir = tempfile::tempdir().unwrap();
    let atlas_path = dir.path().join("icons.png");

    let rgb = image::RgbImage::from_pixel(ICON_SIZE, ICON_SIZE, image::Rgb([0, 0, 255]));
    rgb.save(&atlas_path).unwrap();

    let grid = GridConfig::new(ICON_SIZE, 1);
    let atlas = services::load_atlas(&atlas_path, &grid).unwrap();
    let items = vec![item("blue-chip", "Blue Chip", 0)];

    let outcome = services::walk_atlas(&atlas, &items, &grid, &SwatchOptions::default());

    assert_eq!(outcome.colors.len(), 1);
    assert!(outcome.diagnostics.is_empty());
    // Pure blue re-rendered at the normalized lightness
    assert_eq!(outcome.colors["blue-chip"], "#1a1aff");
}
