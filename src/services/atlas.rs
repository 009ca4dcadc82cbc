//! Atlas loading, cell sampling, and the per-item walk.
//!
//! The walk drives one icon at a time: sample the cell's pixels, classify
//! them, select a swatch, move on. Per-item failures degrade to a
//! [`Diagnostic`]; only a missing or malformed atlas aborts the run.

use std::collections::BTreeMap;
use std::path::Path;

use hue_swatch::{HueHistogram, SwatchOptions};
use image::RgbaImage;

use crate::error::AtlasError;
use crate::models::{GridConfig, Item};
use crate::services::report::Diagnostic;

/// Decode the sprite atlas and check it against the grid geometry.
///
/// The image is converted to RGBA8 up front, so sources without an alpha
/// channel arrive fully opaque. A width that disagrees with
/// `columns x icon_size` means the grid configuration is wrong for this
/// atlas, which is fatal before any item is processed. Height is not
/// checked here; it is validated per item against each cell's bottom edge.
pub fn load_atlas(path: &Path, grid: &GridConfig) -> Result<RgbaImage, AtlasError> {
    if !path.exists() {
        return Err(AtlasError::NotFound(path.to_path_buf()));
    }

    let atlas = image::open(path)?.to_rgba8();

    let expected = grid.atlas_width();
    if atlas.width() != expected {
        return Err(AtlasError::GridMismatch {
            actual: atlas.width(),
            columns: grid.columns,
            icon_size: grid.icon_size,
            expected,
        });
    }

    Ok(atlas)
}

/// Yield the `[r, g, b, a]` pixels of one square cell in row-major order.
///
/// Callers must ensure the cell lies within the image.
pub fn cell_pixels(
    atlas: &RgbaImage,
    x0: u32,
    y0: u32,
    size: u32,
) -> impl Iterator<Item = [u8; 4]> + '_ {
    (0..size).flat_map(move |dy| (0..size).map(move |dx| atlas.get_pixel(x0 + dx, y0 + dy).0))
}

/// Result of walking the item list: the id-to-hex mapping plus every
/// per-item diagnostic, in iteration order.
#[derive(Debug, Clone)]
pub struct WalkOutcome {
    pub colors: BTreeMap<String, String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Walk every item once, in manifest order, and collect swatches.
///
/// Items whose cell falls outside the atlas, or whose cell yields no
/// swatch, are recorded as diagnostics and left out of the mapping; they
/// never appear with an empty value.
pub fn walk_atlas(
    atlas: &RgbaImage,
    items: &[Item],
    grid: &GridConfig,
    opts: &SwatchOptions,
) -> WalkOutcome {
    let mut colors = BTreeMap::new();
    let mut diagnostics = Vec::new();

    for item in items {
        let (x0, y0) = grid.cell_origin(item.icon_index);

        if y0 + grid.icon_size > atlas.height() {
            tracing::debug!(
                id = %item.id,
                icon_index = item.icon_index,
                "Cell outside atlas, skipping"
            );
            diagnostics.push(Diagnostic::OutOfBounds {
                icon_index: item.icon_index,
                name: item.name.clone(),
                atlas_height: atlas.height(),
            });
            continue;
        }

        let histogram =
            HueHistogram::classify(cell_pixels(atlas, x0, y0, grid.icon_size), opts);

        match histogram.swatch(opts) {
            Some(swatch) => {
                colors.insert(item.id.clone(), swatch.to_hex());
            }
            None => {
                tracing::debug!(
                    id = %item.id,
                    total_opaque = histogram.total_opaque(),
                    "No swatch for item"
                );
                diagnostics.push(Diagnostic::NoValidPixels {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    icon_index: item.icon_index,
                    total_opaque: histogram.total_opaque(),
                });
            }
        }
    }

    WalkOutcome {
        colors,
        diagnostics,
    }
}
