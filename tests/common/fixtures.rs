//! Test fixtures: synthetic atlases and pack manifests.

use image::{Rgba, RgbaImage};
use serde_json::{json, Map, Value};

use icontint::models::Item;

/// Icon cell size used by all test atlases.
pub const ICON_SIZE: u32 = 8;

/// A fully transparent atlas of the given grid size.
pub fn blank_atlas(columns: u32, rows: u32) -> RgbaImage {
    RgbaImage::from_pixel(columns * ICON_SIZE, rows * ICON_SIZE, Rgba([0, 0, 0, 0]))
}

/// Fill one grid cell with a solid RGBA color.
pub fn fill_cell(atlas: &mut RgbaImage, columns: u32, index: u32, pixel: [u8; 4]) {
    let x0 = (index % columns) * ICON_SIZE;
    let y0 = (index / columns) * ICON_SIZE;
    for dy in 0..ICON_SIZE {
        for dx in 0..ICON_SIZE {
            atlas.put_pixel(x0 + dx, y0 + dy, Rgba(pixel));
        }
    }
}

/// One manifest item pointing at a grid cell.
pub fn item(id: &str, name: &str, icon_index: u32) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        icon_index,
        extra: Map::new(),
    }
}

/// A small pack manifest with items, recipes and an unmodeled top-level
/// field, as raw JSON.
pub fn sample_pack_json() -> Value {
    json!({
        "meta": {"game": "dsp", "schema": 2},
        "items": [
            {"id": "iron-ore", "name": "Iron Ore", "iconIndex": 0, "stackSize": 100},
            {"id": "water", "name": "Water", "iconIndex": 1}
        ],
        "recipes": [
            {
                "id": "smelt-iron",
                "name": "Smelt Iron",
                "category": "Smelting",
                "machineId": "smelter",
                "craftingTime": 1.0,
                "outputs": [{"itemId": "iron-ingot", "amount": 1.0}]
            },
            {
                "id": "mine-iron",
                "name": "Mine Iron Vein",
                "category": "Gathering",
                "machineId": "mining-machine",
                "craftingTime": 2.0,
                "outputs": [{"itemId": "iron-ore", "amount": 1.0}]
            }
        ]
    })
}
