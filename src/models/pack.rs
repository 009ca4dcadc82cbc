use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The planner's pack manifest.
///
/// Only the parts this tool touches are modeled; everything else in the
/// file rides along in `extra` so a read-modify-write cycle does not drop
/// fields the planner depends on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pack {
    /// Items, each pointing at a cell of the sprite atlas
    #[serde(default)]
    pub items: Vec<Item>,

    /// Crafting recipes
    #[serde(default)]
    pub recipes: Vec<Recipe>,

    /// Resource-collection pseudo-recipes, derived from `recipes`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gatherers: Vec<Gatherer>,

    /// Unmodeled pack fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One item of the pack, keyed into the sprite atlas by `iconIndex`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,

    /// Display name, used in diagnostics only
    #[serde(default)]
    pub name: String,

    /// Cell index into the atlas grid, row-major
    pub icon_index: u32,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One crafting recipe. Modeled just deeply enough to recognize gathering
/// recipes and convert them; optional fields stay absent on write when they
/// were absent on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<String>,

    /// Seconds per craft
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crafting_time: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<RecipeOutput>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One output slot of a recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeOutput {
    #[serde(default)]
    pub item_id: String,

    #[serde(default = "default_amount")]
    pub amount: f64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_amount() -> f64 {
    1.0
}

/// A gatherer entry derived from a gathering recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Gatherer {
    pub id: String,
    pub name: String,
    pub machine_id: String,
    pub output_item_id: String,
    pub output_amount: f64,
    /// Items per second per vein/seep
    pub extraction_rate: f64,
}

impl Gatherer {
    /// Convert a gathering recipe to its gatherer form.
    ///
    /// The extraction rate is the first output's amount over the crafting
    /// time; a missing or non-positive crafting time counts as one second.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let output = recipe.outputs.as_ref().and_then(|outputs| outputs.first());
        let output_amount = output.map(|o| o.amount).unwrap_or(1.0);
        let output_item_id = output.map(|o| o.item_id.clone()).unwrap_or_default();

        let crafting_time = match recipe.crafting_time {
            Some(t) if t > 0.0 => t,
            _ => 1.0,
        };

        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            machine_id: recipe.machine_id.clone().unwrap_or_default(),
            output_item_id,
            output_amount,
            extraction_rate: output_amount / crafting_time,
        }
    }
}
