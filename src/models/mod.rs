pub mod grid;
pub mod pack;

pub use grid::GridConfig;
pub use pack::{Gatherer, Item, Pack, Recipe, RecipeOutput};
