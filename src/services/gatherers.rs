//! Splitting gathering recipes out of the recipe list.
//!
//! Resource collection is modeled in the pack as recipes under a dedicated
//! category; the planner wants them as a separate `gatherers` table with a
//! per-second extraction rate instead.

use crate::models::{Gatherer, Pack};

/// Move every recipe whose category matches out of `recipes` and into
/// `gatherers`, converted. Returns the number extracted.
///
/// Non-matching recipes keep their relative order. Any previously derived
/// gatherers are replaced, not appended to.
pub fn split_gatherers(pack: &mut Pack, category: &str) -> usize {
    let mut gatherers = Vec::new();
    let mut remaining = Vec::new();

    for recipe in pack.recipes.drain(..) {
        if recipe.category.as_deref() == Some(category) {
            gatherers.push(Gatherer::from_recipe(&recipe));
        } else {
            remaining.push(recipe);
        }
    }

    pack.recipes = remaining;
    pack.gatherers = gatherers;
    pack.gatherers.len()
}
