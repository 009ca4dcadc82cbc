pub mod atlas;
pub mod gatherers;
pub mod icon_patch;
pub mod pack_store;
pub mod report;

pub use atlas::{cell_pixels, load_atlas, walk_atlas, WalkOutcome};
pub use gatherers::split_gatherers;
pub use icon_patch::{apply_overrides, IconOverride, PatchOutcome};
pub use report::{Diagnostic, RunReport};
