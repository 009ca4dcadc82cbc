//! Icontint
//!
//! Derives one representative accent color per icon from a sprite atlas,
//! for tinting item UI in the planner. Also carries the small pack-manifest
//! maintenance tools that live alongside the color run.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
