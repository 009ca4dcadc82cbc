//! hue-swatch: dominant-color extraction for icon swatches
//!
//! Given the pixels of one small icon, this library produces a single
//! representative accent color, or decides the icon is neutral, or gives up
//! when there is nothing usable to look at. It has no opinion about where
//! the pixels come from; callers feed it `[r, g, b, a]` values.
//!
//! # Quick Start
//!
//! ```
//! use hue_swatch::{HueHistogram, SwatchOptions};
//!
//! let options = SwatchOptions::default();
//! let pixels = vec![[200u8, 40, 40, 255]; 16];
//!
//! let histogram = HueHistogram::classify(pixels, &options);
//! let swatch = histogram.swatch(&options).unwrap();
//! assert!(swatch.to_hex().starts_with('#'));
//! ```
//!
//! # How Selection Works
//!
//! Classification converts every solid pixel (alpha at or above the opacity
//! threshold) to HLS. Pixels at extreme lightness are discarded as outline
//! or glare; low-saturation pixels pool as grey; the rest land in one of 36
//! ten-degree hue buckets.
//!
//! Selection then weighs each bucket by its summed saturation and takes the
//! heaviest one, provided bucketed pixels make up more than a configurable
//! share of all solid pixels. The winner's average color is re-rendered at
//! a fixed lightness with boosted saturation, so swatches from bright and
//! muddy icons alike read at comparable visual weight. Icons without enough
//! hue signal fall back to one fixed silver; icons with no qualifying
//! pixels at all yield no swatch.
//!
//! The fixed output lightness deliberately overrides the source icon's
//! measured lightness. That flattening is the point: the swatches are UI
//! accents, not reproductions.

pub mod classify;
pub mod color;
pub mod options;
pub mod select;

pub use classify::{bucket_index, BucketPixel, GreyPixel, HueHistogram, BUCKET_COUNT};
pub use color::{hls_to_rgb, rgb_to_hls, Hls, Rgb};
pub use options::SwatchOptions;
