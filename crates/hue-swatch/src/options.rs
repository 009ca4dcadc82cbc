//! Extraction options and thresholds.
//!
//! This module provides the [`SwatchOptions`] struct that tunes both pixel
//! classification and dominant-color selection.

/// Configuration for swatch extraction.
///
/// The defaults are tuned for small UI icons on transparent backgrounds:
/// translucent edge pixels are ignored, near-black outlines and near-white
/// highlights are excluded, and an icon only counts as "colored" when a
/// meaningful share of its solid pixels carry saturation.
///
/// # Example
///
/// ```
/// use hue_swatch::SwatchOptions;
///
/// let options = SwatchOptions::new().coverage_ratio(0.25).saturation_boost(1.2);
/// assert_eq!(options.alpha_min, 64);
/// ```
#[derive(Debug, Clone)]
pub struct SwatchOptions {
    /// Minimum alpha for a pixel to count as solid (0..=255).
    pub alpha_min: u8,

    /// Pixels with lightness below this are treated as outline/shadow and
    /// excluded from classification.
    pub lightness_min: f32,

    /// Pixels with lightness above this are treated as highlight/glare and
    /// excluded from classification.
    pub lightness_max: f32,

    /// Saturation below this (strictly) sends a pixel to the grey pool
    /// instead of a hue bucket.
    pub grey_saturation: f32,

    /// Fraction of solid pixels that must be hue-bucketed before a dominant
    /// hue is accepted; below it the icon is treated as neutral.
    pub coverage_ratio: f32,

    /// Saturation multiplier applied to the winning cluster's average color,
    /// capped at 1.0.
    pub saturation_boost: f32,

    /// Fixed lightness of every accepted dominant-hue swatch.
    pub prime_lightness: f32,

    /// Fixed lightness of the neutral fallback swatch.
    pub grey_lightness: f32,
}

impl Default for SwatchOptions {
    fn default() -> Self {
        Self {
            alpha_min: 64,
            lightness_min: 0.10,
            lightness_max: 0.95,
            grey_saturation: 0.20,
            coverage_ratio: 0.15,
            saturation_boost: 1.5,
            prime_lightness: 0.55,
            grey_lightness: 0.65,
        }
    }
}

impl SwatchOptions {
    /// Create options with the default thresholds.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum fraction of solid pixels that must be colored.
    #[inline]
    pub fn coverage_ratio(mut self, ratio: f32) -> Self {
        self.coverage_ratio = ratio;
        self
    }

    /// Set the saturation multiplier for accepted swatches.
    #[inline]
    pub fn saturation_boost(mut self, factor: f32) -> Self {
        self.saturation_boost = factor;
        self
    }

    /// Set the saturation below which pixels are pooled as grey.
    #[inline]
    pub fn grey_saturation(mut self, threshold: f32) -> Self {
        self.grey_saturation = threshold;
        self
    }

    /// Set the fixed lightness of dominant-hue swatches.
    #[inline]
    pub fn prime_lightness(mut self, lightness: f32) -> Self {
        self.prime_lightness = lightness;
        self
    }
}
