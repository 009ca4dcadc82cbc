//! Dominant-color selection.
//!
//! Reduces a [`HueHistogram`] to a single swatch: the strongest hue bucket
//! re-rendered at a fixed lightness, a flat silver for neutral icons, or
//! nothing when the icon has no usable pixels at all.

use crate::classify::HueHistogram;
use crate::color::{hls_to_rgb, rgb_to_hls, Rgb};
use crate::options::SwatchOptions;

impl HueHistogram {
    /// Select the representative swatch for this histogram.
    ///
    /// Bucket strength is the sum of member saturations. The scan uses a
    /// strict greater-than comparison in index order, so equal-strength
    /// buckets resolve to the lowest hue index, and empty buckets can never
    /// win. A winning bucket is only accepted when bucketed pixels exceed
    /// `coverage_ratio` of all solid pixels; otherwise the icon is treated
    /// as neutral and falls back to the grey pool.
    ///
    /// Pure function of the histogram: calling it repeatedly yields the
    /// same result.
    pub fn swatch(&self, opts: &SwatchOptions) -> Option<Rgb> {
        let mut best_bucket = None;
        let mut max_strength = 0.0f32;

        for (index, bucket) in self.buckets().iter().enumerate() {
            let strength: f32 = bucket.iter().map(|p| p.saturation).sum();
            if strength > max_strength {
                max_strength = strength;
                best_bucket = Some(index);
            }
        }

        if let Some(index) = best_bucket {
            let coverage_floor = self.total_opaque() as f32 * opts.coverage_ratio;
            if self.total_colored() as f32 > coverage_floor {
                return Some(prime_color(self, index, opts));
            }
        }

        if !self.greys().is_empty() {
            // Individual grey pixels keep whatever tint the icon art gave
            // them; the fallback ignores that and returns one fixed silver
            // so every neutral material reads the same in the UI.
            let v = (opts.grey_lightness * 255.0).round().clamp(0.0, 255.0) as u8;
            return Some(Rgb::new(v, v, v));
        }

        None
    }
}

/// Average the winning bucket and re-render it at the normalized lightness
/// with boosted saturation. Hue is preserved.
fn prime_color(histogram: &HueHistogram, index: usize, opts: &SwatchOptions) -> Rgb {
    let bucket = histogram.bucket(index);
    let count = bucket.len() as f32;

    let avg_r = bucket.iter().map(|p| p.r as f32).sum::<f32>() / count;
    let avg_g = bucket.iter().map(|p| p.g as f32).sum::<f32>() / count;
    let avg_b = bucket.iter().map(|p| p.b as f32).sum::<f32>() / count;

    let hls = rgb_to_hls(avg_r / 255.0, avg_g / 255.0, avg_b / 255.0);
    let s = (hls.s * opts.saturation_boost).min(1.0);
    let (r, g, b) = hls_to_rgb(hls.h, opts.prime_lightness, s);

    Rgb::from_unit(r, g, b)
}
