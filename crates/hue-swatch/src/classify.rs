//! Pixel classification into hue buckets.
//!
//! Every solid pixel of an icon is converted to HLS and sorted into one of
//! 36 ten-degree hue buckets, or into a separate grey pool when its
//! saturation is too low to carry a hue. The resulting [`HueHistogram`] is
//! the sole input to dominant-color selection.

use crate::color::rgb_to_hls;
use crate::options::SwatchOptions;

/// Number of hue buckets; each bucket spans 10 degrees of the hue circle.
pub const BUCKET_COUNT: usize = 36;

/// A pixel filed into a hue bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketPixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub saturation: f32,
    pub lightness: f32,
}

/// A low-saturation pixel filed into the grey pool.
#[derive(Debug, Clone, PartialEq)]
pub struct GreyPixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub lightness: f32,
}

/// Per-icon classification state: 36 hue buckets, a grey pool, and the
/// count of solid pixels.
///
/// Buckets preserve pixel visiting order. The histogram is built once per
/// icon and discarded after selection.
#[derive(Debug, Clone, PartialEq)]
pub struct HueHistogram {
    buckets: [Vec<BucketPixel>; BUCKET_COUNT],
    greys: Vec<GreyPixel>,
    total_opaque: usize,
}

impl Default for HueHistogram {
    fn default() -> Self {
        Self {
            buckets: std::array::from_fn(|_| Vec::new()),
            greys: Vec::new(),
            total_opaque: 0,
        }
    }
}

impl HueHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a whole pixel sequence in one pass.
    pub fn classify<I>(pixels: I, opts: &SwatchOptions) -> Self
    where
        I: IntoIterator<Item = [u8; 4]>,
    {
        let mut histogram = Self::new();
        for pixel in pixels {
            histogram.push(pixel, opts);
        }
        histogram
    }

    /// Classify a single `[r, g, b, a]` pixel.
    ///
    /// Translucent pixels (alpha below `alpha_min`) are dropped entirely.
    /// Solid pixels always count toward the opaque total, but only those
    /// inside the lightness band reach a bucket or the grey pool.
    pub fn push(&mut self, pixel: [u8; 4], opts: &SwatchOptions) {
        let [r, g, b, a] = pixel;

        if a < opts.alpha_min {
            return;
        }
        self.total_opaque += 1;

        let hls = rgb_to_hls(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
        );

        // Outline shadows and specular highlights say nothing about the
        // icon's material color.
        if hls.l < opts.lightness_min || hls.l > opts.lightness_max {
            return;
        }

        if hls.s < opts.grey_saturation {
            self.greys.push(GreyPixel {
                r,
                g,
                b,
                lightness: hls.l,
            });
        } else {
            self.buckets[bucket_index(hls.h)].push(BucketPixel {
                r,
                g,
                b,
                saturation: hls.s,
                lightness: hls.l,
            });
        }
    }

    /// All 36 hue buckets, in hue order.
    pub fn buckets(&self) -> &[Vec<BucketPixel>; BUCKET_COUNT] {
        &self.buckets
    }

    /// One hue bucket.
    pub fn bucket(&self, index: usize) -> &[BucketPixel] {
        &self.buckets[index]
    }

    /// The grey pool.
    pub fn greys(&self) -> &[GreyPixel] {
        &self.greys
    }

    /// Count of pixels with alpha at or above the opacity threshold,
    /// including those later excluded for extreme lightness.
    pub fn total_opaque(&self) -> usize {
        self.total_opaque
    }

    /// Count of pixels across all hue buckets.
    pub fn total_colored(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// Map a hue fraction in `[0, 1)` to its bucket index in `[0, 35]`.
///
/// A hue that wraps to exactly 1.0 maps to bucket 0, never bucket 36.
#[inline]
pub fn bucket_index(hue: f32) -> usize {
    (hue * BUCKET_COUNT as f32).floor() as usize % BUCKET_COUNT
}
