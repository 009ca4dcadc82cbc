//! RGB and HLS color types
//!
//! Swatch extraction classifies pixels by hue and re-renders the winning
//! cluster at a normalized lightness, so colors move back and forth between
//! 8-bit RGB and the HLS (hue, lightness, saturation) cylinder. The
//! conversions below follow the classic Foley & Van Dam HLS formulation.

/// An 8-bit RGB color.
///
/// Values are in the range 0..=255 per channel. This is the input and output
/// type of the swatch pipeline; all intermediate math happens on normalized
/// floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new Rgb color from 8-bit channel values.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an Rgb color from normalized float channels.
    ///
    /// Rounds to the nearest integer and clamps to the 0..=255 range.
    ///
    /// # Example
    /// ```
    /// use hue_swatch::Rgb;
    /// let orange = Rgb::from_unit(1.0, 0.5, 0.0);
    /// assert_eq!(orange, Rgb::new(255, 128, 0));
    /// ```
    #[inline]
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: (r * 255.0).round().clamp(0.0, 255.0) as u8,
            g: (g * 255.0).round().clamp(0.0, 255.0) as u8,
            b: (b * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }

    /// Format as a lowercase `#rrggbb` hex string.
    ///
    /// # Example
    /// ```
    /// use hue_swatch::Rgb;
    /// assert_eq!(Rgb::new(230, 41, 41).to_hex(), "#e62929");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A color in the HLS cylinder.
///
/// Hue is a fraction of a full turn in `[0, 1)` (so 0.5 is 180 degrees);
/// lightness and saturation are in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
    /// Hue as a fraction of the circle (0.0..1.0)
    pub h: f32,
    /// Lightness (0.0..=1.0)
    pub l: f32,
    /// Saturation (0.0..=1.0)
    pub s: f32,
}

/// Convert normalized RGB channels to HLS.
///
/// Achromatic inputs (all channels equal) return hue 0 and saturation 0.
pub fn rgb_to_hls(r: f32, g: f32, b: f32) -> Hls {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let l = (minc + maxc) / 2.0;

    if maxc == minc {
        return Hls { h: 0.0, l, s: 0.0 };
    }

    let delta = maxc - minc;
    let s = if l <= 0.5 {
        delta / (maxc + minc)
    } else {
        delta / (2.0 - maxc - minc)
    };

    let rc = (maxc - r) / delta;
    let gc = (maxc - g) / delta;
    let bc = (maxc - b) / delta;

    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    Hls {
        h: (h / 6.0).rem_euclid(1.0),
        l,
        s,
    }
}

/// Convert HLS back to normalized RGB channels.
pub fn hls_to_rgb(h: f32, l: f32, s: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (l, l, l);
    }

    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;

    (
        hue_component(m1, m2, h + 1.0 / 3.0),
        hue_component(m1, m2, h),
        hue_component(m1, m2, h - 1.0 / 3.0),
    )
}

fn hue_component(m1: f32, m2: f32, hue: f32) -> f32 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}
