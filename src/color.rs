//! Maps escape velocities to colors.  Every distinct iteration count
//! gets a hue a few degrees further around the color wheel, so bands
//! of equal velocity show up as rainbow contour lines around the black
//! heart of the set.  Counts repeat constantly across an image, so the
//! mapper memoizes: a count is converted once per session and the
//! cached bytes are returned ever after.

use std::collections::HashMap;

/// Default hue rotation, in degrees of hue per iteration.  Higher
/// factors cycle through the rainbow faster.
pub const DEFAULT_HUE_FACTOR: u32 = 5;

// The palette keeps saturation and lightness pinned and rotates only
// the hue.
const SATURATION: f64 = 0.5;
const LIGHTNESS: f64 = 0.5;

/// A 24-bit color, one byte per channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// The memoizing velocity-to-color mapper.  One of these belongs to a
/// single render session (or to a single worker within one); it grows
/// monotonically, never evicts, and is discarded with the session.
/// There is no global color state anywhere.
#[derive(Clone, Debug)]
pub struct ColorMap {
    hue_factor: u32,
    cache: HashMap<u32, Rgb>,
}

impl ColorMap {
    /// Creates an empty mapper with the given hue rotation factor.
    pub fn new(hue_factor: u32) -> ColorMap {
        ColorMap {
            hue_factor,
            cache: HashMap::new(),
        }
    }

    /// Returns the color for an iteration count, computing and
    /// caching it on first sight.  Repeated calls with the same count
    /// return the stored bytes untouched, so equal velocities are
    /// always painted bit-identically.
    pub fn color_for(&mut self, iterations: u32) -> Rgb {
        let hue_factor = self.hue_factor;
        *self.cache.entry(iterations).or_insert_with(|| {
            // The product is widened so absurd iteration caps cannot
            // wrap before the modulus.
            let degrees = (u64::from(iterations) * u64::from(hue_factor)) % 360;
            hsl_to_rgb(degrees as f64 / 360.0, SATURATION, LIGHTNESS)
        })
    }

    /// The number of distinct velocities seen so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// True until the first velocity is mapped.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// Standard HSL to RGB conversion.  All inputs are in [0, 1), hue
/// having already been scaled down from degrees.  The hue circle is
/// split into six sextants; within a sextant the channels interpolate
/// linearly between the value `v` and the minimum `m`.
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let v = if lightness <= 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };

    if v <= 0.0 {
        let gray = to_byte(lightness);
        return Rgb {
            r: gray,
            g: gray,
            b: gray,
        };
    }

    let m = 2.0 * lightness - v;
    let sv = (v - m) / v;
    let h6 = hue * 6.0;
    let sextant = h6.floor();
    let fract = h6 - sextant;
    let vsf = v * sv * fract;
    let mid1 = m + vsf;
    let mid2 = v - vsf;

    let (r, g, b) = match sextant as u32 {
        0 => (v, mid1, m),
        1 => (mid2, v, m),
        2 => (m, v, mid1),
        3 => (m, mid2, v),
        4 => (mid1, m, v),
        _ => (v, m, mid2),
    };

    Rgb {
        r: to_byte(r),
        g: to_byte(g),
        b: to_byte(b),
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().max(0.0).min(255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_hue_is_a_muted_red() {
        // v = 0.75, m = 0.25, first sextant with no fraction.
        assert_eq!(
            hsl_to_rgb(0.0, 0.5, 0.5),
            Rgb {
                r: 191,
                g: 64,
                b: 64
            }
        );
    }

    #[test]
    fn half_hue_is_a_muted_cyan() {
        // Sextant 3 with no fraction puts mid2 at v.
        assert_eq!(
            hsl_to_rgb(0.5, 0.5, 0.5),
            Rgb {
                r: 64,
                g: 191,
                b: 191
            }
        );
    }

    #[test]
    fn zero_lightness_falls_back_to_black() {
        assert_eq!(hsl_to_rgb(0.3, 0.5, 0.0), Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn repeated_lookups_are_bit_identical() {
        let mut colors = ColorMap::new(DEFAULT_HUE_FACTOR);
        let first = colors.color_for(17);
        let second = colors.color_for(17);
        assert_eq!(first, second);
        assert_eq!(colors.len(), 1);
    }

    #[test]
    fn cached_lookups_agree_with_a_fresh_map() {
        let mut warm = ColorMap::new(DEFAULT_HUE_FACTOR);
        for k in 0..100 {
            warm.color_for(k);
        }
        let mut cold = ColorMap::new(DEFAULT_HUE_FACTOR);
        assert_eq!(warm.color_for(42), cold.color_for(42));
    }

    #[test]
    fn hue_cycles_every_seventy_two_counts() {
        // 360 / gcd(5, 360) = 72, so counts 72 apart share a hue.
        let mut colors = ColorMap::new(5);
        assert_eq!(colors.color_for(3), colors.color_for(75));
        assert_eq!(colors.color_for(0), colors.color_for(72));
    }

    #[test]
    fn neighboring_counts_differ() {
        let mut colors = ColorMap::new(5);
        assert_ne!(colors.color_for(1), colors.color_for(2));
    }
}
