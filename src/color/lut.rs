// A lookup table for 8 bit channel to linear conversions,
// sacrificing memory for speed (replacing heavy pow calculations).
// Only integral channel values can hit the table; everything else
// goes through `linearize_rgb_channel`.

use std::sync::OnceLock;

use crate::color::ColorFloat;
use crate::color::transfer::linearize_rgb_channel;

static SRGB_TO_LINEAR: OnceLock<[ColorFloat; 256]> = OnceLock::new();

fn build_srgb_to_linear() -> [ColorFloat; 256] {
    let mut t = [0.0; 256];
    for (v, item) in (0..=u8::MAX).zip(t.iter_mut()) {
        *item = linearize_rgb_channel(ColorFloat::from(v));
    }
    t
}

/// Linearize an 8 bit channel value through a table built on first use.
#[must_use]
#[inline]
pub fn linearize_rgb_channel_u8(v: u8) -> ColorFloat {
    SRGB_TO_LINEAR.get_or_init(build_srgb_to_linear)[usize::from(v)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_formula() {
        for v in 0..=u8::MAX {
            assert_eq!(
                linearize_rgb_channel_u8(v),
                linearize_rgb_channel(ColorFloat::from(v))
            );
        }
    }

    #[test]
    fn table_endpoints() {
        assert_eq!(linearize_rgb_channel_u8(0), 0.0);
        assert!((linearize_rgb_channel_u8(255) - 1.0).abs() < 1e-6);
    }
}
