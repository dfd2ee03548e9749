use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::ColorFloat;
use crate::color::transfer::{linearize_rgb_channel, unlinearize_rgb_channel};
use crate::traits::float::{Float, clamp_generic};

/// Upper bound of the red, green and blue channels.
pub const CHANNEL_MAX: f64 = 255.0;

/// An sRGB color with straight alpha.
///
/// `r`, `g` and `b` live in [0, 255] and `a` in [0, 1] once the record has
/// gone through [`clamp_rgba`]. Nothing stops you from building one with
/// out-of-range fields; [`Rgba::is_normalized`] tells you whether it holds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba<T = ColorFloat> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
}

impl<T: Float> Default for Rgba<T> {
    fn default() -> Self {
        Self {
            r: T::ZERO,
            g: T::ZERO,
            b: T::ZERO,
            a: T::ONE,
        }
    }
}

/// Clamp every channel into its legal range: [0, 255] for r/g/b, [0, 1] for alpha.
///
/// NaN channels come back as the lower bound of their range, so the result
/// always satisfies [`Rgba::is_normalized`].
#[must_use]
pub fn clamp_rgba<T: Float>(Rgba { r, g, b, a }: Rgba<T>) -> Rgba<T> {
    let max = T::from_f64(CHANNEL_MAX);

    Rgba {
        r: clamp_generic(r, T::ZERO, max),
        g: clamp_generic(g, T::ZERO, max),
        b: clamp_generic(b, T::ZERO, max),
        a: a.clamp01(),
    }
}

/// Round r/g/b to whole numbers and alpha to two decimal digits.
///
/// Halves round away from zero. The record is not re-clamped, so run
/// untrusted data through [`clamp_rgba`] first.
#[must_use]
pub fn round_rgba<T: Float>(rgba: Rgba<T>) -> Rgba<T> {
    Rgba {
        r: rgba.r.round_to(0),
        g: rgba.g.round_to(0),
        b: rgba.b.round_to(0),
        a: rgba.a.round_to(2),
    }
}

impl<T: Float> Rgba<T> {
    #[inline]
    pub fn new(r: T, g: T, b: T, a: T) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque color.
    #[inline]
    pub fn rgb(r: T, g: T, b: T) -> Self {
        Self { r, g, b, a: T::ONE }
    }

    #[must_use]
    #[inline]
    pub fn with_alpha(self, a: T) -> Self {
        Self { a, ..self }
    }

    #[must_use]
    #[inline]
    pub fn clamped(self) -> Self {
        clamp_rgba(self)
    }

    #[must_use]
    #[inline]
    pub fn rounded(self) -> Self {
        round_rgba(self)
    }

    /// Whether every channel sits inside its legal range (NaN never does).
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        let max = T::from_f64(CHANNEL_MAX);
        let in_range = |x: T, hi: T| x >= T::ZERO && x <= hi;

        in_range(self.r, max)
            && in_range(self.g, max)
            && in_range(self.b, max)
            && in_range(self.a, T::ONE)
    }

    // decode sRGB -> linear light, alpha passes through untouched
    #[must_use]
    #[inline]
    pub fn into_linear(self) -> [T; 4] {
        [
            linearize_rgb_channel(self.r),
            linearize_rgb_channel(self.g),
            linearize_rgb_channel(self.b),
            self.a,
        ]
    }

    // encode linear light -> sRGB, no clamping on the way back
    #[must_use]
    #[inline]
    pub fn from_linear(lin: [T; 4]) -> Self {
        Self {
            r: unlinearize_rgb_channel(lin[0]),
            g: unlinearize_rgb_channel(lin[1]),
            b: unlinearize_rgb_channel(lin[2]),
            a: lin[3],
        }
    }

    #[must_use]
    #[inline]
    pub fn into_rgba(self) -> [T; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl<T: Float> From<[T; 4]> for Rgba<T> {
    fn from(rgba: [T; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }
}

impl<T: Float> From<Rgba<T>> for [T; 4] {
    fn from(rgba: Rgba<T>) -> Self {
        rgba.into_rgba()
    }
}

impl<T: fmt::Display> fmt::Display for Rgba<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn clamp_pins_out_of_range_channels() {
        let c = clamp_rgba(Rgba::new(-10.0f64, 300.0, 128.0, 2.0));
        assert_eq!(c, Rgba::new(0.0, 255.0, 128.0, 1.0));
    }

    #[test]
    fn clamp_keeps_in_range_channels() {
        let c = Rgba::new(12.5f64, 0.0, 255.0, 0.25);
        assert_eq!(clamp_rgba(c), c);
    }

    #[test]
    fn clamp_handles_non_finite_channels() {
        let c = clamp_rgba(Rgba::new(f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::NAN));
        assert_eq!(c, Rgba::new(0.0, 255.0, 0.0, 0.0));
        assert!(c.is_normalized());
    }

    #[test]
    fn round_quantizes_for_display() {
        let r = round_rgba(Rgba::new(127.6f64, 0.4, 255.0, 0.555));
        assert_eq!(r, Rgba::new(128.0, 0.0, 255.0, 0.56));
    }

    #[test]
    fn round_halves_go_away_from_zero() {
        let r = round_rgba(Rgba::new(0.5f64, 1.5, 2.5, 0.125));
        assert_eq!(r, Rgba::new(1.0, 2.0, 3.0, 0.13));
    }

    #[test]
    fn round_does_not_clamp() {
        let r = round_rgba(Rgba::new(300.2f64, -4.6, 0.0, 1.5));
        assert_eq!(r, Rgba::new(300.0, -5.0, 0.0, 1.5));
    }

    #[test]
    fn default_is_opaque_black() {
        assert_eq!(Rgba::<f64>::default(), Rgba::rgb(0.0, 0.0, 0.0));
        assert_eq!(Rgba::<f32>::default().a, 1.0);
    }

    #[test]
    fn is_normalized_checks_every_channel() {
        assert!(Rgba::new(0.0f64, 255.0, 10.0, 1.0).is_normalized());
        assert!(!Rgba::new(0.0f64, 255.1, 10.0, 1.0).is_normalized());
        assert!(!Rgba::new(0.0f64, 0.0, 0.0, 1.01).is_normalized());
        assert!(!Rgba::new(f64::NAN, 0.0, 0.0, 1.0).is_normalized());
    }

    #[test]
    fn array_conversions() {
        let c: Rgba<f64> = [1.0, 2.0, 3.0, 0.5].into();
        assert_eq!(c, Rgba::new(1.0, 2.0, 3.0, 0.5));
        let arr: [f64; 4] = c.into();
        assert_eq!(arr, [1.0, 2.0, 3.0, 0.5]);
    }

    #[test]
    fn linear_round_trip_keeps_alpha() {
        let c = Rgba::new(200.0f64, 64.0, 3.0, 0.4);
        let lin = c.into_linear();
        assert_eq!(lin[3], 0.4);
        assert!(lin[0] > lin[1] && lin[1] > lin[2]);

        let back = Rgba::from_linear(lin);
        assert_relative_eq!(back.r, c.r, max_relative = 1e-9);
        assert_relative_eq!(back.g, c.g, max_relative = 1e-9);
        assert_relative_eq!(back.b, c.b, max_relative = 1e-9);
        assert_eq!(back.a, c.a);
    }

    #[test]
    fn display_as_css_function() {
        let c = Rgba::new(255.0f64, 0.0, 128.0, 0.5);
        assert_eq!(c.to_string(), "rgba(255, 0, 128, 0.5)");
    }

    #[test]
    fn with_alpha_only_touches_alpha() {
        let c = Rgba::rgb(1.0f64, 2.0, 3.0).with_alpha(0.2);
        assert_eq!(c, Rgba::new(1.0, 2.0, 3.0, 0.2));
    }

    fn any_channel() -> impl Strategy<Value = f64> {
        prop_oneof![
            -1000.0f64..1000.0,
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
        ]
    }

    proptest! {
        #[test]
        fn clamp_always_normalizes(
            r in any_channel(),
            g in any_channel(),
            b in any_channel(),
            a in any_channel(),
        ) {
            prop_assert!(clamp_rgba(Rgba::new(r, g, b, a)).is_normalized());
        }

        #[test]
        fn clamp_is_identity_on_normalized_colors(
            r in 0.0f64..=255.0,
            g in 0.0f64..=255.0,
            b in 0.0f64..=255.0,
            a in 0.0f64..=1.0,
        ) {
            let c = Rgba::new(r, g, b, a);
            prop_assert_eq!(clamp_rgba(c), c);
        }

        #[test]
        fn rounding_a_normalized_color_stays_normalized(
            r in 0.0f64..=255.0,
            g in 0.0f64..=255.0,
            b in 0.0f64..=255.0,
            a in 0.0f64..=1.0,
        ) {
            prop_assert!(round_rgba(Rgba::new(r, g, b, a)).is_normalized());
        }
    }
}
