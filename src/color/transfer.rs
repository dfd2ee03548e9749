// sRGB transfer function (IEC 61966-2-1), one channel at a time.
// https://registry.khronos.org/DataFormat/specs/1.3/dataformat.1.3.html#TRANSFER_SRGB

use crate::traits::float::Float;

const CHANNEL_MAX: f64 = 255.0;

const DECODE_THRESHOLD: f64 = 0.04045;
const ENCODE_THRESHOLD: f64 = 0.003_130_8;
const LINEAR_SLOPE: f64 = 12.92;
const OFFSET: f64 = 0.055;
const SCALE: f64 = 1.055;
const GAMMA: f64 = 2.4;

/// Converts an RGB channel [0-255] to its linear light (un-companded) form [0-1].
///
/// Linearized values are what color space conversions and contrast
/// calculations work on. The input is not clamped, so values outside
/// [0, 255] extrapolate along the curve.
#[must_use]
#[inline]
pub fn linearize_rgb_channel<T: Float>(value: T) -> T {
    let ratio = value.div(T::from_f64(CHANNEL_MAX));

    if ratio < T::from_f64(DECODE_THRESHOLD) {
        ratio.div(T::from_f64(LINEAR_SLOPE))
    } else {
        ratio
            .add(T::from_f64(OFFSET))
            .div(T::from_f64(SCALE))
            .powf(T::from_f64(GAMMA))
    }
}

/// Converts a linear-light channel [0-1] back to its gamma corrected form [0-255].
#[must_use]
#[inline]
pub fn unlinearize_rgb_channel<T: Float>(ratio: T) -> T {
    let value = if ratio > T::from_f64(ENCODE_THRESHOLD) {
        ratio
            .powf(T::from_f64(1.0 / GAMMA))
            .mul(T::from_f64(SCALE))
            .sub(T::from_f64(OFFSET))
    } else {
        ratio.mul(T::from_f64(LINEAR_SLOPE))
    };

    value.mul(T::from_f64(CHANNEL_MAX))
}
