//! Validated RGBA color records.
//!
//! Loosely typed input ([`RawRgba`]) is parsed into a clamped [`Rgba`],
//! which can be quantized for display with [`round_rgba`] or pushed through
//! the sRGB transfer function one channel at a time.
//!
//! ```
//! use rgba_model::{RawRgba, Rgba, parse_rgba, round_rgba};
//!
//! let input = RawRgba::new().with_r("255").with_g(12.4).with_b("300");
//! let color: Rgba<f64> = parse_rgba(&input).unwrap();
//! assert_eq!(round_rgba(color), Rgba::new(255.0, 12.0, 255.0, 1.0));
//! ```

pub mod color;
pub mod traits;

pub use color::ColorFloat;
#[cfg(feature = "srgb_lut")]
pub use color::lut::linearize_rgb_channel_u8;
pub use color::model::{Rgba, clamp_rgba, round_rgba};
pub use color::parse::{
    Channel, ColorParseError, RawChannel, RawRgba, parse_rgba, try_parse_rgba,
};
pub use color::transfer::{linearize_rgb_channel, unlinearize_rgb_channel};
pub use traits::float::Float;
