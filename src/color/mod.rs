#[cfg(feature = "srgb_lut")]
pub mod lut;
pub mod model;
pub mod parse;
pub mod transfer;

#[cfg(feature = "color_single_precision")]
pub type ColorFloat = f32;
#[cfg(not(feature = "color_single_precision"))]
pub type ColorFloat = f64;
