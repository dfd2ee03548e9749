use core::fmt;

use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::model::{Rgba, clamp_rgba};
use crate::traits::float::Float;

/// Names one field of a color record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Channel::*;
        let name = match self {
            Red => "red",
            Green => "green",
            Blue => "blue",
            Alpha => "alpha",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorParseError {
    #[error("missing {0} channel")]
    MissingChannel(Channel),
    #[error("{channel} channel is not a number: {input:?}")]
    NotANumber { channel: Channel, input: String },
}

/// One loosely typed channel value, as it comes out of a form or a JSON body.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum RawChannel {
    Number(f64),
    Text(String),
}

impl RawChannel {
    /// Whether a value was supplied at all.
    ///
    /// Any number counts (zero included), an empty string does not.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            RawChannel::Number(_) => true,
            RawChannel::Text(s) => !s.is_empty(),
        }
    }

    /// Permissive numeric conversion.
    ///
    /// Strings are trimmed first. Blank strings read as zero, decimal and
    /// `0x`/`0o`/`0b` integer literals are accepted, as are the words
    /// `Infinity`/`-Infinity`. Anything else reads as NaN.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            RawChannel::Number(n) => *n,
            RawChannel::Text(s) => coerce_str(s),
        }
    }
}

impl From<f64> for RawChannel {
    fn from(n: f64) -> Self {
        RawChannel::Number(n)
    }
}

impl From<&str> for RawChannel {
    fn from(s: &str) -> Self {
        RawChannel::Text(s.to_owned())
    }
}

impl From<String> for RawChannel {
    fn from(s: String) -> Self {
        RawChannel::Text(s)
    }
}

impl fmt::Display for RawChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawChannel::Number(n) => write!(f, "{n}"),
            RawChannel::Text(s) => f.write_str(s),
        }
    }
}

/// Untrusted color input. Every key is optional; alpha defaults to 1.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawRgba {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub r: Option<RawChannel>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub g: Option<RawChannel>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub b: Option<RawChannel>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub a: Option<RawChannel>,
}

impl RawRgba {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_r(mut self, r: impl Into<RawChannel>) -> Self {
        self.r = Some(r.into());
        self
    }

    #[must_use]
    pub fn with_g(mut self, g: impl Into<RawChannel>) -> Self {
        self.g = Some(g.into());
        self
    }

    #[must_use]
    pub fn with_b(mut self, b: impl Into<RawChannel>) -> Self {
        self.b = Some(b.into());
        self
    }

    #[must_use]
    pub fn with_a(mut self, a: impl Into<RawChannel>) -> Self {
        self.a = Some(a.into());
        self
    }

    fn present(&self, channel: Channel) -> Option<&RawChannel> {
        let value = match channel {
            Channel::Red => &self.r,
            Channel::Green => &self.g,
            Channel::Blue => &self.b,
            Channel::Alpha => &self.a,
        };
        value.as_ref().filter(|v| v.is_present())
    }

    fn require(&self, channel: Channel) -> Result<&RawChannel, Channel> {
        self.present(channel).ok_or_else(|| {
            trace!("rgba input is missing the {channel} channel");
            channel
        })
    }

    /// The r, g and b values, or the first one that is missing.
    fn required(&self) -> Result<[&RawChannel; 3], Channel> {
        Ok([
            self.require(Channel::Red)?,
            self.require(Channel::Green)?,
            self.require(Channel::Blue)?,
        ])
    }
}

/// Parse loosely typed input into a normalized color.
///
/// Returns `None` when red, green or blue is absent. Malformed numbers do
/// not fail the parse: they coerce to NaN and the clamp step turns that
/// into the bottom of the channel range.
pub fn parse_rgba<T: Float>(input: &RawRgba) -> Option<Rgba<T>> {
    let [r, g, b] = input.required().ok()?;
    let a = input.present(Channel::Alpha).map_or(1.0, RawChannel::to_number);

    Some(clamp_rgba(Rgba {
        r: T::from_f64(r.to_number()),
        g: T::from_f64(g.to_number()),
        b: T::from_f64(b.to_number()),
        a: T::from_f64(a),
    }))
}

/// Like [`parse_rgba`], but reports why the input was rejected and refuses
/// values that do not read as numbers instead of clamping them to zero.
pub fn try_parse_rgba<T: Float>(input: &RawRgba) -> Result<Rgba<T>, ColorParseError> {
    let [r, g, b] = input.required().map_err(ColorParseError::MissingChannel)?;

    let number = |channel: Channel, raw: &RawChannel| -> Result<T, ColorParseError> {
        let n = raw.to_number();
        if n.is_nan() {
            debug!("rgba {channel} channel {raw:?} is not a number");
            return Err(ColorParseError::NotANumber {
                channel,
                input: raw.to_string(),
            });
        }
        Ok(T::from_f64(n))
    };

    let r = number(Channel::Red, r)?;
    let g = number(Channel::Green, g)?;
    let b = number(Channel::Blue, b)?;
    let a = match input.present(Channel::Alpha) {
        Some(raw) => number(Channel::Alpha, raw)?,
        None => T::ONE,
    };

    Ok(clamp_rgba(Rgba { r, g, b, a }))
}

fn coerce_str(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some((digits, radix)) = radix_literal(s) {
        return parse_radix(digits, radix).unwrap_or(f64::NAN);
    }

    // rust's float grammar also takes "inf" and "nan" spellings
    if s.bytes().any(|c| c.is_ascii_alphabetic() && !matches!(c, b'e' | b'E')) {
        debug!("{s:?} does not read as a number");
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or_else(|_| {
        debug!("{s:?} does not read as a number");
        f64::NAN
    })
}

fn radix_literal(s: &str) -> Option<(&str, u32)> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    Some((&s[2..], radix))
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}
