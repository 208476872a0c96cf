// src/color.rs

//! Color derivation from the trailing segments of the digest.
//!
//! The last 7 characters of the 32-character digest carry the color:
//! a 3-character hue field, a 2-character saturation field, and a
//! 2-character lightness field, in that order. The fields are biased into
//! narrow saturation/lightness bands and converted to RGB through the
//! classic piecewise HLS transform.
//!
//! The offsets, the bias formulas, the HLS argument order (hue,
//! lightness, saturation) and the truncating 8-bit quantization are all
//! load-bearing: changing any of them produces a plausible-looking but
//! different color.

use crate::digest::DIGEST_LEN;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// An opaque 8-bit RGB color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the RGB byte triple in memory order.
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    /// Formats as a lowercase `#rrggbb` string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// Field positions within the 32-character digest.
const HUE_SEGMENT: Range<usize> = DIGEST_LEN - 7..DIGEST_LEN - 4;
const SAT_SEGMENT: Range<usize> = DIGEST_LEN - 4..DIGEST_LEN - 2;
const LIG_SEGMENT: Range<usize> = DIGEST_LEN - 2..DIGEST_LEN;

/// Maximum value of the 3-nibble hue field (0xFFF); normalizes hue to [0, 1).
const HUE_FIELD_MAX: f64 = 4095.0;
/// Maximum value of a 2-nibble field (0xFF).
const BYTE_FIELD_MAX: f64 = 255.0;

/// The color metadata derived from one digest: the raw hex segments, the
/// normalized hue/saturation/lightness triple, and the quantized RGB
/// result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSpec {
    /// Raw 3-character hue segment, `digest[25..28]`.
    pub hue_segment: String,
    /// Raw 2-character saturation segment, `digest[28..30]`.
    pub sat_segment: String,
    /// Raw 2-character lightness segment, `digest[30..32]`.
    pub lig_segment: String,
    /// Normalized hue in [0, 1).
    pub hue: f64,
    /// Saturation in [0.45, 0.65] by construction.
    pub saturation: f64,
    /// Lightness in [0.55, 0.75] by construction.
    pub lightness: f64,
    /// The quantized foreground color.
    pub rgb: Rgb,
    /// Lowercase `#rrggbb` form of `rgb`.
    pub hex: String,
}

impl ColorSpec {
    /// Derives the color from a well-formed 32-character lowercase hex
    /// digest.
    ///
    /// # Panics
    /// Panics if the digest is shorter than 32 characters or contains a
    /// non-hexadecimal character in the color fields. Digests produced by
    /// [`crate::digest::digest`] always satisfy the contract.
    pub fn from_digest(digest: &str) -> Self {
        let hue_segment = &digest[HUE_SEGMENT];
        let sat_segment = &digest[SAT_SEGMENT];
        let lig_segment = &digest[LIG_SEGMENT];

        let hue = f64::from(hex_field(hue_segment)) / HUE_FIELD_MAX;
        let saturation = 0.65 - (f64::from(hex_field(sat_segment)) / BYTE_FIELD_MAX) * 0.20;
        let lightness = 0.75 - (f64::from(hex_field(lig_segment)) / BYTE_FIELD_MAX) * 0.20;

        // Classic argument order: hue, lightness, saturation.
        let (r, g, b) = hls_to_rgb(hue, lightness, saturation);
        let rgb = Rgb::new(quantize(r), quantize(g), quantize(b));

        Self {
            hue_segment: hue_segment.to_owned(),
            sat_segment: sat_segment.to_owned(),
            lig_segment: lig_segment.to_owned(),
            hue,
            saturation,
            lightness,
            rgb,
            hex: rgb.to_string(),
        }
    }
}

/// Parses a fixed-width hex field out of the digest.
fn hex_field(segment: &str) -> u32 {
    u32::from_str_radix(segment, 16).expect("digest color field is not hexadecimal")
}

/// Truncating quantization of a fractional channel in [0, 1] to 8 bits.
/// Truncation, not rounding: `0.9999 * 255` maps to 254.
fn quantize(channel: f64) -> u8 {
    (channel * 255.0) as u8
}

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRD: f64 = 2.0 / 3.0;

/// Converts an HLS triple to fractional RGB in [0, 1].
///
/// This is the classic piecewise-linear transform with the lightness
/// argument second. All arithmetic stays in `f64` so the quantized
/// channels are bit-stable across platforms.
fn hls_to_rgb(hue: f64, lightness: f64, saturation: f64) -> (f64, f64, f64) {
    if saturation == 0.0 {
        return (lightness, lightness, lightness);
    }
    let m2 = if lightness <= 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let m1 = 2.0 * lightness - m2;
    (
        hls_channel(m1, m2, hue + ONE_THIRD),
        hls_channel(m1, m2, hue),
        hls_channel(m1, m2, hue - ONE_THIRD),
    )
}

fn hls_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    // Wrap into [0, 1); rem_euclid keeps negative hues positive.
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRD {
        m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0
    } else {
        m1
    }
}
