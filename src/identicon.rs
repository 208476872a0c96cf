// src/identicon.rs

//! The one-pass pipeline: identifier → digest → {color, pattern} →
//! raster, bundled into a single immutable record.
//!
//! The whole pipeline is a pure function of the identifier string. There
//! is no caching and no shared state; concurrent calls need no
//! synchronization. Callers that want caching can key it by identifier,
//! since the mapping never changes.

use crate::color::ColorSpec;
use crate::digest::digest;
use crate::pattern::PatternGrid;
use crate::raster::{self, Canvas};
use serde::Serialize;

/// The composite identicon record for one identifier: the digest, the
/// derived color and pattern metadata, and the rendered raster.
///
/// Serializes to the metadata record only; the raster bytes are skipped.
#[derive(Debug, Clone, Serialize)]
pub struct Identicon {
    /// The identifier exactly as supplied, uninterpreted.
    pub identifier: String,
    /// 32-character lowercase hex MD5 digest of the identifier.
    pub digest: String,
    /// Color metadata derived from the digest's trailing 7 characters.
    pub color: ColorSpec,
    /// Pattern metadata derived from the digest's leading 15 characters.
    pub pattern: PatternGrid,
    /// The rendered 420x420 canvas.
    #[serde(skip)]
    pub canvas: Canvas,
    /// The canvas encoded as an RGB8 PNG.
    #[serde(skip)]
    pub png: Vec<u8>,
}

impl Identicon {
    /// Runs the full pipeline for one identifier.
    ///
    /// Infallible: every string, including the empty string, yields a
    /// deterministic identicon.
    pub fn generate(identifier: &str) -> Self {
        let digest = digest(identifier);
        let color = ColorSpec::from_digest(&digest);
        let pattern = PatternGrid::from_digest(&digest);
        let canvas = raster::render(&pattern, color.rgb);
        let png = raster::encode_png(&canvas);
        Self {
            identifier: identifier.to_owned(),
            digest,
            color,
            pattern,
            canvas,
            png,
        }
    }
}
