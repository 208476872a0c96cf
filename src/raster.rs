// src/raster.rs

//! Rasterization of a pattern grid onto a fixed-size canvas.
//!
//! Geometry is fixed: a 420x420 canvas with 35 units of padding on every
//! side leaves a 350x350 drawable region, split into a 5x5 grid of 70x70
//! cells. The whole canvas is filled with the background color first;
//! each filled grid cell is then painted with the foreground color as an
//! exact half-open 70x70 rectangle. No anti-aliasing, no borders.

use crate::color::Rgb;
use crate::pattern::{PatternGrid, GRID_SIZE};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};

/// Canvas edge length in pixels.
pub const CANVAS_SIZE: u32 = 420;
/// Uniform padding around the drawable region.
pub const PADDING: u32 = 35;
/// Edge length of one grid cell: (420 - 2*35) / 5.
pub const CELL_SIZE: u32 = (CANVAS_SIZE - 2 * PADDING) / GRID_SIZE as u32;
/// The fixed light-gray background.
pub const BACKGROUND: Rgb = Rgb::new(240, 240, 240);

/// An owned row-major RGB pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Canvas {
    /// Creates a canvas with every pixel set to `fill`.
    pub fn filled(width: u32, height: u32, fill: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reads the pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate is outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[(y * self.width + x) as usize]
    }

    /// Fills the half-open rectangle `[x, x+w) x [y, y+h)`.
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        for row in y..(y + h).min(self.height) {
            let start = (row * self.width + x) as usize;
            let end = start + w.min(self.width - x) as usize;
            self.pixels[start..end].fill(color);
        }
    }

    /// Returns the buffer as packed RGB bytes, row-major.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            bytes.extend_from_slice(&px.to_bytes());
        }
        bytes
    }
}

/// Draws the grid with the given foreground color over the standard
/// background, at the fixed 420x420 geometry.
pub fn render(grid: &PatternGrid, foreground: Rgb) -> Canvas {
    let mut canvas = Canvas::filled(CANVAS_SIZE, CANVAS_SIZE, BACKGROUND);
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if grid.is_filled(row, col) {
                let x = PADDING + col as u32 * CELL_SIZE;
                let y = PADDING + row as u32 * CELL_SIZE;
                canvas.fill_rect(x, y, CELL_SIZE, CELL_SIZE, foreground);
            }
        }
    }
    canvas
}

/// Encodes the canvas as an 8-bit RGB PNG.
///
/// Deterministic: identical canvases encode to byte-identical output.
pub fn encode_png(canvas: &Canvas) -> Vec<u8> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            &canvas.to_rgb_bytes(),
            canvas.width(),
            canvas.height(),
            ColorType::Rgb8,
        )
        .expect("encoding a fixed-size in-memory RGB buffer cannot fail");
    out
}
