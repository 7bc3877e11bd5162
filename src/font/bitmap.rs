//! Built-in 5x7 bitmap font used when no TrueType font can be loaded.
//!
//! Each glyph is seven rows of five bits, most significant bit leftmost.
//! Lowercase letters reuse the uppercase glyphs; anything without a glyph
//! renders as a hollow box so missing coverage stays visible.

use image::{Rgb, RgbaImage};

use super::{blend, TextBox};

pub const GLYPH_W: u32 = 5;
pub const GLYPH_H: u32 = 7;
/// Horizontal advance per character in unscaled cells (glyph + 1 column gap).
pub const ADVANCE: u32 = 6;
/// Vertical advance per line in unscaled cells (glyph + 2 row gap).
pub const LINE_ADVANCE: u32 = 9;

const MISSING: [u8; 7] = [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111];

fn glyph_rows(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        ' ' => [0; 7],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '.' => [0, 0, 0, 0, 0, 0b01100, 0b01100],
        ',' => [0, 0, 0, 0, 0b01100, 0b00100, 0b01000],
        '-' => [0, 0, 0, 0b11111, 0, 0, 0],
        '_' => [0, 0, 0, 0, 0, 0, 0b11111],
        ':' => [0, 0b01100, 0b01100, 0, 0b01100, 0b01100, 0],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0, 0b00100],
        '\'' => [0b00100, 0b00100, 0b01000, 0, 0, 0, 0],
        '/' => [0, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        _ => MISSING,
    }
}

/// Whether the font has a dedicated glyph for `c` (otherwise the box is drawn).
#[cfg(test)]
fn has_glyph(c: char) -> bool {
    glyph_rows(c) != MISSING
}

/// The fallback font at an integer magnification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    pub scale: u32,
}

impl BitmapFont {
    /// Pick a magnification that roughly matches a TrueType font of `px_size` pixels.
    pub fn for_px_size(px_size: u32) -> Self {
        Self { scale: (px_size / 10).max(1) }
    }

    /// Layout box of `text`: widest line by the stacked line height.
    /// Trailing inter-character gaps are not counted.
    pub fn measure(&self, text: &str) -> TextBox {
        let s = self.scale as f32;
        let mut lines = 0u32;
        let mut widest = 0u32;
        for line in text.split('\n') {
            lines += 1;
            let n = line.chars().count() as u32;
            if n > 0 {
                widest = widest.max(n * ADVANCE - (ADVANCE - GLYPH_W));
            }
        }
        if widest == 0 {
            return TextBox::EMPTY;
        }
        let height = (lines - 1) * LINE_ADVANCE + GLYPH_H;
        TextBox { min_x: 0.0, min_y: 0.0, max_x: widest as f32 * s, max_y: height as f32 * s }
    }

    /// Draw with the top-left of the first glyph cell at `origin`. Clipped to the canvas.
    pub fn draw(&self, canvas: &mut RgbaImage, origin: (i64, i64), text: &str, color: Rgb<u8>) {
        let s = self.scale as i64;
        let (w, h) = (canvas.width() as i64, canvas.height() as i64);
        for (li, line) in text.split('\n').enumerate() {
            let line_y = origin.1 + li as i64 * (LINE_ADVANCE as i64) * s;
            for (ci, c) in line.chars().enumerate() {
                let cell_x = origin.0 + ci as i64 * (ADVANCE as i64) * s;
                let rows = glyph_rows(c);
                for (ry, bits) in rows.iter().enumerate() {
                    for rx in 0..GLYPH_W {
                        if bits & (1 << (GLYPH_W - 1 - rx)) == 0 {
                            continue;
                        }
                        let bx = cell_x + rx as i64 * s;
                        let by = line_y + ry as i64 * s;
                        for py in by.max(0)..(by + s).min(h) {
                            for px in bx.max(0)..(bx + s).min(w) {
                                blend(canvas, px as u32, py as u32, color, 1.0);
                            }
                        }
                    }
                }
            }
        }
    }
}
