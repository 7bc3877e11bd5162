//! Label fonts: a preferred TrueType face with a built-in bitmap fallback.
//!
//! `LabelFont::load_preferred` never fails. Anything that goes wrong while
//! acquiring the TrueType face (missing file, bad data, zero size) is logged
//! and the bitmap font is used instead.

pub mod bitmap;

use std::{fs, path::Path};

use ab_glyph::{point, Font, FontVec, Glyph, PxScale, ScaleFont};
use image::{Rgb, RgbaImage};
use tracing::debug;

pub use bitmap::BitmapFont;

/// Bold face tried first for every placeholder.
pub const PREFERRED_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Axis-aligned box in canvas pixels, relative to the text origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl TextBox {
    pub const EMPTY: TextBox = TextBox { min_x: 0.0, min_y: 0.0, max_x: 0.0, max_y: 0.0 };

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    fn union(self, other: TextBox) -> TextBox {
        if self.is_empty() {
            return other;
        }
        TextBox {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// Blend `color` over the pixel at (x, y) with `coverage` in 0..=1. Alpha stays as is.
pub(crate) fn blend(canvas: &mut RgbaImage, x: u32, y: u32, color: Rgb<u8>, coverage: f32) {
    let c = coverage.clamp(0.0, 1.0);
    let px = canvas.get_pixel_mut(x, y);
    for i in 0..3 {
        let bg = px.0[i] as f32;
        let fg = color.0[i] as f32;
        px.0[i] = (bg + (fg - bg) * c).round() as u8;
    }
}

/// Font used to draw a placeholder label.
pub enum LabelFont {
    Outline { font: FontVec, scale: PxScale },
    Bitmap(BitmapFont),
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelFont::Outline { scale, .. } => f.debug_struct("Outline").field("px", &scale.y).finish(),
            LabelFont::Bitmap(b) => f.debug_tuple("Bitmap").field(b).finish(),
        }
    }
}

impl LabelFont {
    /// Try `path` at `px_size`; fall back to the bitmap font on any failure.
    pub fn load_preferred(path: impl AsRef<Path>, px_size: u32) -> Self {
        let path = path.as_ref();
        match Self::load_outline(path, px_size) {
            Ok(font) => font,
            Err(reason) => {
                debug!(font = %path.display(), px_size, %reason, "using built-in bitmap font");
                LabelFont::Bitmap(BitmapFont::for_px_size(px_size))
            }
        }
    }

    fn load_outline(path: &Path, px_size: u32) -> Result<Self, String> {
        if px_size == 0 {
            return Err("font size is zero".into());
        }
        let data = fs::read(path).map_err(|e| format!("read font: {e}"))?;
        let font = FontVec::try_from_vec(data).map_err(|e| format!("decode font: {e}"))?;
        Ok(LabelFont::Outline { font, scale: PxScale::from(px_size as f32) })
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, LabelFont::Bitmap(_))
    }

    /// Ink bounds of the whole (possibly multi-line) label, origin at the top-left
    /// of the first line.
    pub fn measure(&self, text: &str) -> TextBox {
        match self {
            LabelFont::Bitmap(b) => b.measure(text),
            LabelFont::Outline { font, scale } => layout_outline(font, *scale, text, (0.0, 0.0))
                .into_iter()
                .filter_map(|g| font.outline_glyph(g))
                .map(|o| {
                    let r = o.px_bounds();
                    TextBox { min_x: r.min.x, min_y: r.min.y, max_x: r.max.x, max_y: r.max.y }
                })
                .fold(TextBox::EMPTY, TextBox::union),
        }
    }

    /// Draw `text` with the layout origin at `origin`, clipped to the canvas.
    pub fn draw(&self, canvas: &mut RgbaImage, origin: (i64, i64), text: &str, color: Rgb<u8>) {
        match self {
            LabelFont::Bitmap(b) => b.draw(canvas, origin, text, color),
            LabelFont::Outline { font, scale } => {
                let (w, h) = (canvas.width() as i64, canvas.height() as i64);
                let at = (origin.0 as f32, origin.1 as f32);
                for glyph in layout_outline(font, *scale, text, at) {
                    let Some(outlined) = font.outline_glyph(glyph) else { continue };
                    let bounds = outlined.px_bounds();
                    let (bx, by) = (bounds.min.x as i64, bounds.min.y as i64);
                    outlined.draw(|gx, gy, coverage| {
                        let (x, y) = (bx + gx as i64, by + gy as i64);
                        if (0..w).contains(&x) && (0..h).contains(&y) {
                            blend(canvas, x as u32, y as u32, color, coverage);
                        }
                    });
                }
            }
        }
    }
}

/// Position glyphs line by line; lines are left aligned and advance by the font's line height.
fn layout_outline(font: &FontVec, scale: PxScale, text: &str, origin: (f32, f32)) -> Vec<Glyph> {
    let scaled = font.as_scaled(scale);
    let line_height = scaled.height() + scaled.line_gap();
    let mut glyphs = Vec::new();
    for (li, line) in text.split('\n').enumerate() {
        let baseline = origin.1 + scaled.ascent() + li as f32 * line_height;
        let mut caret = origin.0;
        let mut prev = None;
        for c in line.chars() {
            let id = scaled.glyph_id(c);
            if let Some(p) = prev {
                caret += scaled.kern(p, id);
            }
            glyphs.push(id.with_scale_and_position(scale, point(caret, baseline)));
            caret += scaled.h_advance(id);
            prev = Some(id);
        }
    }
    glyphs
}
