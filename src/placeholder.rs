//! Single placeholder image: tinted canvas, inset border, centered label.

use std::{fs, path::{Path, PathBuf}};

use anyhow::{bail, Context, Result};
use image::{ImageFormat, Rgb, Rgba, RgbaImage};
use tracing::debug;

use crate::font::{LabelFont, PREFERRED_FONT};

pub const DEFAULT_BACKGROUND: Rgb<u8> = Rgb([200, 200, 200]);
pub const DEFAULT_TEXT_COLOR: Rgb<u8> = Rgb([50, 50, 50]);

/// Everything needed to produce one placeholder PNG.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderSpec {
    pub width: u32,
    pub height: u32,
    pub label: String,
    pub output_path: PathBuf,
    pub background: Rgb<u8>,
    pub text_color: Rgb<u8>,
}

impl PlaceholderSpec {
    /// Spec with the default light gray background and dark gray text.
    pub fn new(width: u32, height: u32, label: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            width,
            height,
            label: label.into(),
            output_path: output_path.into(),
            background: DEFAULT_BACKGROUND,
            text_color: DEFAULT_TEXT_COLOR,
        }
    }

    pub fn with_background(mut self, background: Rgb<u8>) -> Self {
        self.background = background;
        self
    }

    pub fn with_text_color(mut self, text_color: Rgb<u8>) -> Self {
        self.text_color = text_color;
        self
    }

    pub fn border_width(&self) -> u32 {
        border_width(self.width, self.height)
    }

    /// Pixel size requested from the TrueType face.
    pub fn font_px(&self) -> u32 {
        self.width.min(self.height) / 10
    }
}

/// Stroke width and inset of the frame. Never below 2, even when the canvas is smaller.
pub fn border_width(width: u32, height: u32) -> u32 {
    (width.min(height) / 100).max(2)
}

/// Render `spec` with the preferred font (or its fallback) and write it as PNG.
pub fn create_placeholder(spec: &PlaceholderSpec) -> Result<()> {
    let font = LabelFont::load_preferred(PREFERRED_FONT, spec.font_px());
    create_placeholder_with(spec, &font)
}

/// Same as [`create_placeholder`] with an explicit font.
pub fn create_placeholder_with(spec: &PlaceholderSpec, font: &LabelFont) -> Result<()> {
    if spec.width == 0 || spec.height == 0 {
        bail!("placeholder {:?} has empty size {}x{}", spec.output_path, spec.width, spec.height);
    }
    let canvas = render(spec, font);
    write_png(&canvas, &spec.output_path)?;
    println!("Created: {}", spec.output_path.display());
    debug!(path = %spec.output_path.display(), width = spec.width, height = spec.height, fallback_font = font.is_fallback(), "placeholder written");
    Ok(())
}

/// Draw the placeholder in memory. Nothing is clipped except at the canvas edge.
pub fn render(spec: &PlaceholderSpec, font: &LabelFont) -> RgbaImage {
    let [r, g, b] = spec.background.0;
    let mut canvas = RgbaImage::from_pixel(spec.width, spec.height, Rgba([r, g, b, 255]));

    draw_border(&mut canvas, spec.border_width(), spec.text_color);

    let ink = font.measure(&spec.label);
    if !ink.is_empty() {
        // center the ink box itself; outline glyphs sit below and right of the layout origin
        let ox = ((spec.width as f32 - ink.width()) / 2.0 - ink.min_x).round() as i64;
        let oy = ((spec.height as f32 - ink.height()) / 2.0 - ink.min_y).round() as i64;
        font.draw(&mut canvas, (ox, oy), &spec.label, spec.text_color);
    }
    canvas
}

/// Outline of the rectangle (bw, bw)..=(W - bw, H - bw), `bw` pixels thick, growing inward.
fn draw_border(canvas: &mut RgbaImage, bw: u32, color: Rgb<u8>) {
    let (w, h) = (canvas.width() as i64, canvas.height() as i64);
    let bw = bw as i64;
    let (x0, y0, x1, y1) = (bw, bw, w - bw, h - bw);
    if x1 < x0 || y1 < y0 {
        return;
    }
    let [r, g, b] = color.0;
    for y in y0..=y1.min(h - 1) {
        for x in x0..=x1.min(w - 1) {
            if x < x0 + bw || x > x1 - bw || y < y0 + bw || y > y1 - bw {
                canvas.put_pixel(x as u32, y as u32, Rgba([r, g, b, 255]));
            }
        }
    }
}

fn write_png(canvas: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create directory {:?}", parent))?;
    }
    canvas
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("write {:?}", path))
}
