//! The fixed table of placeholder assets and the driver that renders it.
//!
//! The table ships embedded as RON (`catalog.ron`) so it can be read and
//! diffed as data; [`CatalogLayout::default`] holds the same values and
//! backs any field the file omits.

use std::{fmt, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use image::Rgb;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::placeholder::{create_placeholder, PlaceholderSpec};

const BUILTIN_CATALOG: &str = include_str!("catalog.ron");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    CharacterBackground,
    BoardHalf,
    Piece(PieceKind),
}

/// Size and fill for one asset category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetStyle {
    pub width: u32,
    pub height: u32,
    pub tint: (u8, u8, u8),
}

impl AssetStyle {
    pub fn tint_rgb(&self) -> Rgb<u8> {
        Rgb([self.tint.0, self.tint.1, self.tint.2])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogLayout {
    pub base_dir: PathBuf,
    pub characters: u8,
    pub background: AssetStyle,
    pub board_half: AssetStyle,
    pub piece: AssetStyle,
    pub pieces: Vec<PieceKind>,
}

impl Default for CatalogLayout {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("assets/characters"),
            characters: 3,
            background: AssetStyle { width: 512, height: 512, tint: (180, 180, 200) },
            board_half: AssetStyle { width: 1024, height: 512, tint: (220, 200, 180) },
            piece: AssetStyle { width: 256, height: 256, tint: (240, 240, 240) },
            pieces: PieceKind::ALL.to_vec(),
        }
    }
}

/// One placeholder to generate. `relative_path` is relative to the catalog base dir.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub character: u8,
    pub kind: AssetKind,
    pub width: u32,
    pub height: u32,
    pub label: String,
    pub relative_path: PathBuf,
    pub tint: Rgb<u8>,
}

impl CatalogEntry {
    pub fn to_spec(&self, root: &Path) -> PlaceholderSpec {
        PlaceholderSpec::new(self.width, self.height, self.label.clone(), root.join(&self.relative_path))
            .with_background(self.tint)
    }
}

impl CatalogLayout {
    /// The embedded table.
    pub fn builtin() -> Result<Self> {
        ron::from_str(BUILTIN_CATALOG).context("parse embedded catalog.ron")
    }

    /// Expand into concrete entries: per character, background, board half, then pieces in order.
    pub fn entries(&self) -> Vec<CatalogEntry> {
        let mut out = Vec::with_capacity(self.characters as usize * (2 + self.pieces.len()));
        for n in 1..=self.characters {
            let dir = PathBuf::from(format!("character_{n}"));
            out.push(CatalogEntry {
                character: n,
                kind: AssetKind::CharacterBackground,
                width: self.background.width,
                height: self.background.height,
                label: format!("Character {n} Background"),
                relative_path: dir.join("backgrounds").join("character_background.png"),
                tint: self.background.tint_rgb(),
            });
            out.push(CatalogEntry {
                character: n,
                kind: AssetKind::BoardHalf,
                width: self.board_half.width,
                height: self.board_half.height,
                label: format!("Character {n} Board Background"),
                relative_path: dir.join("backgrounds").join("chessboard_half.png"),
                tint: self.board_half.tint_rgb(),
            });
            for &piece in &self.pieces {
                out.push(CatalogEntry {
                    character: n,
                    kind: AssetKind::Piece(piece),
                    width: self.piece.width,
                    height: self.piece.height,
                    label: piece.name().to_uppercase(),
                    relative_path: dir.join("pieces").join(format!("white_{}.png", piece.name())),
                    tint: self.piece.tint_rgb(),
                });
            }
        }
        out
    }

    /// Suspicious values as human-readable warnings. Not errors; the caller logs them.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.characters == 0 {
            w.push("characters is 0; nothing will be generated".into());
        }
        for (label, style) in [("background", &self.background), ("board_half", &self.board_half), ("piece", &self.piece)] {
            if style.width == 0 || style.height == 0 {
                w.push(format!("{label} size {}x{} must be > 0", style.width, style.height));
            }
        }
        if self.pieces.is_empty() {
            w.push("pieces list is empty".into());
        }
        for (i, p) in self.pieces.iter().enumerate() {
            if self.pieces[..i].contains(p) {
                w.push(format!("piece {} listed more than once; later file overwrites earlier", p.name()));
            }
        }
        w
    }
}

/// The built-in entries, in generation order.
pub fn catalog() -> Result<Vec<CatalogEntry>> {
    Ok(CatalogLayout::builtin()?.entries())
}

/// What a catalog run wrote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationSummary {
    pub backgrounds: usize,
    pub board_halves: usize,
    pub pieces: usize,
    pub background_size: (u32, u32),
    pub board_half_size: (u32, u32),
    pub piece_size: (u32, u32),
    pub written: Vec<PathBuf>,
}

impl GenerationSummary {
    #[cfg(test)]
    fn total(&self) -> usize {
        self.backgrounds + self.board_halves + self.pieces
    }

    fn record(&mut self, entry: &CatalogEntry, path: PathBuf) {
        let size = (entry.width, entry.height);
        match entry.kind {
            AssetKind::CharacterBackground => {
                self.backgrounds += 1;
                self.background_size = size;
            }
            AssetKind::BoardHalf => {
                self.board_halves += 1;
                self.board_half_size = size;
            }
            AssetKind::Piece(_) => {
                self.pieces += 1;
                self.piece_size = size;
            }
        }
        self.written.push(path);
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (bw, bh) = self.background_size;
        let (hw, hh) = self.board_half_size;
        let (pw, ph) = self.piece_size;
        writeln!(f, "\u{2713} All placeholder images generated successfully!")?;
        writeln!(f)?;
        writeln!(f, "Generated files:")?;
        writeln!(f, "- {} character_background.png ({bw}x{bh})", self.backgrounds)?;
        writeln!(f, "- {} chessboard_half.png ({hw}x{hh})", self.board_halves)?;
        writeln!(f, "- {} chess piece images ({pw}x{ph})", self.pieces)?;
        writeln!(f)?;
        write!(f, "You can now replace these placeholders with your actual artwork.")
    }
}

/// Generate the built-in catalog under its base directory (`assets/characters`).
pub fn generate_all() -> Result<GenerationSummary> {
    let layout = CatalogLayout::builtin()?;
    let root = layout.base_dir.clone();
    generate_layout(&layout, &root)
}

/// Generate the built-in catalog under `root` instead of its base directory.
pub fn generate_all_in(root: impl AsRef<Path>) -> Result<GenerationSummary> {
    generate_layout(&CatalogLayout::builtin()?, root.as_ref())
}

/// Render every entry of `layout` under `root`. Stops at the first failure.
pub fn generate_layout(layout: &CatalogLayout, root: &Path) -> Result<GenerationSummary> {
    for warning in layout.validate() {
        warn!("catalog: {warning}");
    }
    let entries = layout.entries();
    info!(count = entries.len(), root = %root.display(), "generating placeholders");
    let mut summary = GenerationSummary::default();
    for entry in &entries {
        let spec = entry.to_spec(root);
        create_placeholder(&spec)
            .with_context(|| format!("character {} {:?}", entry.character, entry.kind))?;
        summary.record(entry, spec.output_path);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_matches_defaults() {
        let builtin = CatalogLayout::builtin().expect("parse catalog.ron");
        assert_eq!(builtin, CatalogLayout::default());
        assert!(builtin.validate().is_empty(), "{:?}", builtin.validate());
    }

    #[test]
    fn twenty_four_entries_in_order() {
        let entries = CatalogLayout::default().entries();
        assert_eq!(entries.len(), 24);
        let first: Vec<_> = entries[..8].iter().map(|e| e.relative_path.clone()).collect();
        assert_eq!(
            first,
            [
                "character_1/backgrounds/character_background.png",
                "character_1/backgrounds/chessboard_half.png",
                "character_1/pieces/white_king.png",
                "character_1/pieces/white_queen.png",
                "character_1/pieces/white_rook.png",
                "character_1/pieces/white_bishop.png",
                "character_1/pieces/white_knight.png",
                "character_1/pieces/white_pawn.png",
            ]
            .map(PathBuf::from)
        );
        assert_eq!(entries[23].relative_path, PathBuf::from("character_3/pieces/white_pawn.png"));
    }

    #[test]
    fn labels_sizes_and_tints() {
        let entries = CatalogLayout::default().entries();
        let bg = &entries[8];
        assert_eq!(bg.kind, AssetKind::CharacterBackground);
        assert_eq!(bg.label, "Character 2 Background");
        assert_eq!((bg.width, bg.height), (512, 512));
        assert_eq!(bg.tint, Rgb([180, 180, 200]));
        let half = &entries[9];
        assert_eq!(half.label, "Character 2 Board Background");
        assert_eq!((half.width, half.height), (1024, 512));
        assert_eq!(half.tint, Rgb([220, 200, 180]));
        let knight = &entries[14];
        assert_eq!(knight.kind, AssetKind::Piece(PieceKind::Knight));
        assert_eq!(knight.label, "KNIGHT");
        assert_eq!((knight.width, knight.height), (256, 256));
        assert_eq!(knight.tint, Rgb([240, 240, 240]));
    }

    #[test]
    fn omitted_fields_fall_back_to_defaults() {
        let layout: CatalogLayout = ron::from_str("(characters: 1, pieces: [Pawn])").unwrap();
        assert_eq!(layout.base_dir, PathBuf::from("assets/characters"));
        assert_eq!(layout.piece, CatalogLayout::default().piece);
        assert_eq!(layout.entries().len(), 3);
    }

    #[test]
    fn validate_flags_bad_layouts() {
        let bad = CatalogLayout {
            characters: 0,
            piece: AssetStyle { width: 0, height: 256, tint: (0, 0, 0) },
            pieces: vec![PieceKind::Rook, PieceKind::Rook],
            ..CatalogLayout::default()
        };
        let joined = bad.validate().join(" | ");
        assert!(joined.contains("characters is 0"));
        assert!(joined.contains("piece size 0x256"));
        assert!(joined.contains("rook listed more than once"));
    }

    #[test]
    fn summary_block_lists_counts() {
        let mut s = GenerationSummary::default();
        for e in CatalogLayout::default().entries() {
            let p = e.relative_path.clone();
            s.record(&e, p);
        }
        assert_eq!((s.backgrounds, s.board_halves, s.pieces, s.total()), (3, 3, 18, 24));
        let text = s.to_string();
        assert!(text.contains("- 3 character_background.png (512x512)"));
        assert!(text.contains("- 3 chessboard_half.png (1024x512)"));
        assert!(text.contains("- 18 chess piece images (256x256)"));
        assert!(text.starts_with("\u{2713} All placeholder images generated successfully!"));
    }
}
