use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chess_placeholders::{catalog, generate_all_in};
use walkdir::WalkDir;

fn files_under(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

fn expected_files() -> BTreeSet<PathBuf> {
    let mut out = BTreeSet::new();
    for n in 1..=3 {
        out.insert(PathBuf::from(format!("character_{n}/backgrounds/character_background.png")));
        out.insert(PathBuf::from(format!("character_{n}/backgrounds/chessboard_half.png")));
        for piece in ["king", "queen", "rook", "bishop", "knight", "pawn"] {
            out.insert(PathBuf::from(format!("character_{n}/pieces/white_{piece}.png")));
        }
    }
    out
}

#[test]
fn clean_run_writes_exactly_the_catalog() {
    let tmp = tempfile::tempdir().unwrap();
    let summary = generate_all_in(tmp.path()).expect("generate");
    assert_eq!((summary.backgrounds, summary.board_halves, summary.pieces), (3, 3, 18));
    assert_eq!(summary.written.len(), 24);

    let found = files_under(tmp.path());
    assert_eq!(found, expected_files());

    for entry in catalog().unwrap() {
        let dims = image::image_dimensions(tmp.path().join(&entry.relative_path)).unwrap();
        assert_eq!(dims, (entry.width, entry.height), "{:?}", entry.relative_path);
    }
}

#[test]
fn tints_follow_asset_category() {
    let tmp = tempfile::tempdir().unwrap();
    generate_all_in(tmp.path()).unwrap();
    let probe = |rel: &str| image::open(tmp.path().join(rel)).unwrap().to_rgba8().get_pixel(30, 30).0;
    assert_eq!(probe("character_1/backgrounds/character_background.png"), [180, 180, 200, 255]);
    assert_eq!(probe("character_2/backgrounds/chessboard_half.png"), [220, 200, 180, 255]);
    assert_eq!(probe("character_3/pieces/white_bishop.png"), [240, 240, 240, 255]);
}

#[test]
fn rerun_is_pixel_identical() {
    let tmp = tempfile::tempdir().unwrap();
    generate_all_in(tmp.path()).unwrap();
    let first: Vec<_> = expected_files()
        .iter()
        .map(|rel| image::open(tmp.path().join(rel)).unwrap().to_rgba8())
        .collect();

    generate_all_in(tmp.path()).unwrap();
    assert_eq!(files_under(tmp.path()), expected_files());
    for (rel, before) in expected_files().iter().zip(first) {
        let after = image::open(tmp.path().join(rel)).unwrap().to_rgba8();
        assert!(before == after, "pixels changed for {rel:?}");
    }
}

#[test]
fn first_filesystem_error_stops_the_run() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("not_a_dir");
    std::fs::write(&root, b"x").unwrap();
    let err = generate_all_in(&root).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("character 1"), "{chain}");
    assert!(chain.contains("create directory"), "{chain}");
    // nothing was written next to the blocking file
    assert_eq!(files_under(tmp.path()), BTreeSet::from([PathBuf::from("not_a_dir")]));
}
