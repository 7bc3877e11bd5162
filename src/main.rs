//! Placeholder art generator.
//!
//! Writes the 24 stand-in PNGs (per-character backgrounds, board halves and
//! white piece sets) under `assets/characters/`. Takes no options; re-running
//! overwrites the previous output.
//!
//! Usage:
//!   cargo run --bin chess_placeholders
//!
//! Set `RUST_LOG=chess_placeholders=debug` to see font fallback decisions.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(about = "Generate placeholder PNGs for missing chess character art", version, author)]
struct Args {}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();

    // stderr keeps stdout to the progress lines and summary
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chess_placeholders=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let summary = chess_placeholders::generate_all()?;
    println!("\n{summary}");
    Ok(())
}
