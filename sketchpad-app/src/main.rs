//! # Sketchpad
//!
//! Headless replay tool for the Sketchpad editor.

use std::io::BufWriter;

use clap::Parser;
use sketchpad_app::{replay, CliArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Logs go to stderr; stdout may carry the SVG.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "sketchpad=info,sketchpad_app=info,sketchpad_core=info,sketchpad_renderer=info".into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    if args.log_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting Sketchpad replay");
    if let Some(ref path) = args.script {
        tracing::info!("Script: {}", path.display());
    }

    let editor = replay::run(&args)?;

    match args.svg_out {
        Some(ref path) => {
            let mut file = BufWriter::new(std::fs::File::create(path)?);
            replay::write_svg(&editor, &mut file)?;
            tracing::info!("Wrote SVG to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            replay::write_svg(&editor, &mut stdout.lock())?;
        }
    }

    if let Some(ref path) = args.overlay_out {
        replay::write_overlay(&editor, path)?;
    }

    tracing::info!("Sketchpad replay finished");
    Ok(())
}
