//! # Sketchpad App
//!
//! Editor context and headless replay host for Sketchpad.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p sketchpad-app -- --demo --svg-out scene.svg
//! cargo run -p sketchpad-app -- --script session.json --overlay-out overlay.png
//! ```
//!
//! A script is a JSON array of [`EditorEvent`]s:
//!
//! ```json
//! [
//!   {"toolbar": "spawn_circle"},
//!   {"input": {"type": "pointer_move", "x": 30, "y": 30}},
//!   {"input": {"type": "key_press", "code": 100}}
//! ]
//! ```
//!
//! ## Architecture
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `EditorConfig` - Input, renderer and identity settings
//! - `Editor` - Owns the scene, input router and renderer; drains the event queue
//! - `replay` - Loads scripts and writes the SVG and overlay outputs

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod editor;
mod error;
mod events;
pub mod replay;

pub use editor::{Editor, HeadlessEditor};
pub use error::{EditorError, EditorResult};
pub use events::{EditorEvent, ShapeRequest, ToolbarAction};

use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};
use sketchpad_core::{DragMode, IdStrategy, InputConfig};
use sketchpad_renderer::RendererConfig;

/// Command-line arguments for the `sketchpad` replay tool.
#[derive(Debug, Clone, Parser)]
#[command(name = "sketchpad")]
#[command(about = "Replay editor events headlessly and export the result")]
#[command(version)]
pub struct CliArgs {
    /// JSON file holding an array of editor events
    #[arg(long, env = "SKETCHPAD_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Start from the demo scene (implied when no script is given)
    #[arg(long)]
    pub demo: bool,

    /// Write the vector tree here instead of stdout
    #[arg(long)]
    pub svg_out: Option<PathBuf>,

    /// Write the final overlay frame as PNG
    #[arg(long)]
    pub overlay_out: Option<PathBuf>,

    /// Surface width in pixels
    #[arg(long, default_value = "400")]
    pub width: u32,

    /// Surface height in pixels
    #[arg(long, default_value = "400")]
    pub height: u32,

    /// Key that deletes highlighted shapes
    #[arg(long, default_value = "d")]
    pub delete_key: char,

    /// Drag only the shapes highlighted at pointer-down
    #[arg(long)]
    pub lock_drag: bool,

    /// Use random identity tokens instead of sequential ones
    #[arg(long, env = "SKETCHPAD_RANDOM_IDS")]
    pub random_ids: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

/// Editor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Input routing settings.
    pub input: InputConfig,
    /// Renderer settings.
    pub renderer: RendererConfig,
    /// How shape identities are minted.
    pub id_strategy: IdStrategy,
}

impl From<CliArgs> for EditorConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            input: InputConfig {
                delete_key: args.delete_key,
                drag_mode: if args.lock_drag {
                    DragMode::Locked
                } else {
                    DragMode::Live
                },
            },
            renderer: RendererConfig {
                overlay_width: args.width,
                overlay_height: args.height,
                ..RendererConfig::default()
            },
            id_strategy: if args.random_ids {
                IdStrategy::Random
            } else {
                IdStrategy::Sequential
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_config_defaults() {
        let args = CliArgs::parse_from(["sketchpad"]);
        assert_eq!(EditorConfig::from(args), EditorConfig::default());
    }

    #[test]
    fn test_cli_flags() {
        let args = CliArgs::parse_from([
            "sketchpad",
            "--lock-drag",
            "--random-ids",
            "--delete-key",
            "x",
            "--width",
            "640",
            "--height",
            "480",
        ]);
        let config = EditorConfig::from(args);
        assert_eq!(config.input.drag_mode, DragMode::Locked);
        assert_eq!(config.input.delete_key, 'x');
        assert_eq!(config.id_strategy, IdStrategy::Random);
        assert_eq!(
            (config.renderer.overlay_width, config.renderer.overlay_height),
            (640, 480)
        );
    }
}
