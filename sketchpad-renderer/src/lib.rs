//! # Sketchpad Renderer
//!
//! Drives one frame of the editor across two coupled surfaces.
//!
//! ## Surfaces
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 Renderer                    │
//! ├──────────────────────┬──────────────────────┤
//! │ Vector tree          │ Pixel overlay        │
//! │ (persistent, keyed,  │ (transient, cleared  │
//! │  reconciled)         │  and redrawn)        │
//! └──────────────────────┴──────────────────────┘
//! ```
//!
//! The headless [`SvgTree`] and [`PixelOverlay`] surfaces let the whole
//! pipeline run without a display.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
pub mod error;
pub mod reconcile;

pub use backend::pixel::PixelOverlay;
pub use backend::svg::{MutationCounts, SvgTree};
pub use backend::{ElementTag, OverlaySurface, VectorElement, VectorSurface};
pub use error::{RenderError, RenderResult};
pub use reconcile::{reconcile, ReconcileReport, ToVectorElement};

use serde::{Deserialize, Serialize};
use sketchpad_core::{Bounded, Color, Scene, ShapeId};

/// Configuration for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Stroke color of highlight outlines.
    pub highlight_color: Color,
    /// Overlay width in pixels.
    pub overlay_width: u32,
    /// Overlay height in pixels.
    pub overlay_height: u32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            highlight_color: Color::BLUE,
            overlay_width: 400,
            overlay_height: 400,
        }
    }
}

/// Summary of one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frame number, starting at 1.
    pub frame: u64,
    /// Highlight outlines drawn on the overlay.
    pub highlighted: usize,
    /// Vector tree changes.
    pub reconcile: ReconcileReport,
}

/// Render orchestrator over a vector surface and an overlay surface.
#[derive(Debug)]
pub struct Renderer<V, O> {
    config: RendererConfig,
    vector: V,
    overlay: O,
    frame_count: u64,
}

/// Renderer over the in-memory surfaces.
pub type HeadlessRenderer = Renderer<SvgTree, PixelOverlay>;

impl HeadlessRenderer {
    /// Create a renderer with an empty [`SvgTree`] and a [`PixelOverlay`]
    /// sized from the configuration.
    #[must_use]
    pub fn headless(config: RendererConfig) -> Self {
        let overlay = PixelOverlay::new(config.overlay_width, config.overlay_height);
        Self::new(config, SvgTree::new(), overlay)
    }
}

impl<V: VectorSurface, O: OverlaySurface> Renderer<V, O> {
    /// Create a renderer over the given surfaces.
    #[must_use]
    pub fn new(config: RendererConfig, vector: V, overlay: O) -> Self {
        Self {
            config,
            vector,
            overlay,
            frame_count: 0,
        }
    }

    /// Render a frame: redraw highlight outlines, then reconcile the tree.
    ///
    /// # Errors
    ///
    /// Returns an error if either surface fails.
    pub fn render(&mut self, scene: &Scene) -> RenderResult<FrameStats> {
        self.overlay.clear()?;
        let mut highlighted = 0;
        for shape in scene.highlighted() {
            self.overlay
                .stroke_rect(shape.bounds(), self.config.highlight_color)?;
            highlighted += 1;
        }

        let reconcile = reconcile(scene.shapes(), &mut self.vector)?;
        self.frame_count += 1;

        tracing::trace!(
            "Frame {}: {} shapes, {} highlighted",
            self.frame_count,
            scene.len(),
            highlighted
        );
        Ok(FrameStats {
            frame: self.frame_count,
            highlighted,
            reconcile,
        })
    }

    /// Detach the element of a removed shape. Absent keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the vector surface fails.
    pub fn detach(&mut self, id: &ShapeId) -> RenderResult<bool> {
        let detached = self.vector.detach(id)?;
        if detached {
            tracing::debug!("Detached element {id}");
        }
        Ok(detached)
    }

    /// The vector surface.
    #[must_use]
    pub fn vector(&self) -> &V {
        &self.vector
    }

    /// The overlay surface.
    #[must_use]
    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    /// Frames rendered so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Renderer configuration.
    #[must_use]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }
}
