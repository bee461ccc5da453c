//! # Sketchpad Core
//!
//! Scene logic for a minimal retained-mode 2D editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               sketchpad-core                │
//! ├─────────────────────────────────────────────┤
//! │  Geometry        │  Scene Store             │
//! │  - Rect, Color   │  - Paint-ordered shapes  │
//! │  - Shape variants│  - Identity allocation   │
//! │  - Hit-testing   │  - Highlighted subset    │
//! ├─────────────────────────────────────────────┤
//! │  Input Router                               │
//! │  - Pointer state machine (idle / pressed)   │
//! │  - Drag to pointer, delete highlighted      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Rendering lives in `sketchpad-renderer`; this crate never touches a
//! surface.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod scene;
pub mod shape;

pub use error::{CoreError, CoreResult};
pub use event::{InputEvent, DELETE_KEY_CODE};
pub use geometry::{Color, Rect};
pub use input::{DragMode, InputConfig, InputOutcome, InputRouter, PointerState};
pub use scene::Scene;
pub use shape::{Bounded, Geometry, IdAllocator, IdStrategy, Shape, ShapeId, ShapeKind};

/// Sketchpad core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
