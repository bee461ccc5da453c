//! Input routing: pointer state machine, hit-testing, drag and delete.

use serde::{Deserialize, Serialize};

use crate::{InputEvent, Scene, Shape, ShapeId};

/// Pointer button state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PointerState {
    /// No button held.
    #[default]
    Idle,
    /// Button held since a pointer-down at this position.
    Pressed {
        /// X coordinate of the pointer-down.
        x: f32,
        /// Y coordinate of the pointer-down.
        y: f32,
    },
}

/// Which shapes follow the pointer while the button is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragMode {
    /// Drag whatever is highlighted at the current pointer position.
    ///
    /// A fast move can pick up newly hovered shapes or drop shapes that fall
    /// out from under the pointer.
    #[default]
    Live,
    /// Drag the shapes highlighted at pointer-down until pointer-up.
    Locked,
}

/// Input routing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Key that deletes highlighted shapes.
    pub delete_key: char,
    /// Drag set policy.
    pub drag_mode: DragMode,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delete_key: 'd',
            drag_mode: DragMode::default(),
        }
    }
}

/// What the caller must do after an event was routed.
#[derive(Debug, Clone, PartialEq)]
pub enum InputOutcome {
    /// Nothing changed that needs a frame.
    Idle,
    /// Highlight or positions changed; render.
    Moved,
    /// Shapes were removed from the scene; detach their elements and render.
    Removed(Vec<Shape>),
}

impl InputOutcome {
    /// Whether a render pass must follow.
    #[must_use]
    pub fn needs_render(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Translates raw input into scene mutations.
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    config: InputConfig,
    pointer: PointerState,
    /// Drag set captured at pointer-down in [`DragMode::Locked`].
    locked: Vec<ShapeId>,
}

impl InputRouter {
    /// Create a router with the given configuration.
    #[must_use]
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            pointer: PointerState::Idle,
            locked: Vec::new(),
        }
    }

    /// Current pointer state.
    #[must_use]
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Router configuration.
    #[must_use]
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Shapes that would move on the next pointer move, given the scene.
    #[must_use]
    pub fn drag_set<'a>(&'a self, scene: &'a Scene) -> &'a [ShapeId] {
        match (self.pointer, self.config.drag_mode) {
            (PointerState::Idle, _) => &[],
            (PointerState::Pressed { .. }, DragMode::Live) => scene.highlighted_ids(),
            (PointerState::Pressed { .. }, DragMode::Locked) => &self.locked,
        }
    }

    /// Route one event against the scene.
    ///
    /// Pointer events with a NaN or infinite coordinate are dropped.
    pub fn process_event(&mut self, scene: &mut Scene, event: &InputEvent) -> InputOutcome {
        if let Some((x, y)) = event.position() {
            if !(x.is_finite() && y.is_finite()) {
                tracing::debug!("Dropping pointer event at non-finite ({x}, {y})");
                return InputOutcome::Idle;
            }
        }
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.pointer = PointerState::Pressed { x, y };
                if self.config.drag_mode == DragMode::Locked {
                    self.locked = scene.highlighted_ids().to_vec();
                }
                tracing::debug!("Pointer pressed at ({x}, {y})");
                InputOutcome::Idle
            }
            InputEvent::PointerUp { .. } => {
                self.pointer = PointerState::Idle;
                self.locked.clear();
                tracing::debug!("Pointer released");
                InputOutcome::Idle
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer_move(scene, x, y);
                InputOutcome::Moved
            }
            InputEvent::KeyPress { code } => self.key_press(scene, code),
        }
    }

    fn pointer_move(&mut self, scene: &mut Scene, x: f32, y: f32) {
        let hits: Vec<ShapeId> = scene
            .query_highlighted(x, y)
            .into_iter()
            .map(|s| s.id().clone())
            .collect();
        tracing::trace!("Pointer at ({x}, {y}) over {} shapes", hits.len());
        scene.set_highlighted(hits);

        if let PointerState::Pressed { .. } = self.pointer {
            let dragged = self.drag_set(scene).to_vec();
            scene.center_shapes_on(&dragged, x, y);
        }
    }

    fn key_press(&mut self, scene: &mut Scene, code: u32) -> InputOutcome {
        if code != u32::from(self.config.delete_key) || scene.highlighted_ids().is_empty() {
            return InputOutcome::Idle;
        }

        let doomed = scene.highlighted_ids().to_vec();
        let removed: Vec<Shape> = doomed.iter().filter_map(|id| scene.remove(id)).collect();
        self.locked.retain(|id| !doomed.contains(id));
        tracing::debug!("Deleted {} highlighted shapes", removed.len());
        InputOutcome::Removed(removed)
    }
}
