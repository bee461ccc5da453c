//! The editor context: scene, input router and renderer in one place.

use std::collections::VecDeque;

use sketchpad_core::{Color, InputEvent, InputOutcome, InputRouter, Scene, Shape, ShapeId};
use sketchpad_renderer::{
    FrameStats, HeadlessRenderer, OverlaySurface, PixelOverlay, Renderer, SvgTree, VectorSurface,
};

use crate::error::EditorResult;
use crate::events::{EditorEvent, ShapeRequest, ToolbarAction};
use crate::EditorConfig;

/// An editing session.
///
/// Every mutation that changes what is on screen is followed by a render,
/// so the surfaces always reflect the scene once a call returns.
#[derive(Debug)]
pub struct Editor<V, O> {
    scene: Scene,
    router: InputRouter,
    renderer: Renderer<V, O>,
    queue: VecDeque<EditorEvent>,
}

/// Editor over the in-memory surfaces.
pub type HeadlessEditor = Editor<SvgTree, PixelOverlay>;

impl HeadlessEditor {
    /// Create an editor that renders into an [`SvgTree`] and a [`PixelOverlay`].
    #[must_use]
    pub fn headless(config: EditorConfig) -> Self {
        let renderer = HeadlessRenderer::headless(config.renderer);
        Self::new(&config, renderer)
    }

    /// The vector tree as an SVG document sized like the overlay.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let (width, height) = self.renderer.overlay().size();
        self.renderer.vector().to_svg(width, height)
    }

    /// The current overlay frame as PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn overlay_png(&self) -> EditorResult<Vec<u8>> {
        Ok(self.renderer.overlay().to_png()?)
    }
}

impl<V: VectorSurface, O: OverlaySurface> Editor<V, O> {
    /// Create an editor around an existing renderer.
    #[must_use]
    pub fn new(config: &EditorConfig, renderer: Renderer<V, O>) -> Self {
        Self {
            scene: Scene::new(config.id_strategy),
            router: InputRouter::new(config.input),
            renderer,
            queue: VecDeque::new(),
        }
    }

    /// Add a shape and render.
    ///
    /// # Errors
    ///
    /// Returns an error if a live shape already has the same identity or
    /// rendering fails.
    pub fn add(&mut self, shape: Shape) -> EditorResult<FrameStats> {
        self.scene.add(shape)?;
        self.render()
    }

    /// Create a rectangle with a fresh identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry is invalid or rendering fails.
    pub fn create_rectangle(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Color,
    ) -> EditorResult<ShapeId> {
        let id = self.scene.allocate_id();
        let shape = Shape::rectangle(id.clone(), x, y, width, height, fill)?;
        self.add(shape)?;
        Ok(id)
    }

    /// Create a circle with a fresh identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry is invalid or rendering fails.
    pub fn create_circle(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        fill: Color,
    ) -> EditorResult<ShapeId> {
        let id = self.scene.allocate_id();
        let shape = Shape::circle(id.clone(), x, y, radius, fill)?;
        self.add(shape)?;
        Ok(id)
    }

    /// Create a shape from a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry is invalid or rendering fails.
    pub fn create(&mut self, request: ShapeRequest) -> EditorResult<ShapeId> {
        match request {
            ShapeRequest::Rectangle {
                x,
                y,
                width,
                height,
                fill,
            } => self.create_rectangle(x, y, width, height, fill),
            ShapeRequest::Circle { x, y, radius, fill } => self.create_circle(x, y, radius, fill),
        }
    }

    /// Remove a shape: detach its element, drop it from the scene, render.
    ///
    /// Removing an unknown id leaves everything as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if a surface fails.
    pub fn remove(&mut self, id: &ShapeId) -> EditorResult<Option<Shape>> {
        self.renderer.detach(id)?;
        let removed = self.scene.remove(id);
        self.render()?;
        Ok(removed)
    }

    /// Route one input event and bring the surfaces up to date.
    ///
    /// # Errors
    ///
    /// Returns an error if a surface fails.
    pub fn handle_input(&mut self, event: &InputEvent) -> EditorResult<InputOutcome> {
        let outcome = self.router.process_event(&mut self.scene, event);
        match &outcome {
            InputOutcome::Idle => {}
            InputOutcome::Moved => {
                self.render()?;
            }
            InputOutcome::Removed(shapes) => {
                for shape in shapes {
                    self.remove(shape.id())?;
                }
                self.render()?;
            }
        }
        Ok(outcome)
    }

    /// Handle one editor event immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if shape creation or rendering fails.
    pub fn apply(&mut self, event: EditorEvent) -> EditorResult<()> {
        match event {
            EditorEvent::Input(input) => {
                self.handle_input(&input)?;
            }
            EditorEvent::Create(request) => {
                self.create(request)?;
            }
            EditorEvent::Toolbar(action) => {
                self.toolbar(action)?;
            }
        }
        Ok(())
    }

    /// Toolbar click: spawn a shape at the origin with a random color.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn toolbar(&mut self, action: ToolbarAction) -> EditorResult<ShapeId> {
        tracing::debug!("Toolbar action {action:?}");
        self.create(action.request())
    }

    /// Queue an event for [`Editor::run_pending`].
    pub fn enqueue(&mut self, event: impl Into<EditorEvent>) {
        self.queue.push_back(event.into());
    }

    /// Events waiting in the queue.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Drain the queue in arrival order.
    ///
    /// Stops at the first failing event; events after it stay queued.
    ///
    /// # Errors
    ///
    /// Returns the error of the failing event.
    pub fn run_pending(&mut self) -> EditorResult<usize> {
        let mut processed = 0;
        while let Some(event) = self.queue.pop_front() {
            self.apply(event)?;
            processed += 1;
        }
        Ok(processed)
    }

    /// Populate the two-shape demo scene.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn load_demo(&mut self) -> EditorResult<()> {
        self.create_rectangle(200.0, 50.0, 100.0, 100.0, Color::RED)?;
        self.create_circle(100.0, 100.0, 30.0, Color::GREEN)?;
        Ok(())
    }

    /// Render one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if a surface fails.
    pub fn render(&mut self) -> EditorResult<FrameStats> {
        Ok(self.renderer.render(&self.scene)?)
    }

    /// Live shapes in paint order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        self.scene.shapes()
    }

    /// The scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The renderer and its surfaces.
    #[must_use]
    pub fn renderer(&self) -> &Renderer<V, O> {
        &self.renderer
    }

    /// The input router.
    #[must_use]
    pub fn router(&self) -> &InputRouter {
        &self.router
    }
}
