//! Scene store: the ordered collection of live shapes.

use crate::shape::{Bounded, IdAllocator, IdStrategy, Shape, ShapeId};
use crate::{CoreError, CoreResult};

/// All shapes in paint order plus the highlighted subset.
///
/// Insertion order is paint order: later shapes are drawn on top.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    /// Identities under the pointer, in insertion order.
    highlighted: Vec<ShapeId>,
    ids: IdAllocator,
}

impl Scene {
    /// Create an empty scene issuing identities with the given strategy.
    #[must_use]
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            shapes: Vec::new(),
            highlighted: Vec::new(),
            ids: IdAllocator::new(strategy),
        }
    }

    /// Issue a fresh identity for a shape about to be constructed.
    pub fn allocate_id(&mut self) -> ShapeId {
        self.ids.allocate()
    }

    /// Append a shape on top of the scene.
    ///
    /// Identities minted outside this scene are reserved so the allocator
    /// never issues them again.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateId`] if a live shape already has this
    /// identity. The scene is left unchanged.
    pub fn add(&mut self, shape: Shape) -> CoreResult<()> {
        if self.get(shape.id()).is_some() {
            tracing::debug!("Scene add rejected, {} already live", shape.id());
            return Err(CoreError::DuplicateId(shape.id().to_string()));
        }
        self.ids.reserve(shape.id());
        tracing::debug!("Scene add {:?} {}", shape.kind(), shape.id());
        self.shapes.push(shape);
        Ok(())
    }

    /// Remove a shape by identity.
    ///
    /// Returns `None` if no shape has this identity; removal is idempotent.
    pub fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        self.highlighted.retain(|h| h != id);
        let index = self.shapes.iter().position(|s| s.id() == id)?;
        tracing::debug!("Scene remove {id}");
        Some(self.shapes.remove(index))
    }

    /// Get a shape by identity.
    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Get a mutable reference to a shape by identity.
    pub fn get_mut(&mut self, id: &ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// All shapes in paint order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Every shape containing the point, in insertion order.
    ///
    /// Overlapping shapes are all returned, not only the topmost.
    #[must_use]
    pub fn query_highlighted(&self, x: f32, y: f32) -> Vec<&Shape> {
        self.shapes.iter().filter(|s| s.is_point_in(x, y)).collect()
    }

    /// Replace the highlighted subset.
    pub fn set_highlighted(&mut self, ids: Vec<ShapeId>) {
        self.highlighted = ids;
    }

    /// Highlighted identities in insertion order.
    #[must_use]
    pub fn highlighted_ids(&self) -> &[ShapeId] {
        &self.highlighted
    }

    /// Highlighted shapes in insertion order.
    pub fn highlighted(&self) -> impl Iterator<Item = &Shape> {
        self.highlighted.iter().filter_map(|id| self.get(id))
    }

    /// Center each named shape on the point. Unknown identities are skipped.
    pub fn center_shapes_on(&mut self, ids: &[ShapeId], x: f32, y: f32) {
        for id in ids {
            if let Some(shape) = self.get_mut(id) {
                shape.center_on(x, y);
            }
        }
    }

    /// Number of shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the scene has no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
