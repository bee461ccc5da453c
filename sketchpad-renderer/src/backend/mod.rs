//! Render surfaces: the persistent vector tree and the transient overlay.

pub mod pixel;
pub mod svg;

use serde::{Deserialize, Serialize};
use sketchpad_core::{Color, Rect, ShapeId};

use crate::RenderResult;

/// Kind of node in the vector tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementTag {
    /// `<rect>`
    Rect,
    /// `<circle>`
    Circle,
}

impl ElementTag {
    /// Tag name as written in markup.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Circle => "circle",
        }
    }
}

/// A node in the vector tree, keyed by shape identity.
///
/// Attributes keep their insertion order, like DOM attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorElement {
    /// Identity key of the shape this node draws.
    pub key: ShapeId,
    /// Node kind.
    pub tag: ElementTag,
    attributes: Vec<(String, String)>,
}

impl VectorElement {
    /// Create an element with no attributes.
    #[must_use]
    pub fn new(key: ShapeId, tag: ElementTag) -> Self {
        Self {
            key,
            tag,
            attributes: Vec::new(),
        }
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Value of an attribute, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, appending it if new.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    /// All attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// The persistent vector layer: one element per live shape.
pub trait VectorSurface {
    /// Look up an element by identity key.
    fn element(&self, key: &ShapeId) -> Option<&VectorElement>;

    /// Attach a new element on top of all others.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects the node.
    fn append(&mut self, element: VectorElement) -> RenderResult<()>;

    /// Overwrite one attribute of an existing element.
    ///
    /// Absent keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects the write.
    fn set_attribute(&mut self, key: &ShapeId, name: &str, value: &str) -> RenderResult<()>;

    /// Detach an element. Returns whether one was attached.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects the removal.
    fn detach(&mut self, key: &ShapeId) -> RenderResult<bool>;

    /// Number of attached elements.
    fn len(&self) -> usize;

    /// Check if no elements are attached.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The transient overlay layer, redrawn from scratch every frame.
pub trait OverlaySurface {
    /// Erase everything drawn so far.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be cleared.
    fn clear(&mut self) -> RenderResult<()>;

    /// Stroke the outline of a rectangle.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    fn stroke_rect(&mut self, rect: Rect, color: Color) -> RenderResult<()>;

    /// Surface size in pixels.
    fn size(&self) -> (u32, u32);
}
