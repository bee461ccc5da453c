//! Keyed reconciliation of the scene against the vector tree.
//!
//! Every shape maps to exactly one element, correlated by identity. Existing
//! elements are updated in place with the smallest set of attribute writes;
//! missing ones are appended on top. Nothing is torn down here: elements of
//! removed shapes are detached explicitly by the caller, and existing
//! elements are never reordered.

use sketchpad_core::{Geometry, Shape};

use crate::backend::{ElementTag, VectorElement, VectorSurface};
use crate::RenderResult;

/// Conversion of a shape into its vector-tree node.
pub trait ToVectorElement {
    /// Fresh element with every attribute set.
    fn to_vector_element(&self) -> VectorElement;
}

impl ToVectorElement for Shape {
    fn to_vector_element(&self) -> VectorElement {
        let key = self.id().clone();
        let fill = self.fill.to_string();
        match *self.geometry() {
            Geometry::Rectangle {
                x,
                y,
                width,
                height,
            } => VectorElement::new(key.clone(), ElementTag::Rect)
                .with_attribute("x", format_number(x))
                .with_attribute("y", format_number(y))
                .with_attribute("width", format_number(width))
                .with_attribute("height", format_number(height))
                .with_attribute("fill", fill)
                .with_attribute("id", key.as_str()),
            Geometry::Circle { x, y, radius } => VectorElement::new(key.clone(), ElementTag::Circle)
                .with_attribute("cx", format_number(x + radius))
                .with_attribute("cy", format_number(y + radius))
                .with_attribute("r", format_number(radius))
                .with_attribute("fill", fill)
                .with_attribute("id", key.as_str()),
        }
    }
}

/// Shortest decimal form of a coordinate: `250`, `2.5`, never `-0`.
#[must_use]
pub fn format_number(value: f32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// What one reconciliation pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Elements appended for shapes seen for the first time.
    pub created: usize,
    /// Attribute writes on existing elements.
    pub attribute_writes: usize,
    /// Existing elements that needed no write.
    pub unchanged: usize,
}

/// Bring the vector tree in line with the shapes, in sequence order.
///
/// # Errors
///
/// Returns the first error reported by the surface.
pub fn reconcile<V>(shapes: &[Shape], surface: &mut V) -> RenderResult<ReconcileReport>
where
    V: VectorSurface + ?Sized,
{
    let mut report = ReconcileReport::default();

    for shape in shapes {
        let fresh = shape.to_vector_element();

        // Only attributes already on the element are compared.
        let writes: Option<Vec<(String, String)>> = surface.element(shape.id()).map(|existing| {
            existing
                .attributes()
                .filter_map(|(name, current)| {
                    fresh
                        .attribute(name)
                        .filter(|&value| value != current)
                        .map(|value| (name.to_string(), value.to_string()))
                })
                .collect()
        });

        let Some(writes) = writes else {
            surface.append(fresh)?;
            report.created += 1;
            continue;
        };

        if writes.is_empty() {
            report.unchanged += 1;
            continue;
        }
        for (name, value) in &writes {
            surface.set_attribute(shape.id(), name, value)?;
        }
        report.attribute_writes += writes.len();
    }

    tracing::trace!(
        "Reconciled {} shapes: {} created, {} writes",
        shapes.len(),
        report.created,
        report.attribute_writes
    );
    Ok(report)
}
