//! Headless vector tree that mirrors an SVG document in memory.

use std::fmt::Write;

use sketchpad_core::ShapeId;

use crate::RenderResult;

use super::{VectorElement, VectorSurface};

/// Mutations applied to a [`SvgTree`] since creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationCounts {
    /// Elements attached.
    pub appends: u64,
    /// Attribute writes on attached elements.
    pub attribute_writes: u64,
    /// Elements detached.
    pub detaches: u64,
}

/// In-memory vector tree in document order.
#[derive(Debug, Clone, Default)]
pub struct SvgTree {
    elements: Vec<VectorElement>,
    mutations: MutationCounts,
}

impl SvgTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attached elements in document (paint) order.
    pub fn elements(&self) -> impl Iterator<Item = &VectorElement> {
        self.elements.iter()
    }

    /// Mutation counters.
    #[must_use]
    pub fn mutations(&self) -> MutationCounts {
        self.mutations
    }

    /// Serialize the tree as an SVG document.
    #[must_use]
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        let mut svg = String::with_capacity(256 + self.elements.len() * 96);
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\">",
        );
        for element in &self.elements {
            let _ = write!(svg, "<{}", element.tag.name());
            for (name, value) in element.attributes() {
                let _ = write!(svg, " {name}=\"{}\"", escape_xml(value));
            }
            svg.push_str("/>");
        }
        svg.push_str("</svg>");
        svg
    }

    fn position(&self, key: &ShapeId) -> Option<usize> {
        self.elements.iter().position(|e| &e.key == key)
    }
}

impl VectorSurface for SvgTree {
    fn element(&self, key: &ShapeId) -> Option<&VectorElement> {
        self.elements.iter().find(|e| &e.key == key)
    }

    fn append(&mut self, element: VectorElement) -> RenderResult<()> {
        tracing::trace!("Append <{}> {}", element.tag.name(), element.key);
        self.elements.push(element);
        self.mutations.appends += 1;
        Ok(())
    }

    fn set_attribute(&mut self, key: &ShapeId, name: &str, value: &str) -> RenderResult<()> {
        if let Some(index) = self.position(key) {
            tracing::trace!("Set {key}.{name} = {value}");
            self.elements[index].set_attribute(name, value);
            self.mutations.attribute_writes += 1;
        }
        Ok(())
    }

    fn detach(&mut self, key: &ShapeId) -> RenderResult<bool> {
        let Some(index) = self.position(key) else {
            return Ok(false);
        };
        self.elements.remove(index);
        self.mutations.detaches += 1;
        tracing::trace!("Detach {key}");
        Ok(true)
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}

/// Escape special XML characters.
fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ElementTag;

    fn rect_element(token: &str) -> VectorElement {
        VectorElement::new(ShapeId::from_token(token), ElementTag::Rect)
            .with_attribute("x", "0")
            .with_attribute("fill", "#FF0000")
    }

    #[test]
    fn test_append_and_lookup() {
        let mut tree = SvgTree::new();
        tree.append(rect_element("a")).expect("append");
        tree.append(rect_element("b")).expect("append");

        assert_eq!(tree.len(), 2);
        assert!(tree.element(&ShapeId::from_token("a")).is_some());
        assert!(tree.element(&ShapeId::from_token("z")).is_none());
        assert_eq!(tree.mutations().appends, 2);
    }

    #[test]
    fn test_set_attribute_on_absent_key_is_noop() {
        let mut tree = SvgTree::new();
        tree.set_attribute(&ShapeId::from_token("a"), "x", "1")
            .expect("set attribute");
        assert_eq!(tree.mutations().attribute_writes, 0);
    }

    #[test]
    fn test_detach_is_idempotent() {
        let mut tree = SvgTree::new();
        let key = ShapeId::from_token("a");
        tree.append(rect_element("a")).expect("append");

        assert!(tree.detach(&key).expect("detach"));
        assert!(!tree.detach(&key).expect("detach"));
        assert!(tree.is_empty());
        assert_eq!(tree.mutations().detaches, 1);
    }

    #[test]
    fn test_svg_export() {
        let mut tree = SvgTree::new();
        tree.append(rect_element("a")).expect("append");
        tree.append(
            VectorElement::new(ShapeId::from_token("b"), ElementTag::Circle)
                .with_attribute("r", "30")
                .with_attribute("id", "<b&\"c\">"),
        )
        .expect("append");

        let svg = tree.to_svg(400, 400);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("width=\"400\""));
        assert!(svg.contains("<rect x=\"0\" fill=\"#FF0000\"/>"));
        assert!(svg.contains("<circle r=\"30\" id=\"&lt;b&amp;&quot;c&quot;&gt;\"/>"));
    }
}
