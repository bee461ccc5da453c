//! Events the editor queue accepts.

use serde::{Deserialize, Serialize};
use sketchpad_core::{Color, InputEvent};

/// One unit of work for the editor, processed in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorEvent {
    /// Raw pointer or keyboard input.
    Input(InputEvent),
    /// Programmatic shape creation.
    Create(ShapeRequest),
    /// A toolbar button was clicked.
    Toolbar(ToolbarAction),
}

impl From<InputEvent> for EditorEvent {
    fn from(event: InputEvent) -> Self {
        Self::Input(event)
    }
}

impl From<ShapeRequest> for EditorEvent {
    fn from(request: ShapeRequest) -> Self {
        Self::Create(request)
    }
}

impl From<ToolbarAction> for EditorEvent {
    fn from(action: ToolbarAction) -> Self {
        Self::Toolbar(action)
    }
}

/// Request to create a shape. A missing `fill` picks a random color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeRequest {
    /// Axis-aligned rectangle.
    Rectangle {
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
        /// Width.
        width: f32,
        /// Height.
        height: f32,
        /// Fill color.
        #[serde(default = "Color::random")]
        fill: Color,
    },
    /// Circle anchored at the top-left of its bounding square.
    Circle {
        /// Left edge of the bounding square.
        x: f32,
        /// Top edge of the bounding square.
        y: f32,
        /// Radius.
        radius: f32,
        /// Fill color.
        #[serde(default = "Color::random")]
        fill: Color,
    },
}

/// Toolbar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolbarAction {
    /// Spawn a radius-30 circle at the origin.
    SpawnCircle,
    /// Spawn a 50x40 rectangle at the origin.
    SpawnRectangle,
}

impl ToolbarAction {
    /// The creation request this button issues, with a fresh random color.
    #[must_use]
    pub fn request(self) -> ShapeRequest {
        match self {
            Self::SpawnCircle => ShapeRequest::Circle {
                x: 0.0,
                y: 0.0,
                radius: 30.0,
                fill: Color::random(),
            },
            Self::SpawnRectangle => ShapeRequest::Rectangle {
                x: 0.0,
                y: 0.0,
                width: 50.0,
                height: 40.0,
                fill: Color::random(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_event_json() {
        let json = r#"{"input":{"type":"pointer_move","x":110.0,"y":110.0}}"#;
        let event: EditorEvent = serde_json::from_str(json).expect("parse");
        assert_eq!(
            event,
            EditorEvent::Input(InputEvent::PointerMove { x: 110.0, y: 110.0 })
        );
    }

    #[test]
    fn test_create_request_json() {
        let json = r##"{"create":{"kind":"circle","x":100,"y":100,"radius":30,"fill":"#00FF00"}}"##;
        let event: EditorEvent = serde_json::from_str(json).expect("parse");
        assert_eq!(
            event,
            EditorEvent::Create(ShapeRequest::Circle {
                x: 100.0,
                y: 100.0,
                radius: 30.0,
                fill: Color::GREEN,
            })
        );
    }

    #[test]
    fn test_missing_fill_is_random() {
        let json = r#"{"kind":"rectangle","x":0,"y":0,"width":5,"height":5}"#;
        let request: ShapeRequest = serde_json::from_str(json).expect("parse");
        assert!(matches!(request, ShapeRequest::Rectangle { width, .. } if width == 5.0));
    }

    #[test]
    fn test_toolbar_json() {
        let event: EditorEvent =
            serde_json::from_str(r#"{"toolbar":"spawn_rectangle"}"#).expect("parse");
        assert_eq!(event, EditorEvent::Toolbar(ToolbarAction::SpawnRectangle));
    }

    #[test]
    fn test_toolbar_requests() {
        match ToolbarAction::SpawnCircle.request() {
            ShapeRequest::Circle { x, y, radius, .. } => {
                assert_eq!((x, y, radius), (0.0, 0.0, 30.0));
            }
            ShapeRequest::Rectangle { .. } => panic!("expected a circle"),
        }
        match ToolbarAction::SpawnRectangle.request() {
            ShapeRequest::Rectangle {
                x,
                y,
                width,
                height,
                ..
            } => assert_eq!((x, y, width, height), (0.0, 0.0, 50.0, 40.0)),
            ShapeRequest::Circle { .. } => panic!("expected a rectangle"),
        }
    }
}
