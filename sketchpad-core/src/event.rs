//! Input events for scene interaction.

use serde::{Deserialize, Serialize};

/// Char code of the default delete key, lowercase `d`.
pub const DELETE_KEY_CODE: u32 = 100;

/// Raw pointer and keyboard input the editor can receive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer moved to a position in scene coordinates.
    PointerMove {
        /// X coordinate.
        x: f32,
        /// Y coordinate.
        y: f32,
    },

    /// Primary button pressed.
    PointerDown {
        /// X coordinate.
        x: f32,
        /// Y coordinate.
        y: f32,
    },

    /// Primary button released.
    PointerUp {
        /// X coordinate.
        x: f32,
        /// Y coordinate.
        y: f32,
    },

    /// Character key pressed.
    KeyPress {
        /// Character code of the key.
        code: u32,
    },
}

impl InputEvent {
    /// Key press for a character.
    #[must_use]
    pub fn key(c: char) -> Self {
        Self::KeyPress { code: u32::from(c) }
    }

    /// Pointer position carried by the event, if any.
    #[must_use]
    pub fn position(&self) -> Option<(f32, f32)> {
        match *self {
            Self::PointerMove { x, y } | Self::PointerDown { x, y } | Self::PointerUp { x, y } => {
                Some((x, y))
            }
            Self::KeyPress { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_helper_uses_char_code() {
        assert_eq!(
            InputEvent::key('d'),
            InputEvent::KeyPress {
                code: DELETE_KEY_CODE
            }
        );
    }

    #[test]
    fn test_position() {
        assert_eq!(
            InputEvent::PointerMove { x: 1.0, y: 2.0 }.position(),
            Some((1.0, 2.0))
        );
        assert_eq!(InputEvent::key('x').position(), None);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(InputEvent::PointerMove { x: 110.0, y: 110.0 })
            .expect("serialize");
        assert_eq!(json["type"], "pointer_move");
        assert_eq!(json["x"], 110.0);

        let event: InputEvent =
            serde_json::from_str(r#"{"type":"key_press","code":100}"#).expect("deserialize");
        assert_eq!(event, InputEvent::key('d'));
    }
}
