//! Shapes - the building blocks of scenes.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{Color, Rect};
use crate::{CoreError, CoreResult};

/// Length of an identity token inside the compact token space.
pub const TOKEN_LEN: usize = 4;

/// Number of distinct compact tokens (36^4).
pub const TOKEN_SPACE: u64 = 36 * 36 * 36 * 36;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Stable identity of a shape.
///
/// Correlates a shape with its rendered element across frames. Never
/// reassigned once issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(String);

impl ShapeId {
    /// Wrap an existing token.
    #[must_use]
    pub fn from_token(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How an [`IdAllocator`] picks new tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Monotonic counter: `0000`, `0001`, ... `zzzz`, `10000`, ...
    #[default]
    Sequential,
    /// Random compact token, checked against every token already issued.
    Random,
}

/// Hands out unique shape identities.
///
/// Every token issued or reserved stays taken for the allocator's lifetime,
/// so a removed shape's identity is never handed out again.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    strategy: IdStrategy,
    next: u64,
    taken: HashSet<ShapeId>,
}

impl IdAllocator {
    /// Create an allocator with the given strategy.
    #[must_use]
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            next: 0,
            taken: HashSet::new(),
        }
    }

    /// The strategy in use.
    #[must_use]
    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Issue the next identity, skipping every taken token.
    pub fn allocate(&mut self) -> ShapeId {
        loop {
            let value = match self.strategy {
                IdStrategy::Sequential => self.bump(),
                IdStrategy::Random => self.draw_random(),
            };
            let id = ShapeId(encode_base36(value, TOKEN_LEN));
            if self.taken.insert(id.clone()) {
                return id;
            }
            tracing::trace!("Identity {id} already taken, redrawing");
        }
    }

    /// Mark an identity minted elsewhere as taken.
    ///
    /// Returns `false` if it was already taken.
    pub fn reserve(&mut self, id: &ShapeId) -> bool {
        self.taken.insert(id.clone())
    }

    /// Whether an identity has been issued or reserved.
    #[must_use]
    pub fn is_taken(&self, id: &ShapeId) -> bool {
        self.taken.contains(id)
    }

    fn bump(&mut self) -> u64 {
        let value = self.next;
        self.next += 1;
        value
    }

    #[allow(clippy::cast_possible_truncation)] // remainder is below TOKEN_SPACE
    fn draw_random(&mut self) -> u64 {
        if self.taken.len() as u64 >= TOKEN_SPACE {
            // Compact space exhausted, continue with wider tokens.
            return TOKEN_SPACE + self.bump();
        }
        (Uuid::new_v4().as_u128() % u128::from(TOKEN_SPACE)) as u64
    }
}

fn encode_base36(mut value: u64, min_len: usize) -> String {
    let mut digits = Vec::with_capacity(min_len);
    loop {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
        if value == 0 {
            break;
        }
    }
    while digits.len() < min_len {
        digits.push(b'0');
    }
    digits.iter().rev().map(|&d| char::from(d)).collect()
}

/// Capability shared by every shape variant.
pub trait Bounded {
    /// Axis-aligned bounding box in scene coordinates.
    fn bounds(&self) -> Rect;

    /// Hit-test a point against the bounding box, edges excluded.
    fn is_point_in(&self, x: f32, y: f32) -> bool {
        self.bounds().contains(x, y)
    }
}

/// Variant-specific geometry of a shape.
///
/// Serialize-only: shapes are built through the validated constructors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geometry {
    /// A rectangle whose bounding box is itself.
    Rectangle {
        /// X position of the left edge.
        x: f32,
        /// Y position of the top edge.
        y: f32,
        /// Width in pixels.
        width: f32,
        /// Height in pixels.
        height: f32,
    },
    /// A circle whose origin is the top-left of its bounding square.
    Circle {
        /// X position of the bounding square's left edge.
        x: f32,
        /// Y position of the bounding square's top edge.
        y: f32,
        /// Radius in pixels.
        radius: f32,
    },
}

impl Bounded for Geometry {
    fn bounds(&self) -> Rect {
        match *self {
            Self::Rectangle {
                x,
                y,
                width,
                height,
            } => Rect::new(x, y, width, height),
            // Hit area is the full square, corners included.
            Self::Circle { x, y, radius } => Rect::new(x, y, radius * 2.0, radius * 2.0),
        }
    }
}

/// Discriminant of [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// See [`Geometry::Rectangle`].
    Rectangle,
    /// See [`Geometry::Circle`].
    Circle,
}

/// A shape in the scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    id: ShapeId,
    /// Fill color.
    pub fill: Color,
    geometry: Geometry,
}

impl Shape {
    /// Create a rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidGeometry`] if the origin is not finite or
    /// the size is negative or not finite.
    pub fn rectangle(
        id: ShapeId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Color,
    ) -> CoreResult<Self> {
        check_coordinate("x", x)?;
        check_coordinate("y", y)?;
        check_extent("width", width)?;
        check_extent("height", height)?;
        Ok(Self {
            id,
            fill,
            geometry: Geometry::Rectangle {
                x,
                y,
                width,
                height,
            },
        })
    }

    /// Create a circle with its bounding square anchored at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidGeometry`] if the origin is not finite or
    /// the radius is negative or not finite.
    pub fn circle(id: ShapeId, x: f32, y: f32, radius: f32, fill: Color) -> CoreResult<Self> {
        check_coordinate("x", x)?;
        check_coordinate("y", y)?;
        check_extent("radius", radius)?;
        Ok(Self {
            id,
            fill,
            geometry: Geometry::Circle { x, y, radius },
        })
    }

    /// Identity of this shape.
    #[must_use]
    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    /// Variant geometry.
    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Which variant this shape is.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self.geometry {
            Geometry::Rectangle { .. } => ShapeKind::Rectangle,
            Geometry::Circle { .. } => ShapeKind::Circle,
        }
    }

    /// Top-left of the bounding box.
    #[must_use]
    pub fn origin(&self) -> (f32, f32) {
        match self.geometry {
            Geometry::Rectangle { x, y, .. } | Geometry::Circle { x, y, .. } => (x, y),
        }
    }

    /// Move the bounding box's top-left corner.
    pub fn set_origin(&mut self, new_x: f32, new_y: f32) {
        match &mut self.geometry {
            Geometry::Rectangle { x, y, .. } | Geometry::Circle { x, y, .. } => {
                *x = new_x;
                *y = new_y;
            }
        }
    }

    /// Bounding-box width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.bounds().width
    }

    /// Bounding-box height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.bounds().height
    }

    /// Move the shape so its bounding-box center lands on `(px, py)`.
    pub fn center_on(&mut self, px: f32, py: f32) {
        let bounds = self.bounds();
        self.set_origin(px - bounds.width / 2.0, py - bounds.height / 2.0);
    }
}

impl Bounded for Shape {
    fn bounds(&self) -> Rect {
        self.geometry.bounds()
    }
}

fn check_coordinate(name: &str, value: f32) -> CoreResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::InvalidGeometry(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

fn check_extent(name: &str, value: f32) -> CoreResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidGeometry(format!(
            "{name} must be finite and non-negative, got {value}"
        )))
    }
}
