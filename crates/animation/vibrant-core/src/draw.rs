//! Backend-neutral draw commands and the canvas seam.

use crate::geometry::corners;
use crate::shape::{Fill, Shape, Stroke};
use crate::vector::{Radians, Vector2};
use serde::{Deserialize, Serialize};

/// One shape placed in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Line {
        from: Vector2,
        to: Vector2,
        stroke: Stroke,
    },
    /// Filled first, then stroked.
    Rectangle {
        corners: [Vector2; 4],
        stroke: Stroke,
        fill: Fill,
    },
}

impl DrawCommand {
    /// Place `shape` using a body's transform.
    ///
    /// A line starts at `position` and runs `max(size.x, size.y)` along the
    /// rotation axis. A rectangle is centered on `position` and rotated about
    /// that center.
    pub fn from_shape(position: Vector2, size: Vector2, rotation: Radians, shape: &Shape) -> Self {
        match *shape {
            Shape::Line { stroke } => DrawCommand::Line {
                from: position,
                to: position + Vector2::from_angle(rotation) * size.max_element(),
                stroke,
            },
            Shape::Rectangle { stroke, fill } => DrawCommand::Rectangle {
                corners: corners(position, size, rotation),
                stroke,
                fill,
            },
        }
    }

    pub fn stroke(&self) -> &Stroke {
        match self {
            DrawCommand::Line { stroke, .. } | DrawCommand::Rectangle { stroke, .. } => stroke,
        }
    }
}

/// Host renderer. Receives commands in draw order.
pub trait Canvas {
    fn draw(&mut self, command: &DrawCommand);
}

/// Collecting canvas, handy for headless hosts and tests.
impl Canvas for Vec<DrawCommand> {
    fn draw(&mut self, command: &DrawCommand) {
        self.push(*command);
    }
}
