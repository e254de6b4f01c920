//! Drawable shapes and their style.

use crate::color::Rgb;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f64,
    pub color: Rgb,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: Rgb::BLACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Fill {
    pub color: Rgb,
}

/// Closed set of shapes an entity can render as.
///
/// Lines carry only a stroke; rectangles carry a stroke and a fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Line { stroke: Stroke },
    Rectangle { stroke: Stroke, fill: Fill },
}

impl Shape {
    pub fn line(stroke: Stroke) -> Self {
        Shape::Line { stroke }
    }

    pub fn rectangle(stroke: Stroke, fill: Fill) -> Self {
        Shape::Rectangle { stroke, fill }
    }

    /// Rectangle filled with `color` and a zero-width stroke.
    pub fn filled_rectangle(color: Rgb) -> Self {
        Shape::Rectangle {
            stroke: Stroke {
                width: 0.0,
                color,
            },
            fill: Fill { color },
        }
    }

    pub fn stroke(&self) -> &Stroke {
        match self {
            Shape::Line { stroke } | Shape::Rectangle { stroke, .. } => stroke,
        }
    }

    pub fn stroke_mut(&mut self) -> &mut Stroke {
        match self {
            Shape::Line { stroke } | Shape::Rectangle { stroke, .. } => stroke,
        }
    }

    pub fn fill(&self) -> Option<&Fill> {
        match self {
            Shape::Line { .. } => None,
            Shape::Rectangle { fill, .. } => Some(fill),
        }
    }

    pub fn fill_mut(&mut self) -> Option<&mut Fill> {
        match self {
            Shape::Line { .. } => None,
            Shape::Rectangle { fill, .. } => Some(fill),
        }
    }
}
