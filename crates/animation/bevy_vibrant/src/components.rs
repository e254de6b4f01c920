use bevy::prelude::*;
use vibrant_core::geometry::contains_point_with_epsilon;
use vibrant_core::{InteractionState, Radians, Shape, Vector2};
use vibrant_layout::LayoutVars;

/// Transform of a simulated object. `position` is the center of rectangles
/// and hit areas, and the origin of lines.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    pub position: Vector2,
    pub size: Vector2,
    pub rotation: Radians,
}

impl Body {
    pub fn new(position: Vector2, size: Vector2) -> Self {
        Self {
            position,
            size,
            rotation: 0.0,
        }
    }

    pub fn with_rotation(mut self, rotation: Radians) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn contains(&self, point: Vector2, epsilon: f64) -> bool {
        contains_point_with_epsilon(point, self.position, self.size, self.rotation, epsilon)
    }
}

/// What an entity draws as.
#[derive(Component, Debug, Clone, Copy, PartialEq, Deref, DerefMut)]
pub struct Renderable(pub Shape);

/// Opt-in to pointer hit testing and interaction events.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Deref, DerefMut)]
pub struct Mouseable(pub InteractionState);

/// Solver variables whose resolved values drive this entity's [`Body`].
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Deref)]
pub struct Layout(pub LayoutVars);
