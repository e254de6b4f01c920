use bevy::prelude::*;
use hashbrown::HashMap;
use vibrant_core::{Canvas, Config, DrawCommand, PointerSnapshot};
use vibrant_layout::{LayoutError, LayoutVars};

/// Time elapsed since the previous tick, in the same unit tween durations use.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    pub delta: f64,
}

/// Pointer state for the current tick. `None` skips interaction processing.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Deref, DerefMut)]
pub struct PointerInput(pub Option<PointerSnapshot>);

/// Pending viewport size, consumed by the layout stage.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Deref, DerefMut)]
pub struct ViewportRequest(pub Option<[f64; 2]>);

/// Most recent layout failure, cleared at the start of every frame.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct LayoutStatus {
    pub last_error: Option<LayoutError>,
}

/// Entity to layout variables, kept so removed layouts can be released.
#[derive(Resource, Debug, Default)]
pub struct LayoutIndex {
    pub map: HashMap<Entity, LayoutVars>,
}

/// Draw commands for the current tick, in stable query order.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for command in &self.commands {
            canvas.draw(command);
        }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Deref)]
pub struct VibrantConfig(pub Config);
