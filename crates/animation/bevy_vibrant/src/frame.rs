use bevy::prelude::*;
use vibrant_core::PointerSnapshot;
use vibrant_layout::LayoutError;

use crate::resources::{FrameTime, LayoutStatus, PointerInput, ViewportRequest};

/// Everything the host supplies for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub delta: f64,
    pub pointer: Option<PointerSnapshot>,
    pub viewport: Option<[f64; 2]>,
}

impl FrameInput {
    pub fn new(delta: f64) -> Self {
        Self {
            delta,
            ..Self::default()
        }
    }

    pub fn with_pointer(mut self, pointer: PointerSnapshot) -> Self {
        self.pointer = Some(pointer);
        self
    }

    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport = Some([width, height]);
        self
    }
}

pub trait VibrantAppExt {
    /// Feed one frame of host input and run a single update.
    ///
    /// A layout error raised during the frame is returned after the frame
    /// has still run to completion with the last good layout.
    fn advance_frame(&mut self, input: FrameInput) -> Result<(), LayoutError>;
}

impl VibrantAppExt for App {
    fn advance_frame(&mut self, input: FrameInput) -> Result<(), LayoutError> {
        let world = self.world_mut();
        world.resource_mut::<FrameTime>().delta = input.delta;
        **world.resource_mut::<PointerInput>() = input.pointer;
        if input.viewport.is_some() {
            **world.resource_mut::<ViewportRequest>() = input.viewport;
        }
        world.resource_mut::<LayoutStatus>().last_error = None;

        self.update();

        match &self.world().resource::<LayoutStatus>().last_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
