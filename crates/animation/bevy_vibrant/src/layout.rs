use bevy::prelude::*;
use vibrant_core::Vector2;
use vibrant_layout::{Bounds, Constraint, LayoutError, LayoutUniverse, LayoutVars};

use crate::components::{Body, Layout};

pub trait LayoutWorldExt {
    /// Spawn `bundle` with fresh layout variables constrained by `constraints`.
    ///
    /// The constraints are registered atomically before anything is spawned,
    /// so a rejected set leaves the world untouched. If the bundle carries a
    /// [`Body`], it receives the resolved frame right away.
    fn spawn_laid_out<B, F>(&mut self, bundle: B, constraints: F) -> Result<Entity, LayoutError>
    where
        B: Bundle,
        F: FnOnce(LayoutVars, Bounds) -> Vec<Constraint>;
}

impl LayoutWorldExt for World {
    fn spawn_laid_out<B, F>(&mut self, bundle: B, constraints: F) -> Result<Entity, LayoutError>
    where
        B: Bundle,
        F: FnOnce(LayoutVars, Bounds) -> Vec<Constraint>,
    {
        let vars = LayoutVars::new();
        let frame = {
            let mut universe = self.non_send_resource_mut::<LayoutUniverse>();
            let bounds = universe.bounds();
            universe.register(vars, constraints(vars, bounds))?;
            universe.resolve();
            universe.frame(&vars)
        };

        let mut entity = self.spawn((bundle, Layout(vars)));
        if let Some(mut body) = entity.get_mut::<Body>() {
            body.position = Vector2::new(frame.x, frame.y);
            body.size = Vector2::new(frame.width, frame.height);
        }
        Ok(entity.id())
    }
}
