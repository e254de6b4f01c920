use bevy::ecs::system::SystemParam;
use bevy::log::{debug, warn};
use bevy::prelude::*;
use vibrant_core::{Button, DrawCommand, InteractionEvent, Vector2};
use vibrant_layout::LayoutUniverse;

use crate::components::{Body, Layout, Mouseable, Renderable};
use crate::events::{LeftClick, MiddleClick, MouseEnter, MouseLeave, RightClick};
use crate::resources::{
    DrawList, LayoutIndex, LayoutStatus, PointerInput, VibrantConfig, ViewportRequest,
};

/// Re-pin the viewport boundaries when the host reported a new size.
pub fn apply_viewport_request(
    mut request: ResMut<ViewportRequest>,
    mut universe: NonSendMut<LayoutUniverse>,
    mut status: ResMut<LayoutStatus>,
) {
    let Some([width, height]) = request.take() else {
        return;
    };
    if let Err(err) = universe.resize(width, height) {
        warn!("viewport resize to {width}x{height} rejected: {err}");
        status.last_error = Some(err);
    }
}

/// Drop solver state for entities whose [`Layout`] went away.
pub fn release_removed_layouts(
    mut removed: RemovedComponents<Layout>,
    mut universe: NonSendMut<LayoutUniverse>,
    mut index: ResMut<LayoutIndex>,
    mut status: ResMut<LayoutStatus>,
) {
    for entity in removed.read() {
        let Some(vars) = index.map.remove(&entity) else {
            continue;
        };
        debug!("releasing layout of {entity:?}");
        if let Err(err) = universe.release(&vars) {
            warn!("releasing layout of {entity:?} failed: {err}");
            status.last_error = Some(err);
        }
    }
}

/// Index newly added layouts; unregistered variables are tracked unconstrained.
pub fn track_new_layouts(
    query: Query<(Entity, &Layout), Added<Layout>>,
    mut universe: NonSendMut<LayoutUniverse>,
    mut index: ResMut<LayoutIndex>,
) {
    for (entity, layout) in &query {
        if !universe.is_tracked(layout) {
            universe.track(**layout);
        }
        index.map.insert(entity, **layout);
    }
}

/// Resolve and copy every layout frame into its entity's [`Body`].
///
/// Only position and size are written; nothing flows back into the solver.
///
/// # Panics
/// If a [`Layout`] reaches this stage without having been tracked.
pub fn resolve_and_project_layout(
    mut universe: NonSendMut<LayoutUniverse>,
    mut query: Query<(&Layout, &mut Body)>,
) {
    universe.resolve();
    for (layout, mut body) in &mut query {
        let frame = universe.frame(layout);
        body.position = Vector2::new(frame.x, frame.y);
        body.size = Vector2::new(frame.width, frame.height);
    }
}

#[derive(SystemParam)]
pub struct InteractionWriters<'w> {
    enter: EventWriter<'w, MouseEnter>,
    leave: EventWriter<'w, MouseLeave>,
    left: EventWriter<'w, LeftClick>,
    middle: EventWriter<'w, MiddleClick>,
    right: EventWriter<'w, RightClick>,
}

impl InteractionWriters<'_> {
    fn send(&mut self, entity: Entity, event: InteractionEvent) {
        match event {
            InteractionEvent::Enter => {
                self.enter.send(MouseEnter { entity });
            }
            InteractionEvent::Leave => {
                self.leave.send(MouseLeave { entity });
            }
            InteractionEvent::Click(Button::Left) => {
                self.left.send(LeftClick { entity });
            }
            InteractionEvent::Click(Button::Middle) => {
                self.middle.send(MiddleClick { entity });
            }
            InteractionEvent::Click(Button::Right) => {
                self.right.send(RightClick { entity });
            }
        }
    }
}

/// Hit-test the pointer against every [`Mouseable`] and emit the resulting events.
///
/// Skipped entirely when the frame carried no pointer snapshot.
pub fn update_interaction(
    pointer: Res<PointerInput>,
    config: Res<VibrantConfig>,
    mut query: Query<(Entity, Option<&Body>, &mut Mouseable)>,
    mut writers: InteractionWriters,
) {
    let Some(pointer) = **pointer else {
        return;
    };
    for (entity, body, mut mouseable) in &mut query {
        let Some(body) = body else {
            panic!("{entity:?} is Mouseable but has no Body to hit-test");
        };
        let hover = body.contains(pointer.position, config.hit_epsilon);
        for event in mouseable.step(hover, &pointer) {
            writers.send(entity, event);
        }
    }
}

/// Rebuild the draw list from every body with a shape.
pub fn build_draw_list(query: Query<(&Body, &Renderable)>, mut list: ResMut<DrawList>) {
    list.commands.clear();
    list.commands.extend(query.iter().map(|(body, renderable)| {
        DrawCommand::from_shape(body.position, body.size, body.rotation, renderable)
    }));
}
