//! Bevy adapter for vibrant.
//!
//! [`VibrantPlugin`] registers the resources, events and systems that turn
//! the engine-agnostic cores into a per-frame pipeline. Every frame runs the
//! [`VibrantSet`] stages in order: layout resolution, tween advancement,
//! pointer interaction, user behaviors, draw-list construction.

use bevy::prelude::*;
use vibrant_core::Config;
use vibrant_layout::LayoutUniverse;

pub mod components;
pub mod events;
pub mod frame;
pub mod layout;
pub mod resources;
pub mod systems;
pub mod tween;

pub use components::{Body, Layout, Mouseable, Renderable};
pub use events::{LeftClick, MiddleClick, MouseEnter, MouseLeave, RightClick};
pub use frame::{FrameInput, VibrantAppExt};
pub use layout::LayoutWorldExt;
pub use resources::{
    DrawList, FrameTime, LayoutIndex, LayoutStatus, PointerInput, VibrantConfig, ViewportRequest,
};
pub use tween::{
    advance_tweens, fill_color_to, move_to, resize_to, rotate_to, schedule, stroke_color_to,
    stroke_width_to, BodyTweens, RenderableTweens, ScheduleTween, Tween, TweenCommandsExt,
    TweenSet,
};

pub use vibrant_core;
pub use vibrant_layout;

/// Per-frame stages, chained in this order inside `Update`.
///
/// Systems reacting to interaction events belong in [`VibrantSet::Behavior`].
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VibrantSet {
    Layout,
    Tween,
    Interaction,
    Behavior,
    Render,
}

#[derive(Default)]
pub struct VibrantPlugin {
    pub config: Config,
}

impl VibrantPlugin {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Plugin for VibrantPlugin {
    fn build(&self, app: &mut App) {
        if let Err(err) = self.config.validate() {
            panic!("VibrantPlugin: {err}");
        }
        let [width, height] = self.config.viewport;
        let universe = match LayoutUniverse::new(width, height) {
            Ok(universe) => universe,
            Err(err) => panic!("VibrantPlugin: cannot create layout universe: {err}"),
        };

        app.insert_resource(VibrantConfig(self.config.clone()))
            .init_resource::<FrameTime>()
            .init_resource::<PointerInput>()
            .init_resource::<ViewportRequest>()
            .init_resource::<LayoutStatus>()
            .init_resource::<LayoutIndex>()
            .init_resource::<DrawList>()
            .insert_non_send_resource(universe)
            .add_event::<MouseEnter>()
            .add_event::<MouseLeave>()
            .add_event::<LeftClick>()
            .add_event::<MiddleClick>()
            .add_event::<RightClick>()
            .configure_sets(
                Update,
                (
                    VibrantSet::Layout,
                    VibrantSet::Tween,
                    VibrantSet::Interaction,
                    VibrantSet::Behavior,
                    VibrantSet::Render,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    systems::apply_viewport_request,
                    systems::release_removed_layouts,
                    systems::track_new_layouts,
                    systems::resolve_and_project_layout,
                )
                    .chain()
                    .in_set(VibrantSet::Layout),
            )
            .add_systems(
                Update,
                (
                    advance_tweens::<BodyTweens>,
                    advance_tweens::<RenderableTweens>,
                )
                    .in_set(VibrantSet::Tween),
            )
            .add_systems(
                Update,
                systems::update_interaction.in_set(VibrantSet::Interaction),
            )
            .add_systems(Update, systems::build_draw_list.in_set(VibrantSet::Render));
    }
}
