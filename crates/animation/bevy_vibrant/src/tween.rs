//! Composite tween containers and scheduling.
//!
//! A container component lives on an entity only while one of its tracks is
//! active: [`schedule`] creates it on demand and [`advance_tweens`] removes it
//! once everything has settled.

use bevy::ecs::world::Command;
use bevy::log::debug;
use bevy::prelude::*;
use vibrant_core::{Easing, Radians, Rgb, Timing, Vector2};

use crate::components::{Body, Renderable};
use crate::resources::FrameTime;

/// Attribute to animate plus the value it should end at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tween {
    Position(Vector2),
    Size(Vector2),
    Rotation(Radians),
    StrokeWidth(f64),
    StrokeColor(Rgb),
    FillColor(Rgb),
}

/// A bundle of tracks animating one component.
pub trait TweenSet: Component + Default {
    type Target: Component + Copy;

    /// (Re)start the track `tween` addresses, beginning at its current value.
    fn start(&mut self, tween: Tween, current: &Self::Target, timing: Timing);

    /// Step every active track and write the produced values.
    fn advance(&mut self, dt: f64, target: &mut Self::Target);

    fn is_active(&self) -> bool;
}

#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct BodyTweens {
    pub position: Easing<Vector2>,
    pub size: Easing<Vector2>,
    pub rotation: Easing<Radians>,
}

impl TweenSet for BodyTweens {
    type Target = Body;

    fn start(&mut self, tween: Tween, body: &Body, timing: Timing) {
        match tween {
            Tween::Position(to) => self.position.restart(body.position, to, timing),
            Tween::Size(to) => self.size.restart(body.size, to, timing),
            Tween::Rotation(to) => self.rotation.restart(body.rotation, to, timing),
            other => unreachable!("{other:?} does not animate a Body"),
        }
    }

    fn advance(&mut self, dt: f64, body: &mut Body) {
        if let Some(position) = self.position.advance(dt) {
            body.position = position;
        }
        if let Some(size) = self.size.advance(dt) {
            body.size = size;
        }
        if let Some(rotation) = self.rotation.advance(dt) {
            body.rotation = rotation;
        }
    }

    fn is_active(&self) -> bool {
        self.position.is_active() || self.size.is_active() || self.rotation.is_active()
    }
}

#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct RenderableTweens {
    pub stroke_width: Easing<f64>,
    pub stroke_color: Easing<Rgb>,
    pub fill_color: Easing<Rgb>,
}

impl TweenSet for RenderableTweens {
    type Target = Renderable;

    fn start(&mut self, tween: Tween, renderable: &Renderable, timing: Timing) {
        let stroke = renderable.stroke();
        match tween {
            Tween::StrokeWidth(to) => self.stroke_width.restart(stroke.width, to, timing),
            Tween::StrokeColor(to) => self.stroke_color.restart(stroke.color, to, timing),
            Tween::FillColor(to) => {
                // Lines have no fill; the track still runs but writes nowhere.
                let from = renderable.fill().map_or(Rgb::BLACK, |fill| fill.color);
                self.fill_color.restart(from, to, timing)
            }
            other => unreachable!("{other:?} does not animate a Renderable"),
        }
    }

    fn advance(&mut self, dt: f64, renderable: &mut Renderable) {
        if let Some(width) = self.stroke_width.advance(dt) {
            renderable.stroke_mut().width = width;
        }
        if let Some(color) = self.stroke_color.advance(dt) {
            renderable.stroke_mut().color = color;
        }
        if let Some(color) = self.fill_color.advance(dt) {
            if let Some(fill) = renderable.fill_mut() {
                fill.color = color;
            }
        }
    }

    fn is_active(&self) -> bool {
        self.stroke_width.is_active()
            || self.stroke_color.is_active()
            || self.fill_color.is_active()
    }
}

/// Start animating one attribute of `entity` from its current value.
///
/// Rescheduling an attribute that is already animating replaces that track.
///
/// # Panics
/// If `entity` lacks the component the attribute lives on.
pub fn schedule(world: &mut World, entity: Entity, tween: Tween, timing: Timing) {
    match tween {
        Tween::Position(_) | Tween::Size(_) | Tween::Rotation(_) => {
            schedule_on::<BodyTweens>(world, entity, tween, timing)
        }
        Tween::StrokeWidth(_) | Tween::StrokeColor(_) | Tween::FillColor(_) => {
            schedule_on::<RenderableTweens>(world, entity, tween, timing)
        }
    }
}

fn schedule_on<S: TweenSet>(world: &mut World, entity: Entity, tween: Tween, timing: Timing) {
    let Some(&current) = world.get::<S::Target>(entity) else {
        panic!(
            "cannot schedule {tween:?} on {entity:?}: missing {}",
            std::any::type_name::<S::Target>()
        );
    };
    debug!(
        "tween {tween:?} on {entity:?}: {} over {} after {}",
        timing.ease(),
        timing.duration(),
        timing.delay()
    );
    match world.get_mut::<S>(entity) {
        Some(mut tweens) => tweens.start(tween, &current, timing),
        None => {
            let mut tweens = S::default();
            tweens.start(tween, &current, timing);
            world.entity_mut(entity).insert(tweens);
        }
    }
}

pub fn move_to(world: &mut World, entity: Entity, to: Vector2, timing: Timing) {
    schedule(world, entity, Tween::Position(to), timing);
}

pub fn resize_to(world: &mut World, entity: Entity, to: Vector2, timing: Timing) {
    schedule(world, entity, Tween::Size(to), timing);
}

pub fn rotate_to(world: &mut World, entity: Entity, to: Radians, timing: Timing) {
    schedule(world, entity, Tween::Rotation(to), timing);
}

pub fn stroke_width_to(world: &mut World, entity: Entity, to: f64, timing: Timing) {
    schedule(world, entity, Tween::StrokeWidth(to), timing);
}

pub fn stroke_color_to(world: &mut World, entity: Entity, to: Rgb, timing: Timing) {
    schedule(world, entity, Tween::StrokeColor(to), timing);
}

pub fn fill_color_to(world: &mut World, entity: Entity, to: Rgb, timing: Timing) {
    schedule(world, entity, Tween::FillColor(to), timing);
}

/// Deferred [`schedule`], applied when the issuing system's commands flush.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleTween {
    pub entity: Entity,
    pub tween: Tween,
    pub timing: Timing,
}

impl Command for ScheduleTween {
    fn apply(self, world: &mut World) {
        schedule(world, self.entity, self.tween, self.timing);
    }
}

pub trait TweenCommandsExt {
    fn tween(&mut self, entity: Entity, tween: Tween, timing: Timing);
}

impl TweenCommandsExt for Commands<'_, '_> {
    fn tween(&mut self, entity: Entity, tween: Tween, timing: Timing) {
        self.add(ScheduleTween {
            entity,
            tween,
            timing,
        });
    }
}

/// Advance every `S` container by this frame's delta.
///
/// A container found idle is removed without stepping; one whose last track
/// settles during this step is removed in the same frame.
pub fn advance_tweens<S: TweenSet>(
    mut commands: Commands,
    time: Res<FrameTime>,
    mut query: Query<(Entity, &mut S, &mut S::Target)>,
) {
    for (entity, mut tweens, mut target) in &mut query {
        if tweens.is_active() {
            tweens.advance(time.delta, &mut target);
            if tweens.is_active() {
                continue;
            }
            debug!(
                "{} on {entity:?} settled",
                std::any::type_name::<S>()
            );
        }
        commands.entity(entity).remove::<S>();
    }
}
