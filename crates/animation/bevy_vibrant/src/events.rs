//! Interaction events, one type per kind, each naming the entity concerned.

use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEnter {
    pub entity: Entity,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseLeave {
    pub entity: Entity,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeftClick {
    pub entity: Entity,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiddleClick {
    pub entity: Entity,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RightClick {
    pub entity: Entity,
}
