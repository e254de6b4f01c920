//! Pointer input as seen by one tick.

use crate::vector::Vector2;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Button {
    Left,
    Middle,
    Right,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Left, Button::Middle, Button::Right];
}

/// Latest transition of a button since the previous tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonState {
    #[default]
    Idle,
    Pressed,
    Released,
    Held,
    DoubleClicked,
}

/// Pointer position plus per-button state; not a queue of transitions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerSnapshot {
    pub position: Vector2,
    pub left: ButtonState,
    pub middle: ButtonState,
    pub right: ButtonState,
}

impl PointerSnapshot {
    /// Pointer at `(x, y)` with every button idle.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Vector2::new(x, y),
            ..Self::default()
        }
    }

    pub fn with(mut self, button: Button, state: ButtonState) -> Self {
        *self.button_mut(button) = state;
        self
    }

    pub fn button(&self, button: Button) -> ButtonState {
        match button {
            Button::Left => self.left,
            Button::Middle => self.middle,
            Button::Right => self.right,
        }
    }

    pub fn button_mut(&mut self, button: Button) -> &mut ButtonState {
        match button {
            Button::Left => &mut self.left,
            Button::Middle => &mut self.middle,
            Button::Right => &mut self.right,
        }
    }
}
