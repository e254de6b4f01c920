//! Per-entity hover and press tracking.

use crate::pointer::{Button, ButtonState, PointerSnapshot};
use serde::{Deserialize, Serialize};

/// Discrete outcome of one interaction step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionEvent {
    Enter,
    Leave,
    Click(Button),
}

/// Hover flag plus, per button, whether the press started over the entity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionState {
    pub hover: bool,
    pub left_down_on: bool,
    pub middle_down_on: bool,
    pub right_down_on: bool,
}

impl InteractionState {
    pub fn down_on(&self, button: Button) -> bool {
        match button {
            Button::Left => self.left_down_on,
            Button::Middle => self.middle_down_on,
            Button::Right => self.right_down_on,
        }
    }

    fn down_on_mut(&mut self, button: Button) -> &mut bool {
        match button {
            Button::Left => &mut self.left_down_on,
            Button::Middle => &mut self.middle_down_on,
            Button::Right => &mut self.right_down_on,
        }
    }

    /// Apply one tick of pointer input given this tick's hit-test result.
    ///
    /// Events come out in a fixed order: Enter or Leave first, then clicks
    /// in left, middle, right order. A click needs the press to have started
    /// on the entity and the release to happen while still hovering.
    pub fn step(&mut self, hover: bool, pointer: &PointerSnapshot) -> Vec<InteractionEvent> {
        let mut events = Vec::new();

        let was_hovering = self.hover;
        self.hover = hover;
        if hover && !was_hovering {
            events.push(InteractionEvent::Enter);
        } else if !hover && was_hovering {
            events.push(InteractionEvent::Leave);
        }

        for button in Button::ALL {
            match pointer.button(button) {
                ButtonState::Pressed => *self.down_on_mut(button) = hover,
                ButtonState::Released => {
                    let down_on = std::mem::take(self.down_on_mut(button));
                    if down_on && hover {
                        events.push(InteractionEvent::Click(button));
                    }
                }
                ButtonState::Idle | ButtonState::Held | ButtonState::DoubleClicked => {}
            }
        }

        events
    }
}
