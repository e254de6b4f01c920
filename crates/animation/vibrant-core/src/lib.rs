//! vibrant-core: engine-agnostic pieces of the vibrant animation/interaction core.
//!
//! This crate defines the value types that can be tweened (scalars, 2D vectors,
//! colors), the Penner curve family, single-attribute tween tracks, shapes and
//! their draw projection, the oriented-rectangle hit test and the pointer
//! interaction state machine. The bevy adapter lives in `bevy_vibrant`.

pub mod color;
pub mod config;
pub mod draw;
pub mod ease;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod pacing;
pub mod pointer;
pub mod shape;
pub mod vector;

// Re-exports for consumers (adapters)
pub use color::{Hsl, Hsv, Rgb};
pub use config::Config;
pub use draw::{Canvas, DrawCommand};
pub use ease::{Ease, EaseFamily, EaseMode, Interpolate};
pub use easing::{Easing, Timing};
pub use error::{ColorParseError, ConfigError, TweenError};
pub use geometry::contains_point;
pub use interaction::{InteractionEvent, InteractionState};
pub use pacing::FramePacer;
pub use pointer::{Button, ButtonState, PointerSnapshot};
pub use shape::{Fill, Shape, Stroke};
pub use vector::{Radians, Vector2};
