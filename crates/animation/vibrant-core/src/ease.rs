//! Penner easing curves.
//!
//! Every curve is written once as a normalized progress function `u -> f(u)`
//! and applied to any [`Interpolate`] value as `b + c * f(t / d)`:
//! - t: elapsed time (any unit, matching d)
//! - b: beginning value
//! - c: change in value
//! - d: total duration
//!
//! Reference: <https://easings.net/>.

use crate::error::TweenError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// Values a curve can drive: anything closed under add, subtract and scale.
pub trait Interpolate: Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self> {}

impl<T> Interpolate for T where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T>
{
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EaseFamily {
    Linear,
    Quad,
    Cubic,
    Quart,
    Quint,
    Sine,
    Expo,
    Circ,
    Back,
    Elastic,
    Bounce,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EaseMode {
    In,
    Out,
    InOut,
}

macro_rules! eases {
    ($( $variant:ident => ($family:ident, $mode:ident, $name:literal) ),+ $(,)?) => {
        /// Closed set of easing curves (family x mode).
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub enum Ease {
            #[default]
            $( $variant ),+
        }

        impl Ease {
            pub const ALL: [Ease; 33] = [$( Ease::$variant ),+];

            pub fn family(self) -> EaseFamily {
                match self {
                    $( Ease::$variant => EaseFamily::$family ),+
                }
            }

            pub fn mode(self) -> EaseMode {
                match self {
                    $( Ease::$variant => EaseMode::$mode ),+
                }
            }

            /// Snake-case name, e.g. `in_out_cubic`.
            pub fn name(self) -> &'static str {
                match self {
                    $( Ease::$variant => $name ),+
                }
            }
        }

        impl FromStr for Ease {
            type Err = TweenError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $name => Ok(Ease::$variant), )+
                    _ => Err(TweenError::UnknownEase { name: s.to_string() }),
                }
            }
        }
    };
}

eases! {
    InLinear => (Linear, In, "in_linear"),
    OutLinear => (Linear, Out, "out_linear"),
    InOutLinear => (Linear, InOut, "in_out_linear"),
    InQuad => (Quad, In, "in_quad"),
    OutQuad => (Quad, Out, "out_quad"),
    InOutQuad => (Quad, InOut, "in_out_quad"),
    InCubic => (Cubic, In, "in_cubic"),
    OutCubic => (Cubic, Out, "out_cubic"),
    InOutCubic => (Cubic, InOut, "in_out_cubic"),
    InQuart => (Quart, In, "in_quart"),
    OutQuart => (Quart, Out, "out_quart"),
    InOutQuart => (Quart, InOut, "in_out_quart"),
    InQuint => (Quint, In, "in_quint"),
    OutQuint => (Quint, Out, "out_quint"),
    InOutQuint => (Quint, InOut, "in_out_quint"),
    InSine => (Sine, In, "in_sine"),
    OutSine => (Sine, Out, "out_sine"),
    InOutSine => (Sine, InOut, "in_out_sine"),
    InExpo => (Expo, In, "in_expo"),
    OutExpo => (Expo, Out, "out_expo"),
    InOutExpo => (Expo, InOut, "in_out_expo"),
    InCirc => (Circ, In, "in_circ"),
    OutCirc => (Circ, Out, "out_circ"),
    InOutCirc => (Circ, InOut, "in_out_circ"),
    InBack => (Back, In, "in_back"),
    OutBack => (Back, Out, "out_back"),
    InOutBack => (Back, InOut, "in_out_back"),
    InElastic => (Elastic, In, "in_elastic"),
    OutElastic => (Elastic, Out, "out_elastic"),
    InOutElastic => (Elastic, InOut, "in_out_elastic"),
    InBounce => (Bounce, In, "in_bounce"),
    OutBounce => (Bounce, Out, "out_bounce"),
    InOutBounce => (Bounce, InOut, "in_out_bounce"),
}

impl Ease {
    /// Look up the curve for a family and mode.
    pub fn new(family: EaseFamily, mode: EaseMode) -> Self {
        Self::ALL
            .into_iter()
            .find(|e| e.family() == family && e.mode() == mode)
            .unwrap_or_default()
    }

    /// Evaluate the curve at absolute time `t` of `d`.
    ///
    /// At `t >= d` the result is exactly `b + c`, whatever rounding the curve
    /// formula would introduce there.
    pub fn apply<T: Interpolate>(self, t: f64, b: T, c: T, d: f64) -> T {
        debug_assert!(d > 0.0, "ease duration must be positive");
        if t >= d {
            return b + c;
        }
        c * self.progress(t / d) + b
    }

    /// Normalized curve: eased progress for `u` in `[0, 1]`.
    pub fn progress(self, u: f64) -> f64 {
        match self.family() {
            EaseFamily::Linear => u,
            EaseFamily::Quad => polynomial(self.mode(), u, 2),
            EaseFamily::Cubic => polynomial(self.mode(), u, 3),
            EaseFamily::Quart => polynomial(self.mode(), u, 4),
            EaseFamily::Quint => polynomial(self.mode(), u, 5),
            EaseFamily::Sine => sine(self.mode(), u),
            EaseFamily::Expo => expo(self.mode(), u),
            EaseFamily::Circ => circ(self.mode(), u),
            EaseFamily::Back => back(self.mode(), u),
            EaseFamily::Elastic => elastic(self.mode(), u),
            EaseFamily::Bounce => bounce(self.mode(), u),
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Ease {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Ease {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

// Quad through Quint share one shape; only the exponent differs.
fn polynomial(mode: EaseMode, u: f64, n: i32) -> f64 {
    match mode {
        EaseMode::In => u.powi(n),
        EaseMode::Out => 1.0 - (1.0 - u).powi(n),
        EaseMode::InOut => {
            let t = u * 2.0;
            if t < 1.0 {
                0.5 * t.powi(n)
            } else {
                1.0 - 0.5 * (2.0 - t).powi(n)
            }
        }
    }
}

fn sine(mode: EaseMode, u: f64) -> f64 {
    match mode {
        EaseMode::In => 1.0 - (u * FRAC_PI_2).cos(),
        EaseMode::Out => (u * FRAC_PI_2).sin(),
        EaseMode::InOut => -0.5 * ((PI * u).cos() - 1.0),
    }
}

fn expo(mode: EaseMode, u: f64) -> f64 {
    match mode {
        EaseMode::In => {
            if u == 0.0 {
                0.0
            } else {
                2f64.powf(10.0 * (u - 1.0))
            }
        }
        EaseMode::Out => {
            if u == 1.0 {
                1.0
            } else {
                1.0 - 2f64.powf(-10.0 * u)
            }
        }
        EaseMode::InOut => {
            if u == 0.0 {
                return 0.0;
            }
            if u == 1.0 {
                return 1.0;
            }
            let t = u * 2.0;
            if t < 1.0 {
                0.5 * 2f64.powf(10.0 * (t - 1.0))
            } else {
                0.5 * (2.0 - 2f64.powf(-10.0 * (t - 1.0)))
            }
        }
    }
}

fn circ(mode: EaseMode, u: f64) -> f64 {
    match mode {
        EaseMode::In => -((1.0 - u * u).sqrt() - 1.0),
        EaseMode::Out => {
            let t = u - 1.0;
            (1.0 - t * t).sqrt()
        }
        EaseMode::InOut => {
            let t = u * 2.0;
            if t < 1.0 {
                -0.5 * ((1.0 - t * t).sqrt() - 1.0)
            } else {
                let t = t - 2.0;
                0.5 * ((1.0 - t * t).sqrt() + 1.0)
            }
        }
    }
}

const BACK_OVERSHOOT: f64 = 1.70158;

fn back(mode: EaseMode, u: f64) -> f64 {
    let s = BACK_OVERSHOOT;
    match mode {
        EaseMode::In => u * u * ((s + 1.0) * u - s),
        EaseMode::Out => {
            let t = u - 1.0;
            t * t * ((s + 1.0) * t + s) + 1.0
        }
        EaseMode::InOut => {
            let s = s * 1.525;
            let t = u * 2.0;
            if t < 1.0 {
                0.5 * (t * t * ((s + 1.0) * t - s))
            } else {
                let t = t - 2.0;
                0.5 * (t * t * ((s + 1.0) * t + s) + 2.0)
            }
        }
    }
}

// Period p and phase s are fractions of the duration, so the normalized
// form drops the `d` factors of the classic formulation.
fn elastic(mode: EaseMode, u: f64) -> f64 {
    if u == 0.0 {
        return 0.0;
    }
    if u == 1.0 {
        return 1.0;
    }
    match mode {
        EaseMode::In => {
            let (p, s) = (0.3, 0.3 / 4.0);
            let t = u - 1.0;
            -(2f64.powf(10.0 * t) * ((t - s) * TAU / p).sin())
        }
        EaseMode::Out => {
            let (p, s) = (0.3, 0.3 / 4.0);
            2f64.powf(-10.0 * u) * ((u - s) * TAU / p).sin() + 1.0
        }
        EaseMode::InOut => {
            // Classic form measures p and s against d while t runs over d/2.
            let (p, s) = (0.3 * 1.5, 0.3 * 1.5 / 4.0);
            let t = u * 2.0 - 1.0;
            if t < 0.0 {
                -0.5 * (2f64.powf(10.0 * t) * ((t - s) * TAU / p).sin())
            } else {
                2f64.powf(-10.0 * t) * ((t - s) * TAU / p).sin() * 0.5 + 1.0
            }
        }
    }
}

fn bounce_out(u: f64) -> f64 {
    const N: f64 = 7.5625;
    const D: f64 = 2.75;
    if u < 1.0 / D {
        N * u * u
    } else if u < 2.0 / D {
        let t = u - 1.5 / D;
        N * t * t + 0.75
    } else if u < 2.5 / D {
        let t = u - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = u - 2.625 / D;
        N * t * t + 0.984375
    }
}

fn bounce(mode: EaseMode, u: f64) -> f64 {
    match mode {
        EaseMode::In => 1.0 - bounce_out(1.0 - u),
        EaseMode::Out => bounce_out(u),
        EaseMode::InOut => {
            if u < 0.5 {
                0.5 * (1.0 - bounce_out(1.0 - u * 2.0))
            } else {
                0.5 * bounce_out(u * 2.0 - 1.0) + 0.5
            }
        }
    }
}
