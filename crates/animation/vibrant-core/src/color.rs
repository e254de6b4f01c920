//! Color types and conversions.
//!
//! `Rgb` is the working representation: shapes store it and tweens interpolate
//! it channel by channel (alpha included). `Hsl` and `Hsv` are conversion
//! targets with hue normalized to `[0, 1]` rather than degrees.

use crate::error::ColorParseError;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// Channel differences below this are treated as a gray (hue-less) color.
const ACHROMATIC_EPSILON: f64 = 1e-6;

/// RGBA color, channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Opaque color.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build from 8-bit channels, e.g. `Rgb::from_rgb8(33, 150, 243)`.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    pub fn to_hsl(self) -> Hsl {
        self.into()
    }

    pub fn to_hsv(self) -> Hsv {
        self.into()
    }

    fn min_max(&self) -> (f64, f64) {
        let min = self.r.min(self.g.min(self.b));
        let max = self.r.max(self.g.max(self.b));
        (min, max)
    }

    /// Hue in `[0, 1]` shared by the HSL and HSV conversions.
    fn hue(&self, max: f64, delta: f64) -> f64 {
        let delta_r = ((max - self.r) / 6.0 + delta / 2.0) / delta;
        let delta_g = ((max - self.g) / 6.0 + delta / 2.0) / delta;
        let delta_b = ((max - self.b) / 6.0 + delta / 2.0) / delta;

        let mut h = if self.r == max {
            delta_b - delta_g
        } else if self.g == max {
            1.0 / 3.0 + delta_r - delta_b
        } else {
            2.0 / 3.0 + delta_g - delta_r
        };

        if h < 0.0 {
            h += 1.0;
        }
        if h > 1.0 {
            h -= 1.0;
        }
        h
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError {
            input: s.to_string(),
        };
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
            return Err(err());
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|_| err())
        };
        let alpha = if hex.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::with_alpha(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl Add for Rgb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::with_alpha(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

impl Sub for Rgb {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::with_alpha(
            self.r - rhs.r,
            self.g - rhs.g,
            self.b - rhs.b,
            self.a - rhs.a,
        )
    }
}

impl Mul<f64> for Rgb {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::with_alpha(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

/// Hue/saturation/lightness, all in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l, a: 1.0 }
    }
}

/// Hue/saturation/value, all in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v, a: 1.0 }
    }
}

impl From<Rgb> for Hsl {
    fn from(c: Rgb) -> Self {
        debug_assert!(in_unit(c.r) && in_unit(c.g) && in_unit(c.b));

        let (min, max) = c.min_max();
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta.abs() < ACHROMATIC_EPSILON {
            return Hsl { h: 0.0, s: 0.0, l, a: c.a };
        }

        let s = if l < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };
        Hsl {
            h: c.hue(max, delta),
            s,
            l,
            a: c.a,
        }
    }
}

impl From<Rgb> for Hsv {
    fn from(c: Rgb) -> Self {
        debug_assert!(in_unit(c.r) && in_unit(c.g) && in_unit(c.b));

        let (min, max) = c.min_max();
        let delta = max - min;

        if delta.abs() < ACHROMATIC_EPSILON {
            return Hsv { h: 0.0, s: 0.0, v: max, a: c.a };
        }

        Hsv {
            h: c.hue(max, delta),
            s: delta / max,
            v: max,
            a: c.a,
        }
    }
}

fn hue_to_channel(v1: f64, v2: f64, mut h: f64) -> f64 {
    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }
    if 6.0 * h < 1.0 {
        return v1 + (v2 - v1) * 6.0 * h;
    }
    if 2.0 * h < 1.0 {
        return v2;
    }
    if 3.0 * h < 2.0 {
        return v1 + (v2 - v1) * (2.0 / 3.0 - h) * 6.0;
    }
    v1
}

impl From<Hsl> for Rgb {
    fn from(c: Hsl) -> Self {
        debug_assert!(in_unit(c.h) && in_unit(c.s) && in_unit(c.l));

        if c.s.abs() < ACHROMATIC_EPSILON {
            return Rgb::with_alpha(c.l, c.l, c.l, c.a);
        }

        let v2 = if c.l < 0.5 {
            c.l * (1.0 + c.s)
        } else {
            (c.l + c.s) - c.s * c.l
        };
        let v1 = 2.0 * c.l - v2;

        Rgb::with_alpha(
            hue_to_channel(v1, v2, c.h + 1.0 / 3.0),
            hue_to_channel(v1, v2, c.h),
            hue_to_channel(v1, v2, c.h - 1.0 / 3.0),
            c.a,
        )
    }
}

impl From<Hsv> for Rgb {
    fn from(c: Hsv) -> Self {
        debug_assert!(in_unit(c.h) && in_unit(c.s) && in_unit(c.v));

        if c.s.abs() < ACHROMATIC_EPSILON {
            return Rgb::with_alpha(c.v, c.v, c.v, c.a);
        }

        let mut h = c.h * 6.0;
        if (h - 6.0).abs() < ACHROMATIC_EPSILON {
            h = 0.0;
        }
        let sector = h.floor();
        let f = h - sector;
        let p = c.v * (1.0 - c.s);
        let q = c.v * (1.0 - c.s * f);
        let t = c.v * (1.0 - c.s * (1.0 - f));

        let (r, g, b) = match sector as u8 {
            0 => (c.v, t, p),
            1 => (q, c.v, p),
            2 => (p, c.v, t),
            3 => (p, q, c.v),
            4 => (t, p, c.v),
            _ => (c.v, p, q),
        };
        Rgb::with_alpha(r, g, b, c.a)
    }
}

impl From<Hsl> for Hsv {
    fn from(c: Hsl) -> Self {
        Rgb::from(c).into()
    }
}

impl From<Hsv> for Hsl {
    fn from(c: Hsv) -> Self {
        Rgb::from(c).into()
    }
}

/// Hsl and Hsv interpolate component-wise like Rgb; hue does not wrap.
macro_rules! impl_channel_ops {
    ($ty:ident { $($f:ident),+ }) => {
        impl Add for $ty {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl Sub for $ty {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl Mul<f64> for $ty {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self {
                Self { $($f: self.$f * rhs),+ }
            }
        }
    };
}

impl_channel_ops!(Hsl { h, s, l, a });
impl_channel_ops!(Hsv { h, s, v, a });

fn in_unit(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(Rgb::new(1.0, 0.0, 0.0).to_hsv().h, 0.0);
        assert!((Rgb::new(0.0, 1.0, 0.0).to_hsv().h - 1.0 / 3.0).abs() < 1e-12);
        assert!((Rgb::new(0.0, 0.0, 1.0).to_hsl().h - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn parses_hex() {
        let c: Rgb = "#2196f3".parse().unwrap();
        assert_eq!(c, Rgb::from_rgb8(33, 150, 243));

        let c: Rgb = "ff000080".parse().unwrap();
        assert!((c.a - 128.0 / 255.0).abs() < 1e-12);

        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#zz0000".parse::<Rgb>().is_err());
    }

    #[test]
    fn gray_has_no_saturation() {
        let hsl = Rgb::new(0.4, 0.4, 0.4).to_hsl();
        assert_eq!(hsl.s, 0.0);
        assert!((hsl.l - 0.4).abs() < 1e-12);
    }
}
