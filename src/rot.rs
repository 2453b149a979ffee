//! Fixed-point 2D rotation for placing glyphs and points around a center.
//!
//! Angles use a binary unit: one full turn is 256 steps, so wrap-around is
//! free and a `u8` is always a valid angle.

use std::f32::consts::TAU;

/// Binary angle: 0..=255 maps to 0..2π.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Angle(pub u8);

impl Angle {
    pub const ZERO: Angle = Angle(0);

    /// Nearest binary angle for a value in degrees (wraps modulo 360).
    pub fn from_degrees(degrees: f32) -> Self {
        let raw = (degrees / 360.0 * 256.0).round() as i32;
        Self(raw.rem_euclid(256) as u8)
    }

    #[inline]
    pub fn to_radians(self) -> f32 {
        self.0 as f32 * TAU / 256.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

// Fixed-point trig amplitude. Chosen so the zero-angle fast path divisor of
// 64 and the general path divisor of 32*256 agree exactly at theta = 0:
// scale * (x * 128) / (32 * 256) == scale * x / 64.
const TRIG_AMPLITUDE: f32 = 128.0;
const ROT_DIVISOR: i32 = 32 * 256;
const ZERO_DIVISOR: i32 = 64;

/// Rotation context: center, fixed-point scale and a precomputed sin/cos
/// pair at a discretized angle. Built once per orientation, read many times.
///
/// `scale` is a fixed-point factor: 64 maps one glyph-local unit to one
/// device unit.
#[derive(Debug, Clone, Copy)]
pub struct VectorRot {
    cx: i32,
    cy: i32,
    scale: i32,
    theta: Angle,
    sin_t: i32,
    cos_t: i32,
}

impl VectorRot {
    pub fn new(cx: i32, cy: i32, scale: i32, theta: Angle) -> Self {
        let radians = theta.to_radians();
        Self {
            cx,
            cy,
            scale,
            theta,
            sin_t: (radians.sin() * TRIG_AMPLITUDE).round() as i32,
            cos_t: (radians.cos() * TRIG_AMPLITUDE).round() as i32,
        }
    }

    #[inline]
    pub fn theta(&self) -> Angle {
        self.theta
    }

    /// Device x coordinate for a local offset `(x, y)` from the center.
    #[inline]
    pub fn rot_x(&self, x: i32, y: i32) -> i32 {
        let w = if self.theta.is_zero() {
            self.scale * x / ZERO_DIVISOR
        } else {
            self.scale * (x * self.cos_t + y * self.sin_t) / ROT_DIVISOR
        };
        w + self.cx
    }

    /// Device y coordinate for a local offset `(x, y)` from the center.
    #[inline]
    pub fn rot_y(&self, x: i32, y: i32) -> i32 {
        let z = if self.theta.is_zero() {
            self.scale * y / ZERO_DIVISOR
        } else {
            self.scale * (y * self.cos_t - x * self.sin_t) / ROT_DIVISOR
        };
        z + self.cy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_conversions() {
        assert_eq!(Angle::from_degrees(0.0), Angle(0));
        assert_eq!(Angle::from_degrees(90.0), Angle(64));
        assert_eq!(Angle::from_degrees(180.0), Angle(128));
        assert_eq!(Angle::from_degrees(360.0), Angle(0));
        assert_eq!(Angle::from_degrees(-90.0), Angle(192));
        assert!((Angle(128).to_radians() - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_zero_angle_fast_path_matches_general_path() {
        // The fast path must agree with the general formula evaluated at
        // cos = 128, sin = 0 for every offset, not just round ones.
        let rot = VectorRot::new(2048, 2048, 48, Angle::ZERO);
        for x in -40..=40 {
            for y in -40..=40 {
                let general_x = 48 * (x * 128) / (32 * 256) + 2048;
                let general_y = 48 * (y * 128) / (32 * 256) + 2048;
                assert_eq!(rot.rot_x(x, y), general_x, "x at ({}, {})", x, y);
                assert_eq!(rot.rot_y(x, y), general_y, "y at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_quarter_turn() {
        // At 90 degrees (sin = 128, cos = 0): x' <- y, y' <- -x.
        let rot = VectorRot::new(1000, 1000, 64, Angle::from_degrees(90.0));
        assert_eq!(rot.rot_x(10, 0), 1000);
        assert_eq!(rot.rot_y(10, 0), 1000 - 10);
        assert_eq!(rot.rot_x(0, 10), 1000 + 10);
        assert_eq!(rot.rot_y(0, 10), 1000);
    }

    #[test]
    fn test_half_turn_negates() {
        let rot = VectorRot::new(0, 0, 64, Angle::from_degrees(180.0));
        assert_eq!(rot.rot_x(20, 0), -20);
        assert_eq!(rot.rot_y(0, 20), -20);
    }

    #[test]
    fn test_scale_is_sixty_fourths() {
        let rot = VectorRot::new(0, 0, 32, Angle::ZERO);
        assert_eq!(rot.rot_x(64, 0), 32);
        assert_eq!(rot.rot_y(0, 64), 32);
    }
}
