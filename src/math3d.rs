//! 3D math for wireframe scenes: vectors, row-major 3x3 matrices and
//! perspective projection onto the device plane.

use std::ops::{Add, Mul, Neg, Sub};

/// 3D point / vector
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    #[inline]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self {
                x: self.x / len,
                y: self.y / len,
                z: self.z / len,
            }
        } else {
            *self
        }
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Approximate equality check for floating point comparison
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }

    /// Row-vector times matrix: `[x y z] * m`. Produces a new point; the
    /// matrix is never modified.
    #[inline]
    pub fn rotated(&self, m: &Mat3) -> Self {
        Self {
            x: self.x * m.m[0] + self.y * m.m[3] + self.z * m.m[6],
            y: self.x * m.m[1] + self.y * m.m[4] + self.z * m.m[7],
            z: self.x * m.m[2] + self.y * m.m[5] + self.z * m.m[8],
        }
    }

    /// In-place variant of [`rotated`](Self::rotated).
    #[inline]
    pub fn rotate(&mut self, m: &Mat3) {
        *self = self.rotated(m);
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

/// Immutable 3x3 transform, row-major. Any matrix is accepted as a generic
/// linear transform; orthonormality is not validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    pub m: [f32; 9],
}

impl Mat3 {
    #[inline]
    pub const fn new(m: [f32; 9]) -> Self {
        Self { m }
    }

    pub const fn identity() -> Self {
        Self {
            m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Rotation around the X axis
    pub fn rotation_x(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            m: [1.0, 0.0, 0.0, 0.0, cos, sin, 0.0, -sin, cos],
        }
    }

    /// Rotation around the Y axis
    pub fn rotation_y(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            m: [cos, 0.0, -sin, 0.0, 1.0, 0.0, sin, 0.0, cos],
        }
    }

    /// Rotation around the Z axis
    pub fn rotation_z(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            m: [cos, sin, 0.0, -sin, cos, 0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Combined rotation, applied in x, y, z order (for row vectors).
    pub fn rotation_xyz(rx: f32, ry: f32, rz: f32) -> Self {
        Self::rotation_x(rx) * Self::rotation_y(ry) * Self::rotation_z(rz)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let a = &self.m;
        let b = &other.m;
        let mut m = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                m[row * 3 + col] = a[row * 3] * b[col]
                    + a[row * 3 + 1] * b[3 + col]
                    + a[row * 3 + 2] * b[6 + col];
            }
        }
        Self { m }
    }
}

/// Project a 3D point to 2D device coordinates
///
/// - `point`: The 3D point to project
/// - `fov`: Field of view (distance from eye to projection plane)
/// - `cx`, `cy`: Device center coordinates
///
/// Returns (x, y) or None if point is behind camera
#[inline]
pub fn project(point: Vec3, fov: f32, cx: f32, cy: f32) -> Option<(f32, f32)> {
    if point.z <= 0.0 {
        return None;
    }
    let scale = fov / point.z;
    Some((cx + point.x * scale, cy + point.y * scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_rotation() {
        let p = Vec3::new(3.0, -4.0, 5.0);
        assert!(p.rotated(&Mat3::identity()).approx_eq(&p, 1e-6));
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let p = Vec3::new(1.0, 0.0, 0.0);
        let q = p.rotated(&Mat3::rotation_z(std::f32::consts::FRAC_PI_2));
        assert!(q.approx_eq(&Vec3::new(0.0, 1.0, 0.0), 1e-6));
    }

    #[test]
    fn test_rotated_does_not_mutate_matrix_or_point() {
        let m = Mat3::rotation_y(0.7);
        let before = m;
        let p = Vec3::new(1.0, 2.0, 3.0);
        let _ = p.rotated(&m);
        assert_eq!(m, before);
        assert_eq!(p, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_rotate_in_place_matches_rotated() {
        let m = Mat3::rotation_xyz(0.3, 0.6, 0.9);
        let p = Vec3::new(2.0, -1.0, 4.0);
        let mut q = p;
        q.rotate(&m);
        assert!(q.approx_eq(&p.rotated(&m), 1e-6));
    }

    #[test]
    fn test_non_rotation_matrix_accepted() {
        // Shears and scales are legal inputs: this is a generic linear
        // transform, not a rotation-only primitive.
        let scale2 = Mat3::new([2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0]);
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(p.rotated(&scale2).approx_eq(&Vec3::new(2.0, 4.0, 6.0), 1e-6));
    }

    #[test]
    fn test_composition_matches_sequential() {
        let a = Mat3::rotation_x(0.4);
        let b = Mat3::rotation_z(1.1);
        let p = Vec3::new(1.0, 2.0, 3.0);
        let via_product = p.rotated(&(a * b));
        let sequential = p.rotated(&a).rotated(&b);
        assert!(via_product.approx_eq(&sequential, 1e-5));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let m = Mat3::rotation_xyz(0.5, 1.2, -0.8);
        let p = Vec3::new(3.0, 4.0, 12.0);
        assert!((p.rotated(&m).length() - p.length()).abs() < 1e-4);
    }

    #[test]
    fn test_project() {
        let p = Vec3::new(0.0, 0.0, 2.0);
        assert_eq!(project(p, 100.0, 320.0, 240.0), Some((320.0, 240.0)));
        assert_eq!(project(Vec3::new(0.0, 0.0, -1.0), 100.0, 0.0, 0.0), None);
        let q = project(Vec3::new(1.0, 1.0, 2.0), 100.0, 0.0, 0.0).unwrap();
        assert_eq!(q, (50.0, 50.0));
    }
}
