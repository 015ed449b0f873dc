//! 3D double-precision vector.
//!
//! Sibling of [`crate::vector2d::Vector2d`] one axis up: same arithmetic and
//! equality contract, plus the cross product and the forward/back axes.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::IndexOutOfRange;
use crate::mathd;
use crate::single::{Vec2, Vec3};
use crate::vector2d::Vector2d;

/// 3D vector with `f64` components.
///
/// Equality (`==`) is exact and field-wise, with hashing consistent with it;
/// the ε-tolerant comparison lives in [`Vector3d::approx_eq`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vector3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3d {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0, z: 1.0 };
    pub const UP: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const DOWN: Self = Self { x: 0.0, y: -1.0, z: 0.0 };
    pub const LEFT: Self = Self { x: -1.0, y: 0.0, z: 0.0 };
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const FORWARD: Self = Self { x: 0.0, y: 0.0, z: 1.0 };
    pub const BACK: Self = Self { x: 0.0, y: 0.0, z: -1.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component by axis index (x = 0, y = 1, z = 2).
    pub fn component(self, index: usize) -> Result<f64, IndexOutOfRange> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(IndexOutOfRange { index, len: 3 }),
        }
    }

    /// Writes the component at `index` (x = 0, y = 1, z = 2).
    pub fn set_component(&mut self, index: usize, value: f64) -> Result<(), IndexOutOfRange> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(IndexOutOfRange { index, len: 3 }),
        }
        Ok(())
    }

    /// Overwrites all three components in place.
    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Squared Euclidean length.
    pub fn sqr_magnitude(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length.
    pub fn magnitude(self) -> f64 {
        mathd::sqrt(self.sqr_magnitude())
    }

    /// Unit vector in the same direction, or `ZERO` when the magnitude is at
    /// or below `EPSILON`.
    pub fn normalized(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude > mathd::EPSILON {
            self / magnitude
        } else {
            Self::ZERO
        }
    }

    /// In-place form of [`Vector3d::normalized`]; the two agree bit-for-bit.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Linear interpolation from `self` to `to`. `t` is clamped to `[0, 1]`
    /// before interpolating.
    pub fn lerp(self, to: Self, t: f64) -> Self {
        let t = mathd::clamp01(t);
        Self::new(
            self.x + (to.x - self.x) * t,
            self.y + (to.y - self.y) * t,
            self.z + (to.z - self.z) * t,
        )
    }

    /// Steps from `self` toward `target` by at most `max_delta`. Returns
    /// `target` exactly once it is within reach or the delta is zero-length.
    pub fn move_towards(self, target: Self, max_delta: f64) -> Self {
        let delta = target - self;
        let magnitude = delta.magnitude();
        if magnitude <= max_delta || magnitude == 0.0 {
            target
        } else {
            self + delta / magnitude * max_delta
        }
    }

    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Standard 3-component cross product.
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Unsigned angle to `to` in degrees. The cosine is clamped to `[-1, 1]`
    /// before `acos`, absorbing floating-point overshoot.
    pub fn angle(self, to: Self) -> f64 {
        let cos = mathd::clamp(self.normalized().dot(to.normalized()), -1.0, 1.0);
        mathd::acos(cos) * mathd::RAD_TO_DEG
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Caps the magnitude at `max_length`. Vectors already within the bound
    /// pass through unchanged.
    pub fn clamp_magnitude(self, max_length: f64) -> Self {
        if self.sqr_magnitude() > max_length * max_length {
            self.normalized() * max_length
        } else {
            self
        }
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(
            mathd::min(self.x, other.x),
            mathd::min(self.y, other.y),
            mathd::min(self.z, other.z),
        )
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(
            mathd::max(self.x, other.x),
            mathd::max(self.y, other.y),
            mathd::max(self.z, other.z),
        )
    }

    /// Component-wise product.
    pub fn scaled(self, by: Self) -> Self {
        Self::new(self.x * by.x, self.y * by.y, self.z * by.z)
    }

    /// In-place form of [`Vector3d::scaled`].
    pub fn scale(&mut self, by: Self) {
        self.x *= by.x;
        self.y *= by.y;
        self.z *= by.z;
    }

    /// ε-tolerant equality: squared distance to `other` below `EPSILON_SQR`.
    /// Not transitive near the boundary; exact comparison is `==`.
    pub fn approx_eq(self, other: Self) -> bool {
        (self - other).sqr_magnitude() < mathd::EPSILON_SQR
    }

    /// Per-component comparison with a caller-supplied tolerance.
    pub fn similar(self, other: Self, epsilon: f64) -> bool {
        mathd::abs(self.x - other.x) < epsilon
            && mathd::abs(self.y - other.y) < epsilon
            && mathd::abs(self.z - other.z) < epsilon
    }

    /// Narrows to the single-precision 3-vector. Loses precision.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// Narrows to the single-precision 2-vector, dropping `z`.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Narrows to the 2D double-precision vector, dropping `z`.
    pub fn to_vector2d(self) -> Vector2d {
        Vector2d::new(self.x, self.y)
    }
}

impl From<Vec3> for Vector3d {
    fn from(v: Vec3) -> Self {
        Self::new(v.x as f64, v.y as f64, v.z as f64)
    }
}

impl From<Vec2> for Vector3d {
    fn from(v: Vec2) -> Self {
        Self::new(v.x as f64, v.y as f64, 0.0)
    }
}

impl From<Vector2d> for Vector3d {
    fn from(v: Vector2d) -> Self {
        Self::new(v.x, v.y, 0.0)
    }
}

impl Add for Vector3d {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3d {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3d {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector3d {
    type Output = Self;

    fn mul(self, d: f64) -> Self {
        Self::new(self.x * d, self.y * d, self.z * d)
    }
}

impl Mul<Vector3d> for f64 {
    type Output = Vector3d;

    fn mul(self, v: Vector3d) -> Vector3d {
        Vector3d::new(v.x * self, v.y * self, v.z * self)
    }
}

impl Div<f64> for Vector3d {
    type Output = Self;

    fn div(self, d: f64) -> Self {
        Self::new(self.x / d, self.y / d, self.z / d)
    }
}

impl Index<usize> for Vector3d {
    type Output = f64;

    /// Panicking sugar for [`Vector3d::component`].
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("{}", IndexOutOfRange { index, len: 3 }),
        }
    }
}

impl IndexMut<usize> for Vector3d {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("{}", IndexOutOfRange { index, len: 3 }),
        }
    }
}

impl Hash for Vector3d {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (mathd::hash_bits(self.x)
            ^ (mathd::hash_bits(self.y) << 2)
            ^ (mathd::hash_bits(self.z) >> 2))
            .hash(state);
    }
}

impl fmt::Display for Vector3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
