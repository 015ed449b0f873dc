//! 2D double-precision vector.
//!
//! Mirrors the host engine's single-precision 2-vector one precision level
//! up. Arithmetic is component-wise and pure; the only in-place operations
//! are `set`, `set_component`, `scale`, and `normalize`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::IndexOutOfRange;
use crate::mathd;
use crate::single::{Vec2, Vec3};

/// 2D vector with `f64` components.
///
/// Plain value type: copies are independent, equality (`==`) is exact and
/// field-wise, and hashing is consistent with it. The ε-tolerant comparison
/// the engine uses for geometric identity lives in [`Vector2d::approx_eq`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vector2d {
    pub x: f64,
    pub y: f64,
}

impl Vector2d {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };
    pub const UP: Self = Self { x: 0.0, y: 1.0 };
    pub const DOWN: Self = Self { x: 0.0, y: -1.0 };
    pub const LEFT: Self = Self { x: -1.0, y: 0.0 };
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component by axis index (x = 0, y = 1).
    pub fn component(self, index: usize) -> Result<f64, IndexOutOfRange> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(IndexOutOfRange { index, len: 2 }),
        }
    }

    /// Writes the component at `index` (x = 0, y = 1).
    pub fn set_component(&mut self, index: usize, value: f64) -> Result<(), IndexOutOfRange> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(IndexOutOfRange { index, len: 2 }),
        }
        Ok(())
    }

    /// Overwrites both components in place.
    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Squared Euclidean length. Cheaper than [`Vector2d::magnitude`]; prefer
    /// it for comparisons.
    pub fn sqr_magnitude(self) -> f64 {
        self.x * self.x + self.y * self.y
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

    /// In-place form of [`Vector2d::normalized`]; the two agree bit-for-bit.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Linear interpolation from `self` to `to`. `t` is clamped to `[0, 1]`
    /// before interpolating.
    pub fn lerp(self, to: Self, t: f64) -> Self {
        let t = mathd::clamp01(t);
        Self::new(self.x + (to.x - self.x) * t, self.y + (to.y - self.y) * t)
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
        self.x * rhs.x + self.y * rhs.y
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
        Self::new(mathd::min(self.x, other.x), mathd::min(self.y, other.y))
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(mathd::max(self.x, other.x), mathd::max(self.y, other.y))
    }

    /// Component-wise product.
    pub fn scaled(self, by: Self) -> Self {
        Self::new(self.x * by.x, self.y * by.y)
    }

    /// In-place form of [`Vector2d::scaled`].
    pub fn scale(&mut self, by: Self) {
        self.x *= by.x;
        self.y *= by.y;
    }

    /// 90° counter-clockwise rotation: `(-y, x)`.
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Scalar 2D cross product (perp-dot): `x·rhs.y − y·rhs.x`.
    pub fn perp_dot(self, rhs: Self) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }

    /// ε-tolerant equality: squared distance to `other` below `EPSILON_SQR`.
    /// Not transitive near the boundary; exact comparison is `==`.
    pub fn approx_eq(self, other: Self) -> bool {
        (self - other).sqr_magnitude() < mathd::EPSILON_SQR
    }

    /// Per-component comparison with a caller-supplied tolerance.
    pub fn similar(self, other: Self, epsilon: f64) -> bool {
        mathd::abs(self.x - other.x) < epsilon && mathd::abs(self.y - other.y) < epsilon
    }

    /// Narrows to the single-precision 2-vector. Loses precision.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Narrows to the single-precision 3-vector with `z = 0`. Loses precision.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, 0.0)
    }
}

impl From<Vec2> for Vector2d {
    fn from(v: Vec2) -> Self {
        Self::new(v.x as f64, v.y as f64)
    }
}

impl From<Vec3> for Vector2d {
    fn from(v: Vec3) -> Self {
        Self::new(v.x as f64, v.y as f64)
    }
}

impl Add for Vector2d {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2d {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2d {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2d {
    type Output = Self;

    fn mul(self, d: f64) -> Self {
        Self::new(self.x * d, self.y * d)
    }
}

impl Mul<Vector2d> for f64 {
    type Output = Vector2d;

    fn mul(self, v: Vector2d) -> Vector2d {
        Vector2d::new(v.x * self, v.y * self)
    }
}

impl Div<f64> for Vector2d {
    type Output = Self;

    fn div(self, d: f64) -> Self {
        Self::new(self.x / d, self.y / d)
    }
}

impl Index<usize> for Vector2d {
    type Output = f64;

    /// Panicking sugar for [`Vector2d::component`].
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("{}", IndexOutOfRange { index, len: 2 }),
        }
    }
}

impl IndexMut<usize> for Vector2d {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("{}", IndexOutOfRange { index, len: 2 }),
        }
    }
}

impl Hash for Vector2d {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (mathd::hash_bits(self.x) ^ (mathd::hash_bits(self.y) << 2)).hash(state);
    }
}

impl fmt::Display for Vector2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(v: Vector2d) -> u64 {
        let mut hasher = DefaultHasher::new();
        v.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn constants_are_independent_copies() {
        let mut a = Vector2d::UP;
        a.x = 7.0;
        assert_eq!(a, Vector2d::new(7.0, 1.0));
        assert_eq!(Vector2d::UP, Vector2d::new(0.0, 1.0));
    }

    #[test]
    fn component_access_roundtrip() {
        let mut v = Vector2d::ZERO;
        v.set_component(0, 3.0).unwrap();
        v.set_component(1, -4.0).unwrap();
        assert_eq!(v.component(0).unwrap(), 3.0);
        assert_eq!(v.component(1).unwrap(), -4.0);
    }

    #[test]
    fn component_index_2_is_out_of_range() {
        let mut v = Vector2d::ONE;
        assert_eq!(v.component(2), Err(IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(
            v.set_component(2, 1.0),
            Err(IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    #[should_panic(expected = "invalid vector index 2")]
    fn index_operator_panics_out_of_range() {
        let v = Vector2d::ONE;
        let _ = v[2];
    }

    #[test]
    fn arithmetic_is_component_wise() {
        let a = Vector2d::new(1.0, 2.0);
        let b = Vector2d::new(3.0, -4.0);
        assert_eq!(a + b, Vector2d::new(4.0, -2.0));
        assert_eq!(a - b, Vector2d::new(-2.0, 6.0));
        assert_eq!(-a, Vector2d::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Vector2d::new(2.0, 4.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Vector2d::new(1.5, -2.0));
    }

    #[test]
    fn magnitude_of_3_4_triangle() {
        let v = Vector2d::new(3.0, 4.0);
        assert_eq!(v.sqr_magnitude(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn normalized_has_unit_magnitude() {
        let v = Vector2d::new(10.0, -2.5);
        assert!((v.normalized().magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_degenerate_falls_back_to_zero() {
        assert_eq!(Vector2d::ZERO.normalized(), Vector2d::ZERO);
        assert_eq!(Vector2d::new(1e-6, 1e-6).normalized(), Vector2d::ZERO);
    }

    #[test]
    fn normalize_matches_normalized_bitwise() {
        let pure = Vector2d::new(0.1, 0.7).normalized();
        let mut in_place = Vector2d::new(0.1, 0.7);
        in_place.normalize();
        assert_eq!(pure.x.to_bits(), in_place.x.to_bits());
        assert_eq!(pure.y.to_bits(), in_place.y.to_bits());
    }

    #[test]
    fn lerp_endpoints_and_clamping() {
        let a = Vector2d::new(1.0, 1.0);
        let b = Vector2d::new(3.0, 5.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vector2d::new(2.0, 3.0));
        assert_eq!(a.lerp(b, -2.0), a.lerp(b, 0.0));
        assert_eq!(a.lerp(b, 4.0), a.lerp(b, 1.0));
    }

    #[test]
    fn move_towards_snaps_within_reach() {
        let current = Vector2d::new(1.0, 1.0);
        let target = Vector2d::new(1.5, 1.0);
        assert_eq!(current.move_towards(target, 0.5), target);
        assert_eq!(current.move_towards(current, 1.0), current);
    }

    #[test]
    fn move_towards_steps_exactly_max_delta() {
        let current = Vector2d::ZERO;
        let target = Vector2d::new(10.0, 0.0);
        let stepped = current.move_towards(target, 3.0);
        assert_eq!(stepped, Vector2d::new(3.0, 0.0));
        assert!((current.distance(stepped) - 3.0).abs() < 1e-12);
        // Collinear with the current→target ray.
        assert!((target - current).perp_dot(stepped - current).abs() < 1e-12);
    }

    #[test]
    fn angle_of_self_and_opposite() {
        // Non-axis vectors normalize inexactly, so the self-angle is only
        // near zero, not exactly zero.
        let v = Vector2d::new(2.0, 3.0);
        assert!(v.angle(v).abs() < 1e-4);
        assert!((v.angle(-v) - 180.0).abs() < 1e-4);
        assert!((Vector2d::RIGHT.angle(Vector2d::UP) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn clamp_magnitude_caps_long_vectors() {
        let v = Vector2d::new(6.0, 8.0);
        let clamped = v.clamp_magnitude(5.0);
        assert!((clamped.magnitude() - 5.0).abs() < 1e-12);

        let short = Vector2d::new(0.5, 0.5);
        assert_eq!(short.clamp_magnitude(5.0), short);
    }

    #[test]
    fn min_max_are_component_wise() {
        let a = Vector2d::new(1.0, 5.0);
        let b = Vector2d::new(3.0, 2.0);
        assert_eq!(a.min(b), Vector2d::new(1.0, 2.0));
        assert_eq!(a.max(b), Vector2d::new(3.0, 5.0));
    }

    #[test]
    fn scaled_and_scale_agree() {
        let a = Vector2d::new(2.0, 3.0);
        let by = Vector2d::new(-1.0, 0.5);
        let mut in_place = a;
        in_place.scale(by);
        assert_eq!(a.scaled(by), in_place);
        assert_eq!(in_place, Vector2d::new(-2.0, 1.5));
    }

    #[test]
    fn perpendicular_rotates_ccw() {
        assert_eq!(Vector2d::new(1.0, 0.0).perpendicular(), Vector2d::new(0.0, 1.0));
        assert_eq!(Vector2d::new(0.0, 1.0).perpendicular(), Vector2d::new(-1.0, 0.0));
    }

    #[test]
    fn approx_eq_is_reflexive() {
        let v = Vector2d::new(0.1, -0.2);
        assert!(v.approx_eq(v));
        assert_eq!(v, v);
    }

    #[test]
    fn approx_eq_is_not_transitive_near_epsilon() {
        let a = Vector2d::new(0.0, 0.0);
        let b = Vector2d::new(0.8e-5, 0.0);
        let c = Vector2d::new(1.6e-5, 0.0);
        assert!(a.approx_eq(b));
        assert!(b.approx_eq(c));
        assert!(!a.approx_eq(c));
    }

    #[test]
    fn similar_uses_caller_tolerance() {
        let a = Vector2d::new(1.0, 1.0);
        let b = Vector2d::new(1.05, 0.95);
        assert!(a.similar(b, 0.1));
        assert!(!a.similar(b, 0.01));
    }

    #[test]
    fn hash_is_consistent_with_exact_equality() {
        let a = Vector2d::new(1.5, -2.5);
        let b = Vector2d::new(1.5, -2.5);
        assert_eq!(a, b);
        assert_eq!(hash_of(a), hash_of(b));

        let zero_mixed = Vector2d::new(0.0, -0.0);
        assert_eq!(zero_mixed, Vector2d::ZERO);
        assert_eq!(hash_of(zero_mixed), hash_of(Vector2d::ZERO));
    }

    #[test]
    fn display_matches_tuple_form() {
        assert_eq!(Vector2d::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }

    #[test]
    fn widening_from_single_precision() {
        let v: Vector2d = Vec2::new(1.5, -2.25).into();
        assert_eq!(v, Vector2d::new(1.5, -2.25));

        let from3: Vector2d = Vec3::new(1.0, 2.0, 9.0).into();
        assert_eq!(from3, Vector2d::new(1.0, 2.0));
    }

    #[test]
    fn narrowing_roundtrips_within_f32_precision() {
        let original = Vec2::new(1.5, -2.25);
        let widened = Vector2d::from(original);
        assert_eq!(widened.to_vec2(), original);
        assert_eq!(widened.to_vec3(), Vec3::new(1.5, -2.25, 0.0));
    }

    #[test]
    fn serde_roundtrip_preserves_fields() {
        let v = Vector2d::new(0.1, -7.25);
        let json = serde_json::to_string(&v).unwrap();
        let back: Vector2d = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
