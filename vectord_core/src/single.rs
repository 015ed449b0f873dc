//! Single-precision mirror types.
//!
//! Stand-ins for a host engine's `f32` vectors. The double-precision types
//! widen from these via `From`; narrowing back happens only through the
//! explicit `to_*` methods on [`crate::vector2d::Vector2d`] and
//! [`crate::vector3d::Vector3d`].

use serde::{Deserialize, Serialize};

/// 2D single-precision vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 3D single-precision vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}
