//! `vectord_core`
//!
//! Double-precision vector math for simulation and scripting layers.
//!
//! Design goals:
//! - Deterministic, allocation-free value types.
//! - Degenerate geometry resolves to defined fallback values, not errors.
//! - Implicit widening and explicit narrowing between precisions.
//! - No `unsafe`.

pub mod error;
pub mod mathd;
pub mod single;
pub mod test_report;
pub mod vector2d;
pub mod vector3d;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::error::IndexOutOfRange;
    pub use crate::single::{Vec2, Vec3};
    pub use crate::vector2d::Vector2d;
    pub use crate::vector3d::Vector3d;
}
