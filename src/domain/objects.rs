//! Object kinds and physics body descriptors
//!
//! A `BodyDesc` is everything the physics collaborator needs to create a
//! body. The level builder produces the same descriptor for a pin or the
//! ball whether its visual is a loaded model or a primitive fallback.

use serde::Serialize;

use crate::core::math::{Pose, Quat, Vec3};

/// Default friction for every body
pub const DEFAULT_FRICTION: f32 = 0.5;
/// Default restitution for every body
pub const DEFAULT_RESTITUTION: f32 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectKind {
    Floor,
    Gutter,
    Pin,
    Ball,
}

/// Collision shape. Cylinders stand along the Y axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    Cylinder { radius: f32, half_height: f32 },
    Box { half_extents: Vec3 },
}

/// Sleep policy handed to the physics backend
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Body may fall asleep when idle
    Normal,
    /// Body is never deactivated
    AlwaysActive,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyDesc {
    pub shape: Shape,
    /// 0 = static
    pub mass: f32,
    pub position: Vec3,
    pub rotation: Quat,
    pub friction: f32,
    pub restitution: f32,
    pub activation: Activation,
    /// Continuous collision detection for fast movers
    pub ccd: bool,
}

impl BodyDesc {
    pub fn new(shape: Shape, mass: f32, position: Vec3, rotation: Quat) -> Self {
        Self {
            shape,
            mass,
            position,
            rotation,
            friction: DEFAULT_FRICTION,
            restitution: DEFAULT_RESTITUTION,
            activation: Activation::Normal,
            ccd: false,
        }
    }

    pub fn with_surface(mut self, friction: f32, restitution: f32) -> Self {
        self.friction = friction;
        self.restitution = restitution;
        self
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    pub fn with_ccd(mut self, ccd: bool) -> Self {
        self.ccd = ccd;
        self
    }

    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.mass > 0.0
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_surface() {
        let desc = BodyDesc::new(Shape::Sphere { radius: 1.0 }, 1.0, Vec3::zeros(), Quat::identity());
        assert_eq!(desc.friction, DEFAULT_FRICTION);
        assert_eq!(desc.restitution, DEFAULT_RESTITUTION);
        assert_eq!(desc.activation, Activation::Normal);
    }

    #[test]
    fn zero_mass_is_static() {
        let half = Vec3::new(1.0, 1.0, 1.0);
        let desc = BodyDesc::new(Shape::Box { half_extents: half }, 0.0, Vec3::zeros(), Quat::identity());
        assert!(!desc.is_dynamic());
        assert!(desc.with_surface(0.1, 0.1).mass == 0.0);
    }
}
