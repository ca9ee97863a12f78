//! Math types shared between the physics backends and the render side.
//!
//! Vectors and rotations are nalgebra types (re-exported by rapier3d), so
//! poses move between the registry and the Rapier backend without conversion.

use rapier3d::na::{UnitQuaternion, Vector3};

pub type Vec3 = Vector3<f32>;
pub type Quat = UnitQuaternion<f32>;

/// World-space position + orientation of a body or visual
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self { translation, rotation }
    }

    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            translation: Vec3::new(x, y, z),
            rotation: Quat::identity(),
        }
    }

    /// Angle (radians) between the body's local +Y and world +Y
    pub fn tilt(&self) -> f32 {
        let local_up = self.rotation * Vec3::y();
        local_up.angle(&Vec3::y())
    }

    /// Writes `[px, py, pz, qx, qy, qz, qw]` into `out`
    #[inline]
    pub fn write_to(&self, out: &mut [f32]) {
        let t = &self.translation;
        let q = self.rotation.quaternion();
        out[0] = t.x;
        out[1] = t.y;
        out[2] = t.z;
        out[3] = q.i;
        out[4] = q.j;
        out[5] = q.k;
        out[6] = q.w;
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::at(0.0, 0.0, 0.0)
    }
}

/// Floats per pose in the transform transfer buffer
pub const POSE_STRIDE: usize = 7;

/// Rotation about the X axis
pub fn quat_about_x(angle: f32) -> Quat {
    UnitQuaternion::from_axis_angle(&Vector3::x_axis(), angle)
}

/// Rotation about the Z axis
pub fn quat_about_z(angle: f32) -> Quat {
    UnitQuaternion::from_axis_angle(&Vector3::z_axis(), angle)
}
