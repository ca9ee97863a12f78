use rapier3d::na::Vector3;

use crate::core::math::{Pose, Quat, Vec3};
use crate::domain::config::ArrowConfig;

/// Pose of the aim arrow for `angle`: it orbits its pivot at `radius` and
/// turns about Y with the aim.
pub fn arrow_pose(angle: f32, arrow: &ArrowConfig) -> Pose {
    let translation = Vec3::new(
        angle.sin() * arrow.radius,
        arrow.height,
        arrow.pivot_z + angle.cos() * arrow.radius,
    );
    Pose::new(translation, Quat::from_axis_angle(&Vector3::y_axis(), angle))
}

/// Aim arrow state exposed to the renderer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AimIndicator {
    pub pose: Pose,
    pub visible: bool,
}

impl AimIndicator {
    pub fn new(arrow: &ArrowConfig) -> Self {
        Self {
            pose: arrow_pose(0.0, arrow),
            visible: true,
        }
    }

    pub fn point(&mut self, angle: f32, arrow: &ArrowConfig) {
        self.pose = arrow_pose(angle, arrow);
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}
