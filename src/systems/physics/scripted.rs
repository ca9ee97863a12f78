use crate::core::math::{Pose, Vec3};
use crate::domain::config::PhysicsSettings;
use crate::domain::objects::{Activation, BodyDesc};

use super::{substep_count, BodyHandle, PhysicsBackend};

/// Deterministic backend without gravity or contacts.
///
/// Dynamic bodies move only by the velocity their impulses gave them, and
/// poses can be overwritten directly. Used for headless runs and for tests
/// that need pins in an exact pose at evaluation time.
pub struct ScriptedWorld {
    bodies: Vec<ScriptedBody>,
    internal_dt: f32,
    steps: u64,
    last_substeps: u32,
}

struct ScriptedBody {
    desc: BodyDesc,
    /// `None` simulates a body without a motion state
    pose: Option<Pose>,
    velocity: Vec3,
    activation: Activation,
    impulses: Vec<Vec3>,
}

impl ScriptedWorld {
    /// Overwrite a body's pose
    pub fn set_pose(&mut self, handle: BodyHandle, pose: Pose) {
        if let Some(body) = self.bodies.get_mut(handle.index()) {
            body.pose = Some(pose);
        }
    }

    /// Drop a body's motion state so `body_pose` returns `None`
    pub fn clear_pose(&mut self, handle: BodyHandle) {
        if let Some(body) = self.bodies.get_mut(handle.index()) {
            body.pose = None;
        }
    }

    pub fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec3) {
        if let Some(body) = self.bodies.get_mut(handle.index()) {
            body.velocity = velocity;
        }
    }

    /// Every impulse applied to the body, in order
    pub fn impulses(&self, handle: BodyHandle) -> &[Vec3] {
        self.bodies
            .get(handle.index())
            .map(|b| b.impulses.as_slice())
            .unwrap_or(&[])
    }

    pub fn activation(&self, handle: BodyHandle) -> Option<Activation> {
        self.bodies.get(handle.index()).map(|b| b.activation)
    }

    pub fn desc(&self, handle: BodyHandle) -> Option<&BodyDesc> {
        self.bodies.get(handle.index()).map(|b| &b.desc)
    }

    /// Number of `step` calls so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn last_substeps(&self) -> u32 {
        self.last_substeps
    }
}

impl PhysicsBackend for ScriptedWorld {
    fn new(settings: &PhysicsSettings) -> Self {
        Self {
            bodies: Vec::new(),
            internal_dt: settings.fixed_dt,
            steps: 0,
            last_substeps: 0,
        }
    }

    fn add_body(&mut self, desc: &BodyDesc) -> BodyHandle {
        let handle = BodyHandle::new(self.bodies.len() as u32);
        self.bodies.push(ScriptedBody {
            desc: *desc,
            pose: Some(desc.pose()),
            velocity: Vec3::zeros(),
            activation: desc.activation,
            impulses: Vec::new(),
        });
        handle
    }

    fn step(&mut self, dt: f32, max_substeps: u32) {
        let substeps = substep_count(dt, self.internal_dt, max_substeps);
        let sub_dt = dt / substeps as f32;
        for _ in 0..substeps {
            for body in self.bodies.iter_mut() {
                if !body.desc.is_dynamic() {
                    continue;
                }
                if let Some(pose) = body.pose.as_mut() {
                    pose.translation += body.velocity * sub_dt;
                }
            }
        }
        self.steps += 1;
        self.last_substeps = substeps;
    }

    fn body_pose(&self, handle: BodyHandle) -> Option<Pose> {
        self.bodies.get(handle.index())?.pose
    }

    fn apply_central_impulse(&mut self, handle: BodyHandle, impulse: Vec3) {
        if let Some(body) = self.bodies.get_mut(handle.index()) {
            body.impulses.push(impulse);
            if body.desc.is_dynamic() {
                body.velocity += impulse / body.desc.mass;
            }
        }
    }

    fn set_activation(&mut self, handle: BodyHandle, activation: Activation) {
        if let Some(body) = self.bodies.get_mut(handle.index()) {
            body.activation = activation;
        }
    }

    fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Quat;
    use crate::domain::objects::Shape;

    fn ball_desc() -> BodyDesc {
        BodyDesc::new(Shape::Sphere { radius: 0.5 }, 10.0, Vec3::new(0.0, 1.0, 0.0), Quat::identity())
    }

    #[test]
    fn impulse_sets_velocity_and_step_integrates() {
        let mut world = ScriptedWorld::new(&PhysicsSettings::default());
        let h = world.add_body(&ball_desc());
        world.apply_central_impulse(h, Vec3::new(0.0, 0.0, -60.0));
        world.step(1.0 / 60.0, 10);

        let z = world.body_pose(h).unwrap().translation.z;
        assert!((z + 0.1).abs() < 1e-5, "z = {}", z);
        assert_eq!(world.impulses(h).len(), 1);
        assert_eq!(world.steps(), 1);
        assert_eq!(world.last_substeps(), 1);
    }

    #[test]
    fn static_bodies_ignore_impulses() {
        let mut world = ScriptedWorld::new(&PhysicsSettings::default());
        let mut desc = ball_desc();
        desc.mass = 0.0;
        let h = world.add_body(&desc);
        world.apply_central_impulse(h, Vec3::new(5.0, 0.0, 0.0));
        world.step(1.0, 10);
        assert_eq!(world.body_pose(h).unwrap().translation, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn cleared_pose_reads_as_none() {
        let mut world = ScriptedWorld::new(&PhysicsSettings::default());
        let h = world.add_body(&ball_desc());
        world.clear_pose(h);
        assert!(world.body_pose(h).is_none());
        world.set_pose(h, Pose::at(1.0, 1.0, 1.0));
        assert_eq!(world.body_pose(h), Some(Pose::at(1.0, 1.0, 1.0)));
    }
}
