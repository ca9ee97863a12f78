use rapier3d::na::{Isometry3, Translation3};
use rapier3d::prelude::*;

use crate::core::math::{Pose, Vec3};
use crate::domain::config::PhysicsSettings;
use crate::domain::objects::{Activation, BodyDesc, Shape};

use super::{substep_count, BodyHandle, PhysicsBackend};

/// rapier3d world
pub struct RapierWorld {
    gravity: Vector<Real>,
    /// Internal step length; a frame longer than this is split into sub-steps
    internal_dt: f32,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    /// BodyHandle index -> rapier handle
    handles: Vec<RigidBodyHandle>,
}

impl RapierWorld {
    fn rapier_handle(&self, handle: BodyHandle) -> Option<RigidBodyHandle> {
        self.handles.get(handle.index()).copied()
    }

    fn collider_for(desc: &BodyDesc) -> Collider {
        let builder = match desc.shape {
            Shape::Sphere { radius } => ColliderBuilder::ball(radius),
            Shape::Cylinder { radius, half_height } => ColliderBuilder::cylinder(half_height, radius),
            Shape::Box { half_extents } => {
                ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            }
        };
        let builder = builder.friction(desc.friction).restitution(desc.restitution);
        if desc.is_dynamic() {
            builder.mass(desc.mass).build()
        } else {
            builder.build()
        }
    }
}

impl PhysicsBackend for RapierWorld {
    fn new(settings: &PhysicsSettings) -> Self {
        let [gx, gy, gz] = settings.gravity;
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = settings.fixed_dt;

        Self {
            gravity: Vector::new(gx, gy, gz),
            internal_dt: settings.fixed_dt,
            integration_parameters,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            handles: Vec::new(),
        }
    }

    fn add_body(&mut self, desc: &BodyDesc) -> BodyHandle {
        let iso = Isometry3::from_parts(Translation3::from(desc.position), desc.rotation);

        let body = if desc.is_dynamic() {
            RigidBodyBuilder::dynamic()
                .position(iso)
                .can_sleep(desc.activation == Activation::Normal)
                .ccd_enabled(desc.ccd)
                .build()
        } else {
            RigidBodyBuilder::fixed().position(iso).build()
        };

        let rb_handle = self.bodies.insert(body);
        let collider = Self::collider_for(desc);
        self.colliders
            .insert_with_parent(collider, rb_handle, &mut self.bodies);

        let handle = BodyHandle::new(self.handles.len() as u32);
        self.handles.push(rb_handle);
        handle
    }

    fn step(&mut self, dt: f32, max_substeps: u32) {
        let substeps = substep_count(dt, self.internal_dt, max_substeps);
        self.integration_parameters.dt = dt / substeps as f32;

        for _ in 0..substeps {
            self.pipeline.step(
                &self.gravity,
                &self.integration_parameters,
                &mut self.islands,
                &mut self.broad_phase,
                &mut self.narrow_phase,
                &mut self.bodies,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                &mut self.ccd_solver,
                None,
                &(),
                &(),
            );
        }
    }

    fn body_pose(&self, handle: BodyHandle) -> Option<Pose> {
        let rb = self.bodies.get(self.rapier_handle(handle)?)?;
        let iso = rb.position();
        Some(Pose::new(iso.translation.vector, iso.rotation))
    }

    fn apply_central_impulse(&mut self, handle: BodyHandle, impulse: Vec3) {
        let Some(rb_handle) = self.rapier_handle(handle) else {
            return;
        };
        if let Some(rb) = self.bodies.get_mut(rb_handle) {
            rb.apply_impulse(impulse, true);
        }
    }

    fn set_activation(&mut self, handle: BodyHandle, activation: Activation) {
        let Some(rb_handle) = self.rapier_handle(handle) else {
            return;
        };
        if let Some(rb) = self.bodies.get_mut(rb_handle) {
            *rb.activation_mut() = match activation {
                Activation::Normal => RigidBodyActivation::active(),
                Activation::AlwaysActive => RigidBodyActivation::cannot_sleep(),
            };
            rb.wake_up(true);
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

    fn world() -> RapierWorld {
        RapierWorld::new(&PhysicsSettings::default())
    }

    fn floor(world: &mut RapierWorld) -> BodyHandle {
        let desc = BodyDesc::new(
            Shape::Box { half_extents: Vec3::new(4.0, 0.5, 25.0) },
            0.0,
            Vec3::new(0.0, -0.5, 0.0),
            Quat::identity(),
        );
        world.add_body(&desc)
    }

    #[test]
    fn static_bodies_do_not_move() {
        let mut world = world();
        let h = floor(&mut world);
        for _ in 0..30 {
            world.step(1.0 / 60.0, 10);
        }
        let pose = world.body_pose(h).unwrap();
        assert_eq!(pose.translation, Vec3::new(0.0, -0.5, 0.0));
    }

    #[test]
    fn dynamic_sphere_falls_and_rests_on_floor() {
        let mut world = world();
        floor(&mut world);
        let ball = world.add_body(&BodyDesc::new(
            Shape::Sphere { radius: 0.8 },
            15.0,
            Vec3::new(0.0, 2.0, 0.0),
            Quat::identity(),
        ));

        world.step(1.0 / 60.0, 10);
        assert!(world.body_pose(ball).unwrap().translation.y < 2.0);

        for _ in 0..240 {
            world.step(1.0 / 60.0, 10);
        }
        let y = world.body_pose(ball).unwrap().translation.y;
        assert!((y - 0.8).abs() < 0.1, "ball resting height {}", y);
    }

    #[test]
    fn impulse_moves_body_along_its_direction() {
        let mut world = world();
        floor(&mut world);
        let ball = world.add_body(
            &BodyDesc::new(Shape::Sphere { radius: 0.8 }, 15.0, Vec3::new(0.0, 0.8, 0.0), Quat::identity())
                .with_activation(Activation::AlwaysActive),
        );
        world.apply_central_impulse(ball, Vec3::new(0.0, 0.0, -150.0));
        for _ in 0..30 {
            world.step(1.0 / 60.0, 10);
        }
        assert!(world.body_pose(ball).unwrap().translation.z < -1.0);
    }

    #[test]
    fn substep_limit_only_sets_the_step_length() {
        let settings = PhysicsSettings { max_substeps: 3, ..PhysicsSettings::default() };
        let world = RapierWorld::new(&settings);
        let defaults = IntegrationParameters::default();
        assert_eq!(world.integration_parameters.dt, settings.fixed_dt);
        assert_eq!(world.integration_parameters.max_ccd_substeps, defaults.max_ccd_substeps);
    }

    #[test]
    fn unknown_handles_are_ignored() {
        let mut world = world();
        let bogus = BodyHandle::new(42);
        assert!(world.body_pose(bogus).is_none());
        world.apply_central_impulse(bogus, Vec3::new(1.0, 0.0, 0.0));
        world.set_activation(bogus, Activation::AlwaysActive);
        assert_eq!(world.body_count(), 0);
    }
}
