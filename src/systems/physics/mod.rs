//! Physics collaborator contract
//!
//! The game core never talks to a physics engine directly. It goes through
//! `PhysicsBackend`, which covers exactly what the game needs:
//! - create static/dynamic bodies from a descriptor
//! - advance the world by a time slice with a sub-step budget
//! - read a body's world pose
//! - apply an instantaneous central impulse
//! - change a body's sleep policy
//!
//! Backends:
//! - `RapierWorld`   - rapier3d, used by the browser build
//! - `ScriptedWorld` - deterministic, no gravity or contacts (headless/tests)

mod rapier;
mod scripted;

pub use rapier::RapierWorld;
pub use scripted::ScriptedWorld;

use crate::core::math::{Pose, Vec3};
use crate::domain::config::PhysicsSettings;
use crate::domain::objects::{Activation, BodyDesc};

/// Opaque body reference handed out by a backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(u32);

impl BodyHandle {
    pub(crate) fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

pub trait PhysicsBackend {
    /// Build an empty world with the given gravity and step settings
    fn new(settings: &PhysicsSettings) -> Self
    where
        Self: Sized;

    /// Insert a body into the world. Never fails.
    fn add_body(&mut self, desc: &BodyDesc) -> BodyHandle;

    /// Advance the world by `dt` seconds using at most `max_substeps`
    /// internal steps
    fn step(&mut self, dt: f32, max_substeps: u32);

    /// Current world pose, `None` if the body has no valid motion state
    fn body_pose(&self, handle: BodyHandle) -> Option<Pose>;

    fn apply_central_impulse(&mut self, handle: BodyHandle, impulse: Vec3);

    fn set_activation(&mut self, handle: BodyHandle, activation: Activation);

    fn body_count(&self) -> usize;
}

/// Number of internal steps needed to cover `dt` at `internal_dt`,
/// clamped to `1..=max_substeps`
pub(crate) fn substep_count(dt: f32, internal_dt: f32, max_substeps: u32) -> u32 {
    if !(dt > 0.0) || !(internal_dt > 0.0) {
        return 1;
    }
    let needed = (dt / internal_dt).round() as u32;
    needed.clamp(1, max_substeps.max(1))
}

#[cfg(test)]
mod tests {
    use super::substep_count;

    #[test]
    fn one_substep_when_dt_matches_internal_step() {
        assert_eq!(substep_count(1.0 / 60.0, 1.0 / 60.0, 10), 1);
    }

    #[test]
    fn long_frames_are_capped() {
        assert_eq!(substep_count(1.0 / 30.0, 1.0 / 60.0, 10), 2);
        assert_eq!(substep_count(1.0, 1.0 / 60.0, 10), 10);
    }

    #[test]
    fn degenerate_inputs_still_step_once() {
        assert_eq!(substep_count(0.0, 1.0 / 60.0, 10), 1);
        assert_eq!(substep_count(1.0 / 60.0, 0.0, 10), 1);
        assert_eq!(substep_count(1.0 / 60.0, 1.0 / 60.0, 0), 1);
    }
}
