//! Aim controller (input -> angle -> one-shot launch impulse) and the aim
//! arrow that mirrors it

mod controller;
mod indicator;

pub use controller::{launch_impulse, AimAction, AimController, AimPhase, InputCommand};
pub use indicator::{arrow_pose, AimIndicator};
