//! Cosmetic camera motion: the post-throw fly-in and the strike bounce

mod rig;
mod tween;

pub use rig::CameraRig;
pub use tween::{Channel, Easing, Tween};
