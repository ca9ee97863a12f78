//! Game systems, bottom-up:
//! - physics:   backend contract and implementations
//! - registry:  arena of (visual, body) pairs
//! - level:     builds the lane, pins and ball
//! - aim:       input state machine and aim arrow
//! - sync:      per-frame step and pose copy
//! - outcome:   pin classification and score
//! - scheduler: delayed tasks keyed on frame time
//! - camera:    cosmetic tweens

pub mod aim;
pub mod camera;
pub mod level;
pub mod outcome;
pub mod physics;
pub mod registry;
pub mod scheduler;
pub mod sync;
