//! Domain data: configuration, object descriptors, asset reports, feedback.

pub mod assets;
pub mod config;
pub mod events;
pub mod feedback;
pub mod objects;
