//! Rigid Body Registry - arena of (visual, physics body) pairs
//!
//! Objects are addressed by `ObjectId`. The visual record and the physics
//! body only know about each other through the registry entry, so neither
//! side holds a reference into the other's object graph.
//!
//! - every created object gets an entry, static or dynamic
//! - mass > 0 objects are also appended to the tracked list (synced per frame)
//! - the registry is never edited after the level is built; reset drops it

mod registry;
mod visual;

pub use registry::{BodyRegistry, ObjectId, RegistryEntry};
pub use visual::{MaterialColor, Representation, VisualObject};
