//! Bowling Engine - physics and scoring core of the browser bowling game
//!
//! The page owns the renderer, the model loader, audio and the DOM. This
//! crate owns everything else: the rigid bodies, the aim/throw state machine,
//! the per-frame step and sync, and the pin count.
//!
//! Architecture:
//! - core/       - logging macros, math types
//! - domain/     - config, object descriptors, feedback tiers, events
//! - systems/    - physics backends, registry, level, aim, sync, outcome, ...
//! - simulation/ - `GameCore` (all game state) and the wasm facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("Bowling WASM engine initialized");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::assets::AssetReport;
pub use domain::config::GameConfig;
pub use domain::events::GameEvent;
pub use domain::feedback::FeedbackTier;
pub use simulation::{BowlingGame, GameCore, PerfStats};
pub use systems::aim::InputCommand;
pub use systems::physics::{PhysicsBackend, RapierWorld, ScriptedWorld};

// Command codes for `BowlingGame::command`
#[wasm_bindgen]
pub fn cmd_aim_left() -> u8 { InputCommand::AimLeft as u8 }
#[wasm_bindgen]
pub fn cmd_aim_right() -> u8 { InputCommand::AimRight as u8 }
#[wasm_bindgen]
pub fn cmd_throw() -> u8 { InputCommand::Throw as u8 }
#[wasm_bindgen]
pub fn cmd_reset() -> u8 { InputCommand::Reset as u8 }
