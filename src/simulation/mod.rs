//! Game core - everything one bowling level needs, in one explicit context
//!
//! `GameCore` owns the configuration, the physics world, the object registry,
//! the level layout, the aim state, the delayed-task queue, the camera and
//! the outgoing event queue. Nothing lives in globals; reset rebuilds every
//! piece from the stored config.
//!
//! Per frame (`frame_at(now_ms)`):
//! 1. camera tweens
//! 2. physics step + pose sync (every frame, thrown or not)
//! 3. due tasks (the delayed outcome evaluation)
//!
//! The implementation is split across files the same way the wasm facade
//! groups its methods: init, commands, step, render, perf.

use crate::domain::assets::AssetReport;
use crate::domain::config::GameConfig;
use crate::domain::events::{EventQueue, GameEvent};
use crate::systems::aim::{AimController, AimIndicator, AimPhase, InputCommand};
use crate::systems::camera::CameraRig;
use crate::systems::level::LevelLayout;
use crate::systems::outcome::Outcome;
use crate::systems::physics::{PhysicsBackend, RapierWorld};
use crate::systems::registry::BodyRegistry;
use crate::systems::scheduler::TaskQueue;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "step/evaluate.rs"]
mod evaluate;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::{BowlingGame, RenderLayout};
pub use perf_stats::PerfStats;
pub use render_extract::ManifestEntry;

use perf_timer::PerfTimer;

/// Transfer buffers read by the renderer through raw pointers
pub(crate) struct RenderBuffers {
    /// `POSE_STRIDE` floats per registry entry
    pub(crate) transforms: Vec<f32>,
    /// Current material color per registry entry
    pub(crate) colors: Vec<u32>,
}

pub(crate) struct RenderLayoutData {
    pub(crate) transforms_ptr: *const f32,
    pub(crate) transforms_len_elements: usize,
    pub(crate) transforms_len_bytes: usize,
    pub(crate) colors_ptr: *const u32,
    pub(crate) colors_len_elements: usize,
    pub(crate) colors_len_bytes: usize,
}

/// One bowling level and everything that drives it
pub struct GameCore<P: PhysicsBackend = RapierWorld> {
    config: GameConfig,
    assets: AssetReport,

    physics: P,
    registry: BodyRegistry,
    level: LevelLayout,

    aim: AimController,
    arrow: AimIndicator,
    tasks: TaskQueue,
    camera: CameraRig,
    events: EventQueue,
    last_outcome: Option<Outcome>,

    // State
    frame: u64,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl<P: PhysicsBackend> GameCore<P> {
    /// Build the level with default tuning and primitive visuals
    pub fn new() -> Self {
        init::create_game_core(GameConfig::default(), AssetReport::primitives_only())
    }

    pub fn with_config(config: GameConfig, assets: AssetReport) -> Self {
        init::create_game_core(config, assets)
    }

    pub fn from_json(config_json: &str, assets_json: &str) -> Result<Self, String> {
        let config = GameConfig::from_json(config_json)?;
        let assets = AssetReport::from_json(assets_json)?;
        Ok(init::create_game_core(config, assets))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn assets(&self) -> &AssetReport {
        &self.assets
    }

    pub fn physics(&self) -> &P {
        &self.physics
    }

    /// Direct physics access for tools and tests
    pub fn physics_mut(&mut self) -> &mut P {
        &mut self.physics
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn level(&self) -> &LevelLayout {
        &self.level
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn arrow(&self) -> &AimIndicator {
        &self.arrow
    }

    pub fn angle(&self) -> f32 {
        self.aim.angle()
    }

    pub fn phase(&self) -> AimPhase {
        self.aim.phase()
    }

    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    /// Number of tasks still waiting for their due time
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn object_count(&self) -> usize {
        self.registry.len()
    }

    /// Replace the configuration and rebuild the level.
    /// Invalid JSON leaves the game untouched.
    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_config_json(self, json)
    }

    pub fn config_json(&self) -> String {
        self.config.to_json()
    }

    /// Record which models the page managed to load and rebuild the level
    pub fn load_assets_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_assets_json(self, json)
    }

    /// Enable or disable per-frame perf metrics
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Apply one input. Returns false when the input was ignored.
    pub fn handle_command(&mut self, command: InputCommand, now_ms: f64) -> bool {
        commands::handle_command(self, command, now_ms)
    }

    /// Keyboard entry point; unknown keys are ignored
    pub fn key_down(&mut self, key: &str, now_ms: f64) -> bool {
        commands::key_down(self, key, now_ms)
    }

    /// Advance one frame at the caller's timestamp
    pub fn frame_at(&mut self, now_ms: f64) {
        step::frame(self, now_ms);
    }

    /// Tear everything down and rebuild the level from the stored config
    pub fn rebuild(&mut self) {
        init::rebuild(self);
    }

    pub fn events(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    pub fn drain_events_json(&mut self) -> String {
        self.events.drain_json()
    }

    /// JSON description of every object, in registry order
    pub fn object_manifest_json(&self) -> String {
        render_extract::object_manifest_json(self)
    }

    /// Fill the transform buffer; returns the number of objects written
    pub fn extract_transforms(&mut self) -> usize {
        render_extract::extract_transforms(self)
    }

    /// Fill the color buffer; returns the number of objects written
    pub fn extract_colors(&mut self) -> usize {
        render_extract::extract_colors(self)
    }

    pub fn transforms(&self) -> &[f32] {
        &self.render.transforms
    }

    pub fn colors(&self) -> &[u32] {
        &self.render.colors
    }

    pub(crate) fn render_layout_data(&self) -> RenderLayoutData {
        render_extract::layout_data(self)
    }
}

impl<P: PhysicsBackend> Default for GameCore<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
