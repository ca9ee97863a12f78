use wasm_bindgen::prelude::*;

use crate::systems::aim::{AimPhase, InputCommand};

use super::perf_stats::PerfStats;
use super::GameCore;

/// Pointers and lengths of the render transfer buffers
#[wasm_bindgen]
pub struct RenderLayout {
    transforms_ptr: u32,
    transforms_len_elements: u32,
    transforms_len_bytes: u32,
    colors_ptr: u32,
    colors_len_elements: u32,
    colors_len_bytes: u32,
}

#[wasm_bindgen]
impl RenderLayout {
    #[wasm_bindgen(getter)]
    pub fn transforms_ptr(&self) -> u32 { self.transforms_ptr }
    #[wasm_bindgen(getter)]
    pub fn transforms_len_elements(&self) -> u32 { self.transforms_len_elements }
    #[wasm_bindgen(getter)]
    pub fn transforms_len_bytes(&self) -> u32 { self.transforms_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn colors_ptr(&self) -> u32 { self.colors_ptr }
    #[wasm_bindgen(getter)]
    pub fn colors_len_elements(&self) -> u32 { self.colors_len_elements }
    #[wasm_bindgen(getter)]
    pub fn colors_len_bytes(&self) -> u32 { self.colors_len_bytes }
}

#[wasm_bindgen]
pub struct BowlingGame {
    core: GameCore,
}

#[wasm_bindgen]
impl BowlingGame {
    /// Default tuning, primitive visuals
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: GameCore::new() }
    }

    /// Build from a config JSON and the loader's asset report JSON
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: String, assets_json: String) -> Result<BowlingGame, JsValue> {
        let core = GameCore::from_json(&config_json, &assets_json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn get_config_json(&self) -> String {
        self.core.config_json()
    }

    pub fn load_assets(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_assets_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    // === INPUT ===

    /// Handle a `KeyboardEvent.key`. Returns false for ignored keys.
    pub fn key_down(&mut self, key: &str, now_ms: f64) -> bool {
        self.core.key_down(key, now_ms)
    }

    /// Handle a command code (see `cmd_*` exports)
    pub fn command(&mut self, code: u8, now_ms: f64) -> bool {
        match InputCommand::from_code(code) {
            Some(command) => self.core.handle_command(command, now_ms),
            None => false,
        }
    }

    // === FRAME ===

    /// Advance one frame; `now_ms` is the requestAnimationFrame timestamp
    pub fn frame(&mut self, now_ms: f64) {
        self.core.frame_at(now_ms);
    }

    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn angle(&self) -> f32 { self.core.angle() }

    #[wasm_bindgen(getter)]
    pub fn thrown(&self) -> bool { self.core.phase() == AimPhase::Thrown }

    /// Last score, -1 before the first evaluation
    #[wasm_bindgen(getter)]
    pub fn score(&self) -> i32 {
        self.core.last_outcome().map_or(-1, |o| o.score as i32)
    }

    #[wasm_bindgen(getter)]
    pub fn object_count(&self) -> u32 { self.core.object_count() as u32 }

    pub fn drain_events_json(&mut self) -> String {
        self.core.drain_events_json()
    }

    // === RENDER ===

    pub fn object_manifest_json(&self) -> String {
        self.core.object_manifest_json()
    }

    pub fn extract_transforms(&mut self) -> u32 {
        self.core.extract_transforms() as u32
    }

    pub fn extract_colors(&mut self) -> u32 {
        self.core.extract_colors() as u32
    }

    pub fn transforms_ptr(&self) -> *const f32 {
        self.core.transforms().as_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.core.transforms().len()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors().as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors().len()
    }

    /// Buffer layout after the last `extract_*` calls
    pub fn render_layout(&self) -> RenderLayout {
        let data = self.core.render_layout_data();
        RenderLayout {
            transforms_ptr: data.transforms_ptr as u32,
            transforms_len_elements: data.transforms_len_elements as u32,
            transforms_len_bytes: data.transforms_len_bytes as u32,
            colors_ptr: data.colors_ptr as u32,
            colors_len_elements: data.colors_len_elements as u32,
            colors_len_bytes: data.colors_len_bytes as u32,
        }
    }

    // Camera

    #[wasm_bindgen(getter)]
    pub fn camera_x(&self) -> f32 { self.core.camera().position().x }
    #[wasm_bindgen(getter)]
    pub fn camera_y(&self) -> f32 { self.core.camera().position().y }
    #[wasm_bindgen(getter)]
    pub fn camera_z(&self) -> f32 { self.core.camera().position().z }
    #[wasm_bindgen(getter)]
    pub fn camera_pitch(&self) -> f32 { self.core.camera().pitch() }
    #[wasm_bindgen(getter)]
    pub fn camera_fov(&self) -> f32 { self.core.camera().fov }
    #[wasm_bindgen(getter)]
    pub fn camera_near(&self) -> f32 { self.core.camera().near }
    #[wasm_bindgen(getter)]
    pub fn camera_far(&self) -> f32 { self.core.camera().far }

    // Aim arrow

    #[wasm_bindgen(getter)]
    pub fn arrow_x(&self) -> f32 { self.core.arrow().pose.translation.x }
    #[wasm_bindgen(getter)]
    pub fn arrow_y(&self) -> f32 { self.core.arrow().pose.translation.y }
    #[wasm_bindgen(getter)]
    pub fn arrow_z(&self) -> f32 { self.core.arrow().pose.translation.z }
    #[wasm_bindgen(getter)]
    pub fn arrow_rotation_y(&self) -> f32 { self.core.angle() }
    #[wasm_bindgen(getter)]
    pub fn arrow_visible(&self) -> bool { self.core.arrow().visible }

    // === PERF ===

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}

impl Default for BowlingGame {
    fn default() -> Self {
        Self::new()
    }
}

impl BowlingGame {
    /// Native access to the core (tests, headless tools)
    pub fn core(&self) -> &GameCore {
        &self.core
    }
}
