use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) sync_ms: f64,
    pub(super) evaluate_ms: f64,
    pub(super) synced_bodies: u32,
    pub(super) skipped_bodies: u32,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn sync_ms(&self) -> f64 { self.sync_ms }
    #[wasm_bindgen(getter)]
    pub fn evaluate_ms(&self) -> f64 { self.evaluate_ms }
    #[wasm_bindgen(getter)]
    pub fn synced_bodies(&self) -> u32 { self.synced_bodies }
    #[wasm_bindgen(getter)]
    pub fn skipped_bodies(&self) -> u32 { self.skipped_bodies }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
