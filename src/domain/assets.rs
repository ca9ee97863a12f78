//! Model availability reported by the JS loader
//!
//! The browser loads the pin and ball models before the level is built and
//! reports what it got. A missing entry means the load failed and the level
//! builder falls back to primitive geometry.

use serde::{Deserialize, Serialize};

/// Bounds and base color of a loaded model, measured by the loader
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelAsset {
    /// Bounding box size of the raw model
    pub size: [f32; 3],
    /// Material color of the model's main mesh (0xRRGGBB)
    #[serde(default = "default_model_color")]
    pub base_color: u32,
}

fn default_model_color() -> u32 {
    0xffffff
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetReport {
    pub pin: Option<ModelAsset>,
    pub ball: Option<ModelAsset>,
}

impl AssetReport {
    /// No models loaded; every visual is a primitive
    pub fn primitives_only() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}

impl ModelAsset {
    /// Uniform scale that makes the model `target_height` tall
    pub fn scale_to_height(&self, target_height: f32) -> f32 {
        if self.size[1] == 0.0 {
            1.0
        } else {
            target_height / self.size[1]
        }
    }

    /// Uniform scale that fits the largest dimension into `target_extent`
    pub fn scale_to_extent(&self, target_extent: f32) -> f32 {
        let max_dim = self.size[0].max(self.size[1]).max(self.size[2]);
        if max_dim == 0.0 {
            1.0
        } else {
            target_extent / max_dim
        }
    }
}
