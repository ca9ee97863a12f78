use serde::Serialize;

use crate::core::math::Pose;

/// How the JS side should draw an object
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Representation {
    /// Clone of a loaded model, scaled uniformly
    Model { scale: f32 },
    /// Built-in geometry
    #[serde(rename_all = "camelCase")]
    Box { size: [f32; 3] },
    #[serde(rename_all = "camelCase")]
    Cylinder { radius: f32, height: f32 },
    #[serde(rename_all = "camelCase")]
    Sphere { radius: f32 },
}

impl Representation {
    pub fn is_model(&self) -> bool {
        matches!(self, Representation::Model { .. })
    }
}

/// Material color with the value captured at creation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaterialColor {
    original: u32,
    current: u32,
}

impl MaterialColor {
    pub fn new(color: u32) -> Self {
        Self { original: color, current: color }
    }

    #[inline]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    pub fn original(&self) -> u32 {
        self.original
    }

    pub fn set(&mut self, color: u32) {
        self.current = color;
    }

    pub fn restore(&mut self) {
        self.current = self.original;
    }
}

/// Render-side half of a registry entry
#[derive(Clone, Debug, PartialEq)]
pub struct VisualObject {
    pub representation: Representation,
    pub pose: Pose,
    pub color: MaterialColor,
}

impl VisualObject {
    pub fn new(representation: Representation, color: u32) -> Self {
        Self {
            representation,
            pose: Pose::default(),
            color: MaterialColor::new(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_returns_to_creation_color() {
        let mut color = MaterialColor::new(0xffffff);
        color.set(0xff0000);
        assert_eq!(color.current(), 0xff0000);
        assert_eq!(color.original(), 0xffffff);
        color.restore();
        assert_eq!(color.current(), 0xffffff);
    }

    #[test]
    fn representation_serializes_with_type_tag() {
        let json = serde_json::to_string(&Representation::Cylinder { radius: 0.3, height: 1.5 }).unwrap();
        assert_eq!(json, r#"{"type":"cylinder","radius":0.3,"height":1.5}"#);
    }
}
