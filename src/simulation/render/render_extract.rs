use serde::Serialize;

use crate::core::math::POSE_STRIDE;
use crate::domain::objects::ObjectKind;
use crate::systems::physics::PhysicsBackend;
use crate::systems::registry::Representation;

use super::{GameCore, RenderLayoutData};

/// One object as the renderer needs to create it
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub id: u32,
    pub kind: ObjectKind,
    pub representation: Representation,
    pub color: u32,
    pub dynamic: bool,
}

pub(super) fn manifest<P: PhysicsBackend>(game: &GameCore<P>) -> Vec<ManifestEntry> {
    game.registry
        .iter()
        .map(|(id, entry)| ManifestEntry {
            id: id.raw(),
            kind: entry.kind,
            representation: entry.visual.representation,
            color: entry.visual.color.current(),
            dynamic: entry.is_dynamic(),
        })
        .collect()
}

pub(super) fn object_manifest_json<P: PhysicsBackend>(game: &GameCore<P>) -> String {
    serde_json::to_string(&manifest(game)).unwrap_or_else(|_| "[]".to_string())
}

/// Write every visual pose as `[px, py, pz, qx, qy, qz, qw]`, registry order
pub(super) fn extract_transforms<P: PhysicsBackend>(game: &mut GameCore<P>) -> usize {
    let count = game.registry.len();
    let buffer = &mut game.render.transforms;
    buffer.resize(count * POSE_STRIDE, 0.0);

    for (id, entry) in game.registry.iter() {
        let start = id.index() * POSE_STRIDE;
        entry.visual.pose.write_to(&mut buffer[start..start + POSE_STRIDE]);
    }
    count
}

pub(super) fn extract_colors<P: PhysicsBackend>(game: &mut GameCore<P>) -> usize {
    let buffer = &mut game.render.colors;
    buffer.clear();
    buffer.extend(game.registry.iter().map(|(_, entry)| entry.visual.color.current()));
    buffer.len()
}

pub(super) fn layout_data<P: PhysicsBackend>(game: &GameCore<P>) -> RenderLayoutData {
    let transforms = &game.render.transforms;
    let colors = &game.render.colors;
    RenderLayoutData {
        transforms_ptr: transforms.as_ptr(),
        transforms_len_elements: transforms.len(),
        transforms_len_bytes: transforms.len() * std::mem::size_of::<f32>(),
        colors_ptr: colors.as_ptr(),
        colors_len_elements: colors.len(),
        colors_len_bytes: colors.len() * std::mem::size_of::<u32>(),
    }
}
