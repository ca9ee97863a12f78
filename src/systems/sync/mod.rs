//! Per-frame physics advance and pose copy
//!
//! Only tracked (dynamic) entries are synced; static visuals keep the pose
//! they were created with. Poses are copied verbatim, no interpolation.

use crate::domain::config::PhysicsSettings;
use crate::systems::physics::PhysicsBackend;
use crate::systems::registry::BodyRegistry;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub synced: u32,
    /// Tracked entries whose body had no pose this frame
    pub skipped: u32,
}

/// Advance the world by one fixed slice
#[inline]
pub fn advance<P: PhysicsBackend>(physics: &mut P, settings: &PhysicsSettings) {
    physics.step(settings.fixed_dt, settings.max_substeps);
}

/// Copy every tracked body's pose onto its visual
pub fn sync_visuals<P: PhysicsBackend>(physics: &P, registry: &mut BodyRegistry) -> SyncReport {
    let mut report = SyncReport::default();
    // Indexing by position keeps the borrow of `tracked` short
    for i in 0..registry.tracked().len() {
        let id = registry.tracked()[i];
        let Some(entry) = registry.get_mut(id) else {
            report.skipped += 1;
            continue;
        };
        match physics.body_pose(entry.body) {
            Some(pose) => {
                entry.visual.pose = pose;
                report.synced += 1;
            }
            None => report.skipped += 1,
        }
    }
    report
}

pub fn step_and_sync<P: PhysicsBackend>(
    physics: &mut P,
    registry: &mut BodyRegistry,
    settings: &PhysicsSettings,
) -> SyncReport {
    advance(physics, settings);
    sync_visuals(physics, registry)
}
