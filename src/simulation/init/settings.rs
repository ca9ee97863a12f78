use crate::domain::assets::AssetReport;
use crate::domain::config::GameConfig;
use crate::systems::physics::PhysicsBackend;

use super::perf_stats::PerfStats;
use super::GameCore;

pub(super) fn load_config_json<P: PhysicsBackend>(game: &mut GameCore<P>, json: &str) -> Result<(), String> {
    let config = GameConfig::from_json(json).map_err(|e| {
        engine_error!("config rejected: {}", e);
        e
    })?;
    game.config = config;
    game.rebuild();
    Ok(())
}

pub(super) fn load_assets_json<P: PhysicsBackend>(game: &mut GameCore<P>, json: &str) -> Result<(), String> {
    let assets = AssetReport::from_json(json)?;
    game.assets = assets;
    game.rebuild();
    Ok(())
}

pub(super) fn enable_perf_metrics<P: PhysicsBackend>(game: &mut GameCore<P>, enabled: bool) {
    game.perf_enabled = enabled;
    if !enabled {
        game.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats<P: PhysicsBackend>(game: &GameCore<P>) -> PerfStats {
    game.perf_stats.clone()
}
