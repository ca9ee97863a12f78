use crate::core::math::POSE_STRIDE;
use crate::domain::assets::AssetReport;
use crate::domain::config::GameConfig;
use crate::domain::events::{EventQueue, GameEvent};
use crate::systems::aim::{AimController, AimIndicator};
use crate::systems::camera::CameraRig;
use crate::systems::level::{build_level, LevelLayout};
use crate::systems::physics::PhysicsBackend;
use crate::systems::registry::BodyRegistry;
use crate::systems::scheduler::TaskQueue;

use super::perf_stats::PerfStats;
use super::{GameCore, RenderBuffers};

pub(super) fn create_game_core<P: PhysicsBackend>(config: GameConfig, assets: AssetReport) -> GameCore<P> {
    let mut physics = P::new(&config.physics);
    let mut registry = BodyRegistry::new();
    let level = build_level(&mut registry, &mut physics, &config, &assets);

    let mut events = EventQueue::new();
    events.send(level_ready(&level, &assets));

    let object_count = registry.len();
    GameCore {
        aim: AimController::new(&config.throw),
        arrow: AimIndicator::new(&config.arrow),
        tasks: TaskQueue::new(),
        camera: CameraRig::new(&config.camera),
        events,
        last_outcome: None,
        physics,
        registry,
        level,
        config,
        assets,
        frame: 0,
        render: RenderBuffers {
            transforms: Vec::with_capacity(object_count * POSE_STRIDE),
            colors: Vec::with_capacity(object_count),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

fn level_ready(level: &LevelLayout, assets: &AssetReport) -> GameEvent {
    GameEvent::LevelReady {
        pins: level.pins.len() as u32,
        pin_model: assets.pin.is_some(),
        ball_model: assets.ball.is_some(),
    }
}

/// Full teardown: new physics world, registry, level, aim state, task
/// queue and camera. Pending tasks die with the old queue.
pub(super) fn rebuild<P: PhysicsBackend>(game: &mut GameCore<P>) {
    let perf_enabled = game.perf_enabled;
    let config = game.config.clone();
    let assets = game.assets;

    *game = create_game_core(config, assets);
    game.perf_enabled = perf_enabled;

    // LevelReady from the fresh core goes out after the reset notice
    let ready = game.events.drain();
    game.events.send(GameEvent::LevelReset);
    for event in ready {
        game.events.send(event);
    }

    engine_log!("level reset: {} objects", game.registry.len());
}
