use crate::systems::physics::PhysicsBackend;
use crate::systems::scheduler::GameTask;
use crate::systems::sync;

use super::{evaluate, GameCore, PerfTimer};

pub(super) fn frame<P: PhysicsBackend>(game: &mut GameCore<P>, now_ms: f64) {
    let perf_on = game.perf_enabled;
    if perf_on {
        game.perf_stats.reset();
    }

    game.camera.update(now_ms);

    // Physics advances every frame regardless of the aim phase
    let report = if perf_on {
        let t0 = PerfTimer::start();
        sync::advance(&mut game.physics, &game.config.physics);
        game.perf_stats.step_ms = t0.elapsed_ms();

        let t1 = PerfTimer::start();
        let report = sync::sync_visuals(&game.physics, &mut game.registry);
        game.perf_stats.sync_ms = t1.elapsed_ms();
        report
    } else {
        sync::step_and_sync(&mut game.physics, &mut game.registry, &game.config.physics)
    };

    for task in game.tasks.take_due(now_ms) {
        match task {
            GameTask::EvaluateOutcome => {
                if perf_on {
                    let t0 = PerfTimer::start();
                    evaluate::run_evaluation(game, now_ms);
                    game.perf_stats.evaluate_ms = t0.elapsed_ms();
                } else {
                    evaluate::run_evaluation(game, now_ms);
                }
            }
        }
    }

    game.frame += 1;

    if perf_on {
        game.perf_stats.synced_bodies = report.synced;
        game.perf_stats.skipped_bodies = report.skipped;
        game.perf_stats.frame = game.frame;
    }
}
