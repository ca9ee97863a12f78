use crate::domain::events::GameEvent;
use crate::systems::outcome;
use crate::systems::physics::PhysicsBackend;

use super::GameCore;

/// Count the pins, recolor them and publish the result
pub(super) fn run_evaluation<P: PhysicsBackend>(game: &mut GameCore<P>, now_ms: f64) {
    let result = outcome::evaluate(
        &mut game.registry,
        &game.physics,
        &game.level.pins,
        &game.config.scoring,
    );
    let tier = result.tier;

    if tier.has_bonus_animation() {
        game.camera.start_bounce(now_ms, &game.config.camera);
    }

    game.events.send(GameEvent::OutcomeReady {
        score: result.score,
        tier,
        message: tier.message().to_string(),
        color: tier.css_color().to_string(),
        sound: tier.sound(),
        speech: tier.speech_fallback().to_string(),
        fallen: result.fallen.clone(),
    });
    engine_log!("outcome: {} pins down ({:?})", result.score, tier);

    game.last_outcome = Some(result);
}
