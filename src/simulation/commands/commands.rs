use crate::core::math::Vec3;
use crate::domain::events::GameEvent;
use crate::domain::feedback::SoundCue;
use crate::domain::objects::Activation;
use crate::systems::aim::{AimAction, InputCommand};
use crate::systems::physics::PhysicsBackend;
use crate::systems::scheduler::GameTask;

use super::GameCore;

pub(super) fn key_down<P: PhysicsBackend>(game: &mut GameCore<P>, key: &str, now_ms: f64) -> bool {
    match InputCommand::from_key(key) {
        Some(command) => handle_command(game, command, now_ms),
        None => false,
    }
}

pub(super) fn handle_command<P: PhysicsBackend>(
    game: &mut GameCore<P>,
    command: InputCommand,
    now_ms: f64,
) -> bool {
    match game.aim.handle(command) {
        AimAction::Ignored => false,
        AimAction::Aimed { angle } => {
            game.arrow.point(angle, &game.config.arrow);
            game.events.send(GameEvent::AimChanged { angle });
            true
        }
        AimAction::Thrown { angle, impulse } => {
            throw_ball(game, angle, impulse, now_ms);
            true
        }
        AimAction::ResetRequested => {
            game.rebuild();
            true
        }
    }
}

fn throw_ball<P: PhysicsBackend>(
    game: &mut GameCore<P>,
    angle: f32,
    impulse: Vec3,
    now_ms: f64,
) {
    let ball = game.level.ball_body;
    game.physics.set_activation(ball, Activation::AlwaysActive);
    game.physics.apply_central_impulse(ball, impulse);

    game.tasks
        .schedule(now_ms, game.config.throw.evaluation_delay_ms, GameTask::EvaluateOutcome);
    game.camera.start_follow(now_ms, &game.config.camera);
    game.arrow.hide();

    game.events.send(GameEvent::BallThrown {
        angle,
        impulse: [impulse.x, impulse.y, impulse.z],
        sound: SoundCue::Throw,
    });
    engine_log!(
        "ball thrown: angle {:.2} impulse ({:.1}, {:.1}, {:.1})",
        angle,
        impulse.x,
        impulse.y,
        impulse.z
    );
}
