//! End-to-end runs against the rapier3d backend

use bowling_engine::systems::outcome::is_fallen;
use bowling_engine::{GameCore, GameEvent, InputCommand, RapierWorld};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn run_frames(game: &mut GameCore<RapierWorld>, first: u32, count: u32) -> f64 {
    let mut now = 0.0;
    for i in first..first + count {
        now = i as f64 * FRAME_MS;
        game.frame_at(now);
    }
    now
}

#[test]
fn pins_stand_when_nothing_is_thrown() {
    let mut game: GameCore<RapierWorld> = GameCore::new();
    run_frames(&mut game, 0, 300);

    let scoring = &game.config().scoring;
    for &pin in &game.level().pins {
        let pose = game.registry().get(pin).unwrap().visual.pose;
        assert!(!is_fallen(&pose, scoring), "pin {:?} fell: {:?}", pin, pose);
    }
    let ball = game.registry().get(game.level().ball).unwrap().visual.pose;
    assert!((ball.translation.y - 0.8).abs() < 0.1, "ball at {:?}", ball.translation);
}

#[test]
fn straight_throw_knocks_pins_down() {
    let mut game: GameCore<RapierWorld> = GameCore::new();
    // Let the ball settle on the lane first
    let now = run_frames(&mut game, 0, 60);
    assert!(game.handle_command(InputCommand::Throw, now));

    run_frames(&mut game, 61, 330);

    let outcome = game.last_outcome().expect("evaluation should have run");
    assert!(outcome.score > 0, "score {}", outcome.score);
    assert_eq!(outcome.fallen.len(), 10);

    let reported = game
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::OutcomeReady { .. }))
        .count();
    assert_eq!(reported, 1);
}
