//! Browser tests: `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use bowling_engine::{cmd_aim_left, cmd_throw, BowlingGame};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn facade_runs_a_throw() {
    bowling_engine::init();
    let mut game = BowlingGame::new();
    assert!(game.command(cmd_aim_left(), 0.0));
    assert!(game.command(cmd_throw(), 0.0));
    assert!(game.thrown());
    for i in 0..10 {
        game.frame(i as f64 * 16.7);
    }
    assert_eq!(game.extract_transforms(), game.object_count());
    let layout = game.render_layout();
    assert_eq!(layout.transforms_len_elements(), game.object_count() * 7);
}

#[wasm_bindgen_test]
fn bad_config_throws() {
    let mut game = BowlingGame::new();
    assert!(game.load_config("{\"pins\":{\"mass\":-1}}".to_string()).is_err());
}
