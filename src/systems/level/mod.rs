//! Level builder: lane, gutters, the ten-pin triangle and the ball

mod builder;

pub use builder::{ball_body_desc, build_level, pin_body_desc, pin_positions, LevelLayout, PIN_ROWS};
