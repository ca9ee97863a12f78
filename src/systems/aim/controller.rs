use crate::core::math::Vec3;
use crate::domain::config::ThrowConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AimPhase {
    Aiming,
    Thrown,
}

/// Player input. The discriminant is the command code used across the
/// wasm boundary.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    AimLeft = 0,
    AimRight = 1,
    Throw = 2,
    Reset = 3,
}

impl InputCommand {
    /// Keyboard mapping: `a`, `d`, space, `r`/`R`. Anything else is ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "a" | "A" => Some(InputCommand::AimLeft),
            "d" | "D" => Some(InputCommand::AimRight),
            " " | "Space" | "Spacebar" => Some(InputCommand::Throw),
            "r" | "R" => Some(InputCommand::Reset),
            _ => None,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(InputCommand::AimLeft),
            1 => Some(InputCommand::AimRight),
            2 => Some(InputCommand::Throw),
            3 => Some(InputCommand::Reset),
            _ => None,
        }
    }
}

/// What the game core has to do after an input
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AimAction {
    Ignored,
    Aimed { angle: f32 },
    Thrown { angle: f32, impulse: Vec3 },
    ResetRequested,
}

/// Launch impulse for `angle`: angle 0 sends the ball straight down -Z,
/// positive angles veer towards -X.
pub fn launch_impulse(angle: f32, magnitude: f32) -> Vec3 {
    Vec3::new(-angle.sin() * magnitude, 0.0, -angle.cos() * magnitude)
}

pub struct AimController {
    angle: f32,
    phase: AimPhase,
    step: f32,
    force: f32,
}

impl AimController {
    pub fn new(throw: &ThrowConfig) -> Self {
        Self {
            angle: 0.0,
            phase: AimPhase::Aiming,
            step: throw.aim_step,
            force: throw.force,
        }
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn phase(&self) -> AimPhase {
        self.phase
    }

    #[inline]
    pub fn is_aiming(&self) -> bool {
        self.phase == AimPhase::Aiming
    }

    pub fn handle(&mut self, command: InputCommand) -> AimAction {
        match (self.phase, command) {
            (AimPhase::Aiming, InputCommand::AimLeft) => {
                self.angle += self.step;
                AimAction::Aimed { angle: self.angle }
            }
            (AimPhase::Aiming, InputCommand::AimRight) => {
                self.angle -= self.step;
                AimAction::Aimed { angle: self.angle }
            }
            (AimPhase::Aiming, InputCommand::Throw) => {
                self.phase = AimPhase::Thrown;
                AimAction::Thrown {
                    angle: self.angle,
                    impulse: launch_impulse(self.angle, self.force),
                }
            }
            (AimPhase::Thrown, InputCommand::Reset) => AimAction::ResetRequested,
            _ => AimAction::Ignored,
        }
    }
}
