use serde::{Deserialize, Serialize};

/// Full game tuning. Every field has a default, so a partial JSON object
/// (or `{}`) is a valid configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub physics: PhysicsSettings,
    pub lane: LaneConfig,
    pub pins: PinConfig,
    pub ball: BallConfig,
    pub surface: SurfaceConfig,
    pub throw: ThrowConfig,
    pub scoring: ScoringConfig,
    pub camera: CameraConfig,
    pub arrow: ArrowConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsSettings {
    pub gravity: [f32; 3],
    /// Seconds advanced per frame, independent of wall-clock frame time
    pub fixed_dt: f32,
    /// Upper bound on internal solver sub-steps per advance
    pub max_substeps: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LaneConfig {
    pub floor_size: [f32; 3],
    pub floor_position: [f32; 3],
    pub floor_color: u32,
    pub gutter_size: [f32; 3],
    /// Gutters sit at ±gutter_offset_x
    pub gutter_offset_x: f32,
    pub gutter_y: f32,
    pub gutter_z: f32,
    pub gutter_color: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PinConfig {
    pub radius: f32,
    pub height: f32,
    pub mass: f32,
    pub spacing: f32,
    /// Z of the head pin; later rows go further down the lane
    pub start_z: f32,
    pub color: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BallConfig {
    pub radius: f32,
    pub mass: f32,
    pub start: [f32; 3],
    pub color: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurfaceConfig {
    pub friction: f32,
    pub restitution: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThrowConfig {
    /// Radians added/removed per aim input
    pub aim_step: f32,
    /// Impulse magnitude applied to the ball
    pub force: f32,
    /// Delay between the throw and the pin count (ms of frame time)
    pub evaluation_delay_ms: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringConfig {
    /// A pin whose center drops below this height is down
    pub fallen_height: f32,
    /// A pin tilted strictly more than this (radians) is down
    pub max_tilt: f32,
    /// Lowest score that earns the "good" tier
    pub good_threshold: u32,
    pub fallen_color: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CameraConfig {
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub start: [f32; 3],
    /// Where the camera flies after the throw
    pub follow_target: [f32; 3],
    pub follow_duration_ms: f64,
    /// Final X rotation (pitch) reached during the fly-in
    pub follow_pitch: f32,
    pub bounce_height: f32,
    pub bounce_leg_ms: f64,
    pub bounce_repeats: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArrowConfig {
    /// Distance of the arrow from its pivot
    pub radius: f32,
    pub pivot_z: f32,
    pub height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsSettings::default(),
            lane: LaneConfig::default(),
            pins: PinConfig::default(),
            ball: BallConfig::default(),
            surface: SurfaceConfig::default(),
            throw: ThrowConfig::default(),
            scoring: ScoringConfig::default(),
            camera: CameraConfig::default(),
            arrow: ArrowConfig::default(),
        }
    }
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: [0.0, -9.8, 0.0],
            fixed_dt: 1.0 / 60.0,
            max_substeps: 10,
        }
    }
}

impl Default for LaneConfig {
    fn default() -> Self {
        Self {
            floor_size: [8.0, 1.0, 50.0],
            floor_position: [0.0, -0.5, -10.0],
            floor_color: 0x222222,
            gutter_size: [0.5, 1.0, 49.0],
            gutter_offset_x: 3.5,
            gutter_y: 0.0,
            gutter_z: -10.0,
            gutter_color: 0xff00ff,
        }
    }
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            radius: 0.3,
            height: 1.5,
            mass: 2.0,
            spacing: 0.8,
            start_z: -25.0,
            color: 0xffffff,
        }
    }
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 0.8,
            mass: 15.0,
            start: [0.0, 2.0, 14.0],
            color: 0x00aaff,
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            friction: 0.5,
            restitution: 0.6,
        }
    }
}

impl Default for ThrowConfig {
    fn default() -> Self {
        Self {
            aim_step: 0.1,
            force: 500.0,
            evaluation_delay_ms: 5000.0,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            fallen_height: 0.2,
            max_tilt: std::f32::consts::FRAC_PI_4,
            good_threshold: 3,
            fallen_color: 0xff0000,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 60.0,
            near: 0.2,
            far: 2000.0,
            start: [0.0, 5.0, 25.0],
            follow_target: [0.0, 3.0, -15.0],
            follow_duration_ms: 2000.0,
            follow_pitch: -0.1,
            bounce_height: 1.0,
            bounce_leg_ms: 200.0,
            bounce_repeats: 5,
        }
    }
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            radius: 2.0,
            pivot_z: 8.0,
            height: 0.5,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: GameConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Reject values the level builder or the solver cannot work with.
    pub fn validate(&self) -> Result<(), String> {
        finite_vec("physics.gravity", &self.physics.gravity)?;
        positive("physics.fixedDt", self.physics.fixed_dt)?;
        if self.physics.max_substeps == 0 {
            return Err("physics.maxSubsteps must be at least 1".to_string());
        }

        for (i, v) in self.lane.floor_size.iter().enumerate() {
            positive(&format!("lane.floorSize[{}]", i), *v)?;
        }
        for (i, v) in self.lane.gutter_size.iter().enumerate() {
            positive(&format!("lane.gutterSize[{}]", i), *v)?;
        }
        finite_vec("lane.floorPosition", &self.lane.floor_position)?;
        finite("lane.gutterOffsetX", self.lane.gutter_offset_x.into())?;
        finite("lane.gutterY", self.lane.gutter_y.into())?;
        finite("lane.gutterZ", self.lane.gutter_z.into())?;

        positive("pins.radius", self.pins.radius)?;
        positive("pins.height", self.pins.height)?;
        positive("pins.mass", self.pins.mass)?;
        positive("pins.spacing", self.pins.spacing)?;
        finite("pins.startZ", self.pins.start_z.into())?;

        positive("ball.radius", self.ball.radius)?;
        positive("ball.mass", self.ball.mass)?;
        finite_vec("ball.start", &self.ball.start)?;

        non_negative("surface.friction", self.surface.friction)?;
        non_negative("surface.restitution", self.surface.restitution)?;

        finite("throw.aimStep", self.throw.aim_step.into())?;
        non_negative("throw.force", self.throw.force)?;
        finite("throw.evaluationDelayMs", self.throw.evaluation_delay_ms)?;
        if !(self.throw.evaluation_delay_ms >= 0.0) {
            return Err(format!(
                "throw.evaluationDelayMs must be >= 0, got {}",
                self.throw.evaluation_delay_ms
            ));
        }

        if self.scoring.good_threshold == 0 || self.scoring.good_threshold > 10 {
            return Err(format!(
                "scoring.goodThreshold must be in 1..=10, got {}",
                self.scoring.good_threshold
            ));
        }
        positive("scoring.maxTilt", self.scoring.max_tilt)?;
        finite("scoring.fallenHeight", self.scoring.fallen_height.into())?;

        let camera = &self.camera;
        finite("camera.fov", camera.fov.into())?;
        finite("camera.near", camera.near.into())?;
        finite("camera.far", camera.far.into())?;
        finite_vec("camera.start", &camera.start)?;
        finite_vec("camera.followTarget", &camera.follow_target)?;
        finite("camera.followDurationMs", camera.follow_duration_ms)?;
        finite("camera.followPitch", camera.follow_pitch.into())?;
        finite("camera.bounceHeight", camera.bounce_height.into())?;
        finite("camera.bounceLegMs", camera.bounce_leg_ms)?;

        finite("arrow.radius", self.arrow.radius.into())?;
        finite("arrow.pivotZ", self.arrow.pivot_z.into())?;
        finite("arrow.height", self.arrow.height.into())?;

        Ok(())
    }
}

fn finite(name: &str, v: f64) -> Result<(), String> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(format!("{} must be finite, got {}", name, v))
    }
}

fn finite_vec(name: &str, v: &[f32; 3]) -> Result<(), String> {
    for (i, c) in v.iter().enumerate() {
        finite(&format!("{}[{}]", name, i), (*c).into())?;
    }
    Ok(())
}

fn positive(name: &str, v: f32) -> Result<(), String> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(format!("{} must be > 0, got {}", name, v))
    }
}

fn non_negative(name: &str, v: f32) -> Result<(), String> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(format!("{} must be >= 0, got {}", name, v))
    }
}
