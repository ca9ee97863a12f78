use crate::core::math::{quat_about_x, Pose, Vec3};
use crate::domain::config::CameraConfig;

use super::tween::{Channel, Easing, Tween};

/// Perspective camera driven by tweens. Purely cosmetic: nothing here
/// reads or writes physics.
pub struct CameraRig {
    position: Vec3,
    pitch: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    tweens: Vec<Tween>,
}

impl CameraRig {
    pub fn new(config: &CameraConfig) -> Self {
        let [x, y, z] = config.start;
        Self {
            position: Vec3::new(x, y, z),
            pitch: 0.0,
            fov: config.fov,
            near: config.near,
            far: config.far,
            tweens: Vec::new(),
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.position, quat_about_x(self.pitch))
    }

    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }

    fn value(&self, channel: Channel) -> f32 {
        match channel {
            Channel::PosX => self.position.x,
            Channel::PosY => self.position.y,
            Channel::PosZ => self.position.z,
            Channel::RotX => self.pitch,
        }
    }

    fn set_value(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::PosX => self.position.x = value,
            Channel::PosY => self.position.y = value,
            Channel::PosZ => self.position.z = value,
            Channel::RotX => self.pitch = value,
        }
    }

    /// Start a tween; it replaces any running tween on the same channel
    pub fn add(&mut self, tween: Tween) {
        self.tweens.retain(|t| t.channel != tween.channel);
        self.tweens.push(tween);
    }

    /// Fly towards the pins after the throw
    pub fn start_follow(&mut self, now_ms: f64, config: &CameraConfig) {
        let [tx, ty, tz] = config.follow_target;
        let duration = config.follow_duration_ms;
        for (channel, to) in [(Channel::PosX, tx), (Channel::PosY, ty), (Channel::PosZ, tz)] {
            let tween = Tween::new(channel, self.value(channel), to, now_ms, duration)
                .easing(Easing::CubicOut);
            self.add(tween);
        }
        self.add(Tween::new(Channel::RotX, self.pitch, config.follow_pitch, now_ms, duration));
    }

    /// Strike celebration: hop up and down
    pub fn start_bounce(&mut self, now_ms: f64, config: &CameraConfig) {
        let y = self.position.y;
        let tween = Tween::new(Channel::PosY, y, y + config.bounce_height, now_ms, config.bounce_leg_ms)
            .yoyo(true)
            .repeat(config.bounce_repeats);
        self.add(tween);
    }

    /// Apply every running tween at `now_ms` and drop finished ones
    pub fn update(&mut self, now_ms: f64) {
        let mut i = 0;
        while i < self.tweens.len() {
            let tween = self.tweens[i];
            let (value, done) = tween.sample(now_ms);
            self.set_value(tween.channel, value);
            if done {
                self.tweens.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }
}
