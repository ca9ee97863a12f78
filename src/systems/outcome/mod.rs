//! Pin classification and scoring
//!
//! A pin is down when its center is below `fallen_height` or its local up
//! axis is tilted strictly more than `max_tilt` from world up. Both
//! comparisons are strict: a pin at exactly the threshold still stands.

use crate::core::math::Pose;
use crate::domain::config::ScoringConfig;
use crate::domain::feedback::FeedbackTier;
use crate::systems::physics::PhysicsBackend;
use crate::systems::registry::{BodyRegistry, ObjectId};

#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub score: u32,
    pub tier: FeedbackTier,
    /// Per pin, in level order
    pub fallen: Vec<bool>,
}

#[inline]
pub fn classify(height: f32, tilt: f32, scoring: &ScoringConfig) -> bool {
    height < scoring.fallen_height || tilt > scoring.max_tilt
}

#[inline]
pub fn is_fallen(pose: &Pose, scoring: &ScoringConfig) -> bool {
    classify(pose.translation.y, pose.tilt(), scoring)
}

/// Classify every pin, recolor it and derive score and tier.
///
/// Each pin's pose is read once. A pin without a physics pose is judged on
/// its last synced visual pose.
pub fn evaluate<P: PhysicsBackend>(
    registry: &mut BodyRegistry,
    physics: &P,
    pins: &[ObjectId],
    scoring: &ScoringConfig,
) -> Outcome {
    let mut fallen = Vec::with_capacity(pins.len());

    for &id in pins {
        let Some(entry) = registry.get_mut(id) else {
            continue;
        };
        let pose = match physics.body_pose(entry.body) {
            Some(pose) => pose,
            None => {
                engine_warn!("pin {} has no physics pose, using visual", id.raw());
                entry.visual.pose
            }
        };

        let down = is_fallen(&pose, scoring);
        if down {
            entry.visual.color.set(scoring.fallen_color);
        } else {
            entry.visual.color.restore();
        }
        fallen.push(down);
    }

    let score = fallen.iter().filter(|&&f| f).count() as u32;
    Outcome {
        score,
        tier: FeedbackTier::for_config(score, scoring),
        fallen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::{quat_about_x, quat_about_z, Vec3};
    use crate::domain::assets::AssetReport;
    use crate::domain::config::GameConfig;
    use crate::systems::level::{build_level, LevelLayout};
    use crate::systems::physics::ScriptedWorld;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn setup() -> (GameConfig, ScriptedWorld, BodyRegistry, LevelLayout) {
        let config = GameConfig::default();
        let mut physics = ScriptedWorld::new(&config.physics);
        let mut registry = BodyRegistry::new();
        let layout = build_level(&mut registry, &mut physics, &config, &AssetReport::primitives_only());
        (config, physics, registry, layout)
    }

    fn knock(physics: &mut ScriptedWorld, registry: &BodyRegistry, pin: ObjectId, pose: Pose) {
        let body = registry.get(pin).unwrap().body;
        physics.set_pose(body, pose);
    }

    #[test]
    fn thresholds_are_strict() {
        let scoring = ScoringConfig::default();
        assert!(classify(0.2 - 1e-4, 0.0, &scoring));
        assert!(!classify(0.2, 0.0, &scoring));
        assert!(!classify(0.75, FRAC_PI_4, &scoring));
        assert!(classify(0.75, FRAC_PI_4 + 1e-4, &scoring));
    }

    #[test]
    fn upright_pins_score_zero() {
        let (config, physics, mut registry, layout) = setup();
        let outcome = evaluate(&mut registry, &physics, &layout.pins, &config.scoring);
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.tier, FeedbackTier::Miss);
        assert_eq!(outcome.fallen, vec![false; 10]);
    }

    #[test]
    fn low_pins_are_a_strike() {
        let (config, mut physics, mut registry, layout) = setup();
        for &pin in &layout.pins {
            knock(&mut physics, &registry, pin, Pose::at(0.0, 0.1, -25.0));
        }
        let outcome = evaluate(&mut registry, &physics, &layout.pins, &config.scoring);
        assert_eq!(outcome.score, 10);
        assert_eq!(outcome.tier, FeedbackTier::Strike);
        for &pin in &layout.pins {
            assert_eq!(registry.get(pin).unwrap().visual.color.current(), 0xff0000);
        }
    }

    #[test]
    fn three_tipped_pins_are_good() {
        let (config, mut physics, mut registry, layout) = setup();
        for &pin in &layout.pins[..3] {
            knock(&mut physics, &registry, pin, Pose::new(Vec3::new(0.0, 0.75, -25.0), quat_about_z(FRAC_PI_2)));
        }
        let outcome = evaluate(&mut registry, &physics, &layout.pins, &config.scoring);
        assert_eq!(outcome.score, 3);
        assert_eq!(outcome.tier, FeedbackTier::Good);
        assert_eq!(registry.get(layout.pins[3]).unwrap().visual.color.current(), 0xffffff);
    }

    #[test]
    fn score_grows_by_one_per_extra_fallen_pin() {
        let (config, mut physics, mut registry, layout) = setup();
        let mut previous = evaluate(&mut registry, &physics, &layout.pins, &config.scoring).score;
        for &pin in &layout.pins {
            knock(&mut physics, &registry, pin, Pose::new(Vec3::new(0.0, 0.3, -25.0), quat_about_x(1.2)));
            let score = evaluate(&mut registry, &physics, &layout.pins, &config.scoring).score;
            assert_eq!(score, previous + 1);
            previous = score;
        }
    }

    #[test]
    fn re_evaluation_restores_standing_color() {
        let (config, mut physics, mut registry, layout) = setup();
        let pin = layout.pins[0];
        knock(&mut physics, &registry, pin, Pose::at(0.0, 0.1, -25.0));
        evaluate(&mut registry, &physics, &layout.pins, &config.scoring);
        knock(&mut physics, &registry, pin, Pose::at(0.0, 0.75, -25.0));
        evaluate(&mut registry, &physics, &layout.pins, &config.scoring);
        assert_eq!(registry.get(pin).unwrap().visual.color.current(), 0xffffff);
    }

    #[test]
    fn missing_pose_falls_back_to_visual() {
        let (config, mut physics, mut registry, layout) = setup();
        let pin = layout.pins[0];
        registry.get_mut(pin).unwrap().visual.pose = Pose::at(0.0, 0.05, -25.0);
        physics.clear_pose(registry.get(pin).unwrap().body);
        let outcome = evaluate(&mut registry, &physics, &layout.pins, &config.scoring);
        assert!(outcome.fallen[0]);
        assert_eq!(outcome.score, 1);
    }
}
