use crate::core::math::{Quat, Vec3};
use crate::domain::assets::AssetReport;
use crate::domain::config::GameConfig;
use crate::domain::feedback::PIN_COUNT;
use crate::domain::objects::{Activation, BodyDesc, ObjectKind, Shape};
use crate::systems::physics::{BodyHandle, PhysicsBackend};
use crate::systems::registry::{BodyRegistry, ObjectId, Representation, VisualObject};

/// Pins per row, head pin first
pub const PIN_ROWS: [usize; 4] = [1, 2, 3, 4];

/// References other systems need after the build
#[derive(Clone, Debug, PartialEq)]
pub struct LevelLayout {
    pub floor: ObjectId,
    pub gutters: [ObjectId; 2],
    pub pins: Vec<ObjectId>,
    pub ball: ObjectId,
    pub ball_body: BodyHandle,
    pub pin_model: bool,
    pub ball_model: bool,
}

/// Triangle of pin centers: row `i` has `i + 1` pins centered on x = 0,
/// each row one `spacing` further down the lane.
pub fn pin_positions(config: &GameConfig) -> Vec<Vec3> {
    let pins = &config.pins;
    let y = pins.height / 2.0;
    let mut out = Vec::with_capacity(PIN_COUNT as usize);
    for (i, &count) in PIN_ROWS.iter().enumerate() {
        let row = i as f32;
        for j in 0..count {
            let x = j as f32 * pins.spacing - row * pins.spacing / 2.0;
            let z = pins.start_z - row * pins.spacing;
            out.push(Vec3::new(x, y, z));
        }
    }
    out
}

pub fn pin_body_desc(config: &GameConfig, position: Vec3) -> BodyDesc {
    let shape = Shape::Cylinder {
        radius: config.pins.radius,
        half_height: config.pins.height / 2.0,
    };
    BodyDesc::new(shape, config.pins.mass, position, Quat::identity())
        .with_surface(config.surface.friction, config.surface.restitution)
}

pub fn ball_body_desc(config: &GameConfig) -> BodyDesc {
    let [x, y, z] = config.ball.start;
    BodyDesc::new(
        Shape::Sphere { radius: config.ball.radius },
        config.ball.mass,
        Vec3::new(x, y, z),
        Quat::identity(),
    )
    .with_surface(config.surface.friction, config.surface.restitution)
    .with_activation(Activation::AlwaysActive)
    .with_ccd(true)
}

fn box_desc(config: &GameConfig, size: [f32; 3], position: Vec3) -> BodyDesc {
    let half = Vec3::new(size[0] / 2.0, size[1] / 2.0, size[2] / 2.0);
    BodyDesc::new(Shape::Box { half_extents: half }, 0.0, position, Quat::identity())
        .with_surface(config.surface.friction, config.surface.restitution)
}

fn pin_visual(config: &GameConfig, assets: &AssetReport) -> VisualObject {
    match assets.pin {
        Some(model) => VisualObject::new(
            Representation::Model { scale: model.scale_to_height(config.pins.height) },
            model.base_color,
        ),
        None => VisualObject::new(
            Representation::Cylinder {
                radius: config.pins.radius,
                height: config.pins.height,
            },
            config.pins.color,
        ),
    }
}

fn ball_visual(config: &GameConfig, assets: &AssetReport) -> VisualObject {
    match assets.ball {
        Some(model) => VisualObject::new(
            Representation::Model { scale: model.scale_to_extent(config.ball.radius * 2.0) },
            model.base_color,
        ),
        None => VisualObject::new(
            Representation::Sphere { radius: config.ball.radius },
            config.ball.color,
        ),
    }
}

/// Build the lane, gutters, pins and ball into an empty registry.
pub fn build_level<P: PhysicsBackend>(
    registry: &mut BodyRegistry,
    physics: &mut P,
    config: &GameConfig,
    assets: &AssetReport,
) -> LevelLayout {
    let lane = &config.lane;

    let [fx, fy, fz] = lane.floor_position;
    let (floor, _) = registry.create_body(
        physics,
        ObjectKind::Floor,
        VisualObject::new(Representation::Box { size: lane.floor_size }, lane.floor_color),
        &box_desc(config, lane.floor_size, Vec3::new(fx, fy, fz)),
    );

    let gutters = [-lane.gutter_offset_x, lane.gutter_offset_x].map(|x| {
        registry.create_body(
            physics,
            ObjectKind::Gutter,
            VisualObject::new(Representation::Box { size: lane.gutter_size }, lane.gutter_color),
            &box_desc(config, lane.gutter_size, Vec3::new(x, lane.gutter_y, lane.gutter_z)),
        )
        .0
    });

    if assets.pin.is_none() {
        engine_warn!("pin model unavailable, using cylinder fallback");
    }
    let pins = pin_positions(config)
        .into_iter()
        .map(|pos| {
            registry.create_body(
                physics,
                ObjectKind::Pin,
                pin_visual(config, assets),
                &pin_body_desc(config, pos),
            )
            .0
        })
        .collect::<Vec<_>>();

    if assets.ball.is_none() {
        engine_warn!("ball model unavailable, using sphere fallback");
    }
    let ball_desc = ball_body_desc(config);
    let (ball, ball_body) =
        registry.create_body(physics, ObjectKind::Ball, ball_visual(config, assets), &ball_desc);

    engine_log!(
        "level built: {} static, {} dynamic ({} pins)",
        registry.static_count(),
        registry.dynamic_count(),
        pins.len()
    );

    LevelLayout {
        floor,
        gutters,
        pins,
        ball,
        ball_body,
        pin_model: assets.pin.is_some(),
        ball_model: assets.ball.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assets::ModelAsset;
    use crate::systems::physics::ScriptedWorld;

    fn build(assets: &AssetReport) -> (BodyRegistry, ScriptedWorld, LevelLayout) {
        let config = GameConfig::default();
        let mut physics = ScriptedWorld::new(&config.physics);
        let mut registry = BodyRegistry::new();
        let layout = build_level(&mut registry, &mut physics, &config, assets);
        (registry, physics, layout)
    }

    #[test]
    fn pin_triangle_matches_rows_and_spacing() {
        let positions = pin_positions(&GameConfig::default());
        assert_eq!(positions.len(), 10);

        // Head pin
        assert_eq!(positions[0], Vec3::new(0.0, 0.75, -25.0));
        // Second row centered on x = 0
        assert!((positions[1].x + 0.4).abs() < 1e-6);
        assert!((positions[2].x - 0.4).abs() < 1e-6);
        assert!((positions[1].z + 25.8).abs() < 1e-5);
        // Back row spans -1.2..1.2
        assert!((positions[6].x + 1.2).abs() < 1e-5);
        assert!((positions[9].x - 1.2).abs() < 1e-5);
        assert!((positions[9].z + 27.4).abs() < 1e-5);
    }

    #[test]
    fn level_has_one_ball_ten_pins_three_static_boxes() {
        let (registry, physics, layout) = build(&AssetReport::primitives_only());
        assert_eq!(registry.count_kind(ObjectKind::Ball), 1);
        assert_eq!(registry.count_kind(ObjectKind::Pin), 10);
        assert_eq!(registry.count_kind(ObjectKind::Floor), 1);
        assert_eq!(registry.count_kind(ObjectKind::Gutter), 2);
        assert_eq!(registry.static_count(), 3);
        assert_eq!(registry.dynamic_count(), 11);
        assert_eq!(layout.pins.len(), 10);
        assert_eq!(physics.body_count(), 14);
    }

    #[test]
    fn ball_starts_always_active() {
        let (registry, physics, layout) = build(&AssetReport::primitives_only());
        assert_eq!(physics.activation(layout.ball_body), Some(Activation::AlwaysActive));
        assert_eq!(registry.get(layout.ball).unwrap().body, layout.ball_body);
    }

    #[test]
    fn fallback_visuals_use_primitives_and_config_colors() {
        let (registry, _, layout) = build(&AssetReport::primitives_only());
        let pin = registry.get(layout.pins[0]).unwrap();
        assert_eq!(pin.visual.representation, Representation::Cylinder { radius: 0.3, height: 1.5 });
        assert_eq!(pin.visual.color.original(), 0xffffff);
        let ball = registry.get(layout.ball).unwrap();
        assert_eq!(ball.visual.representation, Representation::Sphere { radius: 0.8 });
        assert!(!layout.pin_model && !layout.ball_model);
    }

    #[test]
    fn model_visuals_do_not_change_physics() {
        let assets = AssetReport {
            pin: Some(ModelAsset { size: [0.6, 3.0, 0.6], base_color: 0xeeeeee }),
            ball: Some(ModelAsset { size: [3.2, 3.2, 3.2], base_color: 0x112233 }),
        };
        let (with_models, models_physics, model_layout) = build(&assets);
        let (fallback, fallback_physics, fallback_layout) = build(&AssetReport::primitives_only());

        for (a, b) in model_layout.pins.iter().zip(fallback_layout.pins.iter()) {
            let ha = with_models.get(*a).unwrap().body;
            let hb = fallback.get(*b).unwrap().body;
            assert_eq!(models_physics.desc(ha), fallback_physics.desc(hb));
        }
        assert_eq!(
            models_physics.desc(model_layout.ball_body),
            fallback_physics.desc(fallback_layout.ball_body)
        );

        let pin = with_models.get(model_layout.pins[0]).unwrap();
        assert_eq!(pin.visual.representation, Representation::Model { scale: 0.5 });
        assert_eq!(pin.visual.color.original(), 0xeeeeee);
        assert!(model_layout.pin_model && model_layout.ball_model);
    }

    #[test]
    fn ball_body_desc_matches_contract() {
        let desc = ball_body_desc(&GameConfig::default());
        assert_eq!(desc.mass, 15.0);
        assert_eq!(desc.shape, Shape::Sphere { radius: 0.8 });
        assert_eq!(desc.position, Vec3::new(0.0, 2.0, 14.0));
        assert_eq!(desc.friction, 0.5);
        assert_eq!(desc.restitution, 0.6);
    }
}
