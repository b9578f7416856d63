//! Movement domain: debug-only test room and probe ray gizmos.

use avian2d::prelude::*;
use bevy::ecs::system::EntityCommands;
use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

use super::systems::collisions::LevelGeometry;
use crate::movement::probe::{ProbeSide, evenly_spaced_points, probe_side};
use crate::movement::{
    ActorExtents, GameLayer, Ground, PlatformerController, Player, ProbeSettings, SurfaceTags,
    Wall,
};

fn spawn_block<'a>(
    commands: &'a mut Commands,
    color: Color,
    size: Vec2,
    at: Vec2,
    layers: CollisionLayers,
) -> EntityCommands<'a> {
    commands.spawn((
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(at.x, at.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        layers,
    ))
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let canopy_color = Color::srgba(0.3, 0.6, 0.3, 0.5);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);
    let ceiling_layers = CollisionLayers::new(GameLayer::Ceiling, [GameLayer::Player]);
    // Probes see it, the solver does not
    let canopy_layers = CollisionLayers::new(GameLayer::Decoration, LayerMask::NONE);

    // Floor
    spawn_block(
        &mut commands,
        ground_color,
        Vec2::new(20.0, 1.0),
        Vec2::new(0.0, -5.0),
        ground_layers,
    )
    .insert(Ground);

    // Side walls
    for x in [-10.5, 10.5] {
        spawn_block(
            &mut commands,
            wall_color,
            Vec2::new(1.0, 12.0),
            Vec2::new(x, 0.5),
            wall_layers,
        )
        .insert(Wall);
    }

    // Platforms
    for at in [Vec2::new(-6.0, -1.5), Vec2::new(6.0, 0.5)] {
        spawn_block(
            &mut commands,
            platform_color,
            Vec2::new(4.0, 0.5),
            at,
            ground_layers,
        )
        .insert(Ground);
    }

    // Low overhang to bump into
    spawn_block(
        &mut commands,
        wall_color,
        Vec2::new(3.0, 0.5),
        Vec2::new(0.0, -0.5),
        ceiling_layers,
    );

    // Canopy the ceiling probe is told to ignore
    spawn_block(
        &mut commands,
        canopy_color,
        Vec2::new(3.0, 0.3),
        Vec2::new(-6.0, 1.5),
        canopy_layers,
    )
    .insert(SurfaceTags::new(["Canopy"]));
}

/// Rays that struck something are drawn red up to the contact point.
fn draw_fan(
    gizmos: &mut Gizmos,
    level: &LevelGeometry,
    bounds: &Aabb2d,
    side: ProbeSide,
    settings: &ProbeSettings,
) {
    let miss = Color::srgb(0.0, 1.0, 1.0);
    let hit = Color::srgb(1.0, 0.2, 0.2);
    let (start, end) = side.edge(bounds);
    let reach = side.direction() * settings.ray_distance;
    let origins = evenly_spaced_points(start, end, settings.rays());
    let results = probe_side(level, bounds, side, settings);

    for (origin, result) in origins.into_iter().zip(results) {
        if result.hit {
            gizmos.line_2d(origin, result.point, hit);
        } else {
            gizmos.line_2d(origin, origin + reach, miss);
        }
    }
}

/// Draw every probe ray of every player.
pub(crate) fn draw_probe_rays(
    mut gizmos: Gizmos,
    level: LevelGeometry,
    query: Query<(&Transform, &ActorExtents, &PlatformerController), With<Player>>,
) {
    for (transform, extents, controller) in &query {
        let bounds = Aabb2d::new(transform.translation.truncate(), extents.0);
        let config = controller.config();

        draw_fan(&mut gizmos, &level, &bounds, ProbeSide::Ground, &config.ground);
        draw_fan(&mut gizmos, &level, &bounds, ProbeSide::Ceiling, &config.ceiling);
        draw_fan(&mut gizmos, &level, &bounds, ProbeSide::Left, &config.wall);
        draw_fan(&mut gizmos, &level, &bounds, ProbeSide::Right, &config.wall);
    }
}
