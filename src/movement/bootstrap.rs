//! Movement domain: player bootstrap from the loaded actor config.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    ActorConfig, ActorExtents, GameLayer, InputBuffer, PlatformerController, Player,
};
use crate::sprites::LocomotionAnimator;

const PLAYER_SIZE: Vec2 = Vec2::new(0.75, 1.5);

/// Spawn the player with a controller built from the `ActorConfig` resource.
pub fn spawn_player(mut commands: Commands, config: Res<ActorConfig>) {
    let controller = PlatformerController::new(config.clone());
    let tuning = controller.config();

    info!(
        "Spawning player: jump_velocity={:.2}, jump_height={:.2}, max_reach={:.2}, jumps={}, dash_distance={:.2}",
        tuning.jump_velocity(),
        tuning.single_jump_height(),
        tuning.max_reachable_height(),
        tuning.jump_count,
        tuning.dash_distance()
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            controller,
            InputBuffer::default(),
            ActorExtents(PLAYER_SIZE * 0.5),
            LocomotionAnimator::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(-3.0, -2.0, 1.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // The controller integrates its own gravity
            Friction::new(0.0),
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Ceiling],
            ),
        ),
    ));
}
