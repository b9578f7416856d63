use avian2d::prelude::*;
use bevy::prelude::*;

use platformer_locomotion::{content, movement, sprites};

/// World units are meters; this many pixels per meter on screen.
const PIXELS_PER_METER: f32 = 40.0;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Platformer Locomotion".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            content::ContentPlugin,
            movement::MovementPlugin,
            sprites::SpritesPlugin,
        ))
        .add_systems(Startup, spawn_camera)
        .run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_scale(Vec3::splat(1.0 / PIXELS_PER_METER)),
    ));
}
