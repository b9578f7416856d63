//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{InputBuffer, InputSample, Player};

/// Sample the keyboard every frame and fold it into each player's buffer.
/// Several frames may land between two fixed ticks, so edges are OR'd in.
pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut InputBuffer, With<Player>>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis (dash aiming)
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    let sample = InputSample::new(
        x,
        y,
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK),
        keyboard.just_released(KeyCode::Space) || keyboard.just_released(KeyCode::KeyK),
        keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::KeyJ),
    );

    for mut buffer in &mut query {
        buffer.push(sample);
    }
}
