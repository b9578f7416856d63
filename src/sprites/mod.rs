//! Sprites module: presentation driven by movement messages.

pub mod animation;

use bevy::prelude::*;

pub use animation::*;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, apply_locomotion_clips);
    }
}
