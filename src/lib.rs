//! 2D platformer locomotion: a fixed-step character controller with probes,
//! charge-based jumping and dashing, plus the Bevy plugins that drive it.

pub mod content;
pub mod movement;
pub mod sprites;
