//! Movement domain: durable actor state and per-tick scratch values.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum LocomotionState {
    #[default]
    Idle,
    Running,
    AirRaising,
    AirFalling,
    Dashing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// State that survives between ticks for the actor's whole lifetime.
///
/// Timestamps are seconds on the fixed clock. "Never happened" is
/// `f32::NEG_INFINITY` so every window comparison against it fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorState {
    /// Integrated velocity, not including any dash override.
    pub velocity: Vec2,
    pub grounded: bool,
    pub facing: Facing,
    pub locomotion: LocomotionState,
    pub jumps_remaining: u32,
    /// Zero whenever no dash is running.
    pub dash_velocity: Vec2,
    pub last_grounded_time: f32,
    pub last_jump_time: f32,
    pub last_jump_press_time: f32,
    pub last_jump_release_time: f32,
    pub last_dash_time: f32,
}

impl ActorState {
    pub fn new(jump_count: u32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            grounded: false,
            facing: Facing::Right,
            locomotion: LocomotionState::Idle,
            jumps_remaining: jump_count,
            dash_velocity: Vec2::ZERO,
            last_grounded_time: f32::NEG_INFINITY,
            last_jump_time: f32::NEG_INFINITY,
            last_jump_press_time: f32::NEG_INFINITY,
            last_jump_release_time: f32::NEG_INFINITY,
            last_dash_time: f32::NEG_INFINITY,
        }
    }

    pub fn is_dashing(&self) -> bool {
        self.dash_velocity != Vec2::ZERO
    }
}

/// Values that only live for the duration of one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickScratch {
    pub now: f32,
    pub dt: f32,
    /// Distance from the feet to the ground hit, if any ray landed.
    pub ground_distance: Option<f32>,
    /// Stuck-protection offset; non-zero replaces regular motion.
    pub unstuck: Vec2,
    /// Set when a jump fired this tick.
    pub jumped: bool,
}

impl TickScratch {
    pub fn new(now: f32, dt: f32) -> Self {
        Self {
            now,
            dt,
            ..Default::default()
        }
    }

    pub fn is_unsticking(&self) -> bool {
        self.unstuck != Vec2::ZERO
    }
}
