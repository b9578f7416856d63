//! Movement domain: per-actor tuning loaded by the content layer.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Multiplier applied to the configured gravity before integration.
/// Jump velocity is derived from the same scaled value.
pub const GRAVITY_SCALE: f32 = 10.0;

/// Raw collision layer bitmask used by probe rays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect)]
#[serde(transparent)]
pub struct LayerFilter(pub u32);

impl LayerFilter {
    pub const ALL: Self = Self(u32::MAX);

    pub fn contains(self, layers: u32) -> bool {
        self.0 & layers != 0
    }
}

impl Default for LayerFilter {
    fn default() -> Self {
        Self::ALL
    }
}

/// Shape of one ray fan: which layers it sees, how many rays, how far.
///
/// `ray_count` is signed so hand-written files with nonsense values still
/// load; [`crate::content::sanitize_config`] floors it to 2.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct ProbeSettings {
    pub mask: LayerFilter,
    pub ray_count: i32,
    pub ray_distance: f32,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            mask: LayerFilter::ALL,
            ray_count: 3,
            ray_distance: 0.05,
        }
    }
}

impl ProbeSettings {
    pub fn rays(&self) -> usize {
        self.ray_count.max(2) as usize
    }
}

/// Corrective nudge applied when the feet sink too far into the ground.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct StuckProtection {
    pub enabled: bool,
    /// Penetration tolerance, measured from the end of the ground ray.
    pub threshold: f32,
    /// Upward offset applied for one tick instead of regular motion.
    pub velocity: f32,
}

impl Default for StuckProtection {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 0.045,
            velocity: 0.3,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct ActorConfig {
    // Horizontal
    pub horizontal_velocity_limit: f32,
    pub horizontal_acceleration_rate: f32,
    pub horizontal_deceleration_rate: f32,
    pub flip_on_direction_change: bool,

    // Gravity
    pub gravity: f32,
    pub clamp_fall_speed: bool,
    pub max_fall_speed: f32,

    // Jumping
    pub enable_jumping: bool,
    pub allow_first_jump_while_falling: bool,
    pub enable_variable_jump_height: bool,
    pub jump_height: f32,
    pub jump_count: u32,
    pub coyote_time: f32,
    pub max_jump_buffer_time: f32,

    // Dashing
    pub enable_dashing: bool,
    pub dash_power: f32,
    pub dash_duration: f32,
    pub allow_movement_while_dash: bool,
    pub dash_movement_modifier: f32,
    pub allow_dash_while_grounded: bool,
    pub disable_gravity_while_dashing: bool,

    // Probes
    pub ground: ProbeSettings,
    pub stuck_protection: StuckProtection,
    pub ceiling: ProbeSettings,
    /// Ceiling hits on surfaces carrying any of these tags are ignored.
    pub ceiling_ignore_tags: Vec<String>,
    pub wall: ProbeSettings,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            horizontal_velocity_limit: 10.0,
            horizontal_acceleration_rate: 0.9,
            horizontal_deceleration_rate: 0.9,
            flip_on_direction_change: true,
            gravity: 9.8,
            clamp_fall_speed: true,
            max_fall_speed: 20.0,
            enable_jumping: true,
            allow_first_jump_while_falling: false,
            enable_variable_jump_height: true,
            jump_height: 3.0,
            jump_count: 2,
            coyote_time: 0.1,
            max_jump_buffer_time: 0.2,
            enable_dashing: true,
            dash_power: 35.0,
            dash_duration: 0.075,
            allow_movement_while_dash: false,
            dash_movement_modifier: 0.4,
            allow_dash_while_grounded: false,
            disable_gravity_while_dashing: true,
            ground: ProbeSettings::default(),
            stuck_protection: StuckProtection::default(),
            ceiling: ProbeSettings::default(),
            ceiling_ignore_tags: Vec::new(),
            wall: ProbeSettings::default(),
        }
    }
}

impl ActorConfig {
    /// Gravity as actually integrated per second.
    pub fn effective_gravity(&self) -> f32 {
        self.gravity * GRAVITY_SCALE
    }

    /// Launch speed that reaches `jump_height` under effective gravity.
    /// Uses v = sqrt(2gh)
    pub fn jump_velocity(&self) -> f32 {
        (2.0 * self.jump_height * self.effective_gravity()).sqrt()
    }

    /// Apex of a single jump under effective gravity.
    /// Uses h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        let g = self.effective_gravity();
        if g == 0.0 {
            return 0.0;
        }
        let v = self.jump_velocity();
        v * v / (2.0 * g)
    }

    /// Height reachable by chaining every charge at its apex.
    pub fn max_reachable_height(&self) -> f32 {
        self.single_jump_height() * self.jump_count as f32
    }

    /// Distance covered by one dash on a straight line.
    pub fn dash_distance(&self) -> f32 {
        self.dash_power * self.dash_duration
    }

    /// Horizontal speed gained per second of full input. A rate of 1 gives
    /// an infinite value, which the velocity clamp turns into instant speed.
    pub fn acceleration(&self) -> f32 {
        rate_per_second(self.horizontal_velocity_limit, self.horizontal_acceleration_rate)
    }

    pub fn deceleration(&self) -> f32 {
        rate_per_second(self.horizontal_velocity_limit, self.horizontal_deceleration_rate)
    }
}

fn rate_per_second(limit: f32, rate: f32) -> f32 {
    // 0 / 0 would poison the velocity with NaN
    if limit == 0.0 {
        return 0.0;
    }
    limit / (1.0 - rate).abs()
}
