//! Movement domain: gravity, horizontal acceleration and contact stops.

use bevy::math::bounding::Aabb2d;

use super::config::ActorConfig;
use super::probe::{CollisionWorld, ProbeSide, probe_ceiling, probe_wall};

/// Vertical integration. Grounded actors never keep downward speed.
pub fn apply_gravity(config: &ActorConfig, grounded: bool, vertical: f32, dt: f32) -> f32 {
    if grounded {
        return vertical.max(0.0);
    }

    let vertical = vertical - config.effective_gravity() * dt;
    if config.clamp_fall_speed && vertical < -config.max_fall_speed {
        -config.max_fall_speed
    } else {
        vertical
    }
}

/// Horizontal integration toward the input direction. Only the sign of the
/// input matters; a half-tilted stick accelerates as hard as a full one.
pub fn apply_horizontal(config: &ActorConfig, horizontal: f32, input: f32, dt: f32) -> f32 {
    if input == 0.0 {
        let decel = config.deceleration() * dt;
        return if horizontal > 0.0 {
            (horizontal - decel).max(0.0)
        } else if horizontal < 0.0 {
            (horizontal + decel).min(0.0)
        } else {
            horizontal
        };
    }

    let limit = config.horizontal_velocity_limit;
    (horizontal + config.acceleration() * input.signum() * dt).clamp(-limit, limit)
}

/// Wall stop: a grounded actor pushing into a wall loses its horizontal speed.
pub fn stop_at_wall(
    world: &impl CollisionWorld,
    bounds: &Aabb2d,
    config: &ActorConfig,
    grounded: bool,
    horizontal: f32,
    input: f32,
) -> f32 {
    if !grounded {
        return horizontal;
    }

    let side = if input < 0.0 && horizontal < 0.0 {
        ProbeSide::Left
    } else if input > 0.0 && horizontal > 0.0 {
        ProbeSide::Right
    } else {
        return horizontal;
    };

    if probe_wall(world, bounds, &config.wall, side).hit {
        0.0
    } else {
        horizontal
    }
}

/// Ceiling stop: upward speed dies on an unfiltered ceiling hit.
pub fn stop_at_ceiling(
    world: &impl CollisionWorld,
    bounds: &Aabb2d,
    config: &ActorConfig,
    vertical: f32,
) -> f32 {
    let hit = probe_ceiling(world, bounds, &config.ceiling, &config.ceiling_ignore_tags);
    if hit.hit && vertical > 0.0 { 0.0 } else { vertical }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.02;

    #[test]
    fn test_gravity_accumulates_and_clamps() {
        let config = ActorConfig::default();
        let v = apply_gravity(&config, false, 0.0, DT);
        assert!((v + 98.0 * DT).abs() < 1e-4);

        let v = apply_gravity(&config, false, -19.9, DT);
        assert_eq!(v, -config.max_fall_speed);
    }

    #[test]
    fn test_unclamped_fall_keeps_accelerating() {
        let config = ActorConfig {
            clamp_fall_speed: false,
            ..Default::default()
        };
        let v = apply_gravity(&config, false, -19.9, DT);
        assert!(v < -config.max_fall_speed);
    }

    #[test]
    fn test_grounded_drops_downward_speed_only() {
        let config = ActorConfig::default();
        assert_eq!(apply_gravity(&config, true, -4.0, DT), 0.0);
        assert_eq!(apply_gravity(&config, true, 3.0, DT), 3.0);
    }

    #[test]
    fn test_deceleration_never_crosses_zero() {
        let config = ActorConfig::default();
        assert_eq!(apply_horizontal(&config, 0.5, 0.0, DT), 0.0);
        assert_eq!(apply_horizontal(&config, -0.5, 0.0, DT), 0.0);
        assert_eq!(apply_horizontal(&config, 0.0, 0.0, DT), 0.0);

        let slowed = apply_horizontal(&config, 9.0, 0.0, DT);
        assert!(slowed > 0.0 && slowed < 9.0);
    }

    #[test]
    fn test_acceleration_clamps_to_limit() {
        let config = ActorConfig::default();
        let mut v = 0.0;
        for _ in 0..100 {
            v = apply_horizontal(&config, v, 1.0, DT);
        }
        assert_eq!(v, config.horizontal_velocity_limit);

        for _ in 0..100 {
            v = apply_horizontal(&config, v, -1.0, DT);
        }
        assert_eq!(v, -config.horizontal_velocity_limit);
    }

    #[test]
    fn test_analog_input_accelerates_by_sign() {
        let config = ActorConfig::default();
        let full = apply_horizontal(&config, 0.0, 1.0, DT);
        assert_eq!(apply_horizontal(&config, 0.0, 0.5, DT), full);
        assert_eq!(apply_horizontal(&config, 0.0, -0.25, DT), -full);
        assert!((full - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_full_rate_reaches_limit_in_one_tick() {
        let config = ActorConfig {
            horizontal_acceleration_rate: 1.0,
            ..Default::default()
        };
        assert_eq!(apply_horizontal(&config, 0.0, 0.3, DT), 10.0);
    }
}
