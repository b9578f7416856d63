//! Range checks for actor tuning. Bad values are clamped, never rejected.

use crate::movement::{ActorConfig, ProbeSettings};

/// A value that was out of range and what it was replaced with.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigWarning {
    pub field: &'static str,
    pub found: f32,
    pub used: f32,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' was {} and has been clamped to {}",
            self.field, self.found, self.used
        )
    }
}

fn clamp_field(
    warnings: &mut Vec<ConfigWarning>,
    field: &'static str,
    value: &mut f32,
    min: f32,
    max: f32,
) {
    if *value >= min && *value <= max {
        return;
    }
    // NaN fails both comparisons and lands on the lower bound
    let clamped = if *value > max { max } else { min };
    warnings.push(ConfigWarning {
        field,
        found: *value,
        used: clamped,
    });
    *value = clamped;
}

fn sanitize_probe(
    warnings: &mut Vec<ConfigWarning>,
    count_field: &'static str,
    distance_field: &'static str,
    probe: &mut ProbeSettings,
) {
    if probe.ray_count < 2 {
        warnings.push(ConfigWarning {
            field: count_field,
            found: probe.ray_count as f32,
            used: 2.0,
        });
        probe.ray_count = 2;
    }
    clamp_field(warnings, distance_field, &mut probe.ray_distance, 0.0, f32::MAX);
}

/// Clamp every ranged field into its valid interval.
/// Returns the fixed config and one warning per value that changed.
pub fn sanitize_config(mut config: ActorConfig) -> (ActorConfig, Vec<ConfigWarning>) {
    let mut warnings = Vec::new();
    let w = &mut warnings;

    clamp_field(
        w,
        "horizontal_acceleration_rate",
        &mut config.horizontal_acceleration_rate,
        0.0,
        1.0,
    );
    clamp_field(
        w,
        "horizontal_deceleration_rate",
        &mut config.horizontal_deceleration_rate,
        0.0,
        1.0,
    );

    let non_negative: [(&'static str, &mut f32); 9] = [
        (
            "horizontal_velocity_limit",
            &mut config.horizontal_velocity_limit,
        ),
        ("gravity", &mut config.gravity),
        ("max_fall_speed", &mut config.max_fall_speed),
        ("jump_height", &mut config.jump_height),
        ("coyote_time", &mut config.coyote_time),
        ("max_jump_buffer_time", &mut config.max_jump_buffer_time),
        ("dash_power", &mut config.dash_power),
        ("dash_duration", &mut config.dash_duration),
        (
            "stuck_protection.threshold",
            &mut config.stuck_protection.threshold,
        ),
    ];
    for (field, value) in non_negative {
        clamp_field(w, field, value, 0.0, f32::MAX);
    }

    sanitize_probe(w, "ground.ray_count", "ground.ray_distance", &mut config.ground);
    sanitize_probe(w, "ceiling.ray_count", "ceiling.ray_distance", &mut config.ceiling);
    sanitize_probe(w, "wall.ray_count", "wall.ray_distance", &mut config.wall);

    (config, warnings)
}
