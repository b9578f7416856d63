//! Movement domain: timed dash that overrides regular motion.

use bevy::prelude::*;

use super::config::ActorConfig;
use super::input::InputSample;
use super::state::{ActorState, TickScratch};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashOutcome {
    Idle,
    Started(Vec2),
    Expired,
    /// The press arrived while a dash was still moving the actor.
    Ignored,
    /// Grounded press without `allow_dash_while_grounded`.
    Refused,
}

pub fn update_dash(
    config: &ActorConfig,
    state: &mut ActorState,
    input: &mut InputSample,
    scratch: &TickScratch,
) -> DashOutcome {
    if !config.enable_dashing {
        input.dash_pressed = false;
        return DashOutcome::Idle;
    }

    let mut outcome = DashOutcome::Idle;
    if state.last_dash_time + config.dash_duration <= scratch.now && state.is_dashing() {
        state.dash_velocity = Vec2::ZERO;
        outcome = DashOutcome::Expired;
    }

    if !input.dash_pressed {
        return outcome;
    }
    input.dash_pressed = false;

    if state.is_dashing() {
        return DashOutcome::Ignored;
    }
    if state.grounded && !config.allow_dash_while_grounded {
        return DashOutcome::Refused;
    }

    // A neutral stick still starts the dash timer, it just moves nowhere.
    let direction = input.axis().normalize_or_zero();
    state.dash_velocity = direction * config.dash_power;
    state.last_dash_time = scratch.now;
    DashOutcome::Started(state.dash_velocity)
}

/// Velocity the mover applies this tick. While dashing, the dash owns the
/// motion and the regular velocity contributes only when allowed.
pub fn compose_velocity(config: &ActorConfig, state: &mut ActorState) -> Vec2 {
    if !state.is_dashing() {
        return state.velocity;
    }

    if config.disable_gravity_while_dashing {
        state.velocity.y = 0.0;
    }

    let mut velocity = state.dash_velocity;
    if config.allow_movement_while_dash {
        velocity += state.velocity * config.dash_movement_modifier;
    }
    velocity
}
