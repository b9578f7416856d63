//! Movement domain: charge-based jumping with coyote time, buffering and
//! variable height.

use super::config::ActorConfig;
use super::input::InputSample;
use super::state::{ActorState, TickScratch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// Standing on the ground.
    Ground,
    /// Fired on landing from an earlier press.
    Buffered,
    /// First jump shortly after walking off a ledge.
    Coyote,
    /// Any other mid-air jump.
    Air,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    Idle,
    Disabled,
    /// Held back by a stuck correction or a running dash.
    Suppressed,
    Jumped(JumpKind),
    /// A release cut the ascent short.
    Cut,
}

/// Refill jump charges. Zero refills completely, anything else adds that
/// many charges up to `jump_count`.
pub fn replenish(jumps_remaining: &mut u32, jump_count: u32, amount: u32) {
    if amount == 0 {
        *jumps_remaining = jump_count;
        return;
    }
    *jumps_remaining = jumps_remaining.saturating_add(amount).min(jump_count);
}

fn within_coyote(config: &ActorConfig, state: &ActorState, now: f32) -> bool {
    now - state.last_grounded_time <= config.coyote_time
}

pub fn can_jump(config: &ActorConfig, state: &ActorState, now: f32) -> bool {
    let full = state.jumps_remaining == config.jump_count;
    let coyote = within_coyote(config, state, now);

    let from_ground = state.grounded && coyote && full;
    let from_air = !state.grounded
        && (config.allow_first_jump_while_falling
            || (coyote && full)
            || state.jumps_remaining < config.jump_count);

    state.jumps_remaining > 0 && (from_ground || from_air)
}

/// A recent press that has not driven a jump yet and was not released since.
pub fn has_buffered_press(config: &ActorConfig, state: &ActorState, now: f32) -> bool {
    state.grounded
        && now - state.last_jump_press_time < config.max_jump_buffer_time
        && state.last_jump_release_time < state.last_jump_press_time
        && state.last_jump_press_time > state.last_jump_time
}

fn classify(config: &ActorConfig, state: &ActorState, fresh_press: bool) -> JumpKind {
    if state.grounded {
        if fresh_press {
            JumpKind::Ground
        } else {
            JumpKind::Buffered
        }
    } else if state.jumps_remaining == config.jump_count {
        JumpKind::Coyote
    } else {
        JumpKind::Air
    }
}

/// Run the jump stage. Edges this stage acts on are cleared from `input`;
/// the rest stay pending for the next tick.
pub fn update_jump(
    config: &ActorConfig,
    state: &mut ActorState,
    input: &mut InputSample,
    scratch: &mut TickScratch,
) -> JumpOutcome {
    if !config.enable_jumping {
        input.jump_pressed = false;
        input.jump_released = false;
        return JumpOutcome::Disabled;
    }

    let now = scratch.now;
    if input.jump_pressed {
        state.last_jump_press_time = now;
    }
    if input.jump_released {
        state.last_jump_release_time = now;
    }

    if scratch.is_unsticking() {
        return JumpOutcome::Suppressed;
    }
    // A release during the dash stays pending and cuts once the dash ends
    if state.is_dashing() {
        input.jump_pressed = false;
        return JumpOutcome::Suppressed;
    }

    if state.grounded {
        replenish(&mut state.jumps_remaining, config.jump_count, 0);
    }

    let eligible = can_jump(config, state, now);
    let buffered = has_buffered_press(config, state, now);

    if eligible && (input.jump_pressed || buffered) {
        let kind = classify(config, state, input.jump_pressed);
        state.velocity.y = config.jump_velocity();
        state.last_jump_time = now;
        state.jumps_remaining -= 1;
        input.jump_pressed = false;
        scratch.jumped = true;
        return JumpOutcome::Jumped(kind);
    }
    input.jump_pressed = false;

    if input.jump_released {
        input.jump_released = false;
        if config.enable_variable_jump_height
            && state.last_jump_release_time > state.last_jump_time
            && state.velocity.y > 0.0
        {
            state.velocity.y = 0.0;
            return JumpOutcome::Cut;
        }
    }

    JumpOutcome::Idle
}
