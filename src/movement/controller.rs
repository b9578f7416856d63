//! Movement domain: the per-tick locomotion pipeline.
//!
//! Stage order is fixed: ground probe, gravity, dash, jump, ceiling probe,
//! horizontal movement with wall stops, state, facing, move. Each stage reads
//! what the earlier ones wrote in the same tick.

use bevy::prelude::*;

use super::classify::{classify_state, resolve_facing};
use super::config::ActorConfig;
use super::dash::{DashOutcome, compose_velocity, update_dash};
use super::input::InputSample;
use super::integrator::{apply_gravity, apply_horizontal, stop_at_ceiling, stop_at_wall};
use super::jump::{JumpOutcome, replenish, update_jump};
use super::mover::{ActorBody, apply_displacement, resolve_displacement};
use super::observers::{Notification, Observers};
use super::probe::{CollisionWorld, probe_ground};
use super::state::{ActorState, Facing, LocomotionState, TickScratch};
use crate::content::sanitize_config;

/// What happened during one tick, for callers that prefer polling over
/// registering observers.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub notifications: Vec<Notification>,
    pub jump: JumpOutcome,
    pub dash: DashOutcome,
    pub displacement: Vec2,
}

#[derive(Component, Debug)]
pub struct PlatformerController {
    config: ActorConfig,
    state: ActorState,
    pending: InputSample,
    resolved_velocity: Vec2,
    observers: Observers,
}

impl PlatformerController {
    /// Build a controller. Out-of-range tuning is clamped here, once; the
    /// tick never re-checks it.
    pub fn new(config: ActorConfig) -> Self {
        let (config, warnings) = sanitize_config(config);
        for warning in &warnings {
            warn!("Actor config: {}", warning);
        }

        Self {
            state: ActorState::new(config.jump_count),
            config,
            pending: InputSample::default(),
            resolved_velocity: Vec2::ZERO,
            observers: Observers::default(),
        }
    }

    pub fn config(&self) -> &ActorConfig {
        &self.config
    }

    pub fn actor_state(&self) -> &ActorState {
        &self.state
    }

    pub fn state(&self) -> LocomotionState {
        self.state.locomotion
    }

    pub fn direction(&self) -> Facing {
        self.state.facing
    }

    pub fn grounded(&self) -> bool {
        self.state.grounded
    }

    /// Velocity the mover applied on the last tick, dash included.
    pub fn velocity(&self) -> Vec2 {
        self.resolved_velocity
    }

    pub fn jumps_remaining(&self) -> u32 {
        self.state.jumps_remaining
    }

    pub fn observers_mut(&mut self) -> &mut Observers {
        &mut self.observers
    }

    /// Zero refills every charge.
    pub fn replenish_jump(&mut self, amount: u32) {
        replenish(&mut self.state.jumps_remaining, self.config.jump_count, amount);
    }

    pub fn submit_input(
        &mut self,
        horizontal: f32,
        vertical: f32,
        jump_pressed: bool,
        jump_released: bool,
        dash_pressed: bool,
    ) {
        self.submit_sample(InputSample::new(
            horizontal,
            vertical,
            jump_pressed,
            jump_released,
            dash_pressed,
        ));
    }

    pub fn submit_sample(&mut self, sample: InputSample) {
        self.pending.merge(sample);
    }

    fn emit(&mut self, report: &mut TickReport, notification: Notification) {
        self.observers.notify(notification);
        report.notifications.push(notification);
    }

    fn set_grounded(&mut self, report: &mut TickReport, grounded: bool) {
        if self.state.grounded == grounded {
            return;
        }
        self.state.grounded = grounded;
        debug!(
            "Grounded changed: grounded={}, jumps_remaining={}",
            grounded, self.state.jumps_remaining
        );
        self.emit(report, Notification::GroundedChanged(grounded));
    }

    /// Advance one fixed step. `now` is the fixed clock at this tick and `dt`
    /// the fixed step length.
    pub fn tick(
        &mut self,
        world: &impl CollisionWorld,
        body: &mut impl ActorBody,
        now: f32,
        dt: f32,
    ) -> TickReport {
        let mut report = TickReport {
            notifications: Vec::new(),
            jump: JumpOutcome::Idle,
            dash: DashOutcome::Idle,
            displacement: Vec2::ZERO,
        };
        let mut scratch = TickScratch::new(now, dt);
        let mut input = self.pending;
        let bounds = body.bounds();

        // Ground
        let ground = probe_ground(world, &bounds, &self.config.ground, self.state.velocity.y);
        if ground.hit {
            self.state.last_grounded_time = now;
            scratch.ground_distance = Some(ground.distance);
        }
        self.set_grounded(&mut report, ground.hit);

        let stuck = &self.config.stuck_protection;
        let sunk_limit = self.config.ground.ray_distance - stuck.threshold;
        if let Some(distance) = scratch.ground_distance
            && stuck.enabled
            && self.state.velocity.y == 0.0
            && distance < sunk_limit
        {
            scratch.unstuck = Vec2::new(0.0, stuck.velocity);
            debug!(
                "Stuck correction: ground distance {:.4}, nudging by {}",
                distance, stuck.velocity
            );
        }

        // Gravity
        self.state.velocity.y =
            apply_gravity(&self.config, self.state.grounded, self.state.velocity.y, scratch.dt);

        // Dash
        report.dash = update_dash(&self.config, &mut self.state, &mut input, &scratch);
        match report.dash {
            DashOutcome::Started(velocity) => debug!("Dash started: velocity={:?}", velocity),
            DashOutcome::Expired => debug!("Dash expired"),
            _ => {}
        }

        // Jump
        report.jump = update_jump(&self.config, &mut self.state, &mut input, &mut scratch);
        if let JumpOutcome::Jumped(kind) = report.jump {
            debug!(
                "Jump ({:?}): velocity={}, jumps_remaining={}",
                kind, self.state.velocity.y, self.state.jumps_remaining
            );
        }
        if scratch.jumped {
            self.set_grounded(&mut report, false);
        }

        // Ceiling
        self.state.velocity.y =
            stop_at_ceiling(world, &bounds, &self.config, self.state.velocity.y);

        // Horizontal
        let horizontal = apply_horizontal(
            &self.config,
            self.state.velocity.x,
            input.horizontal,
            scratch.dt,
        );
        self.state.velocity.x = stop_at_wall(
            world,
            &bounds,
            &self.config,
            self.state.grounded,
            horizontal,
            input.horizontal,
        );

        // State
        let locomotion =
            classify_state(self.state.dash_velocity, self.state.grounded, self.state.velocity);
        if locomotion != self.state.locomotion {
            self.state.locomotion = locomotion;
            self.emit(&mut report, Notification::StateChanged(locomotion));
        }

        // Facing
        let facing = resolve_facing(self.state.facing, input.horizontal);
        if facing != self.state.facing {
            self.state.facing = facing;
            if self.config.flip_on_direction_change {
                body.set_mirrored(facing == Facing::Left);
            }
            self.emit(&mut report, Notification::DirectionChanged(facing));
        }

        // Move
        self.resolved_velocity = if scratch.is_unsticking() {
            Vec2::ZERO
        } else {
            compose_velocity(&self.config, &mut self.state)
        };
        report.displacement = resolve_displacement(self.resolved_velocity, scratch.unstuck, scratch.dt);
        apply_displacement(body, report.displacement);

        self.pending = input;
        report
    }
}
