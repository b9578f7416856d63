//! Movement domain: change messages forwarded from controller ticks.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use super::state::{Facing, LocomotionState};

/// Message emitted when an actor's locomotion state changes
#[derive(Debug, Clone, Copy)]
pub struct LocomotionStateChanged {
    pub entity: Entity,
    pub state: LocomotionState,
}

impl Message for LocomotionStateChanged {}

#[derive(Debug, Clone, Copy)]
pub struct FacingChanged {
    pub entity: Entity,
    pub facing: Facing,
}

impl Message for FacingChanged {}

#[derive(Debug, Clone, Copy)]
pub struct GroundedChanged {
    pub entity: Entity,
    pub grounded: bool,
}

impl Message for GroundedChanged {}
