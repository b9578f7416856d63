//! Movement domain: fixed-step platformer locomotion.
//!
//! The pipeline itself (`controller`, `probe`, `integrator`, `jump`, `dash`,
//! `classify`, `mover`) is engine-agnostic and works through the
//! [`CollisionWorld`] and [`ActorBody`] traits. The rest of the module wires
//! it into Bevy and avian2d.

pub mod classify;
pub mod components;
pub mod config;
pub mod controller;
pub mod dash;
pub mod events;
pub mod input;
pub mod integrator;
pub mod jump;
pub mod mover;
pub mod observers;
pub mod probe;
pub mod state;

mod bootstrap;
#[cfg(feature = "dev-tools")]
mod dev;
mod systems;

#[cfg(test)]
mod test_world;

use bevy::prelude::*;

pub use bootstrap::spawn_player;
pub use components::*;
pub use config::{ActorConfig, GRAVITY_SCALE, LayerFilter, ProbeSettings, StuckProtection};
pub use controller::{PlatformerController, TickReport};
pub use events::{FacingChanged, GroundedChanged, LocomotionStateChanged};
pub use input::{InputBuffer, InputSample};
pub use mover::ActorBody;
pub use observers::{Notification, Observers, SubscriptionId};
pub use probe::{CollisionResult, CollisionWorld, SurfaceHit};
pub use state::{ActorState, Facing, LocomotionState};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<LocomotionStateChanged>()
            .add_message::<FacingChanged>()
            .add_message::<GroundedChanged>()
            .add_systems(Startup, spawn_player)
            .add_systems(Update, systems::read_input)
            .add_systems(FixedUpdate, systems::run_controllers);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room)
            .add_systems(Update, dev::draw_probe_rays);
    }
}
