//! Movement domain: fixed-step controller driver.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

use super::collisions::LevelGeometry;
use crate::movement::{
    ActorBody, ActorExtents, FacingChanged, GroundedChanged, InputBuffer, LocomotionStateChanged,
    Notification, PlatformerController, Player,
};

/// ECS view of one actor. Moves are handed to the physics solver as a
/// velocity that reaches the target within one fixed step, so contacts are
/// still resolved by avian2d.
struct EcsBody<'a> {
    center: Vec2,
    half_size: Vec2,
    velocity: &'a mut LinearVelocity,
    sprite: Option<Mut<'a, Sprite>>,
    dt: f32,
}

impl ActorBody for EcsBody<'_> {
    fn bounds(&self) -> Aabb2d {
        Aabb2d::new(self.center, self.half_size)
    }

    fn position(&self) -> Vec2 {
        self.center
    }

    fn move_position(&mut self, target: Vec2) {
        if self.dt > 0.0 {
            self.velocity.0 = (target - self.center) / self.dt;
        }
    }

    fn set_mirrored(&mut self, mirrored: bool) {
        if let Some(sprite) = self.sprite.as_mut() {
            sprite.flip_x = mirrored;
        }
    }
}

pub(crate) fn run_controllers(
    time: Res<Time>,
    level: LevelGeometry,
    mut query: Query<
        (
            Entity,
            &mut PlatformerController,
            &mut InputBuffer,
            &Transform,
            &ActorExtents,
            &mut LinearVelocity,
            Option<&mut Sprite>,
        ),
        With<Player>,
    >,
    mut state_events: MessageWriter<LocomotionStateChanged>,
    mut facing_events: MessageWriter<FacingChanged>,
    mut grounded_events: MessageWriter<GroundedChanged>,
) {
    let now = time.elapsed_secs();
    let dt = time.delta_secs();

    for (entity, mut controller, mut input, transform, extents, mut velocity, sprite) in &mut query
    {
        controller.submit_sample(input.take());

        let mut body = EcsBody {
            center: transform.translation.truncate(),
            half_size: extents.0,
            velocity: &mut *velocity,
            sprite,
            dt,
        };
        let report = controller.tick(&level, &mut body, now, dt);

        for notification in report.notifications {
            match notification {
                Notification::StateChanged(state) => {
                    state_events.write(LocomotionStateChanged { entity, state });
                }
                Notification::DirectionChanged(facing) => {
                    facing_events.write(FacingChanged { entity, facing });
                }
                Notification::GroundedChanged(grounded) => {
                    grounded_events.write(GroundedChanged { entity, grounded });
                }
            }
        }
    }
}
