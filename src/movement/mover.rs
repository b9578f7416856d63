//! Movement domain: the only stage allowed to move the actor.

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

/// The actor as seen by the controller: its collision box, a way to move it,
/// and a way to mirror its visual.
pub trait ActorBody {
    fn bounds(&self) -> Aabb2d;
    fn position(&self) -> Vec2;
    fn move_position(&mut self, target: Vec2);
    /// `true` when the visual should face left.
    fn set_mirrored(&mut self, mirrored: bool);
}

/// Displacement for this tick. A stuck correction replaces regular motion
/// instead of adding to it.
pub fn resolve_displacement(velocity: Vec2, unstuck: Vec2, dt: f32) -> Vec2 {
    if unstuck != Vec2::ZERO {
        unstuck
    } else {
        velocity * dt
    }
}

pub fn apply_displacement(body: &mut impl ActorBody, displacement: Vec2) {
    let target = body.position() + displacement;
    body.move_position(target);
}
