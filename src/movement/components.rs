//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::config::LayerFilter;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors and platforms
    Ground,
    /// Side walls
    Wall,
    /// Overhangs that only matter to the ceiling probe
    Ceiling,
    /// Player character
    Player,
    /// Scenery the player passes through but probes can still see
    Decoration,
}

impl GameLayer {
    /// Probe filter covering the given layers.
    pub fn filter(layers: &[GameLayer]) -> LayerFilter {
        LayerFilter(layers.iter().fold(0, |bits, layer| bits | layer.to_bits()))
    }
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Free-form labels on a surface, matched against the ceiling ignore list.
#[derive(Component, Debug, Clone, Default)]
pub struct SurfaceTags(pub Vec<String>);

impl SurfaceTags {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }
}

/// Half size of the actor's collision box, used to place probe rays.
#[derive(Component, Debug, Clone, Copy)]
pub struct ActorExtents(pub Vec2);
