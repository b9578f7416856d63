//! Movement domain: ray fans cast from the actor's bounding box edges.
//!
//! Every probe samples evenly spaced origins along one edge and casts them in
//! order from the edge start to the edge end. The first ray that reports a
//! hit decides the result, even when a later ray would have been closer.

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

use super::config::{LayerFilter, ProbeSettings};

/// A surface struck by a ray.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceHit {
    pub point: Vec2,
    pub tags: Vec<String>,
}

impl SurfaceHit {
    pub fn has_any_tag(&self, tags: &[String]) -> bool {
        self.tags.iter().any(|tag| tags.contains(tag))
    }
}

/// Read-only view of the static level geometry.
pub trait CollisionWorld {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        filter: LayerFilter,
    ) -> Option<SurfaceHit>;
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CollisionResult {
    pub hit: bool,
    pub point: Vec2,
    pub distance: f32,
}

impl CollisionResult {
    pub const MISS: Self = Self {
        hit: false,
        point: Vec2::ZERO,
        distance: 0.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeSide {
    Ground,
    Ceiling,
    Left,
    Right,
}

impl ProbeSide {
    pub fn direction(self) -> Dir2 {
        match self {
            ProbeSide::Ground => Dir2::NEG_Y,
            ProbeSide::Ceiling => Dir2::Y,
            ProbeSide::Left => Dir2::NEG_X,
            ProbeSide::Right => Dir2::X,
        }
    }

    /// Edge of `bounds` the rays start from, as (start, end).
    pub fn edge(self, bounds: &Aabb2d) -> (Vec2, Vec2) {
        let (min, max) = (bounds.min, bounds.max);
        match self {
            ProbeSide::Ground => (Vec2::new(min.x, min.y), Vec2::new(max.x, min.y)),
            ProbeSide::Ceiling => (Vec2::new(min.x, max.y), Vec2::new(max.x, max.y)),
            ProbeSide::Left => (Vec2::new(min.x, min.y), Vec2::new(min.x, max.y)),
            ProbeSide::Right => (Vec2::new(max.x, min.y), Vec2::new(max.x, max.y)),
        }
    }
}

/// `count` points from `start` to `end` inclusive. Counts below 2 are raised
/// to 2 so both ends are always sampled.
pub fn evenly_spaced_points(start: Vec2, end: Vec2, count: usize) -> Vec<Vec2> {
    let count = count.max(2);
    let step = (end - start) / (count - 1) as f32;
    (0..count).map(|i| start + step * i as f32).collect()
}

/// Lazily cast the fan, yielding each ray origin with what it struck.
fn cast_fan(
    world: &impl CollisionWorld,
    edge_start: Vec2,
    edge_end: Vec2,
    direction: Dir2,
    ray_count: usize,
    ray_distance: f32,
    filter: LayerFilter,
) -> impl Iterator<Item = (Vec2, Option<SurfaceHit>)> {
    evenly_spaced_points(edge_start, edge_end, ray_count)
        .into_iter()
        .map(move |origin| {
            let hit = world.cast_ray(origin, direction, ray_distance, filter);
            (origin, hit)
        })
}

fn to_result(origin: Vec2, hit: &SurfaceHit) -> CollisionResult {
    CollisionResult {
        hit: true,
        point: hit.point,
        distance: origin.distance(hit.point),
    }
}

/// Cast every ray of the fan and report each one in order.
pub fn probe(
    world: &impl CollisionWorld,
    edge_start: Vec2,
    edge_end: Vec2,
    direction: Dir2,
    ray_count: usize,
    ray_distance: f32,
    filter: LayerFilter,
) -> Vec<CollisionResult> {
    cast_fan(
        world,
        edge_start,
        edge_end,
        direction,
        ray_count,
        ray_distance,
        filter,
    )
    .map(|(origin, hit)| match hit {
        Some(hit) => to_result(origin, &hit),
        None => CollisionResult::MISS,
    })
    .collect()
}

/// Every ray of one side's fan, in casting order.
pub fn probe_side(
    world: &impl CollisionWorld,
    bounds: &Aabb2d,
    side: ProbeSide,
    settings: &ProbeSettings,
) -> Vec<CollisionResult> {
    let (start, end) = side.edge(bounds);
    probe(
        world,
        start,
        end,
        side.direction(),
        settings.rays(),
        settings.ray_distance,
        settings.mask,
    )
}

/// Walk the fan in order and stop at the first accepted hit. Rays after it
/// are never cast.
pub fn first_hit(
    world: &impl CollisionWorld,
    bounds: &Aabb2d,
    side: ProbeSide,
    settings: &ProbeSettings,
    mut accept: impl FnMut(&SurfaceHit) -> bool,
) -> CollisionResult {
    let (start, end) = side.edge(bounds);
    cast_fan(
        world,
        start,
        end,
        side.direction(),
        settings.rays(),
        settings.ray_distance,
        settings.mask,
    )
    .find_map(|(origin, hit)| {
        hit.filter(|hit| accept(hit))
            .map(|hit| to_result(origin, &hit))
    })
    .unwrap_or(CollisionResult::MISS)
}

/// Ground contact under the feet. An ascending actor is never grounded, and
/// no rays are cast for it.
pub fn probe_ground(
    world: &impl CollisionWorld,
    bounds: &Aabb2d,
    settings: &ProbeSettings,
    vertical_velocity: f32,
) -> CollisionResult {
    if vertical_velocity > 0.0 {
        return CollisionResult::MISS;
    }
    first_hit(world, bounds, ProbeSide::Ground, settings, |_| true)
}

/// Ceiling contact above the head, skipping surfaces with an ignored tag.
pub fn probe_ceiling(
    world: &impl CollisionWorld,
    bounds: &Aabb2d,
    settings: &ProbeSettings,
    ignore_tags: &[String],
) -> CollisionResult {
    first_hit(world, bounds, ProbeSide::Ceiling, settings, |hit| {
        !hit.has_any_tag(ignore_tags)
    })
}

pub fn probe_wall(
    world: &impl CollisionWorld,
    bounds: &Aabb2d,
    settings: &ProbeSettings,
    side: ProbeSide,
) -> CollisionResult {
    debug_assert!(matches!(side, ProbeSide::Left | ProbeSide::Right));
    first_hit(world, bounds, side, settings, |_| true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_cover_both_ends() {
        let points = evenly_spaced_points(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0), 3);
        assert_eq!(
            points,
            vec![Vec2::new(-1.0, 0.0), Vec2::ZERO, Vec2::new(1.0, 0.0)]
        );
    }

    #[test]
    fn test_point_count_is_floored_to_two() {
        let points = evenly_spaced_points(Vec2::ZERO, Vec2::new(0.0, 2.0), 0);
        assert_eq!(points, vec![Vec2::ZERO, Vec2::new(0.0, 2.0)]);
    }

    #[test]
    fn test_edges_follow_bounds() {
        let bounds = Aabb2d {
            min: Vec2::new(-0.5, -1.0),
            max: Vec2::new(0.5, 1.0),
        };
        assert_eq!(
            ProbeSide::Ground.edge(&bounds),
            (Vec2::new(-0.5, -1.0), Vec2::new(0.5, -1.0))
        );
        assert_eq!(
            ProbeSide::Right.edge(&bounds),
            (Vec2::new(0.5, -1.0), Vec2::new(0.5, 1.0))
        );
    }
}
