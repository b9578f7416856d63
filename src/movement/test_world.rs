//! Static box world and bare body for driving the controller without an App.

use avian2d::prelude::PhysicsLayer;
use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

use super::components::GameLayer;
use super::config::LayerFilter;
use super::mover::ActorBody;
use super::probe::{CollisionWorld, SurfaceHit};

pub struct StaticBox {
    pub bounds: Aabb2d,
    pub layers: u32,
    pub tags: Vec<String>,
}

#[derive(Default)]
pub struct StaticWorld {
    pub boxes: Vec<StaticBox>,
}

impl StaticWorld {
    pub fn with_box(mut self, center: Vec2, half_size: Vec2, layer: GameLayer) -> Self {
        self.boxes.push(StaticBox {
            bounds: Aabb2d::new(center, half_size),
            layers: layer.to_bits(),
            tags: Vec::new(),
        });
        self
    }

    pub fn with_tagged_box(
        mut self,
        center: Vec2,
        half_size: Vec2,
        layer: GameLayer,
        tag: &str,
    ) -> Self {
        self.boxes.push(StaticBox {
            bounds: Aabb2d::new(center, half_size),
            layers: layer.to_bits(),
            tags: vec![tag.to_string()],
        });
        self
    }

    /// A wide floor whose top surface sits at y = 0.
    pub fn floor() -> Self {
        Self::default().with_box(
            Vec2::new(0.0, -0.5),
            Vec2::new(50.0, 0.5),
            GameLayer::Ground,
        )
    }
}

/// Entry distance of a ray into a box; zero when the origin is inside.
fn slab_entry(bounds: &Aabb2d, origin: Vec2, direction: Vec2) -> Option<f32> {
    let mut near = 0.0_f32;
    let mut far = f32::INFINITY;

    for axis in 0..2 {
        let (o, d) = (origin[axis], direction[axis]);
        let (min, max) = (bounds.min[axis], bounds.max[axis]);
        if d.abs() < f32::EPSILON {
            if o < min || o > max {
                return None;
            }
            continue;
        }
        let (mut t0, mut t1) = ((min - o) / d, (max - o) / d);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        near = near.max(t0);
        far = far.min(t1);
        if near > far {
            return None;
        }
    }

    Some(near)
}

impl CollisionWorld for StaticWorld {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        filter: LayerFilter,
    ) -> Option<SurfaceHit> {
        let dir = *direction;
        self.boxes
            .iter()
            .filter(|b| filter.contains(b.layers))
            .filter_map(|b| {
                slab_entry(&b.bounds, origin, dir)
                    .filter(|t| *t <= max_distance)
                    .map(|t| (t, b))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(t, b)| SurfaceHit {
                point: origin + dir * t,
                tags: b.tags.clone(),
            })
    }
}

#[derive(Debug, Clone)]
pub struct TestBody {
    pub position: Vec2,
    pub half_size: Vec2,
    pub mirrored: bool,
}

impl TestBody {
    /// A 1x2 body whose feet rest `gap` above y = 0.
    pub fn standing(gap: f32) -> Self {
        Self {
            position: Vec2::new(0.0, 1.0 + gap),
            half_size: Vec2::new(0.5, 1.0),
            mirrored: false,
        }
    }

    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            half_size: Vec2::new(0.5, 1.0),
            mirrored: false,
        }
    }
}

impl ActorBody for TestBody {
    fn bounds(&self) -> Aabb2d {
        Aabb2d::new(self.position, self.half_size)
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn move_position(&mut self, target: Vec2) {
        self.position = target;
    }

    fn set_mirrored(&mut self, mirrored: bool) {
        self.mirrored = mirrored;
    }
}
