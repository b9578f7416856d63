//! Movement domain: level geometry queries backed by avian2d.

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::movement::{CollisionWorld, GameLayer, LayerFilter, SurfaceHit, SurfaceTags};

/// Ray casts against the physics world, with surface tags looked up on the
/// entity that was hit.
#[derive(SystemParam)]
pub(crate) struct LevelGeometry<'w, 's> {
    spatial_query: SpatialQuery<'w, 's>,
    tags: Query<'w, 's, &'static SurfaceTags>,
}

impl CollisionWorld for LevelGeometry<'_, '_> {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        filter: LayerFilter,
    ) -> Option<SurfaceHit> {
        // Rays start on the actor's own edges; never report the actor itself
        let mask = filter.0 & !GameLayer::Player.to_bits();
        let filter = SpatialQueryFilter::from_mask(LayerMask(mask));
        let hit = self
            .spatial_query
            .cast_ray(origin, direction, max_distance, true, &filter)?;

        let tags = self
            .tags
            .get(hit.entity)
            .map(|tags| tags.0.clone())
            .unwrap_or_default();

        Some(SurfaceHit {
            point: origin + direction * hit.distance,
            tags,
        })
    }
}
