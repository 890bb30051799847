//! The playable world region, derived once from the loaded terrain.

use bevy_ecs::resource::Resource;
use glam::Vec3;
use tracing::debug;

use crate::constants::world::{BOUNDS_INSET, BOUNDS_MAX_HALF_EXTENT, BOUNDS_MIN_HALF_EXTENT};
use crate::error::BoundsError;

/// Axis-aligned bounding extents of the loaded terrain mesh.
///
/// Supplied by the renderer collaborator once the terrain asset resolves;
/// the headless driver builds one from a constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainExtents {
    pub min: Vec3,
    pub max: Vec3,
}

impl TerrainExtents {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// A square terrain centered on the origin.
    pub fn centered(half_extent: f32) -> Self {
        Self {
            min: Vec3::new(-half_extent, 0.0, -half_extent),
            max: Vec3::new(half_extent, 0.0, half_extent),
        }
    }
}

/// The rectangular horizontal region within which all gameplay entities are
/// confined. Built once at world init; never mutated afterwards.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl WorldBounds {
    /// Derives the playable rectangle from terrain extents.
    ///
    /// Applies a fixed inset margin, clamps each edge to an absolute
    /// magnitude, and widens degenerate rectangles up to the minimum
    /// playable size. Only non-finite input is rejected.
    pub fn from_terrain(terrain: TerrainExtents) -> Result<Self, BoundsError> {
        if !terrain.min.is_finite() || !terrain.max.is_finite() {
            return Err(BoundsError::NonFiniteExtents {
                min: terrain.min.to_array(),
                max: terrain.max.to_array(),
            });
        }

        let clamp = |v: f32| v.clamp(-BOUNDS_MAX_HALF_EXTENT, BOUNDS_MAX_HALF_EXTENT);
        let mut bounds = Self {
            min_x: clamp(terrain.min.x.min(terrain.max.x) + BOUNDS_INSET),
            max_x: clamp(terrain.max.x.max(terrain.min.x) - BOUNDS_INSET),
            min_z: clamp(terrain.min.z.min(terrain.max.z) + BOUNDS_INSET),
            max_z: clamp(terrain.max.z.max(terrain.min.z) - BOUNDS_INSET),
        };

        // A tiny or inverted terrain still yields a playable world.
        if bounds.max_x - bounds.min_x < BOUNDS_MIN_HALF_EXTENT * 2.0 {
            let center = (bounds.min_x + bounds.max_x) * 0.5;
            bounds.min_x = center - BOUNDS_MIN_HALF_EXTENT;
            bounds.max_x = center + BOUNDS_MIN_HALF_EXTENT;
        }
        if bounds.max_z - bounds.min_z < BOUNDS_MIN_HALF_EXTENT * 2.0 {
            let center = (bounds.min_z + bounds.max_z) * 0.5;
            bounds.min_z = center - BOUNDS_MIN_HALF_EXTENT;
            bounds.max_z = center + BOUNDS_MIN_HALF_EXTENT;
        }

        debug!(?bounds, "World bounds derived from terrain");
        Ok(bounds)
    }

    /// Clamps a position onto the playable rectangle, each axis
    /// independently. A hard stop at the wall, never a bounce.
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            position.x.clamp(self.min_x, self.max_x),
            position.y,
            position.z.clamp(self.min_z, self.max_z),
        )
    }

    pub fn contains(&self, position: Vec3) -> bool {
        (self.min_x..=self.max_x).contains(&position.x) && (self.min_z..=self.max_z).contains(&position.z)
    }

    /// Minimum distance from the world origin to any bound edge.
    pub fn safe_radius(&self) -> f32 {
        (-self.min_x).min(self.max_x).min(-self.min_z).min(self.max_z).max(0.0)
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn depth(&self) -> f32 {
        self.max_z - self.min_z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_terrain_clamps_to_max_extent() {
        let bounds = WorldBounds::from_terrain(TerrainExtents::centered(1000.0)).unwrap();
        assert_eq!(bounds.max_x, BOUNDS_MAX_HALF_EXTENT);
        assert_eq!(bounds.min_x, -BOUNDS_MAX_HALF_EXTENT);
        assert_eq!(bounds.safe_radius(), BOUNDS_MAX_HALF_EXTENT);
    }

    #[test]
    fn test_inset_applied_inside_clamp() {
        let bounds = WorldBounds::from_terrain(TerrainExtents::centered(100.0)).unwrap();
        assert_eq!(bounds.max_x, 100.0 - BOUNDS_INSET);
        assert_eq!(bounds.min_z, -100.0 + BOUNDS_INSET);
    }

    #[test]
    fn test_degenerate_terrain_expands_to_minimum() {
        let bounds = WorldBounds::from_terrain(TerrainExtents::centered(1.0)).unwrap();
        assert!(bounds.width() >= BOUNDS_MIN_HALF_EXTENT * 2.0);
        assert!(bounds.depth() >= BOUNDS_MIN_HALF_EXTENT * 2.0);
        assert!(bounds.min_x < bounds.max_x);
        assert!(bounds.min_z < bounds.max_z);
    }

    #[test]
    fn test_non_finite_terrain_rejected() {
        let terrain = TerrainExtents::new(Vec3::splat(f32::NAN), Vec3::ONE);
        assert!(WorldBounds::from_terrain(terrain).is_err());
    }

    #[test]
    fn test_clamp_leaves_altitude_alone() {
        let bounds = WorldBounds::from_terrain(TerrainExtents::centered(100.0)).unwrap();
        let clamped = bounds.clamp(Vec3::new(500.0, 37.0, -500.0));
        assert_eq!(clamped.x, bounds.max_x);
        assert_eq!(clamped.z, bounds.min_z);
        assert_eq!(clamped.y, 37.0);
    }

    #[test]
    fn test_safe_radius_off_center_terrain() {
        let terrain = TerrainExtents::new(Vec3::new(-50.0, 0.0, -200.0), Vec3::new(300.0, 0.0, 200.0));
        let bounds = WorldBounds::from_terrain(terrain).unwrap();
        assert_eq!(bounds.safe_radius(), 30.0); // min_x = -30 after inset
    }
}
