//! This module contains all the constants used in the game.

use std::time::Duration;

/// The target duration of one simulation frame (60 Hz).
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// Parameters for deriving the playable region from the loaded terrain.
pub mod world {
    /// Margin inset from the terrain's bounding box edges, in world units.
    pub const BOUNDS_INSET: f32 = 20.0;
    /// Absolute clamp on each half-extent of the playable rectangle.
    pub const BOUNDS_MAX_HALF_EXTENT: f32 = 400.0;
    /// The playable rectangle never shrinks below this half-extent.
    pub const BOUNDS_MIN_HALF_EXTENT: f32 = 40.0;
    /// Half-extent of the demo terrain used by the headless driver.
    pub const DEMO_TERRAIN_HALF_EXTENT: f32 = 1000.0;
}

/// Player flight mechanics.
pub mod mechanics {
    /// Cruise speed, world units per second.
    pub const BASE_SPEED: f32 = 24.0;
    /// Cruise speed while a ring boost is active.
    pub const BOOST_SPEED: f32 = 42.0;
    /// Exponential rate at which actual speed approaches the target speed.
    pub const SPEED_SMOOTHING: f32 = 4.0;
    /// Yaw rate at full turn input, radians per second.
    pub const TURN_RATE: f32 = 2.4;
    /// Scale converting pointer-drag pixels into turn axis units.
    pub const POINTER_TURN_SCALE: f32 = 0.02;
    /// Vertical acceleration while holding climb/descend.
    pub const CLIMB_ACCEL: f32 = 22.0;
    /// Exponential air damping applied to vertical velocity.
    pub const AIR_DAMPING: f32 = 2.5;
    /// Clamp on vertical speed, world units per second.
    pub const MAX_VERTICAL_SPEED: f32 = 24.0;
    /// Altitude floor; the pigeon never clips into the terrain.
    pub const MIN_ALTITUDE: f32 = 2.0;
    /// Altitude ceiling.
    pub const MAX_ALTITUDE: f32 = 120.0;
    /// Cosmetic bank angle per unit of turn input, radians.
    pub const BANK_PER_TURN: f32 = 0.35;
    /// Clamp on the cosmetic bank angle.
    pub const MAX_BANK: f32 = 0.6;
    /// Cosmetic pitch per unit of vertical velocity.
    pub const PITCH_PER_VERTICAL: f32 = 0.025;
    /// Clamp on the cosmetic pitch angle.
    pub const MAX_PITCH: f32 = 0.5;
}

/// Hunger meter tuning.
pub mod hunger {
    pub const MAX_HUNGER: f32 = 100.0;
    /// Depletion per second while alive.
    pub const DEPLETION_RATE: f32 = 3.0;
    /// Restored by a regular donut.
    pub const DONUT_RESTORE: f32 = 15.0;
    /// Restored by a golden donut.
    pub const GOLDEN_RESTORE: f32 = 40.0;
}

/// Score values per pickup.
pub mod score {
    pub const DONUT_POINTS: u32 = 1;
    pub const GOLDEN_POINTS: u32 = 5;
    /// Score multiplier applied while the speed boost is active.
    pub const BOOST_MULTIPLIER: u32 = 2;
}

/// Proximity thresholds, in world units.
pub mod collider {
    /// Player-to-collectible distance below which a pickup fires.
    pub const PICKUP_RADIUS: f32 = 6.0;
    /// Flamingo-to-donut distance below which a theft fires.
    pub const EAT_RADIUS: f32 = 5.0;
}

/// Speed-boost timer tuning.
pub mod boost {
    /// Boost duration in seconds. Re-activation resets to this, never stacks.
    pub const DURATION: f32 = 2.0;
    /// Per-frame probability of emitting a trail particle while boosting.
    pub const TRAIL_EMISSION_PROBABILITY: f64 = 0.6;
}

/// Entity pool sizes and spawn placement.
pub mod spawn {
    /// Fraction of the bounds rectangle used for randomized spawns.
    pub const AREA_FRACTION: f32 = 0.96;
    pub const DONUT_COUNT: usize = 24;
    pub const GOLDEN_DONUT_COUNT: usize = 4;
    pub const RING_COUNT: usize = 6;
    pub const FLAMINGO_COUNT: usize = 3;
    /// Height band for donut spawns.
    pub const DONUT_HEIGHT: (f32, f32) = (3.0, 10.0);
    /// Height band for ring spawns.
    pub const RING_HEIGHT: (f32, f32) = (4.0, 14.0);
    /// Flamingos fly low, just above the terrain.
    pub const FLAMINGO_ALTITUDE: f32 = 2.5;
    /// Pursuit speed band sampled once per flamingo at spawn.
    pub const FLAMINGO_SPEED: (f32, f32) = (10.0, 18.0);
    /// Yaw rate applied while steering toward a target donut.
    pub const FLAMINGO_TURN_RATE: f32 = 1.8;
    /// Yaw rate applied while wandering with no donuts in the world.
    pub const FLAMINGO_WANDER_YAW_RATE: f32 = 0.9;
    /// Bob amplitude of the idle float animation.
    pub const FLOAT_AMPLITUDE: f32 = 0.6;
    /// Bob frequency of the idle float animation, radians per second.
    pub const FLOAT_FREQUENCY: f32 = 2.0;
    /// Spin speed band for donut idle rotation, radians per second.
    pub const SPIN_SPEED: (f32, f32) = (0.5, 1.5);
}

/// Particle feedback tuning.
pub mod effects {
    pub const BURST_PARTICLES: usize = 12;
    /// Initial particle speed of a pickup burst.
    pub const BURST_SPEED: f32 = 14.0;
    /// Downward acceleration applied to burst particles.
    pub const GRAVITY: f32 = -20.0;
    /// Opacity lost per second by burst particles.
    pub const BURST_FADE_RATE: f32 = 1.6;
    /// Opacity lost per second by boost trail particles.
    pub const TRAIL_FADE_RATE: f32 = 2.2;
    /// Trail particles drift slightly before fading out.
    pub const TRAIL_DRIFT_SPEED: f32 = 1.5;
}

/// Chase camera placement.
pub mod camera {
    /// Distance behind the player, along its facing.
    pub const DISTANCE: f32 = 8.0;
    /// Height above the player.
    pub const HEIGHT: f32 = 3.0;
    /// Exponential rate at which the camera approaches its target position.
    pub const SMOOTHING: f32 = 5.0;
    /// Vertical offset added to the look-at target.
    pub const LOOK_AT_LIFT: f32 = 1.0;
}

/// Player spawn placement.
pub mod player {
    pub const START_ALTITUDE: f32 = 5.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        // 60 FPS = 16.67ms per frame
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_bounds_parameters_ordered() {
        assert!(world::BOUNDS_MIN_HALF_EXTENT < world::BOUNDS_MAX_HALF_EXTENT);
        assert!(world::BOUNDS_INSET > 0.0);
        assert!(world::DEMO_TERRAIN_HALF_EXTENT > world::BOUNDS_MAX_HALF_EXTENT);
    }

    #[test]
    fn test_boost_speed_exceeds_base() {
        assert!(mechanics::BOOST_SPEED > mechanics::BASE_SPEED);
    }

    #[test]
    fn test_eat_radius_within_pickup_radius() {
        assert!(collider::EAT_RADIUS < collider::PICKUP_RADIUS);
    }

    #[test]
    fn test_restore_amounts_fit_meter() {
        assert!(hunger::DONUT_RESTORE < hunger::GOLDEN_RESTORE);
        assert!(hunger::GOLDEN_RESTORE < hunger::MAX_HUNGER);
    }

    #[test]
    fn test_height_bands_ordered() {
        assert!(spawn::DONUT_HEIGHT.0 < spawn::DONUT_HEIGHT.1);
        assert!(spawn::RING_HEIGHT.0 < spawn::RING_HEIGHT.1);
        assert!(spawn::FLAMINGO_SPEED.0 < spawn::FLAMINGO_SPEED.1);
    }

    #[test]
    fn test_spawn_fraction_is_a_fraction() {
        assert!(spawn::AREA_FRACTION > 0.0 && spawn::AREA_FRACTION <= 1.0);
    }
}
