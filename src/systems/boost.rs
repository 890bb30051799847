//! The speed-boost countdown.

use bevy_ecs::system::{Res, ResMut};

use crate::systems::components::{DeltaTime, SpeedBoost};

/// Counts the boost timer down, clamped at zero.
///
/// Runs before the pickup resolver so a ring collected this frame starts
/// with the full duration intact. The speed change itself is smoothed in
/// the kinematics system; cosmetic couplings (FOV, trail) key off
/// `SpeedBoost::active` in the view layer.
pub fn boost_timer_system(delta_time: Res<DeltaTime>, mut boost: ResMut<SpeedBoost>) {
    if boost.active() {
        boost.tick(delta_time.seconds);
    }
}
