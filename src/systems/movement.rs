//! Player flight kinematics and the chase camera.

use bevy_ecs::{
    query::With,
    system::{Query, Res, ResMut},
};
use glam::Vec3;

use crate::bounds::WorldBounds;
use crate::constants::{camera, mechanics};
use crate::helpers::{forward, smoothing_factor};
use crate::input::InputSnapshot;
use crate::systems::components::{
    Attitude, CameraState, DeltaTime, FlightSpeed, PlayerControlled, Position, SpeedBoost, VerticalVelocity, Yaw,
};

/// Integrates one frame of player motion.
///
/// Turn input from all sources merges into one signed axis; yaw
/// accumulates; the pigeon always advances along its current facing at the
/// smoothed cruise speed (there is no stop state). Altitude uses damped
/// vertical velocity with floor/ceiling clamps, and the final position is
/// clamped into the world bounds on each axis independently. Pitch and
/// roll are derived cosmetics, not simulated state.
pub fn player_movement_system(
    bounds: Res<WorldBounds>,
    delta_time: Res<DeltaTime>,
    boost: Res<SpeedBoost>,
    mut input: ResMut<InputSnapshot>,
    mut players: Query<
        (&mut Position, &mut Yaw, &mut Attitude, &mut FlightSpeed, &mut VerticalVelocity),
        With<PlayerControlled>,
    >,
) {
    let dt = delta_time.seconds;

    let turn_axis = input.turn_axis();
    let lift_axis = input.lift_axis();
    input.end_frame();

    for (mut position, mut yaw, mut attitude, mut speed, mut vertical) in players.iter_mut() {
        yaw.0 += turn_axis * mechanics::TURN_RATE * dt;

        // Smooth approach toward the (possibly boosted) cruise speed; an
        // instantaneous jump would read as a pop on screen.
        let target_speed = if boost.active() {
            mechanics::BOOST_SPEED
        } else {
            mechanics::BASE_SPEED
        };
        speed.current += (target_speed - speed.current) * smoothing_factor(mechanics::SPEED_SMOOTHING, dt);

        vertical.0 += lift_axis * mechanics::CLIMB_ACCEL * dt;
        vertical.0 *= (-mechanics::AIR_DAMPING * dt).exp();
        vertical.0 = vertical.0.clamp(-mechanics::MAX_VERTICAL_SPEED, mechanics::MAX_VERTICAL_SPEED);

        let mut next = position.0 + forward(yaw.0) * speed.current * dt + Vec3::Y * vertical.0 * dt;

        if next.y < mechanics::MIN_ALTITUDE {
            next.y = mechanics::MIN_ALTITUDE;
            vertical.0 = 0.0;
        } else if next.y > mechanics::MAX_ALTITUDE {
            next.y = mechanics::MAX_ALTITUDE;
            vertical.0 = 0.0;
        }

        position.0 = bounds.clamp(next);

        attitude.roll = (-turn_axis * mechanics::BANK_PER_TURN).clamp(-mechanics::MAX_BANK, mechanics::MAX_BANK);
        attitude.pitch = (-vertical.0 * mechanics::PITCH_PER_VERTICAL).clamp(-mechanics::MAX_PITCH, mechanics::MAX_PITCH);
    }
}

/// Derives the chase-camera pose from the player: a fixed behind-and-above
/// offset rotated by the current yaw, exponentially smoothed to eliminate
/// jitter, looking at the player with a small vertical lift.
pub fn camera_follow_system(
    delta_time: Res<DeltaTime>,
    boost: Res<SpeedBoost>,
    mut camera: ResMut<CameraState>,
    players: Query<(&Position, &Yaw), With<PlayerControlled>>,
) {
    let Ok((position, yaw)) = players.single() else {
        return;
    };

    let target = position.0 - forward(yaw.0) * camera::DISTANCE + Vec3::Y * camera::HEIGHT;
    let factor = smoothing_factor(camera::SMOOTHING, delta_time.seconds);

    let delta = (target - camera.0.position) * factor;
    camera.0.position += delta;
    camera.0.look_at = position.0 + Vec3::Y * camera::LOOK_AT_LIFT;
    camera.0.fov_wide = boost.active();
}
