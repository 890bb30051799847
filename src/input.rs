//! The "current input" snapshot written by the embedding frontend.
//!
//! Gameplay never listens to platform events directly; the frontend merges
//! keyboard, pointer-drag and touch-zone state into this resource once per
//! frame and the kinematics system reads it. This keeps the simulation
//! deterministic and replayable in tests.

use bevy_ecs::resource::Resource;

use crate::constants::mechanics::POINTER_TURN_SCALE;

/// Which half of the screen a touch is currently held on, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchZone {
    #[default]
    None,
    Left,
    Right,
}

/// Per-frame input state. Continuous holds persist across frames; the
/// pointer delta is consumed by the kinematics system each tick.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputSnapshot {
    pub turn_left: bool,
    pub turn_right: bool,
    pub climb: bool,
    pub descend: bool,
    /// Horizontal pointer movement since the previous frame, in pixels,
    /// reported only while a button or touch is held.
    pub pointer_drag_dx: f32,
    pub touch_zone: TouchZone,
}

impl InputSnapshot {
    /// Combined signed turn axis in `[-1, 1]`. Positive turns left
    /// (counter-clockwise, increasing yaw).
    pub fn turn_axis(&self) -> f32 {
        let mut axis = 0.0;
        if self.turn_left {
            axis += 1.0;
        }
        if self.turn_right {
            axis -= 1.0;
        }
        match self.touch_zone {
            TouchZone::Left => axis += 1.0,
            TouchZone::Right => axis -= 1.0,
            TouchZone::None => {}
        }
        // Dragging the pointer right steers right.
        axis -= self.pointer_drag_dx * POINTER_TURN_SCALE;
        axis.clamp(-1.0, 1.0)
    }

    /// Combined signed climb axis in `[-1, 1]`. Positive climbs.
    pub fn lift_axis(&self) -> f32 {
        let mut axis = 0.0;
        if self.climb {
            axis += 1.0;
        }
        if self.descend {
            axis -= 1.0;
        }
        axis
    }

    /// Clears per-frame deltas after the kinematics system consumed them.
    pub fn end_frame(&mut self) {
        self.pointer_drag_dx = 0.0;
    }
}
