use bevy_ecs::entity::Entity;
use bevy_ecs::event::Event;

/// Discrete commands from the frontend, as opposed to the continuous state
/// in [`crate::input::InputSnapshot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Exit,
    MuteAudio,
    /// First user gesture; unlocks music playback.
    StartMusic,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}

/// The player came within pickup range of a collectible this frame.
///
/// Emitted by the collision system, resolved by the pickup system. Several
/// may fire in one frame; all are processed, in no defined order.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickupEvent {
    pub collectible: Entity,
}

/// A flamingo caught its target donut this frame.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TheftEvent {
    pub flamingo: Entity,
    pub donut: Entity,
}
