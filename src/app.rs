//! The fixed-rate driver loop around [`Game::tick`].

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{event, info};

use crate::bounds::TerrainExtents;
use crate::constants::{world, LOOP_TIME};
use crate::game::{Collaborators, Game, SimStatus};

fn sleep(value: Duration) {
    spin_sleep::sleep(value);
}

/// Owns the game and paces it at 60 Hz with real measured delta times.
pub struct App {
    pub game: Game,
    last_tick: Instant,
}

impl App {
    /// Builds a game over the demo terrain with the given collaborators.
    pub fn new(collaborators: Collaborators) -> Result<Self> {
        let terrain = TerrainExtents::centered(world::DEMO_TERRAIN_HALF_EXTENT);
        let game = Game::new(collaborators, terrain)?;

        Ok(Self {
            game,
            last_tick: Instant::now(),
        })
    }

    /// Runs one loop iteration: tick with the measured delta, then sleep off
    /// the rest of the frame budget. Returns `false` once the game reports a
    /// terminal status, after which the loop must not be re-armed.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        let dt = self.last_tick.elapsed().as_secs_f32();
        self.last_tick = Instant::now();

        let status = self.game.tick(dt);
        match status {
            SimStatus::Running => {}
            SimStatus::GameOver { score } => {
                info!(score, "Game over");
                return false;
            }
            SimStatus::Exit => {
                info!("Exit requested. Exiting...");
                return false;
            }
        }

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                sleep(time);
            }
        } else {
            event!(
                tracing::Level::WARN,
                "Game loop behind schedule by: {:?}",
                start.elapsed() - LOOP_TIME
            );
        }

        true
    }
}
