use anyhow::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use paloma::app::App;
use paloma::game::Collaborators;

/// Headless demo driver: runs the simulation against null collaborators
/// with a scripted slow left turn, until hunger runs the game out.
pub fn main() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)?;

    let mut app = App::new(Collaborators::headless())?;

    // Scripted autopilot: hold a gentle left turn so the flight stays
    // interesting in the logs. Key holds persist across frames.
    app.game.input_mut().turn_left = true;

    loop {
        if !app.run() {
            break;
        }
    }

    Ok(())
}
