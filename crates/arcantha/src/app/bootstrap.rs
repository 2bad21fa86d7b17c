use engine::{load_config, Game, LoopConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use super::sandbox::SandboxGame;

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) game: Box<dyn Game>,
}

pub(crate) fn build_app() -> Option<AppWiring> {
    init_tracing();
    info!("=== Arcantha Startup ===");

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "config_load_failed");
            return None;
        }
    };
    info!(
        title = config.window.title.as_str(),
        width = config.window.width,
        height = config.window.height,
        "config_loaded"
    );

    Some(AppWiring {
        config,
        game: Box::new(SandboxGame::new()),
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
