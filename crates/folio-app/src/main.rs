mod app_state;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- Folio crashed ---");
        eprintln!("Please report this issue at: https://github.com/adityapatil100/folio/issues");
        eprintln!("---------------------\n");

        default_hook(info);
    }));
}

fn main() {
    install_panic_hook();

    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("folio=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "folio=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Folio v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config
    let config = match &args.config {
        Some(path) => {
            tracing::info!("Using config override: {path}");
            folio_config::toml_loader::load_from_path(std::path::Path::new(path))
        }
        None => folio_config::load_config(),
    }
    .unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        folio_config::FolioConfig::default()
    });
    tracing::info!("Config loaded (theme: {})", config.theme.name);

    // Ensure platform directories exist
    if let Err(e) = folio_platform::paths::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::FolioApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
