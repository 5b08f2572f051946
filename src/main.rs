//! full-grid Demo - Main Entry Point
//!
//! Scripted host driving the grid state engine over the demo dataset.

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting full-grid demo...");

    if let Err(error) = full_grid::demo::run() {
        tracing::error!(%error, "demo failed");
        std::process::exit(1);
    }
}
