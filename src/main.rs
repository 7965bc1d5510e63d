use clap::Parser;

use scembed::{cli, config, http};

/// Wait for the first Ctrl+C (graceful shutdown). A second Ctrl+C while
/// in-flight requests drain force-exits.
async fn wait_for_shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\nscembed: forced exit");
            std::process::exit(1);
        }
    });
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level))
        )
        .init();
}

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    // The log level depends on the resolved config, so load outcomes are reported after init.
    let loaded = config::find_config_file(args.config.as_deref()).map(|source| {
        let result = config::load_config(source.path());
        (source, result)
    });
    // A missing explicit --config is fatal; anything found by the search is best-effort.
    if let Some((config::ConfigSource::Explicit(path), Err(config::ConfigError::NotFound(_)))) = &loaded {
        eprintln!("error: config file not found: {}", path.display());
        std::process::exit(1);
    }
    let file_config = loaded.as_ref().and_then(|(_, result)| result.as_ref().ok().cloned());

    let config = config::Config::resolve(file_config, &args);
    init_tracing(config.debug);

    match &loaded {
        Some((source, Ok(_))) => tracing::debug!("Loaded config from {}", source.path().display()),
        Some((_, Err(e))) => tracing::warn!("{} -- using defaults", e),
        None => {}
    }

    match config.player.validate() {
        Ok(url) => tracing::info!("Embedding playlist {}", url),
        Err(e) => tracing::warn!("{} -- requests to / will fail with 500", e),
    }
    if !config.static_dir.is_dir() {
        tracing::warn!("Static directory {} not found", config.static_dir.display());
    }

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("error: failed to bind {}: {}", addr, e);
            std::process::exit(1);
        });

    tracing::info!(
        "scembed {} on http://{}{}",
        env!("GIT_VERSION"),
        addr,
        if config.debug { " (debug)" } else { "" }
    );

    let state = http::state::AppState::new(config.player, config.static_dir);
    let app = http::build_router(state);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
    {
        tracing::error!("HTTP server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Goodbye.");
}
