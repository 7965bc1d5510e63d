use std::path::PathBuf;
use std::sync::Arc;

use crate::embed::player::PlayerConfig;

/// Shared application state injected into route handlers via axum::extract::State.
/// Built once at startup and never written again, so no lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub player: Arc<PlayerConfig>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(player: PlayerConfig, static_dir: impl Into<PathBuf>) -> Self {
        AppState {
            player: Arc::new(player),
            static_dir: static_dir.into(),
        }
    }
}
