pub mod page;
pub mod state;

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};
use crate::http::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);
    Router::new()
        .route("/", get(page::serve_index))
        // Pass-through file serving; missing files fall through to 404.
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
