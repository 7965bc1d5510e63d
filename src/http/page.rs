use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::http::state::AppState;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// SoundCloud widget endpoint; the playlist goes in its `url` parameter.
const WIDGET_BASE: &str = "https://w.soundcloud.com/player/";
const WIDGET_OPTIONS: &str =
    "color=%23ff5500&auto_play=false&hide_related=true&show_comments=false&show_user=true&show_reposts=false&visual=false";

/// Render the player page around an already percent-encoded playlist address.
///
/// Besides the widget iframe the page carries the elements `static/script.js`
/// drives: track list, progress bar, transport buttons and the unlock dialog.
///
/// The iframe `src` is escaped for the attribute context, so `&` between
/// widget parameters is written as `&amp;`.
pub fn render_index(encoded_playlist_url: &str) -> String {
    let src = format!("{WIDGET_BASE}?url={encoded_playlist_url}&{WIDGET_OPTIONS}");
    let src = quick_xml::escape::escape(&src);
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Playlist Player</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <main class="player">
    <h1>Playlist Player</h1>
    <iframe id="soundcloud-widget"
            width="100%" height="166" scrolling="no" frameborder="no" allow="autoplay"
            src="{src}"></iframe>
    <div id="track-info">Loading player...</div>
    <div class="progress">
      <span id="current-time">0:00</span>
      <div id="progress-container" title="Seek">
        <div id="progress-bar"></div>
      </div>
      <span id="total-duration">0:00</span>
    </div>
    <div class="controls">
      <button id="prev-btn" type="button" title="Previous">⏮️</button>
      <button id="play-pause-btn" type="button" title="Play">▶️</button>
      <button id="next-btn" type="button" title="Next">⏭️</button>
      <button id="unlock-btn" type="button" title="Unlock all tracks">🔓</button>
    </div>
    <ul id="playlist-tracks">
      <li>Loading playlist...</li>
    </ul>
  </main>
  <div id="password-modal" class="modal" style="display: none">
    <div class="modal-overlay"></div>
    <div class="modal-content" role="dialog" aria-labelledby="password-modal-title">
      <h2 id="password-modal-title">Unlock all tracks</h2>
      <input id="password-input" type="password" placeholder="Password" autocomplete="off">
      <div class="modal-actions">
        <button id="modal-ok-btn" type="button">Unlock</button>
        <button id="modal-cancel-btn" type="button">Cancel</button>
      </div>
    </div>
  </div>
  <script src="https://w.soundcloud.com/player/api.js"></script>
  <script src="/static/script.js"></script>
</body>
</html>
"#)
}

/// GET / — the player page, or 500 when the playlist address is unusable.
pub async fn serve_index(State(state): State<AppState>) -> Response {
    match state.player.embed_src() {
        Ok(encoded) => {
            tracing::debug!("Rendering player for {}", state.player.playlist_url);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, HTML_CONTENT_TYPE)],
                render_index(&encoded),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Refusing to render player page: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
                format!("Error: {e}"),
            )
                .into_response()
        }
    }
}
