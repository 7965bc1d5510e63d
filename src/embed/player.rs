use crate::embed::encode::encode_playlist_url;

/// Substrings that mark a playlist address nobody filled in yet.
pub const PLACEHOLDER_SENTINELS: &[&str] = &["PON_AQUI", "PUT_HERE"];

/// Playlist served when nothing else is configured.
pub const DEFAULT_PLAYLIST_URL: &str = "https://soundcloud.com/buzzing-playlists/sets/buzzing-r-b";

/// Why the configured playlist address cannot be embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingReason {
    Empty,
    Placeholder(&'static str),
}

impl std::fmt::Display for MissingReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingReason::Empty => f.write_str("the value is empty"),
            MissingReason::Placeholder(s) => write!(f, "it still contains the placeholder \"{s}\""),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    #[error("playlist_url is not configured correctly: {0}. Set it to the address of a public SoundCloud playlist")]
    ConfigurationMissing(MissingReason),
}

/// The one piece of state the page needs. Built at startup, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub playlist_url: String,
}

impl PlayerConfig {
    pub fn new(playlist_url: impl Into<String>) -> Self {
        PlayerConfig { playlist_url: playlist_url.into() }
    }

    /// Return the playlist address if it can be embedded.
    ///
    /// Only the zero-length string is empty; whitespace is encoded like any
    /// other character. Sentinel matching is case-sensitive.
    pub fn validate(&self) -> Result<&str, PlayerError> {
        let url = self.playlist_url.as_str();
        if url.is_empty() {
            return Err(PlayerError::ConfigurationMissing(MissingReason::Empty));
        }
        if let Some(sentinel) = PLACEHOLDER_SENTINELS.iter().copied().find(|s| url.contains(s)) {
            return Err(PlayerError::ConfigurationMissing(MissingReason::Placeholder(sentinel)));
        }
        Ok(url)
    }

    /// Validated and percent-encoded playlist address, ready for the template.
    pub fn embed_src(&self) -> Result<String, PlayerError> {
        self.validate().map(encode_playlist_url)
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig::new(DEFAULT_PLAYLIST_URL)
    }
}
