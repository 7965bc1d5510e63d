//! Single-page server embedding a public SoundCloud playlist player.

pub mod cli;
pub mod config;
pub mod embed;
pub mod http;
