use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "scembed",
    about = "Serve a single page that embeds a public SoundCloud playlist player",
    long_about = None,
    version = env!("GIT_VERSION"),
)]
pub struct Args {
    /// Public SoundCloud playlist address to embed
    #[arg(long, env = "PLAYLIST_URL", value_name = "URL")]
    pub playlist_url: Option<String>,

    /// Address to bind [default: 127.0.0.1]
    #[arg(long)]
    pub host: Option<String>,

    /// HTTP port to listen on [default: 5000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory served under /static [default: static]
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    /// Path to TOML config file (overrides default search: ./scembed.toml, ~/.config/scembed/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose logging (debug level unless RUST_LOG is set)
    #[arg(long)]
    pub debug: bool,
}
