use std::path::PathBuf;
use scembed::cli::Args;
use scembed::config::{find_config_file, load_config, Config, ConfigError, ConfigSource, FileConfig};
use scembed::embed::player::DEFAULT_PLAYLIST_URL;

fn make_args(playlist_url: Option<&str>, port: Option<u16>) -> Args {
    Args {
        playlist_url: playlist_url.map(str::to_string),
        host: None,
        port,
        static_dir: None,
        config: None,
        debug: false,
    }
}

#[test]
fn test_defaults_when_nothing_set() {
    let config = Config::resolve(None, &make_args(None, None));
    assert_eq!(config.port, 5000);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.static_dir, PathBuf::from("static"));
    assert_eq!(config.player.playlist_url, DEFAULT_PLAYLIST_URL);
    assert!(!config.debug);
}

#[test]
fn test_cli_flag_overrides_default() {
    let config = Config::resolve(None, &make_args(Some("https://soundcloud.com/a/sets/b"), Some(9000)));
    assert_eq!(config.port, 9000);
    assert_eq!(config.player.playlist_url, "https://soundcloud.com/a/sets/b");
}

#[test]
fn test_toml_overrides_default() {
    let file = FileConfig {
        playlist_url: Some("https://soundcloud.com/from/sets/toml".to_string()),
        port: Some(7777),
        debug: Some(true),
        ..FileConfig::default()
    };
    let config = Config::resolve(Some(file), &make_args(None, None));
    assert_eq!(config.port, 7777);
    assert_eq!(config.player.playlist_url, "https://soundcloud.com/from/sets/toml");
    assert!(config.debug);
}

#[test]
fn test_cli_overrides_toml() {
    let file = FileConfig {
        playlist_url: Some("https://soundcloud.com/from/sets/toml".to_string()),
        port: Some(7777),
        ..FileConfig::default()
    };
    let args = make_args(Some("https://soundcloud.com/from/sets/cli"), Some(9000));
    let config = Config::resolve(Some(file), &args);
    assert_eq!(config.port, 9000);
    assert_eq!(config.player.playlist_url, "https://soundcloud.com/from/sets/cli");
}

#[test]
fn test_toml_parse() {
    let toml_str = "playlist_url = \"https://soundcloud.com/a/sets/b\"\nport = 8080\nstatic_dir = \"public\"\n";
    let parsed: FileConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(parsed.playlist_url.as_deref(), Some("https://soundcloud.com/a/sets/b"));
    assert_eq!(parsed.port, Some(8080));
    assert_eq!(parsed.static_dir, Some(PathBuf::from("public")));
}

#[test]
fn test_toml_unknown_fields_ignored() {
    let toml_str = "port = 9000\nunknown_future_key = true\n";
    let parsed: Result<FileConfig, _> = toml::from_str(toml_str);
    assert!(parsed.is_ok());
}

#[test]
fn test_bind_addr_brackets_ipv6() {
    let mut config = Config::resolve(None, &make_args(None, Some(8000)));
    assert_eq!(config.bind_addr(), "127.0.0.1:8000");
    config.host = "::1".to_string();
    assert_eq!(config.bind_addr(), "[::1]:8000");
}

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("scembed-{}-{name}.toml", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_explicit_config_path_is_kept_even_if_missing() {
    let path = PathBuf::from("/nonexistent/scembed.toml");
    assert_eq!(
        find_config_file(Some(&path)),
        Some(ConfigSource::Explicit(path.clone()))
    );
}

#[test]
fn test_load_missing_file_is_not_found() {
    let err = load_config(std::path::Path::new("/nonexistent/scembed.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)), "unexpected error: {err}");
    assert!(err.to_string().contains("/nonexistent/scembed.toml"));
}

#[test]
fn test_load_invalid_toml_is_parse_error() {
    let path = temp_config("invalid", "port = \"not a number\"\n");
    let err = load_config(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(err, ConfigError::Parse { .. }), "unexpected error: {err}");
    assert!(err.to_string().contains("failed to parse"));
}

#[test]
fn test_load_valid_file() {
    let path = temp_config("valid", "playlist_url = \"https://soundcloud.com/a/sets/b\"\nport = 8081\n");
    let parsed = load_config(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(parsed.port, Some(8081));
    assert_eq!(parsed.playlist_url.as_deref(), Some("https://soundcloud.com/a/sets/b"));
}
