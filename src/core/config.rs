//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.astralixi/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::KeyProfile;

use super::event::InputEvent;
use super::keymap::KeyBindings;
use super::scene::ScreenLayout;
use super::scenes::file_manager::{DEFAULT_ENTRIES, DEFAULT_OPEN_DELAY};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AstralixiConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub file_manager: FileManagerConfig,
    /// Per-key overrides, e.g. `"f1" = "escape_to_menu"`.
    #[serde(default)]
    pub keys: HashMap<String, InputEvent>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub key_profile: Option<KeyProfile>,
    pub open_delay_ms: Option<u64>,
    /// Let the menu handle the `EscapeToMenu` event that brought it up.
    pub menu_handles_escape: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ScreenConfig {
    pub cols: Option<u16>,
    pub rows: Option<u16>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FileManagerConfig {
    pub entries: Option<Vec<String>>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub key_profile: KeyProfile,
    pub key_bindings: KeyBindings,
    pub open_delay: Duration,
    pub layout: ScreenLayout,
    pub file_entries: Vec<String>,
    pub menu_handles_escape: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.astralixi/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".astralixi").join("config.toml"))
}

/// Load config from `~/.astralixi/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AstralixiConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AstralixiConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(AstralixiConfig::default())
        }
    }
}

/// Load config from an explicit path, generating a default if missing.
pub fn load_config_from(path: &Path) -> Result<AstralixiConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(AstralixiConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AstralixiConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Astralixi Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# key_profile = "desktop"            # "desktop" (Esc = menu) or "handheld" (Alt+Enter = menu)
# open_delay_ms = 2000               # How long "Opening <file>..." stays on screen
# menu_handles_escape = false        # Pass the return-to-menu key on to the menu itself

# [screen]
# cols = 40
# rows = 12

# [file_manager]
# entries = ["notes.txt", "notes1.txt", "notes2.txt", "apps/", "config.sys"]

# [keys]
# Events: up, down, enter, backspace, escape_to_menu, quit, none
# "f1" = "escape_to_menu"
# "ctrl_x" = "quit"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_profile` is from the `--profile` flag (None = not specified).
pub fn resolve(config: &AstralixiConfig, cli_profile: Option<KeyProfile>) -> ResolvedConfig {
    // Key profile: CLI → env → config → default
    let key_profile = cli_profile
        .or_else(|| env_parse("ASTRALIXI_KEY_PROFILE", parse_profile))
        .or(config.general.key_profile)
        .unwrap_or_default();

    // Open delay: env → config → default
    let open_delay = env_parse("ASTRALIXI_OPEN_DELAY_MS", |s| s.parse::<u64>().ok())
        .or(config.general.open_delay_ms)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_OPEN_DELAY);

    let defaults = ScreenLayout::default();
    let layout = ScreenLayout {
        cols: config.screen.cols.unwrap_or(defaults.cols),
        rows: config.screen.rows.unwrap_or(defaults.rows),
    };

    let file_entries = config
        .file_manager
        .entries
        .clone()
        .unwrap_or_else(|| DEFAULT_ENTRIES.iter().map(|s| s.to_string()).collect());

    let key_bindings = KeyBindings::for_profile(key_profile).with_overrides(&config.keys);

    ResolvedConfig {
        key_profile,
        key_bindings,
        open_delay,
        layout,
        file_entries,
        menu_handles_escape: config.general.menu_handles_escape.unwrap_or(false),
    }
}

fn env_parse<T>(name: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        warn!("Ignoring invalid {}={:?}", name, raw);
    }
    parsed
}

fn parse_profile(s: &str) -> Option<KeyProfile> {
    match s.to_ascii_lowercase().as_str() {
        "desktop" => Some(KeyProfile::Desktop),
        "handheld" => Some(KeyProfile::Handheld),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AstralixiConfig::default();
        assert!(config.keys.is_empty());
        assert!(config.general.key_profile.is_none());
        assert!(config.file_manager.entries.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = AstralixiConfig::default();
        let resolved = resolve(&config, Some(KeyProfile::Desktop));
        assert_eq!(resolved.key_profile, KeyProfile::Desktop);
        assert_eq!(resolved.layout, ScreenLayout::default());
        assert_eq!(resolved.file_entries.len(), DEFAULT_ENTRIES.len());
        assert_eq!(resolved.key_bindings.translate("esc"), InputEvent::EscapeToMenu);
        assert!(!resolved.menu_handles_escape);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = AstralixiConfig {
            general: GeneralConfig {
                key_profile: Some(KeyProfile::Handheld),
                open_delay_ms: Some(250),
                menu_handles_escape: Some(true),
            },
            screen: ScreenConfig {
                cols: Some(30),
                rows: Some(8),
            },
            file_manager: FileManagerConfig {
                entries: Some(vec!["a.txt".to_string()]),
            },
            keys: HashMap::from([("f1".to_string(), InputEvent::Quit)]),
        };
        let resolved = resolve(&config, Some(KeyProfile::Handheld));
        assert_eq!(resolved.layout, ScreenLayout { cols: 30, rows: 8 });
        assert_eq!(resolved.file_entries, vec!["a.txt".to_string()]);
        assert_eq!(resolved.key_bindings.translate("f1"), InputEvent::Quit);
        assert_eq!(resolved.key_bindings.translate("alt_enter"), InputEvent::EscapeToMenu);
        assert!(resolved.menu_handles_escape);
    }

    #[test]
    fn test_resolve_cli_profile_wins() {
        let config = AstralixiConfig {
            general: GeneralConfig {
                key_profile: Some(KeyProfile::Handheld),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(KeyProfile::Desktop));
        assert_eq!(resolved.key_profile, KeyProfile::Desktop);
        assert_eq!(resolved.key_bindings.translate("alt_enter"), InputEvent::None);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
key_profile = "handheld"
open_delay_ms = 500

[screen]
cols = 32

[file_manager]
entries = ["readme.md", "bin/"]

[keys]
"f1" = "escape_to_menu"
"ctrl_x" = "quit"
"#;
        let config: AstralixiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.key_profile, Some(KeyProfile::Handheld));
        assert_eq!(config.general.open_delay_ms, Some(500));
        assert_eq!(config.screen.cols, Some(32));
        assert_eq!(config.screen.rows, None);
        assert_eq!(config.file_manager.entries.as_ref().map(Vec::len), Some(2));
        assert_eq!(config.keys.get("f1"), Some(&InputEvent::EscapeToMenu));
        assert_eq!(config.keys.get("ctrl_x"), Some(&InputEvent::Quit));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[screen]
rows = 20
"#;
        let config: AstralixiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.screen.rows, Some(20));
        assert!(config.general.key_profile.is_none());
        assert!(config.keys.is_empty());
    }

    #[test]
    fn test_unknown_event_name_is_parse_error() {
        let toml_str = r#"
[keys]
"f1" = "teleport"
"#;
        assert!(toml::from_str::<AstralixiConfig>(toml_str).is_err());
    }

    #[test]
    fn test_parse_profile_case_insensitive() {
        assert_eq!(parse_profile("Handheld"), Some(KeyProfile::Handheld));
        assert_eq!(parse_profile("DESKTOP"), Some(KeyProfile::Desktop));
        assert_eq!(parse_profile("watch"), None);
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = std::env::temp_dir().join(format!("astralixi-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.file_manager.entries.is_none());
        assert!(path.exists());

        // The generated file is all comments, so it parses back to defaults
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.keys.is_empty());

        let _ = fs::remove_dir_all(&dir);
    }
}
