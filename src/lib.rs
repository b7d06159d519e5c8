//! Rolodex: a Zellij plugin that browses an employee directory.
//!
//! Rolodex fetches one batch of randomly generated people from a public profile
//! API and shows them as a searchable gallery of cards:
//! - One HTTP GET at startup, executed by the Zellij host
//! - Cards with name, email and location, selectable by keyboard or mouse
//! - Case-insensitive regex search over email, full name and city/state
//! - A detail modal with phone, address and birthday, and Prev/Next controls
//! - Visible loading, empty and error states
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Host calls only
//! └─────────────────────────────────────────────────────┘
//!                        │ Event / Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, search, modal state machine      │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Store         │   │ Client        │
//! │ (ui/)         │   │ (store/)      │   │ (client/)     │
//! │ - Card grid   │   │ - Profile     │   │ - Request URL │
//! │ - Modal       │   │   batch       │   │ - JSON parse  │
//! │ - Theming     │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/), Infrastructure, Observability    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`client`]: Profile API request building and response parsing
//! - [`domain`]: Core domain types (`ProfileRecord`, errors)
//! - [`infrastructure`]: Sandbox paths
//! - [`observability`]: Log file setup
//! - [`store`]: The fetched profile batch
//! - [`ui`]: Terminal rendering with theme support
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/rolodex.wasm" {
//!         api_url "https://randomuser.me/api/"
//!         results "12"
//!         nationality "us"
//!         navigation "store"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load**: parse configuration, initialize logging, create
//!    `AppState`, request web access, subscribe to key/mouse/web events
//! 2. **Permission Granted**: `Event::PermissionsGranted` emits
//!    `Action::FetchProfiles`; the shim hands it to the host
//! 3. **Response**: `Event::ProfilesFetched` fills the store and renders every
//!    card, or records the failure for the error panel
//! 4. **Interaction**: search, selection and the modal are pure state changes
//!
//! # Example
//!
//! ```rust
//! use rolodex::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_render, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert!(matches!(actions.as_slice(), [Action::FetchProfiles(_)]));
//! # Ok::<(), rolodex::DirectoryError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod store;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, LoadStatus, NavigationScope};
pub use domain::{DirectoryError, ProfileRecord, Result};
pub use ui::Theme;

use app::state::DEFAULT_BATCH_SIZE;
use client::ProfileClient;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Endpoint used when no `api_url` is configured.
pub const DEFAULT_API_URL: &str = "https://randomuser.me/api/";

/// Nationality filter used when none is configured.
pub const DEFAULT_NATIONALITY: &str = "us";

/// Batch sizes the profile API accepts.
const VALID_BATCH_SIZES: RangeInclusive<usize> = 1..=5000;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/rolodex.wasm" {
///     results "24"
///     navigation "filtered"
///     theme_file "~/.config/rolodex/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Profile API endpoint. Default: `https://randomuser.me/api/`
    pub api_url: String,

    /// Number of profiles fetched in the single batch. Default: 12
    pub results: usize,

    /// Nationality filter passed as `nat`. Default: `"us"`
    pub nationality: String,

    /// Records walked by the modal's Prev/Next. Default: the whole store.
    pub navigation: NavigationScope,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for the log file. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            results: DEFAULT_BATCH_SIZE,
            nationality: DEFAULT_NATIONALITY.to_string(),
            navigation: NavigationScope::default(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing, empty or invalid values fall back to their defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `api_url`: used as given (validated later by `ProfileClient`)
    /// - `results`: integer in `1..=5000`
    /// - `nationality`: lowercased
    /// - `navigation`: `store` or `filtered`
    /// - `theme`, `theme_file`, `trace_level`: used as given
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use rolodex::{Config, NavigationScope};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("results".to_string(), "30".to_string());
    /// map.insert("navigation".to_string(), "filtered".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.results, 30);
    /// assert_eq!(config.navigation, NavigationScope::Filtered);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
        };

        let results = value("results")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|n| VALID_BATCH_SIZES.contains(n))
            .unwrap_or_else(|| {
                if let Some(raw) = config.get("results") {
                    tracing::debug!(results = %raw, "invalid results option, using default");
                }
                DEFAULT_BATCH_SIZE
            });

        let navigation = value("navigation")
            .and_then(NavigationScope::from_name)
            .unwrap_or_default();

        Self {
            api_url: value("api_url").unwrap_or(DEFAULT_API_URL).to_string(),
            results,
            nationality: value("nationality")
                .unwrap_or(DEFAULT_NATIONALITY)
                .to_ascii_lowercase(),
            navigation,
            theme_name: value("theme").map(String::from),
            theme_file: value("theme_file").map(String::from),
            trace_level: value("trace_level").map(String::from),
        }
    }
}

/// Creates the application state for `config`.
///
/// Loads the theme (file, then name, then default) and builds the profile
/// client. An unusable `api_url` does not abort startup: the state starts in
/// [`LoadStatus::Failed`] so the error is shown instead of the gallery.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing rolodex plugin");

    let mut state = AppState::new(load_theme(config));
    state.batch_size = config.results;
    state.navigation = config.navigation;

    match ProfileClient::new(&config.api_url, &config.nationality) {
        Ok(client) => state.client = Some(client),
        Err(e) => {
            tracing::error!(error = %e, "cannot build profile client");
            state.load_status = LoadStatus::Failed(e);
        }
    }

    state
}

fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.results, 12);
        assert_eq!(config.nationality, "us");
        assert_eq!(config.navigation, NavigationScope::Store);
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("results", "0"),
            ("navigation", "sideways"),
            ("api_url", "  "),
        ]));
        assert_eq!(config.results, 12);
        assert_eq!(config.navigation, NavigationScope::Store);
        assert_eq!(config.api_url, DEFAULT_API_URL);

        let config = Config::from_zellij(&map(&[("results", "9000")]));
        assert_eq!(config.results, 12);
    }

    #[test]
    fn test_parses_values() {
        let config = Config::from_zellij(&map(&[
            ("results", " 24 "),
            ("nationality", "GB"),
            ("theme", "catppuccin-latte"),
            ("trace_level", "debug"),
        ]));
        assert_eq!(config.results, 24);
        assert_eq!(config.nationality, "gb");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_initialize_applies_config() {
        let config = Config {
            results: 5,
            navigation: NavigationScope::Filtered,
            theme_name: Some("catppuccin-frappe".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.batch_size, 5);
        assert_eq!(state.navigation, NavigationScope::Filtered);
        assert_eq!(state.theme.name, "catppuccin-frappe");
        assert!(state.client.is_some());
        assert_eq!(state.load_status, LoadStatus::AwaitingPermission);
    }

    #[test]
    fn test_initialize_with_bad_url_fails_visibly() {
        let config = Config {
            api_url: "not a url".to_string(),
            ..Config::default()
        };
        let state = initialize(&config);
        assert!(state.client.is_none());
        assert!(matches!(state.load_status, LoadStatus::Failed(DirectoryError::Config(_))));
    }

    #[test]
    fn test_theme_file_takes_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(include_str!("../themes/catppuccin-macchiato.toml").as_bytes())
            .unwrap();

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(file.path().display().to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-macchiato");

        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }
}
