//! Application constants
//!
//! Centralized location for labels, placeholders and configuration defaults.

/// Tab labels, in display order
pub const TAB_TITLES: [&str; 3] = ["Headers", "Body", "Response"];

pub const URL_PLACEHOLDER: &str = "https://api.example.com";
pub const KEY_PLACEHOLDER: &str = "key";
pub const VALUE_PLACEHOLDER: &str = "value";
pub const BODY_PLACEHOLDER: &str = "Raw request body";

/// External HTTP client used when the config does not name one
pub const DEFAULT_CURL_PATH: &str = "curl";

/// Directory under the home directory holding `config.yaml`
pub const CONFIG_DIR_NAME: &str = ".curlman";
pub const CONFIG_FILE_NAME: &str = "config.yaml";

pub const LOG_FILE_NAME: &str = "curlman.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV_VAR: &str = "CURLMAN_LOG";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
