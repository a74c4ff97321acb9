//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub routes: RoutesConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub upload: UploadConfig,
}

/// Server configuration for the HTTP listener
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4680
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// How route list entries are matched against request paths
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    Prefix,
    Substring,
}

/// Route classification lists for the edge guard
///
/// Ordered lists of path patterns. The public list is checked first and
/// wins; the exclude list (static assets, API paths) is always matched
/// by prefix and skips the guard entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    #[serde(default = "default_public_routes")]
    pub public: Vec<String>,

    #[serde(default = "default_protected_routes")]
    pub protected: Vec<String>,

    #[serde(default = "default_exclude_routes")]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub match_mode: MatchMode,

    #[serde(default = "default_login_path")]
    pub login_path: String,
}

fn default_public_routes() -> Vec<String> {
    vec![
        "/auth/".to_string(),
        "/pricing".to_string(),
        "/about".to_string(),
    ]
}

fn default_protected_routes() -> Vec<String> {
    vec![
        "/dashboard".to_string(),
        "/resumes".to_string(),
        "/analysis".to_string(),
        "/settings".to_string(),
    ]
}

fn default_exclude_routes() -> Vec<String> {
    vec![
        "/api/".to_string(),
        "/_next/".to_string(),
        "/static/".to_string(),
        "/favicon.ico".to_string(),
    ]
}

fn default_login_path() -> String {
    "/auth/login".to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            public: default_public_routes(),
            protected: default_protected_routes(),
            exclude: default_exclude_routes(),
            match_mode: MatchMode::default(),
            login_path: default_login_path(),
        }
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_refresh_cookie")]
    pub refresh_cookie: String,

    #[serde(default = "default_access_cookie")]
    pub access_cookie: String,

    #[serde(default = "default_secure_cookies")]
    pub secure: bool,

    #[serde(default = "default_max_age_days")]
    pub max_age_days: i64,
}

fn default_refresh_cookie() -> String {
    "refresh_token".to_string()
}

fn default_access_cookie() -> String {
    "access_token".to_string()
}

fn default_secure_cookies() -> bool {
    true
}

fn default_max_age_days() -> i64 {
    30
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            refresh_cookie: default_refresh_cookie(),
            access_cookie: default_access_cookie(),
            secure: default_secure_cookies(),
            max_age_days: default_max_age_days(),
        }
    }
}

/// Which strategy the session verifier uses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VerifyStrategy {
    /// Delegate to the identity provider's validation endpoint
    #[default]
    Remote,
    /// Expiry-only check of the token payload, no signature verification
    Local,
}

/// Identity provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub strategy: VerifyStrategy,

    #[serde(default = "default_validate_url")]
    pub validate_url: String,

    /// Remote validation timeout; a timed-out call counts as invalid
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_validate_url() -> String {
    "http://127.0.0.1:9000/auth/validate".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            strategy: VerifyStrategy::default(),
            validate_url: default_validate_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Resume upload validation limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    #[serde(default = "default_max_size_bytes")]
    pub max_size_bytes: usize,

    #[serde(default = "default_allowed_types")]
    pub allowed_types: Vec<String>,
}

fn default_max_size_bytes() -> usize {
    5 * 1024 * 1024
}

fn default_allowed_types() -> Vec<String> {
    vec![
        "application/pdf".to_string(),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document".to_string(),
    ]
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: default_max_size_bytes(),
            allowed_types: default_allowed_types(),
        }
    }
}
