//! Configuration loading and environment variable interpolation

use crate::error::{Error, Result};
use regex::Regex;
use std::env;
use std::fs;
use std::path::Path;

use super::Config;

const CONFIG_FILENAME: &str = "edgeguard.toml";

/// Load configuration from edgeguard.toml
pub fn load_config() -> Result<Config> {
    let config_path = find_config_file()?;
    load_config_from_path(&config_path)
}

/// Load configuration from a specific path
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|_| Error::ConfigNotFound)?;
    let content = interpolate_env_vars(&content);
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Find the configuration file, searching upward from current directory
fn find_config_file() -> Result<std::path::PathBuf> {
    let mut current = env::current_dir().map_err(|e| Error::Config(e.to_string()))?;

    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Ok(config_path);
        }

        if !current.pop() {
            return Err(Error::ConfigNotFound);
        }
    }
}

/// Interpolate environment variables in the format ${VAR_NAME} or ${VAR_NAME:-default}
fn interpolate_env_vars(content: &str) -> String {
    // This regex is a compile-time constant, panicking is acceptable here
    // as it indicates a programming error in the codebase, not a runtime issue
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}")
        .expect("Invalid regex pattern - this is a bug in the codebase");

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        env::var(var_name).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}

/// Generate a default configuration file content
pub fn default_config_content() -> &'static str {
    r#"# Edgeguard Configuration

[server]
host = "0.0.0.0"
port = 4680

[routes]
# Public paths are checked first and never require a session
public = ["/auth/", "/pricing", "/about"]
# Protected paths require a verified session
protected = ["/dashboard", "/resumes", "/analysis", "/settings"]
# Skipped by the guard entirely (static assets, API paths)
exclude = ["/api/", "/_next/", "/static/", "/favicon.ico"]
# "prefix" or "substring"
match_mode = "prefix"
login_path = "/auth/login"

[session]
refresh_cookie = "refresh_token"
access_cookie = "access_token"
secure = true
max_age_days = 30

[provider]
# "remote" delegates to the identity provider, "local" only checks expiry
strategy = "remote"
validate_url = "${PROVIDER_VALIDATE_URL:-http://127.0.0.1:9000/auth/validate}"
timeout_secs = 5

[upload]
max_size_bytes = 5242880
allowed_types = [
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
]
"#
}
