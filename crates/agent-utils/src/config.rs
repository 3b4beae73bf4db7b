//! Environment-backed configuration helpers

use std::path::PathBuf;

/// Load a `.env` file from the current directory or its parents, if any
///
/// Returns the path that was loaded. Variables already present in the
/// process environment are not overridden.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenv::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            Some(path)
        }
        Err(_) => None,
    }
}

/// Read an environment variable, treating unset and blank values alike
pub fn env_var(name: &str) -> Option<String> {
    non_blank(std::env::var(name).ok())
}

/// Discard values that are empty or whitespace-only
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
