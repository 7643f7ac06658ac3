//! API utilities for frontend-backend communication
//!
//! The directory API base URL is injected as configuration instead of being
//! derived from a global, so the client can be pointed at any host.

/// Directory API host used when nothing is configured at build time.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:4000";

/// Configuration of the directory API client, provided through context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    api_base: String,
}

impl DirectoryConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Reads `DIRECTORY_API_BASE` at compile time (wasm has no process env).
    pub fn from_build_env() -> Self {
        Self::new(option_env!("DIRECTORY_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build a full API URL from a path
    ///
    /// # Example
    /// ```rust
    /// # use directory_frontend::shared::api_utils::DirectoryConfig;
    /// let config = DirectoryConfig::new("http://127.0.0.1:4000/");
    /// assert_eq!(config.url("/persons/2"), "http://127.0.0.1:4000/persons/2");
    /// ```
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base, path)
        } else {
            format!("{}/{}", self.api_base, path)
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = DirectoryConfig::new("http://example.test:4000///");
        assert_eq!(config.api_base(), "http://example.test:4000");
        assert_eq!(config.url("/universities"), "http://example.test:4000/universities");
        assert_eq!(config.url("universities"), "http://example.test:4000/universities");
    }

    #[test]
    fn test_default_host() {
        assert_eq!(DirectoryConfig::default().api_base(), DEFAULT_API_BASE);
    }
}
