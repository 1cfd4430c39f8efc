//! Configuration constants and utilities for queryline
//!
//! Endpoint paths and the API base URL live here so the transport and the
//! CLI driver agree on where requests go.

/// Default base URL of the search API
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable name for overriding the base URL
pub const BASE_URL_ENV_VAR: &str = "QUERYLINE_BASE_URL";

/// Endpoint returning the field schema
pub const FIELDS_PATH: &str = "/api/v1/fields";

/// Endpoint executing a search query
pub const SEARCH_PATH: &str = "/api/v1/search";

/// Get the API base URL, checking environment variable first, then falling back to default
pub fn get_base_url() -> String {
    std::env::var_os(BASE_URL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(FIELDS_PATH, "/api/v1/fields");
        assert_eq!(SEARCH_PATH, "/api/v1/search");
    }

    #[test]
    fn test_get_base_url_env_override() {
        // Save current env var state
        let original = std::env::var_os(BASE_URL_ENV_VAR);

        let test_url = "http://search.internal:9200";
        std::env::set_var(BASE_URL_ENV_VAR, test_url);
        assert_eq!(get_base_url(), test_url);

        // Restore original state
        match original {
            Some(val) => std::env::set_var(BASE_URL_ENV_VAR, val),
            None => std::env::remove_var(BASE_URL_ENV_VAR),
        }
    }
}
