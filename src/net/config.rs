//! Service endpoint configuration.
//!
//! The two backing services are plain HTTP endpoints reached directly from
//! the browser. Base URLs are resolved at build time so a deployment can
//! point the client elsewhere without code changes.

pub const DEFAULT_ACCOUNT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_GENERATE_BASE_URL: &str = "http://127.0.0.1:5002";

/// Base URLs for the account/profile service and the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub account_base_url: String,
    pub generate_base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            account_base_url: DEFAULT_ACCOUNT_BASE_URL.to_owned(),
            generate_base_url: DEFAULT_GENERATE_BASE_URL.to_owned(),
        }
    }
}

impl ServiceConfig {
    /// Build config from compile-time environment overrides.
    ///
    /// Optional:
    /// - `SAFEPLATE_ACCOUNT_URL`: account/profile service base URL
    /// - `SAFEPLATE_GENERATE_URL`: generation service base URL
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            account_base_url: normalize_base(option_env!("SAFEPLATE_ACCOUNT_URL").unwrap_or(DEFAULT_ACCOUNT_BASE_URL)),
            generate_base_url: normalize_base(
                option_env!("SAFEPLATE_GENERATE_URL").unwrap_or(DEFAULT_GENERATE_BASE_URL),
            ),
        }
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}/login", self.account_base_url)
    }

    #[must_use]
    pub fn register_url(&self) -> String {
        format!("{}/register", self.account_base_url)
    }

    #[must_use]
    pub fn forgot_password_url(&self) -> String {
        format!("{}/forgot-password", self.account_base_url)
    }

    #[must_use]
    pub fn reset_password_url(&self) -> String {
        format!("{}/reset-password", self.account_base_url)
    }

    #[must_use]
    pub fn profile_url(&self, username: &str) -> String {
        format!("{}/profile/{username}", self.account_base_url)
    }

    #[must_use]
    pub fn generate_url(&self) -> String {
        format!("{}/generate", self.generate_base_url)
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
