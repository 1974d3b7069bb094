//! Environment overrides for the user config.
//!
//! Overrides only touch the in-memory record. Nothing is written back
//! unless the caller saves the record afterwards.

use super::types::UserConfig;

/// Overrides `api_url`.
pub const API_URL_VAR: &str = "TURBO_API";
/// Overrides `login_url`.
pub const LOGIN_URL_VAR: &str = "TURBO_LOGIN";
/// Overrides `team_slug`.
pub const TEAM_SLUG_VAR: &str = "TURBO_TEAM";

impl UserConfig {
    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides using `lookup` to read variables.
    ///
    /// Unset and empty variables leave the field alone.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields: [(&str, &mut String); 3] = [
            (API_URL_VAR, &mut self.api_url),
            (LOGIN_URL_VAR, &mut self.login_url),
            (TEAM_SLUG_VAR, &mut self.team_slug),
        ];
        for (key, field) in fields {
            if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                tracing::debug!(var = key, "Applying environment override");
                *field = value;
            }
        }
    }
}
