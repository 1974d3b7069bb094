//! Token handling for the stored user config.
//!
//! The bearer token must never end up in logs or terminal output by
//! accident, so anything that formats a `UserConfig` goes through
//! [`MaskedToken`].

use super::types::UserConfig;

/// Display/Debug wrapper that hides a token's value.
///
/// An empty token is shown as `<none>` so "logged out" stays visible.
pub struct MaskedToken<'a>(pub &'a str);

impl std::fmt::Display for MaskedToken<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            write!(f, "<none>")
        } else {
            write!(f, "••••••••")
        }
    }
}

impl std::fmt::Debug for MaskedToken<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

impl UserConfig {
    /// Build the `Authorization: Bearer` header for API calls.
    ///
    /// Returns `None` when the user is logged out.
    pub fn auth_header(&self) -> Option<AuthHeader> {
        if !self.is_logged_in() {
            return None;
        }
        Some((
            "Authorization".to_string(),
            format!("Bearer {}", self.token),
        ))
    }
}
