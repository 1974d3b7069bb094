use std::fmt;

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::config::credentials::MaskedToken;

/// API base URL used when the config file does not set one.
pub const DEFAULT_API_URL: &str = "https://api.vercel.com";
/// Login base URL used when the config file does not set one.
pub const DEFAULT_LOGIN_URL: &str = "https://vercel.com";

/// Settings for the logged-in user, persisted as `config.json`.
///
/// Empty strings mean "unset" and are left out of the file. `Default`
/// fills in the built-in URLs; decoding starts from that value, so keys
/// missing from the file keep their defaults while a key present as `""`
/// overwrites them. A `null` value also keeps the default, a repeated key
/// takes its last value and keys match case-insensitively.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    /// Bearer token. Empty when logged out.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub team_id: String,
    /// Backend URL (defaults to api.vercel.com).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_url: String,
    /// Login URL (defaults to vercel.com).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub login_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub team_slug: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            team_id: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            login_url: DEFAULT_LOGIN_URL.to_string(),
            team_slug: String::new(),
        }
    }
}

impl UserConfig {
    /// A record with every field empty, URLs included.
    ///
    /// This is what a reset writes; it serializes to `{}`.
    pub fn empty() -> Self {
        Self {
            token: String::new(),
            team_id: String::new(),
            api_url: String::new(),
            login_url: String::new(),
            team_slug: String::new(),
        }
    }

    /// Whether every field is empty, i.e. the record a reset writes.
    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    /// Whether a bearer token is present.
    pub fn is_logged_in(&self) -> bool {
        !self.token.is_empty()
    }

    /// Whether a team has been selected, by id or by slug.
    pub fn has_team(&self) -> bool {
        !self.team_id.is_empty() || !self.team_slug.is_empty()
    }
}

impl<'de> Deserialize<'de> for UserConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(UserConfigVisitor)
    }
}

struct UserConfigVisitor;

impl<'de> Visitor<'de> for UserConfigVisitor {
    type Value = UserConfig;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a user config object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<UserConfig, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut config = UserConfig::default();
        while let Some(key) = map.next_key::<String>()? {
            let field = match key.to_ascii_lowercase().as_str() {
                "token" => &mut config.token,
                "teamid" => &mut config.team_id,
                "apiurl" => &mut config.api_url,
                "loginurl" => &mut config.login_url,
                "teamslug" => &mut config.team_slug,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                    continue;
                }
            };
            if let Some(value) = map.next_value::<Option<String>>()? {
                *field = value;
            }
        }
        Ok(config)
    }
}

impl fmt::Debug for UserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserConfig")
            .field("token", &MaskedToken(&self.token))
            .field("team_id", &self.team_id)
            .field("api_url", &self.api_url)
            .field("login_url", &self.login_url)
            .field("team_slug", &self.team_slug)
            .finish()
    }
}
