pub mod credentials;
pub mod env;
pub mod loader;
pub mod paths;
pub mod store;
pub mod types;

pub use credentials::{AuthHeader, MaskedToken};
pub use env::{API_URL_VAR, LOGIN_URL_VAR, TEAM_SLUG_VAR};
pub use loader::{read_config_file, write_config_file, ConfigError, LoadError};
pub use paths::{FixedDir, PathResolver, XdgConfigDir};
pub use store::{UserConfigStore, CONFIG_FILE_NAME, CONFIG_NAMESPACE};
pub use types::{UserConfig, DEFAULT_API_URL, DEFAULT_LOGIN_URL};
