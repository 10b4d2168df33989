pub mod auth;
pub mod credentials;
pub mod loader;
pub mod token;
pub mod types;

pub use auth::{build_auth_header, AuthHeader};
pub use credentials::{AuthScheme, SecureString};
pub use loader::ConfigError;
pub use token::{TokenStore, TokenStoreError};
pub use types::{ApiConfig, Config, DisplayConfig, SessionConfig};
