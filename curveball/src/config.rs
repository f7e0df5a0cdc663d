//! Runtime configuration.

use std::env;

/// Environment variable holding the secret revealed for a granted wish.
pub const SECRET_ENV_VAR: &str = "FLAG";

/// Process configuration, loaded once at startup and handed to the session.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    secret: Option<String>,
}

impl Config {
    /// Configuration with an explicit secret.
    pub fn new(secret: Option<String>) -> Self {
        Self { secret }
    }

    /// Read the secret from [`SECRET_ENV_VAR`].
    ///
    /// An unset variable is not an error. Non-UTF-8 contents are converted
    /// lossily.
    pub fn from_env() -> Self {
        Self::new(env::var_os(SECRET_ENV_VAR).map(|value| value.to_string_lossy().into_owned()))
    }

    /// The secret, or the empty string if none was configured.
    pub fn secret(&self) -> &str {
        self.secret.as_deref().unwrap_or_default()
    }
}
