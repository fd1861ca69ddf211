use crate::domain::auth::AdminAuthenticator;
use std::env;

/// Authenticator backed by a single configured username/password pair.
#[derive(Clone, Default)]
pub struct StaticCredentialAuthenticator {
    credentials: Option<(String, String)>,
}

impl StaticCredentialAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Some((username.into(), password.into())),
        }
    }

    /// Read `ADMIN_USERNAME` and `ADMIN_PASSWORD`.
    /// When either is unset or empty, every login attempt is rejected.
    pub fn from_env() -> Self {
        let username = env::var("ADMIN_USERNAME").unwrap_or_default();
        let password = env::var("ADMIN_PASSWORD").unwrap_or_default();

        if username.is_empty() || password.is_empty() {
            tracing::warn!("Admin credentials are not configured; admin login is disabled");
            return Self::default();
        }

        Self::new(username, password)
    }
}

impl AdminAuthenticator for StaticCredentialAuthenticator {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        match &self.credentials {
            Some((expected_user, expected_password)) => {
                username == expected_user && password == expected_password
            }
            None => false,
        }
    }
}
