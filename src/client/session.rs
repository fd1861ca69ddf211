use crate::domain::auth::AdminAuthenticator;

/// Where the UI should go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Login,
    AdminPanel,
}

pub const LOGIN_ERROR: &str = "Invalid username or password.";

/// Per-tab admin login flag. Lives only on the client; the server has no
/// notion of sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminSession {
    logged_in: bool,
}

impl AdminSession {
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Clears the flag and sends the user back to the login page.
    pub fn logout(&mut self) -> Navigation {
        self.logged_in = false;
        Navigation::Login
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Redirect(Navigation),
    Error(&'static str),
}

pub struct LoginFlow<'a> {
    authenticator: &'a dyn AdminAuthenticator,
}

impl<'a> LoginFlow<'a> {
    pub fn new(authenticator: &'a dyn AdminAuthenticator) -> Self {
        Self { authenticator }
    }

    /// Sets the session flag only when the credentials are accepted.
    pub fn login(&self, session: &mut AdminSession, username: &str, password: &str) -> LoginOutcome {
        if self.authenticator.authenticate(username, password) {
            session.logged_in = true;
            tracing::info!("Admin logged in");
            LoginOutcome::Redirect(Navigation::AdminPanel)
        } else {
            tracing::warn!("Admin login rejected");
            LoginOutcome::Error(LOGIN_ERROR)
        }
    }
}
