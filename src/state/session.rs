#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// The authenticated identity: a single opaque username.
///
/// Presence means authenticated; absence means the login view is shown. The
/// username is persisted in localStorage only to skip the login screen
/// across reloads. It is not a credential and grants no access beyond
/// triggering a profile fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub username: String,
}

/// Session lifecycle state with explicit init and teardown.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub session: Option<Session>,
}

impl SessionState {
    /// Init rule: adopt the persisted identity read at startup, if any.
    #[must_use]
    pub fn from_persisted(username: Option<String>) -> Self {
        Self {
            session: username.map(|username| Session { username }),
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }

    pub fn sign_in(&mut self, username: &str) {
        self.session = Some(Session { username: username.to_owned() });
    }

    /// Teardown rule: the caller clears the persisted copy and all
    /// session-scoped state (conversation, profile) alongside this.
    pub fn sign_out(&mut self) {
        self.session = None;
    }
}
