#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Confirmation shown after a successful registration.
pub const REGISTERED_TEXT: &str = "Account created! Please log in.";
/// Notice shown after a reset code has been dispatched by email.
pub const CODE_SENT_TEXT: &str = "Code sent! Check your email.";
/// Confirmation shown after a successful password reset.
pub const PASSWORD_RESET_TEXT: &str = "Password reset! Please log in.";

/// The four stages of the authentication flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStage {
    #[default]
    Login,
    Register,
    Forgot,
    Reset,
}

/// Form fields shared across the four stages.
#[derive(Clone, Debug, Default)]
pub struct AuthForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub code: String,
    pub new_password: String,
}

/// Authentication flow state, transitioned only through named operations.
///
/// `message` is the single user-visible slot for both server-reported errors
/// and flow notices; `busy` is set for the duration of the one in-flight
/// network call and disables the submit control against duplicate
/// submission.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub stage: AuthStage,
    pub form: AuthForm,
    pub message: Option<String>,
    pub busy: bool,
}

impl AuthState {
    /// Switch stages via a navigation link. The current message is kept, so
    /// a notice like the post-registration confirmation survives the
    /// transition that displays it.
    pub fn goto(&mut self, stage: AuthStage) {
        self.stage = stage;
    }

    /// Start a submission. Returns `false` (and changes nothing) if a call
    /// is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.message = None;
        true
    }

    /// Any submission failed: surface the message, stay on the stage.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.busy = false;
        self.message = Some(message.into());
    }

    pub fn register_succeeded(&mut self) {
        self.busy = false;
        self.stage = AuthStage::Login;
        self.message = Some(REGISTERED_TEXT.to_owned());
    }

    pub fn forgot_succeeded(&mut self) {
        self.busy = false;
        self.stage = AuthStage::Reset;
        self.message = Some(CODE_SENT_TEXT.to_owned());
    }

    pub fn reset_succeeded(&mut self) {
        self.busy = false;
        self.stage = AuthStage::Login;
        self.message = Some(PASSWORD_RESET_TEXT.to_owned());
    }
}
