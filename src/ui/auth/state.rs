use crate::model::Credentials;
use crate::mvi::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    #[default]
    Username,
    Password,
}

/// Contents of the credentials screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub focused: AuthField,
    pub username: String,
    pub password: String,
}

impl ViewState for AuthFormState {}

impl AuthFormState {
    /// Both inputs filled in.
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.trim(), self.password.clone())
    }

    /// Password as shown on screen.
    pub fn masked_password(&self) -> String {
        "*".repeat(self.password.chars().count())
    }
}
