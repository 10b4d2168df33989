use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AuthIntent {
    /// Switch between login and registration.
    ToggleMode,
    /// Move focus to the other input.
    SwitchField,
    Type(char),
    Backspace,
    /// Forget the typed password (after a submit).
    ClearPassword,
    /// Back to an empty login form.
    Reset,
}

impl Intent for AuthIntent {}
