use crate::mvi::Reducer;

use super::intent::AuthIntent;
use super::state::{AuthField, AuthFormState, AuthMode};

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthFormState;
    type Intent = AuthIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthIntent::ToggleMode => AuthFormState {
                mode: match state.mode {
                    AuthMode::Login => AuthMode::Register,
                    AuthMode::Register => AuthMode::Login,
                },
                ..state
            },
            AuthIntent::SwitchField => AuthFormState {
                focused: match state.focused {
                    AuthField::Username => AuthField::Password,
                    AuthField::Password => AuthField::Username,
                },
                ..state
            },
            AuthIntent::Type(ch) => {
                let mut state = state;
                match state.focused {
                    AuthField::Username => state.username.push(ch),
                    AuthField::Password => state.password.push(ch),
                }
                state
            }
            AuthIntent::Backspace => {
                let mut state = state;
                match state.focused {
                    AuthField::Username => state.username.pop(),
                    AuthField::Password => state.password.pop(),
                };
                state
            }
            AuthIntent::ClearPassword => AuthFormState {
                password: String::new(),
                ..state
            },
            AuthIntent::Reset => AuthFormState::default(),
        }
    }
}
