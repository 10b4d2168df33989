use crate::session::Screen;
use crate::ui::app::{App, Focus};
use crate::ui::auth::AuthIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::Auth => handle_auth_key(app, key),
        Screen::Main => handle_main_key(app, key),
    }
}

fn handle_auth_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 't') {
        app.dispatch_auth(AuthIntent::ToggleMode);
        return;
    }

    match key.code {
        KeyCode::Enter => {
            app.submit_auth();
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.dispatch_auth(AuthIntent::SwitchField)
        }
        KeyCode::Backspace => app.dispatch_auth(AuthIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_auth(AuthIntent::Type(ch))
        }
        _ => {}
    }
}

fn handle_main_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'r') {
        app.refresh();
        return;
    }
    if is_ctrl_char(key, 'l') {
        app.logout();
        return;
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.cycle_panel(key.code == KeyCode::Tab);
        return;
    }

    match app.focus() {
        Focus::List => match key.code {
            KeyCode::Up => app.move_selection(-1),
            KeyCode::Down => app.move_selection(1),
            KeyCode::Enter | KeyCode::Char('e') => app.edit_selected(),
            KeyCode::Char('n') => app.new_record(),
            KeyCode::Char('d') => {
                app.delete_selected();
            }
            KeyCode::Char('i') => app.focus_form(),
            _ => {}
        },
        Focus::Form => match key.code {
            KeyCode::Esc => app.cancel_form(),
            KeyCode::Enter => {
                app.submit_form();
            }
            KeyCode::Up => app.move_field(-1),
            KeyCode::Down => app.move_field(1),
            KeyCode::Left => app.cycle_choice(false),
            KeyCode::Right => app.cycle_choice(true),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.type_char(ch)
            }
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::ui::auth::AuthMode;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, key(code, KeyModifiers::empty()));
    }

    #[test]
    fn ctrl_q_quits_from_any_screen() {
        let mut app = App::new(DisplayConfig::default());
        handle_key(&mut app, key(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_t_toggles_register_mode() {
        let mut app = App::new(DisplayConfig::default());
        handle_key(&mut app, key(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert_eq!(app.auth_form().mode, AuthMode::Register);
        assert!(app.auth_form().username.is_empty());
    }

    #[test]
    fn typed_credentials_land_in_form() {
        let mut app = App::new(DisplayConfig::default());
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.auth_form().username, "a");
        assert_eq!(app.auth_form().password, "b");
    }

    #[test]
    fn tab_switches_panel_on_main_screen() {
        let mut app = App::new(DisplayConfig::default());
        app.resume();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_panel(), crate::model::RecordKind::Brand);
        handle_key(&mut app, key(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(app.active_panel(), crate::model::RecordKind::Segment);
    }

    #[test]
    fn esc_leaves_form_and_clears_slot() {
        let mut app = App::new(DisplayConfig::default());
        app.resume();
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.focus(), Focus::Form);
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus(), Focus::List);
        assert!(app.console().catalog().edited_segment().name.is_empty());
    }
}
