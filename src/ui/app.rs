use crate::config::DisplayConfig;
use crate::model::{AnyRecord, RecordId, RecordKind};
use crate::mvi::Reducer;
use crate::session::{Console, RemoteOutcome, Screen, UiCommand};
use crate::ui::auth::{AuthFormState, AuthIntent, AuthMode, AuthReducer};
use crate::ui::form::{self, FormField};
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    /// Record list of the active panel.
    List,
    /// Edit form of the active panel.
    Form,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    console: Console,
    /// Credentials screen (MVI pattern).
    auth_form: AuthFormState,
    active: RecordKind,
    focus: Focus,
    selection: [usize; 3],
    field: [usize; 3],
    /// Raw text of the vehicle year and price inputs, so partial numbers
    /// like "400." survive between keystrokes.
    year_input: String,
    price_input: String,
    display: DisplayConfig,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(display: DisplayConfig) -> Self {
        let mut app = Self {
            should_quit: false,
            console: Console::new(),
            auth_form: AuthFormState::default(),
            active: RecordKind::Segment,
            focus: Focus::List,
            selection: [0; 3],
            field: [0; 3],
            year_input: String::new(),
            price_input: String::new(),
            display,
            command_sender: None,
            last_command_error: None,
        };
        app.sync_vehicle_inputs();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn screen(&self) -> Screen {
        self.console.screen()
    }

    pub fn auth_form(&self) -> &AuthFormState {
        &self.auth_form
    }

    pub fn active_panel(&self) -> RecordKind {
        self.active
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    pub fn year_input(&self) -> &str {
        &self.year_input
    }

    pub fn price_input(&self) -> &str {
        &self.price_input
    }

    /// Selected row of a panel, clamped to the current collection.
    pub fn selection(&self, kind: RecordKind) -> usize {
        let len = self.console.catalog().len(kind);
        self.selection[slot(kind)].min(len.saturating_sub(1))
    }

    pub fn form_field(&self, kind: RecordKind) -> FormField {
        let fields = FormField::for_kind(kind);
        fields[self.field[slot(kind)].min(fields.len() - 1)]
    }

    /// Enter the management screen with a token found at startup.
    pub fn resume(&mut self) {
        let commands = self.console.resume();
        self.send_all(commands);
    }

    pub fn on_remote(&mut self, outcome: RemoteOutcome) {
        let before = self.console.screen();
        let staged = self.console.catalog().edited_vehicle().clone();
        let follow_ups = self.console.apply(outcome);
        match (before, self.console.screen()) {
            (Screen::Auth, Screen::Main) => {
                self.dispatch_auth(AuthIntent::Reset);
                self.active = RecordKind::Segment;
                self.focus = Focus::List;
            }
            (Screen::Main, Screen::Auth) => self.reset_view(),
            (Screen::Auth, Screen::Auth) => {
                if self.console.auth_status().is_some_and(|s| s.is_failure()) {
                    self.dispatch_auth(AuthIntent::ClearPassword);
                }
            }
            (Screen::Main, Screen::Main) => {}
        }
        if self.console.catalog().edited_vehicle() != &staged {
            self.sync_vehicle_inputs();
        }
        self.send_all(follow_ups);
    }

    // ========================================================================
    // Credentials screen (MVI pattern)
    // ========================================================================

    pub fn dispatch_auth(&mut self, intent: AuthIntent) {
        dispatch_mvi!(self, auth_form, AuthReducer, intent);
    }

    /// Log in or register with the typed credentials.
    pub fn submit_auth(&mut self) -> bool {
        if !self.auth_form.is_complete() {
            return false;
        }
        let credentials = self.auth_form.credentials();
        let command = match self.auth_form.mode {
            AuthMode::Login => self.console.login(credentials),
            AuthMode::Register => self.console.register(credentials),
        };
        self.send_command(command)
    }

    // ========================================================================
    // Management screen
    // ========================================================================

    pub fn refresh(&mut self) {
        if self.console.screen() != Screen::Main {
            return;
        }
        let commands = self.console.refresh();
        self.send_all(commands);
    }

    pub fn logout(&mut self) {
        if self.console.screen() != Screen::Main {
            return;
        }
        let command = self.console.logout();
        self.reset_view();
        self.send_command(command);
    }

    /// Back to a blank credentials screen and unselected panels.
    fn reset_view(&mut self) {
        self.selection = [0; 3];
        self.field = [0; 3];
        self.focus = Focus::List;
        self.active = RecordKind::Segment;
        self.dispatch_auth(AuthIntent::Reset);
        self.sync_vehicle_inputs();
    }

    pub fn cycle_panel(&mut self, forward: bool) {
        let pos = slot(self.active);
        let next = if forward { (pos + 1) % 3 } else { (pos + 2) % 3 };
        self.active = RecordKind::ALL[next];
        self.focus = Focus::List;
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.console.catalog().len(self.active);
        if len == 0 {
            self.selection[slot(self.active)] = 0;
            return;
        }
        let current = self.selection(self.active);
        let next = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
        self.selection[slot(self.active)] = next;
    }

    pub fn selected_record(&self, kind: RecordKind) -> Option<AnyRecord> {
        self.console.catalog().record_at(kind, self.selection(kind))
    }

    /// Copy the selected record into the form.
    pub fn edit_selected(&mut self) {
        let Some(record) = self.selected_record(self.active) else {
            return;
        };
        self.console.begin_edit(record);
        self.sync_vehicle_inputs();
        self.open_form();
    }

    /// Start composing a new record in the form.
    pub fn new_record(&mut self) {
        self.console.clear_edit(self.active);
        self.sync_vehicle_inputs();
        self.open_form();
    }

    pub fn delete_selected(&mut self) -> bool {
        let Some(record) = self.selected_record(self.active) else {
            return false;
        };
        let command = self.console.delete(record.kind(), record.id());
        self.send_command(command)
    }

    pub fn focus_form(&mut self) {
        self.focus = Focus::Form;
    }

    /// Esc in the form: drop the staged record.
    pub fn cancel_form(&mut self) {
        self.console.clear_edit(self.active);
        self.sync_vehicle_inputs();
        self.focus = Focus::List;
    }

    pub fn move_field(&mut self, direction: i32) {
        let len = FormField::for_kind(self.active).len();
        let current = self.field[slot(self.active)].min(len - 1);
        self.field[slot(self.active)] = if direction.is_negative() {
            (current + len - 1) % len
        } else {
            (current + 1) % len
        };
    }

    pub fn type_char(&mut self, ch: char) {
        let kind = self.active;
        let field = self.form_field(kind);
        match field {
            FormField::Name => {
                if !form::accepts(field, "", ch) {
                    return;
                }
                let mut name = self.console.catalog().edited(kind).name().to_string();
                name.push(ch);
                self.console.edit_field(form::name_patch(kind, name));
            }
            FormField::ReleaseYear => {
                if form::accepts(field, &self.year_input, ch) {
                    self.year_input.push(ch);
                    self.console
                        .edit_field(form::vehicle_patch(field, &self.year_input, 0));
                }
            }
            FormField::Price => {
                if form::accepts(field, &self.price_input, ch) {
                    self.price_input.push(ch);
                    self.console
                        .edit_field(form::vehicle_patch(field, &self.price_input, 0));
                }
            }
            FormField::Segment | FormField::Brand => {}
        }
    }

    pub fn backspace(&mut self) {
        let kind = self.active;
        let field = self.form_field(kind);
        match field {
            FormField::Name => {
                let mut name = self.console.catalog().edited(kind).name().to_string();
                if name.pop().is_some() {
                    self.console.edit_field(form::name_patch(kind, name));
                }
            }
            FormField::ReleaseYear => {
                if self.year_input.pop().is_some() {
                    self.console
                        .edit_field(form::vehicle_patch(field, &self.year_input, 0));
                }
            }
            FormField::Price => {
                if self.price_input.pop().is_some() {
                    self.console
                        .edit_field(form::vehicle_patch(field, &self.price_input, 0));
                }
            }
            FormField::Segment | FormField::Brand => {}
        }
    }

    /// Left/Right on the segment or brand selector.
    pub fn cycle_choice(&mut self, forward: bool) {
        let field = self.form_field(self.active);
        let catalog = self.console.catalog();
        let staged = catalog.edited_vehicle();
        let (ids, current): (Vec<RecordId>, RecordId) = match field {
            FormField::Segment => (
                catalog.segments().iter().map(|s| s.id).collect(),
                staged.segment,
            ),
            FormField::Brand => (catalog.brands().iter().map(|b| b.id).collect(), staged.brand),
            _ => return,
        };
        if let Some(choice) = form::cycle(&ids, current, forward) {
            self.console.edit_field(form::vehicle_patch(field, "", choice));
        }
    }

    /// Submit the form: create when the staged id is 0, update otherwise.
    pub fn submit_form(&mut self) -> bool {
        let Some(command) = self.console.submit(self.active) else {
            return false;
        };
        self.focus = Focus::List;
        self.send_command(command)
    }

    fn open_form(&mut self) {
        self.field[slot(self.active)] = 0;
        self.focus = Focus::Form;
    }

    fn sync_vehicle_inputs(&mut self) {
        let staged = self.console.catalog().edited_vehicle();
        self.year_input = staged.release_year.to_string();
        self.price_input = if staged.price == 0.0 {
            String::new()
        } else {
            staged.price.to_string()
        };
    }

    fn send_all(&mut self, commands: Vec<UiCommand>) {
        for command in commands {
            if !self.send_command(command) {
                break;
            }
        }
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to queue remote call");
                self.last_command_error = Some(format!("Worker unavailable: {}", err));
                false
            }
        }
    }
}

fn slot(kind: RecordKind) -> usize {
    match kind {
        RecordKind::Segment => 0,
        RecordKind::Brand => 1,
        RecordKind::Vehicle => 2,
    }
}
