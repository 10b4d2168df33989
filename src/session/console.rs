use crate::model::{AnyRecord, Credentials, FieldPatch, Profile, RecordId, RecordKind};
use crate::mvi::Reducer;
use crate::store::{CatalogIntent, CatalogReducer, CatalogState, RequestTracker};

use super::command::{AuthAction, DataAction, RemoteOutcome, RemoteResult, UiCommand};
use super::status::{PanelStatus, StatusMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Credentials screen (login or register).
    Auth,
    /// Management screen with the three panels.
    Main,
}

/// Console state that does not depend on a terminal.
///
/// Every user action returns the remote calls it needs as [`UiCommand`]s;
/// the caller ships them to the worker and feeds the outcomes back through
/// [`Console::apply`]. Nothing here performs I/O.
#[derive(Debug)]
pub struct Console {
    screen: Screen,
    catalog: CatalogState,
    tracker: RequestTracker,
    profile: Option<Profile>,
    auth_status: Option<StatusMessage>,
    panel_status: PanelStatus,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        Self {
            screen: Screen::Auth,
            catalog: CatalogState::default(),
            tracker: RequestTracker::new(),
            profile: None,
            auth_status: None,
            panel_status: PanelStatus::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn auth_status(&self) -> Option<&StatusMessage> {
        self.auth_status.as_ref()
    }

    pub fn panel_status(&self, kind: RecordKind) -> Option<&StatusMessage> {
        self.panel_status.get(kind)
    }

    /// Open the management screen with a token found at startup.
    pub fn resume(&mut self) -> Vec<UiCommand> {
        self.screen = Screen::Main;
        self.refresh()
    }

    pub fn login(&mut self, credentials: Credentials) -> UiCommand {
        UiCommand::auth(self.tracker.session(), AuthAction::Login(credentials))
    }

    pub fn register(&mut self, credentials: Credentials) -> UiCommand {
        UiCommand::auth(self.tracker.session(), AuthAction::Register(credentials))
    }

    /// Tear down the management screen. Results still in flight are dropped.
    pub fn logout(&mut self) -> UiCommand {
        self.tracker.advance_epoch();
        self.dispatch(CatalogIntent::Reset);
        self.screen = Screen::Auth;
        self.profile = None;
        self.auth_status = None;
        self.panel_status.clear();
        UiCommand::auth(self.tracker.session(), AuthAction::Logout)
    }

    /// Profile plus a fetch-all of every collection, parents first.
    pub fn refresh(&mut self) -> Vec<UiCommand> {
        let mut commands = vec![UiCommand::data(self.tracker.session(), DataAction::Profile)];
        for kind in RecordKind::ALL {
            commands.push(UiCommand::data(self.tracker.fetch(kind), DataAction::Fetch(kind)));
        }
        commands
    }

    pub fn begin_edit(&mut self, record: AnyRecord) {
        self.dispatch(CatalogIntent::BeginEdit(record));
    }

    pub fn edit_field(&mut self, patch: FieldPatch) {
        self.dispatch(CatalogIntent::EditField(patch));
    }

    pub fn clear_edit(&mut self, kind: RecordKind) {
        self.dispatch(CatalogIntent::ClearEdit(kind));
    }

    /// Submit the staging slot of `kind`: create when its id is 0, update
    /// otherwise. Returns `None` while the form is incomplete.
    pub fn submit(&mut self, kind: RecordKind) -> Option<UiCommand> {
        let staged = self.catalog.edited(kind);
        if !staged.is_submittable() {
            return None;
        }
        let action = if staged.is_new() {
            DataAction::Create(staged)
        } else {
            DataAction::Update(staged)
        };
        Some(UiCommand::data(self.tracker.session(), action))
    }

    pub fn delete(&mut self, kind: RecordKind, id: RecordId) -> UiCommand {
        UiCommand::data(self.tracker.session(), DataAction::Delete { kind, id })
    }

    /// Fold a completed remote call into the console. Returns follow-up calls.
    pub fn apply(&mut self, outcome: RemoteOutcome) -> Vec<UiCommand> {
        if !self.tracker.is_current(&outcome.ticket) {
            tracing::debug!(
                epoch = outcome.ticket.epoch(),
                current = self.tracker.epoch(),
                "discarding stale remote result"
            );
            return Vec::new();
        }

        match outcome.result {
            RemoteResult::LoggedIn(Ok(())) => {
                tracing::info!("logged in");
                self.auth_status = Some(StatusMessage::logged_in());
                self.screen = Screen::Main;
                return self.refresh();
            }
            RemoteResult::LoggedIn(Err(err)) => {
                tracing::warn!(error = %err, "login failed");
                self.auth_status = Some(StatusMessage::login_error());
            }
            RemoteResult::Registered {
                credentials,
                result: Ok(()),
            } => {
                tracing::info!(username = %credentials.username, "registered");
                return vec![self.login(credentials)];
            }
            RemoteResult::Registered {
                result: Err(err), ..
            } => {
                tracing::warn!(error = %err, "registration failed");
                self.auth_status = Some(StatusMessage::registration_error());
            }
            RemoteResult::LoggedOut(Ok(())) => {}
            RemoteResult::LoggedOut(Err(err)) => {
                tracing::warn!(error = %err, "failed to remove stored token");
                self.auth_status = Some(StatusMessage::logout_error());
            }
            RemoteResult::Profile(Ok(profile)) => {
                self.profile = Some(profile);
            }
            RemoteResult::Profile(Err(err)) if err.is_unauthorized() => {
                tracing::warn!(error = %err, "stored token rejected, back to credentials");
                let command = self.logout();
                self.auth_status = Some(StatusMessage::session_expired());
                return vec![command];
            }
            RemoteResult::Profile(Err(err)) => {
                tracing::warn!(error = %err, "profile fetch failed");
            }
            RemoteResult::Fetched { kind, result } => match result {
                Ok(records) => {
                    tracing::debug!(kind = %kind, count = records.len(), "collection loaded");
                    self.dispatch(CatalogIntent::Loaded(records));
                }
                Err(err) => {
                    tracing::warn!(kind = %kind, error = %err, "fetch failed");
                    self.panel_status.set(kind, StatusMessage::get_error());
                }
            },
            RemoteResult::Created { kind, result } => match result {
                Ok(record) => {
                    self.dispatch(CatalogIntent::Created(record));
                    self.supersede_fetches(kind);
                    self.panel_status.set(kind, StatusMessage::created(kind));
                }
                Err(err) => {
                    tracing::warn!(kind = %kind, error = %err, "create failed");
                    self.dispatch(CatalogIntent::ClearEdit(kind));
                    self.panel_status.set(kind, StatusMessage::create_error());
                }
            },
            RemoteResult::Updated { kind, result } => match result {
                Ok(record) => {
                    self.dispatch(CatalogIntent::Updated(record));
                    self.supersede_fetches(kind);
                    self.panel_status.set(kind, StatusMessage::updated(kind));
                }
                Err(err) => {
                    tracing::warn!(kind = %kind, error = %err, "update failed");
                    self.dispatch(CatalogIntent::ClearEdit(kind));
                    self.panel_status.set(kind, StatusMessage::update_error());
                }
            },
            RemoteResult::Deleted { kind, id, result } => match result {
                Ok(()) => {
                    self.dispatch(CatalogIntent::Deleted { kind, id });
                    self.supersede_fetches(kind);
                    self.panel_status.set(kind, StatusMessage::deleted(kind));
                }
                Err(err) => {
                    tracing::warn!(kind = %kind, id, error = %err, "delete failed");
                    self.dispatch(CatalogIntent::ClearEdit(kind));
                    self.panel_status.set(kind, StatusMessage::delete_error());
                }
            },
        }
        Vec::new()
    }

    /// A mutation of `kind` has been applied; fetch-alls still in flight were
    /// answered before it. Parent changes also reach the vehicle list.
    fn supersede_fetches(&mut self, kind: RecordKind) {
        self.tracker.supersede_fetch(kind);
        if kind.is_parent() {
            self.tracker.supersede_fetch(RecordKind::Vehicle);
        }
    }

    fn dispatch(&mut self, intent: CatalogIntent) {
        self.catalog = CatalogReducer::reduce(std::mem::take(&mut self.catalog), intent);
    }
}
