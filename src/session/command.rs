use crate::config::TokenStoreError;
use crate::gateway::GatewayError;
use crate::model::{AnyRecord, Credentials, Profile, RecordId, RecordKind, Records};
use crate::store::Ticket;

/// Calls that change who is logged in. These run one at a time, in order.
#[derive(Debug, Clone)]
pub enum AuthAction {
    Login(Credentials),
    Register(Credentials),
    Logout,
}

/// Calls made on behalf of a logged-in user. These may run concurrently.
#[derive(Debug, Clone, PartialEq)]
pub enum DataAction {
    Profile,
    Fetch(RecordKind),
    Create(AnyRecord),
    Update(AnyRecord),
    Delete { kind: RecordKind, id: RecordId },
}

#[derive(Debug, Clone)]
pub enum RemoteAction {
    Auth(AuthAction),
    Data(DataAction),
}

/// A remote call requested by the console, stamped with the ticket its
/// result must present when it comes back.
#[derive(Debug, Clone)]
pub struct UiCommand {
    pub ticket: Ticket,
    pub action: RemoteAction,
}

impl UiCommand {
    pub fn auth(ticket: Ticket, action: AuthAction) -> Self {
        Self {
            ticket,
            action: RemoteAction::Auth(action),
        }
    }

    pub fn data(ticket: Ticket, action: DataAction) -> Self {
        Self {
            ticket,
            action: RemoteAction::Data(action),
        }
    }
}

#[derive(Debug)]
pub enum RemoteResult {
    /// Token obtained (and stored) or the login was refused.
    LoggedIn(Result<(), GatewayError>),
    /// Carries the credentials back so the console can log in with them.
    Registered {
        credentials: Credentials,
        result: Result<(), GatewayError>,
    },
    LoggedOut(Result<(), TokenStoreError>),
    Profile(Result<Profile, GatewayError>),
    Fetched {
        kind: RecordKind,
        result: Result<Records, GatewayError>,
    },
    Created {
        kind: RecordKind,
        result: Result<AnyRecord, GatewayError>,
    },
    Updated {
        kind: RecordKind,
        result: Result<AnyRecord, GatewayError>,
    },
    Deleted {
        kind: RecordKind,
        id: RecordId,
        result: Result<(), GatewayError>,
    },
}

/// A completed remote call.
#[derive(Debug)]
pub struct RemoteOutcome {
    pub ticket: Ticket,
    pub result: RemoteResult,
}

impl RemoteOutcome {
    pub fn new(ticket: Ticket, result: RemoteResult) -> Self {
        Self { ticket, result }
    }
}
