//! Console orchestration between user actions, the remote API and the
//! catalog.
//!
//! [`Console`] turns user actions into [`UiCommand`]s and folds completed
//! [`RemoteOutcome`]s back into the catalog and the status lines.
//! [`Worker`] executes the commands against the API.

mod command;
mod console;
mod status;
mod worker;

pub use command::{AuthAction, DataAction, RemoteAction, RemoteOutcome, RemoteResult, UiCommand};
pub use console::{Console, Screen};
pub use status::{PanelStatus, StatusMessage, Tone};
pub use worker::{perform, Worker};
