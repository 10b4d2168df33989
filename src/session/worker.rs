use crate::config::TokenStore;
use crate::gateway::ApiClient;
use crate::store::Ticket;

use super::command::{AuthAction, DataAction, RemoteOutcome, RemoteResult};

/// Executes remote calls for the console.
///
/// Owns the API client and the token store. Auth actions change the token
/// and go through [`Worker::authenticate`] one at a time; data actions only
/// need a client clone and can run concurrently via [`perform`].
pub struct Worker {
    client: ApiClient,
    tokens: TokenStore,
}

impl Worker {
    pub fn new(client: ApiClient, tokens: TokenStore) -> Self {
        Self { client, tokens }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn authenticate(&mut self, ticket: Ticket, action: AuthAction) -> RemoteOutcome {
        let result = match action {
            AuthAction::Login(credentials) => {
                RemoteResult::LoggedIn(match self.client.login(&credentials).await {
                    Ok(token) => {
                        // Keep the session usable even if it cannot survive a restart.
                        if let Err(err) = self.tokens.save(&token) {
                            tracing::warn!(error = %err, "failed to persist token");
                        }
                        self.client.set_token(Some(token));
                        Ok(())
                    }
                    Err(err) => Err(err),
                })
            }
            AuthAction::Register(credentials) => {
                let result = self.client.register(&credentials).await;
                RemoteResult::Registered {
                    credentials,
                    result,
                }
            }
            AuthAction::Logout => {
                self.client.set_token(None);
                RemoteResult::LoggedOut(self.tokens.clear())
            }
        };
        RemoteOutcome::new(ticket, result)
    }
}

pub async fn perform(client: &ApiClient, ticket: Ticket, action: DataAction) -> RemoteOutcome {
    let result = match action {
        DataAction::Profile => RemoteResult::Profile(client.profile().await),
        DataAction::Fetch(kind) => RemoteResult::Fetched {
            kind,
            result: client.list_kind(kind).await,
        },
        DataAction::Create(record) => RemoteResult::Created {
            kind: record.kind(),
            result: client.create_any(&record).await,
        },
        DataAction::Update(record) => RemoteResult::Updated {
            kind: record.kind(),
            result: client.update_any(&record).await,
        },
        DataAction::Delete { kind, id } => RemoteResult::Deleted {
            kind,
            id,
            result: client.delete(kind, id).await,
        },
    };
    RemoteOutcome::new(ticket, result)
}
