//! Mutation/action plumbing: awaiting a collaborator call and sorting its
//! failure into the two user-facing classes.
//!
//! A [`run_remote`] failure is either a business [`Rejection`] (shown
//! verbatim, the collaborator chose the words) or a transport error (logged,
//! then shown as one generic retry-suggesting message — the raw cause is
//! noise to the user). Nothing here retries; the user re-triggers the
//! action.

use std::future::Future;

use dioxus::prelude::*;
use store::{Rejection, RemoteResult, ResourceStore};

/// Why a remote action failed, as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionError {
    /// The collaborator rejected the request (validation, not-found,
    /// quota). Message shown verbatim.
    Rejected(String),
    /// The collaborator was unreachable or the call failed in transit.
    Transport(String),
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionError::Rejected(msg) => write!(f, "{msg}"),
            ActionError::Transport(_) => {
                write!(f, "Could not reach the server. Please try again later.")
            }
        }
    }
}

/// Await a server-function call and flatten its two failure layers.
pub async fn run_remote<T>(
    call: impl Future<Output = Result<RemoteResult<T>, ServerFnError>>,
) -> Result<T, ActionError> {
    match call.await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(Rejection(msg))) => Err(ActionError::Rejected(msg)),
        Err(e) => {
            tracing::error!("remote call failed: {e}");
            Err(ActionError::Transport(e.to_string()))
        }
    }
}

/// Refresh a [`ResourceStore`] signal from a list call.
pub async fn load_into<T: 'static>(
    mut target: Signal<ResourceStore<T>>,
    call: impl Future<Output = Result<RemoteResult<Vec<T>>, ServerFnError>>,
) {
    target.write().begin();
    let outcome = run_remote(call).await;
    target.write().resolve(outcome.map_err(|e| e.to_string()));
}
