//! Shared outcome type for collaborator calls.
//!
//! Every remote operation resolves to a [`RemoteResult`]: success with a value,
//! or a [`Rejection`] carrying the collaborator's message. Transport failures
//! (server unreachable, timeout) travel separately as the server-function
//! error and are never encoded as a `Rejection` — the two layers keep
//! business outcomes and plumbing failures distinct.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A business-rule rejection from a collaborator (validation failure,
/// not-found, quota exceeded). Shown to the user verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{0}")]
pub struct Rejection(pub String);

impl Rejection {
    pub fn new(msg: impl Into<String>) -> Self {
        Rejection(msg.into())
    }
}

/// Outcome of a collaborator call: the value, or an explicit rejection.
pub type RemoteResult<T> = Result<T, Rejection>;
