//! This crate contains all shared UI for the workspace.

pub mod panels;

mod remote;
pub use remote::{load_into, run_remote, ActionError};

mod session;
pub use session::{
    clear_identity_marker, redirect_to, remember_identity, stored_identity, use_session,
    LogoutButton, SessionProvider, SessionState,
};

mod login;
pub use login::LoginView;
