//! Session/identity context for the UI.
//!
//! The signed-in user lives in a context signal provided by
//! [`SessionProvider`]; every resource panel reads it through
//! [`use_session`] before issuing scoped calls. Scoping itself is carried
//! by the server session cookie — there is no ambient identity global.
//!
//! The only durable client-side state is a username marker in
//! localStorage (wasm only), written on login/register and cleared on
//! logout or when the server no longer recognizes the session.

use dioxus::prelude::*;
use store::UserInfo;

const IDENTITY_MARKER_KEY: &str = "workden.username";

/// Session state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that restores and holds the session.
/// Wrap the app with this component to enable sign-in state.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session = use_signal(SessionState::default);

    // Restore the session from the server cookie on mount.
    let _ = use_resource(move || async move {
        match api::current_user().await {
            Ok(user) => {
                if user.is_none() {
                    clear_identity_marker();
                }
                session.set(SessionState {
                    user,
                    loading: false,
                });
            }
            Err(e) => {
                tracing::warn!("session restore failed: {e}");
                session.set(SessionState {
                    user: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button to sign out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| async move {
        if let Ok(()) = api::logout().await {
            clear_identity_marker();
            session.set(SessionState {
                user: None,
                loading: false,
            });
            redirect_to("/login");
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// Persist the identity marker after a successful sign-in.
pub fn remember_identity(username: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(IDENTITY_MARKER_KEY, username);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = username;
    }
}

/// Clear the identity marker (logout, or a stale session).
pub fn clear_identity_marker() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(IDENTITY_MARKER_KEY);
        }
    }
}

/// The persisted username marker, if any.
pub fn stored_identity() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage().and_then(|s| s.get_item(IDENTITY_MARKER_KEY).ok().flatten())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Navigate via the browser location (wasm only).
pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
