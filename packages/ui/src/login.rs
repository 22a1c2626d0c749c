//! Sign-in and registration view.

use dioxus::prelude::*;

use crate::remote::run_remote;
use crate::session::{
    remember_identity, redirect_to, stored_identity, use_session, SessionState,
};

/// Combined login/register form. On success the session context is set,
/// the identity marker persisted, and the browser sent to the workspace.
#[component]
pub fn LoginView() -> Element {
    let mut session = use_session();
    let mut registering = use_signal(|| false);
    // Prefill from the persisted identity marker, if one survives a reload.
    let mut username = use_signal(|| stored_identity().unwrap_or_default());
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    // Already signed in: straight to the workspace.
    if !session().loading && session().user.is_some() {
        redirect_to("/");
    }

    let submit = move |_| async move {
        error.set(None);
        let name = username().trim().to_string();
        if name.is_empty() || password().is_empty() {
            error.set(Some("Username and password are required.".to_string()));
            return;
        }
        if registering() && email().trim().is_empty() {
            error.set(Some("Email is required.".to_string()));
            return;
        }

        busy.set(true);
        let outcome = if registering() {
            run_remote(api::register(
                name.clone(),
                first_name(),
                last_name(),
                email(),
                password(),
            ))
            .await
        } else {
            run_remote(api::login(name.clone(), password())).await
        };
        busy.set(false);

        match outcome {
            Ok(user) => {
                remember_identity(&user.username);
                session.set(SessionState {
                    user: Some(user),
                    loading: false,
                });
                redirect_to("/");
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div {
            class: "login-page",
            h1 { "Workden" }
            p { class: "login-tagline", "Your personal digital workspace." }

            if let Some(msg) = error() {
                div { class: "error-banner", "{msg}" }
            }

            div {
                class: "login-form",
                div {
                    class: "form-field",
                    label { "Username" }
                    input {
                        r#type: "text",
                        value: username(),
                        oninput: move |evt| username.set(evt.value()),
                    }
                }
                if registering() {
                    div {
                        class: "form-field",
                        label { "First name" }
                        input {
                            r#type: "text",
                            value: first_name(),
                            oninput: move |evt| first_name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Last name" }
                        input {
                            r#type: "text",
                            value: last_name(),
                            oninput: move |evt| last_name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Email" }
                        input {
                            r#type: "email",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                }
                div {
                    class: "form-field",
                    label { "Password" }
                    input {
                        r#type: "password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button {
                    class: "primary",
                    disabled: busy(),
                    onclick: submit,
                    if registering() { "Create account" } else { "Sign in" }
                }
                button {
                    class: "link",
                    onclick: move |_| {
                        error.set(None);
                        registering.toggle();
                    },
                    if registering() {
                        "Already have an account? Sign in"
                    } else {
                        "New here? Create an account"
                    }
                }
            }
        }
    }
}
