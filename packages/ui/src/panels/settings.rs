use dioxus::prelude::*;

use super::ErrorBanner;
use crate::remote::run_remote;
use crate::session::{use_session, SessionState};

/// Profile and password settings for the signed-in account.
#[component]
pub fn SettingsPanel() -> Element {
    let mut session = use_session();
    let user = session().user;

    let mut first_name = use_signal(|| user.as_ref().map(|u| u.first_name.clone()).unwrap_or_default());
    let mut last_name = use_signal(|| user.as_ref().map(|u| u.last_name.clone()).unwrap_or_default());
    let mut email = use_signal(|| user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let mut profile_error = use_signal(|| Option::<String>::None);
    let mut profile_notice = use_signal(|| Option::<String>::None);

    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut password_error = use_signal(|| Option::<String>::None);
    let mut password_notice = use_signal(|| Option::<String>::None);

    let save_profile = move |_| async move {
        profile_notice.set(None);
        if email().trim().is_empty() {
            profile_error.set(Some("Email is required.".to_string()));
            return;
        }
        match run_remote(api::update_profile(first_name(), last_name(), email())).await {
            Ok(updated) => {
                profile_error.set(None);
                profile_notice.set(Some("Profile updated successfully.".to_string()));
                session.set(SessionState {
                    user: Some(updated),
                    loading: false,
                });
            }
            Err(e) => profile_error.set(Some(e.to_string())),
        }
    };

    let change_password = move |_| async move {
        password_notice.set(None);
        if new_password() != confirm_password() {
            password_error.set(Some("New passwords do not match.".to_string()));
            return;
        }
        if current_password().is_empty() || new_password().is_empty() {
            password_error.set(Some("All password fields are required.".to_string()));
            return;
        }
        match run_remote(api::change_password(current_password(), new_password())).await {
            Ok(()) => {
                password_error.set(None);
                password_notice.set(Some("Password changed successfully.".to_string()));
                current_password.set(String::new());
                new_password.set(String::new());
                confirm_password.set(String::new());
            }
            Err(e) => password_error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div {
            class: "panel settings-panel",
            h2 { "Settings" }

            section {
                class: "settings-section",
                h3 { "Profile" }
                ErrorBanner { message: profile_error() }
                if let Some(msg) = profile_notice() {
                    div { class: "notice", "{msg}" }
                }
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
                button { class: "primary", onclick: save_profile, "Save Profile" }
            }

            section {
                class: "settings-section",
                h3 { "Change Password" }
                ErrorBanner { message: password_error() }
                if let Some(msg) = password_notice() {
                    div { class: "notice", "{msg}" }
                }
                div {
                    class: "form-field",
                    label { "Current password" }
                    input {
                        r#type: "password",
                        value: current_password(),
                        oninput: move |evt| current_password.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "New password" }
                    input {
                        r#type: "password",
                        value: new_password(),
                        oninput: move |evt| new_password.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "Confirm new password" }
                    input {
                        r#type: "password",
                        value: confirm_password(),
                        oninput: move |evt| confirm_password.set(evt.value()),
                    }
                }
                button { class: "primary", onclick: change_password, "Change Password" }
            }
        }
    }
}
