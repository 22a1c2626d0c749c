use dioxus::prelude::*;

use ui::panels::{
    DashboardPanel, ExpensesPanel, FilesPanel, NotesPanel, PhotosPanel, SettingsPanel, TasksPanel,
};
use ui::{use_session, LoginView, LogoutButton, SessionProvider};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/notes")]
        Notes {},
        #[route("/tasks")]
        Tasks {},
        #[route("/expenses")]
        Expenses {},
        #[route("/files")]
        Files {},
        #[route("/photos")]
        Photos {},
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[route("/login")]
    Login {},
}

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

    tracing_subscriber::fmt::init();

    // Sessions live in process memory, like the workspace backend itself.
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    rsx! {
        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Sidebar layout around every signed-in view.
#[component]
fn Shell() -> Element {
    let session = use_session();

    // Not signed in: send the browser to the login page.
    if !session().loading && session().user.is_none() {
        ui::redirect_to("/login");
    }

    rsx! {
        div {
            class: "app-shell",
            aside {
                class: "sidebar",
                h1 { class: "brand", "Workden" }
                if let Some(user) = session().user {
                    div {
                        class: "user-box",
                        p { class: "user-name", "{user.display_name()}" }
                        p { class: "user-email", "{user.email}" }
                    }
                }
                nav {
                    Link { to: Route::Home {}, "Overview" }
                    Link { to: Route::Files {}, "Files" }
                    Link { to: Route::Notes {}, "Notes" }
                    Link { to: Route::Photos {}, "Photos" }
                    Link { to: Route::Tasks {}, "Tasks" }
                    Link { to: Route::Expenses {}, "Expenses" }
                    Link { to: Route::Settings {}, "Settings" }
                }
                LogoutButton { class: "logout" }
            }
            main {
                class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { DashboardPanel {} }
}

#[component]
fn Notes() -> Element {
    rsx! { NotesPanel {} }
}

#[component]
fn Tasks() -> Element {
    rsx! { TasksPanel {} }
}

#[component]
fn Expenses() -> Element {
    rsx! { ExpensesPanel {} }
}

#[component]
fn Files() -> Element {
    rsx! { FilesPanel {} }
}

#[component]
fn Photos() -> Element {
    rsx! { PhotosPanel {} }
}

#[component]
fn Settings() -> Element {
    rsx! { SettingsPanel {} }
}

#[component]
fn Login() -> Element {
    rsx! { LoginView {} }
}
