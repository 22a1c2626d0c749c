//! Resource panels: one view per workspace resource, each following the
//! same shape — a `ResourceStore` per resource, a derived view through the
//! filter/sort pipeline, pagination where the list warrants it, and
//! mutations that reload on success only.

mod dashboard;
mod expenses;
mod files;
mod notes;
mod photos;
mod settings;
mod tasks;

pub use dashboard::DashboardPanel;
pub use expenses::ExpensesPanel;
pub use files::FilesPanel;
pub use notes::NotesPanel;
pub use photos::PhotosPanel;
pub use settings::SettingsPanel;
pub use tasks::TasksPanel;

use dioxus::prelude::*;

/// Inline error banner; renders nothing without a message.
#[component]
pub fn ErrorBanner(message: Option<String>) -> Element {
    match message {
        Some(msg) => rsx! {
            div { class: "error-banner", "{msg}" }
        },
        None => rsx! {},
    }
}

/// Previous/next pager; hidden when there is a single page.
#[component]
pub fn Pager(page: usize, total_pages: usize, on_change: EventHandler<usize>) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }
    rsx! {
        div {
            class: "pager",
            button {
                disabled: page <= 1,
                onclick: move |_| on_change.call(page - 1),
                "Previous"
            }
            span { "Page {page} of {total_pages}" }
            button {
                disabled: page >= total_pages,
                onclick: move |_| on_change.call(page + 1),
                "Next"
            }
        }
    }
}
