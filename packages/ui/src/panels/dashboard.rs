use dioxus::prelude::*;

use store::StorageUsage;

use super::ErrorBanner;
use crate::remote::run_remote;
use crate::session::use_session;

/// Per-resource counts shown as metric cards.
#[derive(Clone, Debug, Default, PartialEq)]
struct Counts {
    files: usize,
    notes: usize,
    photos: usize,
    tasks: usize,
    expenses: usize,
    storage_bytes: u64,
}

#[component]
pub fn DashboardPanel() -> Element {
    let session = use_session();
    let mut counts = use_signal(Counts::default);
    let mut loading = use_signal(|| true);
    let mut panel_error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        loading.set(true);
        let mut next = Counts::default();
        let mut failed = false;

        match run_remote(api::list_files()).await {
            Ok(list) => next.files = list.len(),
            Err(_) => failed = true,
        }
        match run_remote(api::list_notes()).await {
            Ok(list) => next.notes = list.len(),
            Err(_) => failed = true,
        }
        match run_remote(api::list_photos(None)).await {
            Ok(list) => next.photos = list.len(),
            Err(_) => failed = true,
        }
        match run_remote(api::list_tasks()).await {
            Ok(list) => next.tasks = list.len(),
            Err(_) => failed = true,
        }
        match run_remote(api::list_expenses()).await {
            Ok(list) => next.expenses = list.len(),
            Err(_) => failed = true,
        }
        match run_remote(api::storage_usage()).await {
            Ok(bytes) => next.storage_bytes = bytes,
            Err(_) => failed = true,
        }

        if failed {
            panel_error.set(Some(
                "Some counts could not be loaded. Please try again later.".to_string(),
            ));
        } else {
            panel_error.set(None);
        }
        counts.set(next);
        loading.set(false);
    });

    let storage = StorageUsage::new(counts().storage_bytes);
    let usage_percent = storage.percent();
    let usage_label = storage.label();
    let greeting = session()
        .user
        .map(|u| u.display_name())
        .unwrap_or_else(|| "there".to_string());

    rsx! {
        div {
            class: "panel dashboard-panel",
            h2 { "Overview" }
            p { class: "greeting", "Welcome back, {greeting}." }

            ErrorBanner { message: panel_error() }

            if loading() {
                p { class: "loading", "Loading overview..." }
            } else {
                div {
                    class: "metric-grid",
                    MetricCard { title: "Files", value: counts().files }
                    MetricCard { title: "Notes", value: counts().notes }
                    MetricCard { title: "Photos", value: counts().photos }
                    MetricCard { title: "Tasks", value: counts().tasks }
                    MetricCard { title: "Expenses", value: counts().expenses }
                }

                div {
                    class: "storage-usage",
                    div {
                        class: "usage-head",
                        h3 { "Storage Usage" }
                        span { class: "usage-label", "{usage_label}" }
                    }
                    div {
                        class: "usage-bar",
                        div {
                            class: "usage-fill",
                            style: "width: {usage_percent}%",
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MetricCard(title: String, value: usize) -> Element {
    rsx! {
        div {
            class: "metric-card",
            h3 { "{title}" }
            p { class: "metric-value", "{value}" }
        }
    }
}
