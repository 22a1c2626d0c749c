use dioxus::prelude::*;

use store::{
    derive, paginate, Criteria, FileRecord, ResourceStore, SortOrder, StorageUsage,
    MAX_UPLOAD_BYTES,
};

use super::{ErrorBanner, Pager};
use crate::remote::{load_into, run_remote};

const FILES_PER_PAGE: usize = 5;

/// Guess a MIME type from the file extension; uploads carry it so
/// downloads can round-trip the original type.
fn content_type_for(name: &str) -> &'static str {
    match name.rsplit('.').next().map(|e| e.to_ascii_lowercase()).as_deref() {
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        Some("csv") => "text/csv",
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("json") => "application/json",
        Some("zip") => "application/zip",
        _ => "application/octet-stream",
    }
}

#[component]
pub fn FilesPanel() -> Element {
    let files = use_signal(ResourceStore::<FileRecord>::default);
    let mut usage = use_signal(|| 0u64);
    let mut page = use_signal(|| 1usize);
    let mut uploading = use_signal(|| false);
    let mut panel_error = use_signal(|| Option::<String>::None);
    let mut status = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        load_into(files, api::list_files()).await;
        if let Ok(bytes) = run_remote(api::storage_usage()).await {
            usage.set(bytes);
        }
    });

    let storage = StorageUsage::new(usage());
    let usage_percent = storage.percent();
    let usage_label = storage.label();
    let view = derive(files.read().items(), &Criteria::sorted(SortOrder::CreatedDesc));
    let current = paginate(&view, FILES_PER_PAGE, page());

    let upload = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        for name in engine.files() {
            let Some(data) = engine.read_file(&name).await else {
                panel_error.set(Some(format!("Could not read {name}.")));
                continue;
            };
            let size = data.len() as u64;
            // Client-side pre-checks; the collaborator enforces them too.
            if size > MAX_UPLOAD_BYTES {
                panel_error.set(Some(
                    "File size exceeds the maximum allowed size of 10 MB.".to_string(),
                ));
                continue;
            }
            if StorageUsage::new(usage()).would_exceed(size) {
                panel_error.set(Some(
                    "Uploading this file would exceed your storage quota of 100 MB.".to_string(),
                ));
                continue;
            }

            uploading.set(true);
            let outcome = run_remote(api::upload_file(
                name.clone(),
                content_type_for(&name).to_string(),
                data,
            ))
            .await;
            uploading.set(false);

            match outcome {
                Ok(_) => {
                    panel_error.set(None);
                    load_into(files, api::list_files()).await;
                    if let Ok(bytes) = run_remote(api::storage_usage()).await {
                        usage.set(bytes);
                    }
                }
                Err(e) => panel_error.set(Some(e.to_string())),
            }
        }
    };

    let download = move |file: FileRecord| {
        spawn(async move {
            match run_remote(api::download_file(file.id)).await {
                Ok(bytes) => {
                    panel_error.set(None);
                    status.set(Some(format!(
                        "Downloaded {} ({:.2} KB)",
                        file.name,
                        bytes.len() as f64 / 1024.0
                    )));
                }
                Err(e) => panel_error.set(Some(e.to_string())),
            }
        });
    };

    let delete = move |id: u64| {
        spawn(async move {
            match run_remote(api::delete_file(id)).await {
                Ok(()) => {
                    panel_error.set(None);
                    load_into(files, api::list_files()).await;
                    if let Ok(bytes) = run_remote(api::storage_usage()).await {
                        usage.set(bytes);
                    }
                }
                Err(e) => panel_error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "panel files-panel",
            h2 { "My Files" }

            ErrorBanner { message: files.read().error().map(|e| e.to_string()) }
            ErrorBanner { message: panel_error() }
            if let Some(msg) = status() {
                div { class: "notice", "{msg}" }
            }

            div {
                class: "storage-usage",
                div {
                    class: "usage-bar",
                    div {
                        class: "usage-fill",
                        style: "width: {usage_percent}%",
                    }
                }
                p { class: "usage-label", "Storage used: {usage_label}" }
            }

            div {
                class: "upload-box",
                label {
                    r#for: "file-upload",
                    if uploading() { "Uploading file..." } else { "Click to select files (max 10 MB each)" }
                }
                input {
                    id: "file-upload",
                    r#type: "file",
                    disabled: uploading(),
                    onchange: upload,
                }
            }

            if files.read().is_loading() {
                p { class: "loading", "Loading files..." }
            } else if view.is_empty() {
                p { class: "placeholder", "No files uploaded yet." }
            } else {
                ul {
                    class: "file-list",
                    for file in current.items.clone() {
                        li {
                            key: "{file.id}",
                            div {
                                class: "file-info",
                                p { class: "file-name", "{file.name}" }
                                p {
                                    class: "file-meta",
                                    {format!("{:.2} MB", file.size as f64 / (1024.0 * 1024.0))}
                                }
                            }
                            div {
                                class: "actions",
                                button {
                                    onclick: {
                                        let file = file.clone();
                                        move |_| download(file.clone())
                                    },
                                    "Download"
                                }
                                button {
                                    class: "danger",
                                    onclick: move |_| delete(file.id),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            Pager {
                page: current.page,
                total_pages: current.total_pages,
                on_change: move |next| page.set(next),
            }
        }
    }
}
