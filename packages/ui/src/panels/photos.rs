use dioxus::prelude::*;

use store::{
    dates, derive, paginate, Criteria, PhotoRecord, ResourceStore, SortOrder, StorageUsage,
};

use super::{ErrorBanner, Pager};
use crate::remote::{load_into, run_remote};

const PHOTOS_PER_PAGE: usize = 12;

#[component]
pub fn PhotosPanel() -> Element {
    let photos = use_signal(ResourceStore::<PhotoRecord>::default);
    let albums = use_signal(ResourceStore::<store::AlbumRecord>::default);
    let mut current_album = use_signal(|| Option::<u64>::None);
    let mut usage = use_signal(|| 0u64);
    let mut page = use_signal(|| 1usize);
    let mut uploading = use_signal(|| false);
    let mut show_new_album = use_signal(|| false);
    let mut new_album_name = use_signal(String::new);
    let mut panel_error = use_signal(|| Option::<String>::None);

    // Re-runs when the selected album changes.
    let _loader = use_resource(move || {
        let album = current_album();
        async move {
            load_into(photos, api::list_photos(album)).await;
            load_into(albums, api::list_albums()).await;
            if let Ok(bytes) = run_remote(api::photo_storage_usage()).await {
                usage.set(bytes);
            }
            page.set(1);
        }
    });

    let storage = StorageUsage::new(usage());
    let usage_percent = storage.percent();
    let usage_label = storage.label();
    let view = derive(photos.read().items(), &Criteria::sorted(SortOrder::CreatedDesc));
    let current = paginate(&view, PHOTOS_PER_PAGE, page());

    let upload = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        for name in engine.files() {
            let content_type = match name.rsplit('.').next().map(|e| e.to_ascii_lowercase()).as_deref()
            {
                Some("png") => "image/png",
                Some("jpg") | Some("jpeg") => "image/jpeg",
                Some("gif") => "image/gif",
                Some("webp") => "image/webp",
                _ => {
                    panel_error.set(Some("Please select an image file.".to_string()));
                    continue;
                }
            };
            let Some(data) = engine.read_file(&name).await else {
                panel_error.set(Some(format!("Could not read {name}.")));
                continue;
            };
            if StorageUsage::new(usage()).would_exceed(data.len() as u64) {
                panel_error.set(Some(
                    "Storage limit exceeded. Please delete some photos before uploading more."
                        .to_string(),
                ));
                continue;
            }

            uploading.set(true);
            let outcome = run_remote(api::upload_photo(
                name.clone(),
                content_type.to_string(),
                data,
                current_album(),
            ))
            .await;
            uploading.set(false);

            match outcome {
                Ok(_) => {
                    panel_error.set(None);
                    load_into(photos, api::list_photos(current_album())).await;
                    if let Ok(bytes) = run_remote(api::photo_storage_usage()).await {
                        usage.set(bytes);
                    }
                }
                Err(e) => panel_error.set(Some(e.to_string())),
            }
        }
    };

    let delete_photo = move |id: u64| {
        spawn(async move {
            match run_remote(api::delete_photo(id)).await {
                Ok(()) => {
                    panel_error.set(None);
                    load_into(photos, api::list_photos(current_album())).await;
                    if let Ok(bytes) = run_remote(api::photo_storage_usage()).await {
                        usage.set(bytes);
                    }
                }
                Err(e) => panel_error.set(Some(e.to_string())),
            }
        });
    };

    let create_album = move |_| async move {
        let name = new_album_name().trim().to_string();
        if name.is_empty() {
            panel_error.set(Some("Album name is required.".to_string()));
            return;
        }
        match run_remote(api::create_album(name)).await {
            Ok(_) => {
                panel_error.set(None);
                new_album_name.set(String::new());
                show_new_album.set(false);
                load_into(albums, api::list_albums()).await;
            }
            Err(e) => panel_error.set(Some(e.to_string())),
        }
    };

    let delete_album = move |id: u64| {
        spawn(async move {
            match run_remote(api::delete_album(id)).await {
                Ok(()) => {
                    panel_error.set(None);
                    if current_album() == Some(id) {
                        current_album.set(None);
                    }
                    load_into(albums, api::list_albums()).await;
                    load_into(photos, api::list_photos(current_album())).await;
                }
                Err(e) => panel_error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "panel photos-panel",
            div {
                class: "panel-head",
                h2 { "My Photos" }
                button {
                    onclick: move |_| show_new_album.toggle(),
                    "New Album"
                }
            }

            ErrorBanner { message: photos.read().error().map(|e| e.to_string()) }
            ErrorBanner { message: panel_error() }

            div {
                class: "storage-usage",
                p { class: "usage-label", "Storage Usage: {usage_label}" }
                div {
                    class: "usage-bar",
                    div {
                        class: "usage-fill",
                        style: "width: {usage_percent}%",
                    }
                }
            }

            div {
                class: "upload-box",
                label {
                    r#for: "photo-upload",
                    if uploading() { "Uploading..." } else { "Upload Photo" }
                }
                input {
                    id: "photo-upload",
                    r#type: "file",
                    accept: "image/*",
                    disabled: uploading(),
                    onchange: upload,
                }
            }

            if show_new_album() {
                div {
                    class: "new-album-row",
                    input {
                        r#type: "text",
                        placeholder: "Enter album name",
                        value: new_album_name(),
                        oninput: move |evt| new_album_name.set(evt.value()),
                    }
                    button { class: "primary", onclick: create_album, "Create" }
                }
            }

            div {
                class: "album-row",
                button {
                    class: if current_album().is_none() { "chip active" } else { "chip" },
                    onclick: move |_| current_album.set(None),
                    "All Photos"
                }
                for album in albums.read().items().to_vec() {
                    div {
                        key: "{album.id}",
                        class: "album-chip",
                        button {
                            class: if current_album() == Some(album.id) { "chip active" } else { "chip" },
                            onclick: {
                                let album_id = album.id;
                                move |_| current_album.set(Some(album_id))
                            },
                            "{album.name}"
                        }
                        button {
                            class: "chip-delete",
                            onclick: {
                                let album_id = album.id;
                                move |_| delete_album(album_id)
                            },
                            "×"
                        }
                    }
                }
            }

            if photos.read().is_loading() {
                p { class: "loading", "Loading photos..." }
            } else if view.is_empty() {
                p { class: "placeholder", "No photos uploaded yet." }
            } else {
                ul {
                    class: "photo-list",
                    for photo in current.items.clone() {
                        li {
                            key: "{photo.id}",
                            div {
                                class: "photo-info",
                                p { class: "photo-name", "{photo.name}" }
                                p {
                                    class: "photo-meta",
                                    {format!(
                                        "{:.2} KB - {}",
                                        photo.size as f64 / 1024.0,
                                        dates::format_date(photo.created_at)
                                    )}
                                }
                            }
                            button {
                                class: "danger",
                                onclick: move |_| delete_photo(photo.id),
                                "Delete"
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
