use dioxus::prelude::*;

use store::{
    derive, paginate, Criteria, FormState, NoteRecord, ResourceStore, SortOrder,
};

use super::{ErrorBanner, Pager};
use crate::remote::{load_into, run_remote};

const NOTES_PER_PAGE: usize = 5;

#[component]
pub fn NotesPanel() -> Element {
    let notes = use_signal(ResourceStore::<NoteRecord>::default);
    let mut page = use_signal(|| 1usize);
    let mut form = use_signal(FormState::default);
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut panel_error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        load_into(notes, api::list_notes()).await;
    });

    let view = derive(notes.read().items(), &Criteria::sorted(SortOrder::UpdatedDesc));
    let current = paginate(&view, NOTES_PER_PAGE, page());

    let open_new = move |_| {
        title.set(String::new());
        content.set(String::new());
        form_error.set(None);
        form.write().open_new();
    };

    let open_edit = move |note: NoteRecord| {
        title.set(note.title.clone());
        content.set(note.content.clone());
        form_error.set(None);
        form.write().open_edit(note.id);
    };

    let submit = move |_| async move {
        if title().trim().is_empty() || content().trim().is_empty() {
            form_error.set(Some("Note title and content cannot be empty.".to_string()));
            return;
        }
        let outcome = match form().editing_id() {
            None => run_remote(api::create_note(title(), content())).await.map(|_| ()),
            Some(id) => run_remote(api::update_note(id, title(), content())).await,
        };
        match outcome {
            Ok(()) => {
                form.write().close();
                form_error.set(None);
                load_into(notes, api::list_notes()).await;
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };

    let delete = move |id: u64| {
        spawn(async move {
            match run_remote(api::delete_note(id)).await {
                Ok(()) => {
                    panel_error.set(None);
                    load_into(notes, api::list_notes()).await;
                }
                Err(e) => panel_error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "panel notes-panel",
            h2 { "My Notes" }

            ErrorBanner { message: notes.read().error().map(|e| e.to_string()) }
            ErrorBanner { message: panel_error() }

            button { class: "primary", onclick: open_new, "Create Note" }

            if notes.read().is_loading() {
                p { class: "loading", "Loading notes..." }
            } else if view.is_empty() {
                p { class: "placeholder", "No notes created yet." }
            } else {
                ul {
                    class: "note-list",
                    for note in current.items.clone() {
                        li {
                            key: "{note.id}",
                            div {
                                class: "note-head",
                                h3 { "{note.title}" }
                                div {
                                    class: "actions",
                                    button {
                                        onclick: {
                                            let note = note.clone();
                                            move |_| open_edit(note.clone())
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "danger",
                                        onclick: {
                                            let note_id = note.id;
                                            move |_| delete(note_id)
                                        },
                                        "Delete"
                                    }
                                }
                            }
                            p { class: "note-body", "{note.content}" }
                            p {
                                class: "note-meta",
                                {format!(
                                    "Last updated: {}",
                                    store::dates::format_datetime(note.updated_at)
                                )}
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

            if form().is_open() {
                div {
                    class: "modal",
                    div {
                        class: "dialog",
                        h3 {
                            if form().editing_id().is_some() { "Edit Note" } else { "Create New Note" }
                        }
                        ErrorBanner { message: form_error() }
                        input {
                            r#type: "text",
                            placeholder: "Note Title",
                            value: title(),
                            oninput: move |evt| title.set(evt.value()),
                        }
                        textarea {
                            placeholder: "Note Content",
                            rows: 6,
                            value: content(),
                            oninput: move |evt| content.set(evt.value()),
                        }
                        div {
                            class: "dialog-actions",
                            button {
                                onclick: move |_| {
                                    form.write().close();
                                    form_error.set(None);
                                },
                                "Cancel"
                            }
                            button { class: "primary", onclick: submit, "Save" }
                        }
                    }
                }
            }
        }
    }
}
