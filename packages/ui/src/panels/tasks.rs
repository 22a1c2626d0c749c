use dioxus::prelude::*;

use store::{
    dates, derive, CategoryFilter, Criteria, FormState, ResourceStore, SortOrder, TaskRecord,
    TaskStatus,
};

use super::ErrorBanner;
use crate::remote::{load_into, run_remote};

#[component]
pub fn TasksPanel() -> Element {
    let tasks = use_signal(ResourceStore::<TaskRecord>::default);
    let mut filter = use_signal(CategoryFilter::default);
    let mut form = use_signal(FormState::default);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut due_date = use_signal(String::new);
    let mut status = use_signal(|| TaskStatus::Todo);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut panel_error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        load_into(tasks, api::list_tasks()).await;
    });

    // Due-date ascending, undated tasks last (newest created first).
    let criteria = Criteria {
        category: filter(),
        sort: SortOrder::DueDateAsc,
        ..Default::default()
    };
    let view = derive(tasks.read().items(), &criteria);

    let toggle_form = move |_| {
        if form().is_open() {
            form.write().close();
            form_error.set(None);
        } else {
            title.set(String::new());
            description.set(String::new());
            due_date.set(String::new());
            status.set(TaskStatus::Todo);
            form_error.set(None);
            form.write().open_new();
        }
    };

    let open_edit = move |task: TaskRecord| {
        title.set(task.title.clone());
        description.set(task.description.clone());
        due_date.set(task.due_date.map(dates::format_date).unwrap_or_default());
        status.set(task.status);
        form_error.set(None);
        form.write().open_edit(task.id);
    };

    let submit = move |_| async move {
        if title().trim().is_empty() {
            form_error.set(Some("Task title cannot be empty.".to_string()));
            return;
        }
        let due = if due_date().trim().is_empty() {
            None
        } else {
            match dates::parse_date(&due_date()) {
                Some(ms) => Some(ms),
                None => {
                    form_error.set(Some("Due date must be YYYY-MM-DD.".to_string()));
                    return;
                }
            }
        };
        let outcome = match form().editing_id() {
            None => run_remote(api::create_task(title(), description(), due))
                .await
                .map(|_| ()),
            Some(id) => {
                run_remote(api::update_task(id, title(), description(), status(), due)).await
            }
        };
        match outcome {
            Ok(()) => {
                form.write().close();
                form_error.set(None);
                load_into(tasks, api::list_tasks()).await;
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };

    let delete = move |id: u64| {
        spawn(async move {
            match run_remote(api::delete_task(id)).await {
                Ok(()) => {
                    panel_error.set(None);
                    load_into(tasks, api::list_tasks()).await;
                }
                Err(e) => panel_error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "panel tasks-panel",
            div {
                class: "panel-head",
                h2 { "Task Manager" }
                button {
                    class: "primary",
                    onclick: toggle_form,
                    if form().is_open() { "Cancel" } else { "New Task" }
                }
            }

            ErrorBanner { message: tasks.read().error().map(|e| e.to_string()) }
            ErrorBanner { message: panel_error() }

            div {
                class: "filter-row",
                button {
                    class: if filter() == CategoryFilter::All { "filter active" } else { "filter" },
                    onclick: move |_| filter.set(CategoryFilter::All),
                    "All"
                }
                for option in TaskStatus::ALL {
                    button {
                        key: option.as_str(),
                        class: if filter() == CategoryFilter::Only(option.as_str().to_string()) { "filter active" } else { "filter" },
                        onclick: move |_| filter.set(CategoryFilter::Only(option.as_str().to_string())),
                        {option.label()}
                    }
                }
            }

            if tasks.read().is_loading() {
                p { class: "loading", "Loading tasks..." }
            } else if view.is_empty() {
                div {
                    class: "placeholder",
                    p { "No tasks found" }
                    p { "Create a new task to get started!" }
                }
            } else {
                div {
                    class: "task-list",
                    for task in view.clone() {
                        div {
                            key: "{task.id}",
                            class: "task-card",
                            div {
                                class: "task-main",
                                h3 { "{task.title}" }
                                p { "{task.description}" }
                                div {
                                    class: "task-meta",
                                    span {
                                        class: format!("status status-{}", task.status.as_str()),
                                        {task.status.label()}
                                    }
                                    if let Some(due) = task.due_date {
                                        span {
                                            class: "due",
                                            {format!("Due {}", dates::format_date(due))}
                                        }
                                    }
                                }
                            }
                            div {
                                class: "actions",
                                button {
                                    onclick: {
                                        let task = task.clone();
                                        move |_| open_edit(task.clone())
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "danger",
                                    onclick: move |_| delete(task.id),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            if form().is_open() {
                div {
                    class: "modal",
                    div {
                        class: "dialog",
                        h3 {
                            if form().editing_id().is_some() { "Edit Task" } else { "New Task" }
                        }
                        ErrorBanner { message: form_error() }
                        div {
                            class: "form-field",
                            label { "Title" }
                            input {
                                r#type: "text",
                                placeholder: "Enter task title",
                                value: title(),
                                oninput: move |evt| title.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-field",
                            label { "Description" }
                            textarea {
                                rows: 3,
                                placeholder: "Enter task description",
                                value: description(),
                                oninput: move |evt| description.set(evt.value()),
                            }
                        }
                        if form().editing_id().is_some() {
                            div {
                                class: "form-field",
                                label { "Status" }
                                select {
                                    value: status().as_str(),
                                    onchange: move |evt| {
                                        if let Some(next) = TaskStatus::parse(&evt.value()) {
                                            status.set(next);
                                        }
                                    },
                                    for option in TaskStatus::ALL {
                                        option { value: option.as_str(), {option.label()} }
                                    }
                                }
                            }
                        }
                        div {
                            class: "form-field",
                            label { "Due Date" }
                            input {
                                r#type: "date",
                                value: due_date(),
                                oninput: move |evt| due_date.set(evt.value()),
                            }
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
                            button {
                                class: "primary",
                                onclick: submit,
                                if form().editing_id().is_some() { "Update Task" } else { "Create Task" }
                            }
                        }
                    }
                }
            }
        }
    }
}
