use dioxus::prelude::*;

use store::{
    dates, derive, sum_by, totals_by, CategoryFilter, Criteria, DateRange, ExpenseRecord,
    FormState, ResourceStore, SortOrder,
};

use super::ErrorBanner;
use crate::remote::{load_into, run_remote};

#[component]
pub fn ExpensesPanel() -> Element {
    let expenses = use_signal(ResourceStore::<ExpenseRecord>::default);
    let mut filter = use_signal(CategoryFilter::default);
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut form = use_signal(FormState::default);
    let mut amount = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut panel_error = use_signal(|| Option::<String>::None);
    let mut show_import = use_signal(|| false);
    let mut import_text = use_signal(String::new);
    let mut export_text = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        load_into(expenses, api::list_expenses()).await;
    });

    let criteria = Criteria {
        category: filter(),
        dates: DateRange {
            start: dates::parse_date(&start_date()),
            end: dates::parse_date(&end_date()),
        },
        sort: SortOrder::CreatedDesc,
    };
    let view = derive(expenses.read().items(), &criteria);
    let by_category = totals_by(&view, |e: &ExpenseRecord| e.category.clone(), |e| e.amount);
    let total = sum_by(&view, |e: &ExpenseRecord| e.amount);

    // Distinct categories from the raw list, for the filter dropdown.
    let mut categories: Vec<String> = expenses
        .read()
        .items()
        .iter()
        .map(|e| e.category.clone())
        .collect();
    categories.sort();
    categories.dedup();

    let open_new = move |_| {
        amount.set(String::new());
        category.set(String::new());
        description.set(String::new());
        date.set(String::new());
        form_error.set(None);
        form.write().open_new();
    };

    let open_edit = move |expense: ExpenseRecord| {
        amount.set(format!("{:.2}", expense.amount));
        category.set(expense.category.clone());
        description.set(expense.description.clone());
        date.set(dates::format_date(expense.date));
        form_error.set(None);
        form.write().open_edit(expense.id);
    };

    let submit = move |_| async move {
        if amount().trim().is_empty() || category().trim().is_empty() || date().trim().is_empty() {
            form_error.set(Some("Please fill in all required fields.".to_string()));
            return;
        }
        let Ok(parsed_amount) = amount().trim().parse::<f64>() else {
            form_error.set(Some("Amount must be a number.".to_string()));
            return;
        };
        let Some(parsed_date) = dates::parse_date(&date()) else {
            form_error.set(Some("Date must be YYYY-MM-DD.".to_string()));
            return;
        };
        let outcome = match form().editing_id() {
            None => run_remote(api::create_expense(
                parsed_amount,
                category(),
                description(),
                parsed_date,
            ))
            .await
            .map(|_| ()),
            Some(id) => {
                run_remote(api::update_expense(
                    id,
                    parsed_amount,
                    category(),
                    description(),
                    parsed_date,
                ))
                .await
            }
        };
        match outcome {
            Ok(()) => {
                form.write().close();
                form_error.set(None);
                load_into(expenses, api::list_expenses()).await;
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };

    let delete = move |id: u64| {
        spawn(async move {
            match run_remote(api::delete_expense(id)).await {
                Ok(()) => {
                    panel_error.set(None);
                    load_into(expenses, api::list_expenses()).await;
                }
                Err(e) => panel_error.set(Some(e.to_string())),
            }
        });
    };

    let import = move |_| async move {
        let lines: Vec<String> = import_text()
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        if lines.is_empty() {
            panel_error.set(Some("Nothing to import.".to_string()));
            return;
        }
        match run_remote(api::import_expenses(lines)).await {
            Ok(count) => {
                notice.set(Some(format!("Successfully imported {count} expenses.")));
                panel_error.set(None);
                show_import.set(false);
                import_text.set(String::new());
                load_into(expenses, api::list_expenses()).await;
            }
            Err(e) => panel_error.set(Some(e.to_string())),
        }
    };

    let export = move |_| async move {
        match run_remote(api::export_expenses_text()).await {
            Ok(text) => {
                panel_error.set(None);
                export_text.set(Some(text));
            }
            Err(e) => panel_error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div {
            class: "panel expenses-panel",
            div {
                class: "panel-head",
                h2 { "Expense Tracker" }
                div {
                    class: "actions",
                    button { class: "primary", onclick: open_new, "Add Expense" }
                    button { onclick: move |_| show_import.set(true), "Import CSV" }
                    button { onclick: export, "Export CSV" }
                }
            }

            ErrorBanner { message: expenses.read().error().map(|e| e.to_string()) }
            ErrorBanner { message: panel_error() }
            if let Some(msg) = notice() {
                div { class: "notice", "{msg}" }
            }

            div {
                class: "filter-row",
                div {
                    class: "form-field",
                    label { "Category Filter" }
                    select {
                        value: match filter() {
                            CategoryFilter::All => "all".to_string(),
                            CategoryFilter::Only(c) => c,
                        },
                        onchange: move |evt| {
                            if evt.value() == "all" {
                                filter.set(CategoryFilter::All);
                            } else {
                                filter.set(CategoryFilter::Only(evt.value()));
                            }
                        },
                        option { value: "all", "All Categories" }
                        for cat in categories {
                            option { key: "{cat}", value: "{cat}", "{cat}" }
                        }
                    }
                }
                div {
                    class: "form-field",
                    label { "Start Date" }
                    input {
                        r#type: "date",
                        value: start_date(),
                        oninput: move |evt| start_date.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "End Date" }
                    input {
                        r#type: "date",
                        value: end_date(),
                        oninput: move |evt| end_date.set(evt.value()),
                    }
                }
            }

            if expenses.read().is_loading() {
                p { class: "loading", "Loading expenses..." }
            } else {
                div {
                    class: "summary-row",
                    div {
                        class: "summary-card",
                        h3 { "Expense by Category" }
                        if by_category.is_empty() {
                            p { class: "placeholder", "No data for the selected criteria." }
                        } else {
                            ul {
                                class: "category-totals",
                                for (cat, cat_total) in by_category.clone() {
                                    li {
                                        key: "{cat}",
                                        span { class: "cat-name", "{cat}" }
                                        span { class: "cat-total", "${cat_total:.2}" }
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "summary-card",
                        h3 { "Total Expenses" }
                        p { class: "big-number", "${total:.2}" }
                    }
                }

                if view.is_empty() {
                    p { class: "placeholder", "No expenses found for the selected criteria." }
                } else {
                    table {
                        class: "expense-table",
                        thead {
                            tr {
                                th { "Date" }
                                th { "Category" }
                                th { "Description" }
                                th { "Amount" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for expense in view.clone() {
                                tr {
                                    key: "{expense.id}",
                                    td { {dates::format_date(expense.date)} }
                                    td { "{expense.category}" }
                                    td { "{expense.description}" }
                                    td { {format!("${:.2}", expense.amount)} }
                                    td {
                                        button {
                                            onclick: {
                                                let expense = expense.clone();
                                                move |_| open_edit(expense.clone())
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "danger",
                                            onclick: move |_| delete(expense.id),
                                            "Delete"
                                        }
                                    }
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
                            if form().editing_id().is_some() { "Edit Expense" } else { "Add Expense" }
                        }
                        ErrorBanner { message: form_error() }
                        div {
                            class: "form-field",
                            label { "Amount" }
                            input {
                                r#type: "number",
                                step: "0.01",
                                placeholder: "0.00",
                                value: amount(),
                                oninput: move |evt| amount.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-field",
                            label { "Category" }
                            input {
                                r#type: "text",
                                placeholder: "e.g., Food, Transport",
                                value: category(),
                                oninput: move |evt| category.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-field",
                            label { "Description" }
                            input {
                                r#type: "text",
                                placeholder: "Expense description",
                                value: description(),
                                oninput: move |evt| description.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-field",
                            label { "Date" }
                            input {
                                r#type: "date",
                                value: date(),
                                oninput: move |evt| date.set(evt.value()),
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
                                if form().editing_id().is_some() { "Update Expense" } else { "Add Expense" }
                            }
                        }
                    }
                }
            }

            if show_import() {
                div {
                    class: "modal",
                    div {
                        class: "dialog",
                        h3 { "Import Expenses" }
                        p { "Paste CSV rows: amount,category,description,date (YYYY-MM-DD)." }
                        textarea {
                            rows: 8,
                            value: import_text(),
                            oninput: move |evt| import_text.set(evt.value()),
                        }
                        div {
                            class: "dialog-actions",
                            button { onclick: move |_| show_import.set(false), "Cancel" }
                            button { class: "primary", onclick: import, "Import" }
                        }
                    }
                }
            }

            if let Some(text) = export_text() {
                div {
                    class: "modal",
                    div {
                        class: "dialog",
                        h3 { "Exported Expenses" }
                        textarea {
                            rows: 8,
                            readonly: true,
                            value: "{text}",
                        }
                        div {
                            class: "dialog-actions",
                            button { onclick: move |_| export_text.set(None), "Close" }
                        }
                    }
                }
            }
        }
    }
}
