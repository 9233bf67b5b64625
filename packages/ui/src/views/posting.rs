//! Posting view: create, search, sort, and delete notes.

use dioxus::prelude::*;

use api::{parse_priority, NoteInfo};

use crate::components::{Button, ButtonVariant, Input, Textarea};
use crate::views::SidebarLayout;

const PRIORITY_OPTIONS: [&str; 3] = ["1 - Low", "2 - Medium", "3 - High"];
const SORT_OPTIONS: [&str; 2] = ["Priority", "Date"];

/// Shared posting view.
#[component]
pub fn PostingView(
    on_nav_dashboard: EventHandler<()>,
    on_nav_posting: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let mut note_text = use_signal(String::new);
    let mut priority = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut sort = use_signal(|| SORT_OPTIONS[0].to_string());
    let mut error = use_signal(|| Option::<String>::None);

    // Reloads whenever the search text or sort key changes.
    let mut notes = use_resource(move || async move { api::list_notes(search(), sort()).await });

    let handle_save = move |_| {
        spawn(async move {
            error.set(None);

            let text = note_text().trim().to_string();
            // Both fields are required before anything is saved.
            if text.is_empty() || priority().is_empty() {
                return;
            }
            let Some(level) = parse_priority(&priority()) else {
                return;
            };

            match api::create_note(text, level).await {
                Ok(_) => {
                    note_text.set(String::new());
                    priority.set(String::new());
                    notes.restart();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let handle_delete = move |id: i64| {
        spawn(async move {
            match api::delete_note(id).await {
                Ok(_) => notes.restart(),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        SidebarLayout {
            on_nav_dashboard,
            on_nav_posting,
            on_logout,

            div {
                class: "posting-page",

                div {
                    class: "new-note",

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    div {
                        class: "new-note-row",
                        Textarea {
                            class: "note-input",
                            placeholder: "Write a new note...",
                            value: note_text(),
                            oninput: move |evt: FormEvent| note_text.set(evt.value()),
                        }
                        select {
                            class: "input select",
                            value: "{priority()}",
                            onchange: move |evt: FormEvent| priority.set(evt.value()),
                            option {
                                value: "",
                                disabled: true,
                                selected: priority().is_empty(),
                                "Select priority"
                            }
                            for label in PRIORITY_OPTIONS {
                                option { value: label, "{label}" }
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: handle_save,
                        "Save Note"
                    }
                }

                div {
                    class: "notes-section",

                    div {
                        class: "notes-toolbar",
                        Input {
                            class: "search-input",
                            placeholder: "Search notes...",
                            value: search(),
                            oninput: move |evt: FormEvent| search.set(evt.value()),
                        }
                        select {
                            class: "input select",
                            value: "{sort()}",
                            onchange: move |evt: FormEvent| sort.set(evt.value()),
                            for label in SORT_OPTIONS {
                                option { value: label, "{label}" }
                            }
                        }
                    }

                    div {
                        class: "notes-list",
                        match notes() {
                            Some(Ok(list)) if list.is_empty() => rsx! {
                                p { class: "notes-empty", "No notes yet." }
                            },
                            Some(Ok(list)) => rsx! {
                                for note in list {
                                    NoteRow { key: "{note.id}", note, on_delete: handle_delete }
                                }
                            },
                            Some(Err(e)) => rsx! {
                                p { class: "notes-empty", "{e}" }
                            },
                            None => rsx! {
                                p { class: "notes-empty", "Loading..." }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NoteRow(note: NoteInfo, on_delete: EventHandler<i64>) -> Element {
    let id = note.id;

    rsx! {
        div {
            class: "note-row",
            span { class: "note-text", "{note.note}" }
            span { class: "note-priority", "Priority: {note.priority}" }
            span { class: "note-date", "{note.created_at}" }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| on_delete.call(id),
                "Delete"
            }
        }
    }
}
