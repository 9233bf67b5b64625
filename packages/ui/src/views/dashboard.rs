//! Dashboard view: the bot token and channel link settings.
//!
//! A setting that already has a value — from the settings file or saved
//! earlier in this session — renders as a disabled field; otherwise the
//! field is editable and saving locks it in.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::views::SidebarLayout;

/// Shared dashboard view.
#[component]
pub fn DashboardView(
    on_nav_dashboard: EventHandler<()>,
    on_nav_posting: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let mut token = use_signal(String::new);
    let mut channel = use_signal(String::new);
    let mut token_locked = use_signal(|| false);
    let mut channel_locked = use_signal(|| false);
    let mut saved = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // Load settings on mount. An empty stored value counts as unset.
    let _loader = use_resource(move || async move {
        match api::get_app_settings().await {
            Ok(s) => {
                if let Some(t) = s.token_bot.filter(|v| !v.is_empty()) {
                    token.set(t);
                    token_locked.set(true);
                }
                if let Some(c) = s.channel_link.filter(|v| !v.is_empty()) {
                    channel.set(c);
                    channel_locked.set(true);
                }
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    let handle_save = move |_| {
        spawn(async move {
            error.set(None);
            match api::save_app_settings(token(), channel()).await {
                Ok(_) => {
                    token_locked.set(true);
                    channel_locked.set(true);
                    saved.set(true);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let locked = saved() || (token_locked() && channel_locked());

    rsx! {
        SidebarLayout {
            on_nav_dashboard,
            on_nav_posting,
            on_logout,

            div {
                class: "settings-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                div {
                    class: "settings-field",
                    Label { html_for: "token-bot", "Bot token" }
                    Input {
                        id: "token-bot",
                        class: "w-full",
                        placeholder: "Enter Token",
                        value: token(),
                        disabled: token_locked(),
                        oninput: move |evt: FormEvent| token.set(evt.value()),
                    }
                }

                div {
                    class: "settings-field",
                    Label { html_for: "channel-link", "Channel link" }
                    Input {
                        id: "channel-link",
                        class: "w-full",
                        placeholder: "Enter link to channel",
                        value: channel(),
                        disabled: channel_locked(),
                        oninput: move |evt: FormEvent| channel.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    disabled: locked,
                    onclick: handle_save,
                    if locked { "Saved" } else { "Save Data" }
                }
            }
        }
    }
}
