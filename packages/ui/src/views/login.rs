//! Login page view with email/password form.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input};
use crate::use_auth;

/// Shared login view.
///
/// Platform packages wire the navigation callbacks to their route table.
#[component]
pub fn LoginView(
    /// Called after a successful login.
    on_success: EventHandler<()>,
    /// Called when the user clicks the signup link.
    on_signup: EventHandler<()>,
    /// Called when the user clicks the dashboard link.
    on_dashboard: EventHandler<()>,
) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            // Empty fields are validated implicitly: they never match an
            // account and surface the same generic error.
            match api::login(email().trim().to_string(), password()).await {
                Ok(user) => {
                    let mut state = auth();
                    state.user = Some(user);
                    state.loading = false;
                    auth.set(state);
                    on_success.call(());
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-panel",

                h1 { class: "auth-title", "Welcome" }
                p { class: "auth-subtitle", "Sign in to your account" }

                form {
                    onsubmit: handle_login,
                    class: "auth-form",

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    Input {
                        class: "w-full",
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    Input {
                        class: "w-full",
                        r#type: "password",
                        placeholder: "Enter Password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Authorization" }
                    }
                }

                p {
                    class: "auth-links",
                    a {
                        class: "auth-link",
                        onclick: move |_| on_signup.call(()),
                        "Create Account"
                    }
                    a {
                        class: "auth-link",
                        onclick: move |_| on_dashboard.call(()),
                        "dashboard"
                    }
                }
            }

            div {
                class: "auth-aside",
                div { class: "auth-aside-badge", "\u{1F512}" }
                p { class: "auth-aside-caption", "Authorization" }
            }
        }
    }
}
