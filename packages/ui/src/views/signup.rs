//! Registration page view.
//!
//! Empty fields are rejected here; the remaining checks (email format,
//! uniqueness, password strength, confirmation match) run server-side in
//! order, and the first failure comes back as the single error message.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input};

/// Shared signup view.
#[component]
pub fn SignupView(
    /// Called when the user should land back on the login page — after the
    /// post-registration delay, or when the login link is clicked.
    on_login: EventHandler<()>,
) -> Element {
    let mut email = use_signal(String::new);
    let mut login = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| false);
    let mut loading = use_signal(|| false);

    // Typing in any field clears the current error.
    let mut clear_error = move || {
        if error().is_some() {
            error.set(None);
        }
    };

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            if email().is_empty()
                || login().is_empty()
                || password().is_empty()
                || confirm_password().is_empty()
            {
                error.set(Some("All fields are required!".to_string()));
                return;
            }

            loading.set(true);
            match api::register(email(), login(), password(), confirm_password()).await {
                Ok(_) => {
                    success.set(true);
                    // Let the success message show, then move on to login
                    // without blocking other interaction.
                    sleep_secs(2).await;
                    on_login.call(());
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

                h1 { class: "auth-title", "Welcome to Registration" }

                form {
                    onsubmit: handle_signup,
                    class: "auth-form",

                    if success() {
                        div { class: "form-success", "Registration successful!" }
                    } else if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    Input {
                        class: "w-full",
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| {
                            email.set(evt.value());
                            clear_error();
                        },
                    }

                    Input {
                        class: "w-full",
                        placeholder: "Login",
                        value: login(),
                        oninput: move |evt: FormEvent| {
                            login.set(evt.value());
                            clear_error();
                        },
                    }

                    Input {
                        class: "w-full",
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt: FormEvent| {
                            password.set(evt.value());
                            clear_error();
                        },
                    }

                    Input {
                        class: "w-full",
                        r#type: "password",
                        placeholder: "Confirm Password",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| {
                            confirm_password.set(evt.value());
                            clear_error();
                        },
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Registering..." } else { "Register" }
                    }
                }

                p {
                    class: "auth-links",
                    a {
                        class: "auth-link",
                        onclick: move |_| on_login.call(()),
                        "Login"
                    }
                }
            }

            div {
                class: "auth-aside",
                div { class: "auth-aside-badge", "\u{2705}" }
                p { class: "auth-aside-caption", "Form Registration" }
            }
        }
    }
}

async fn sleep_secs(secs: u64) {
    let duration = std::time::Duration::from_secs(secs);
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
