//! Shared two-pane layout for the dashboard and posting pages.

use dioxus::prelude::*;

use crate::{use_auth, AuthState};

/// Sidebar plus header shell.
///
/// Platform packages provide navigation callbacks and the page body as
/// children.
#[component]
pub fn SidebarLayout(
    /// Called when the user clicks the dashboard menu entry.
    on_nav_dashboard: EventHandler<()>,
    /// Called when the user clicks the posting menu entry.
    on_nav_posting: EventHandler<()>,
    /// Called after a successful sign-out.
    on_logout: EventHandler<()>,
    /// The page body.
    children: Element,
) -> Element {
    let mut auth = use_auth();

    let initial = auth().user.map(|u| {
        u.display_name()
            .chars()
            .next()
            .unwrap_or('?')
            .to_ascii_uppercase()
            .to_string()
    });

    let handle_logout = move |_| {
        spawn(async move {
            if let Err(e) = api::logout().await {
                tracing::warn!("logout failed: {e}");
            }
            auth.set(AuthState {
                user: None,
                loading: false,
            });
            on_logout.call(());
        });
    };

    rsx! {
        div {
            class: "app-shell",

            aside {
                class: "sidebar",

                div {
                    class: "sidebar-logo",
                    span { class: "logo-mark", "PD" }
                    span { class: "logo-text", "PostDesk" }
                }

                nav {
                    class: "sidebar-menu",
                    span { class: "menu-label", "Menu" }
                    button {
                        class: "menu-btn",
                        onclick: move |_| on_nav_dashboard.call(()),
                        "Header"
                    }
                    button {
                        class: "menu-btn",
                        onclick: move |_| on_nav_posting.call(()),
                        "Send"
                    }
                }
            }

            div {
                class: "main-area",

                header {
                    class: "topbar",
                    h1 { class: "topbar-title", "Control Panel" }
                    div {
                        class: "topbar-right",
                        if let Some(initial) = initial {
                            span { class: "avatar", "{initial}" }
                            button {
                                class: "menu-btn",
                                onclick: handle_logout,
                                "Sign out"
                            }
                        }
                    }
                }

                main {
                    class: "content",
                    {children}
                }
            }
        }
    }
}
