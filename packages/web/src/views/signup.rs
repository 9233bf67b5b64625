use dioxus::prelude::*;

use crate::Route;

/// Signup page.
#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::SignupView {
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
