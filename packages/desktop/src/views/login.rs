use dioxus::prelude::*;

use crate::Route;

/// Login page.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::LoginView {
            on_success: move |_| {
                nav.push(Route::Dashboard {});
            },
            on_signup: move |_| {
                nav.push(Route::Signup {});
            },
            on_dashboard: move |_| {
                nav.push(Route::Dashboard {});
            },
        }
    }
}
