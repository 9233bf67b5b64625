use dioxus::prelude::*;

use crate::Route;

/// Posting page.
#[component]
pub fn Posting() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::PostingView {
            on_nav_dashboard: move |_| {
                nav.push(Route::Dashboard {});
            },
            on_nav_posting: move |_| {
                nav.push(Route::Posting {});
            },
            on_logout: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
