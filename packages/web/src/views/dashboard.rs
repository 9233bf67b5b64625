use dioxus::prelude::*;

use crate::Route;

/// Dashboard page.
#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::DashboardView {
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
