use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Dashboard, Login, NotFound, Posting, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/posting")]
    Posting {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    // The desktop shell talks to a locally running web server
    dioxus::fullstack::set_server_url("http://127.0.0.1:8080");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
