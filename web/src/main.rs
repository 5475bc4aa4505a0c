use dioxus::prelude::*;
use ui::{GlobalAppContext, Layout, Navbar};
use views::RecentReleasesPage;

mod props;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(WebNavbar)]
        #[route("/")]
        RecentReleasesPage {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let page_props = use_hook(props::page_props);
    use_context_provider(|| GlobalAppContext::from_props(&page_props, &props::origin()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "Recent Releases" }

        ErrorBoundary {
            handle_error: |_: ErrorContext| rsx! {
                div { class: "error-page",
                    h1 { class: "error-title", "Something went wrong" }
                    p { class: "error-hint", "Reload the page to try again." }
                }
            },
            Router::<Route> {}
        }
    }
}

#[component]
fn WebNavbar() -> Element {
    rsx! {
        Layout {
            Navbar {
                Link {
                    class: "nav-link",
                    active_class: "nav-link-active",
                    to: Route::RecentReleasesPage {},
                    "Releases"
                }
            }

            main { class: "site-main",
                Outlet::<Route> {}
            }
        }
    }
}
