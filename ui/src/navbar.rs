use dioxus::prelude::*;

use crate::use_global_app_context;

#[component]
pub fn Navbar(children: Element) -> Element {
    let username = use_global_app_context().and_then(|ctx| ctx.username().map(str::to_string));

    rsx! {
        header { class: "site-header",
            div { class: "site-brand",
                div { class: "site-logo",
                    svg {
                        class: "site-logo-icon",
                        fill: "none",
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: "M9 19V6l12-3v13M9 19c0 1.105-1.343 2-3 2s-3-.895-3-2 1.343-2 3-2 3 .895 3 2zm12-3c0 1.105-1.343 2-3 2s-3-.895-3-2 1.343-2 3-2 3 .895 3 2zM9 10l12-3",
                        }
                    }
                }
                h1 { class: "site-title",
                    "Recent Releases"
                }
            }

            nav { class: "site-nav",
                {children}
                if let Some(name) = username {
                    span { class: "site-user", "{name}" }
                }
            }
        }
    }
}
