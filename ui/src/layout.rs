use crate::components::Footer;
use dioxus::prelude::*;

#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
      div { class: "site-layout",
        {children}
        Footer {}
      }
    }
}
