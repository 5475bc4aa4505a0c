use dioxus::prelude::*;

#[component]
pub fn ReleasesTimeline() -> Element {
    rsx! {
      div { class: "releases-timeline",
        "Timeline"
      }
    }
}
