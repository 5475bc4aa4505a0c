use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
      footer { class: "site-footer",
        div { class: "site-footer-links",
          a {
            href: "https://musicbrainz.org",
            target: "_blank",
            "[ Data from MusicBrainz ]"
          }
          a {
            href: "https://coverartarchive.org",
            target: "_blank",
            "[ Cover Art Archive ]"
          }
        }
      }
    }
}
