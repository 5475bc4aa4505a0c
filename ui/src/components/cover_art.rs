use dioxus::prelude::*;

/// Front cover thumbnail of a release on the Cover Art Archive.
pub fn cover_art_url(release_mbid: &str) -> String {
    format!("https://coverartarchive.org/release/{release_mbid}/front-250")
}

#[derive(Props, PartialEq, Clone)]
pub struct CoverArtProps {
    pub release_mbid: String,
    /// The alt text for accessibility.
    pub alt: String,
}

#[component]
pub fn CoverArt(props: CoverArtProps) -> Element {
    let mut has_error = use_signal(|| false);
    let src = cover_art_url(&props.release_mbid);

    rsx! {
      div { class: "cover-art",
        if !has_error() {
          img {
            src: "{src}",
            alt: "{props.alt}",
            loading: "lazy",
            class: "cover-art-image",
            onerror: move |_| has_error.set(true),
          }
        } else {
          svg {
            class: "cover-art-placeholder",
            xmlns: "http://www.w3.org/2000/svg",
            fill: "none",
            "viewBox": "0 0 24 24",
            "stroke-width": "1.5",
            stroke: "currentColor",
            path {
              "stroke-linecap": "round",
              "stroke-linejoin": "round",
              d: "M9 9l10.5-3m0 6.553v3.75a2.25 2.25 0 01-1.632 2.163l-1.32.377a1.803 1.803 0 11-.99-3.467l2.31-.66a2.25 2.25 0 001.632-2.163zm0 0V2.25L9 5.25v10.303m0 0v3.75a2.25 2.25 0 01-1.632 2.163l-1.32.377a1.803 1.803 0 01-.99-3.467l2.31-.66A2.25 2.25 0 009 15.553z",
            }
          }
        }
      }
    }
}
