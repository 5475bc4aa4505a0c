use dioxus::prelude::*;

use crate::CoverArt;

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    pub release_mbid: String,
    pub release_name: String,
    pub artist_credit_name: String,
    pub release_date: String,
    /// Primary type, else secondary type. Untyped releases show no badge.
    pub release_type: Option<String>,
    pub artist_mbids: Vec<String>,
}

/// "May 14, 2021" for full dates, the raw value otherwise.
fn display_date(release_date: &str) -> String {
    chrono::NaiveDate::parse_from_str(release_date, "%Y-%m-%d")
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| release_date.to_string())
}

#[component]
pub fn ReleaseCard(props: Props) -> Element {
    let alt_text = format!("Cover art for {}", props.release_name);
    let date = display_date(&props.release_date);
    let release_url = format!("https://musicbrainz.org/release/{}", props.release_mbid);
    // Only link the credit when it names a single artist.
    let artist_url = match props.artist_mbids.as_slice() {
        [mbid] => Some(format!("https://musicbrainz.org/artist/{mbid}")),
        _ => None,
    };

    rsx! {
      div { class: "release-card",
        CoverArt { release_mbid: props.release_mbid.clone(), alt: alt_text }

        div { class: "release-card-body",
          p { class: "release-date", "{date}" }
          if let Some(release_type) = &props.release_type {
            span { class: "release-type",
              "{release_type}"
            }
          }
          a {
            class: "release-name",
            href: "{release_url}",
            target: "_blank",
            "{props.release_name}"
          }
          if let Some(url) = artist_url {
            a {
              class: "release-artist",
              href: "{url}",
              target: "_blank",
              "{props.artist_credit_name}"
            }
          } else {
            p { class: "release-artist", "{props.artist_credit_name}" }
          }
        }
      }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_full_dates() {
        assert_eq!(display_date("2021-05-14"), "May 14, 2021");
    }

    #[test]
    fn keeps_partial_dates() {
        assert_eq!(display_date("2021"), "2021");
        assert_eq!(display_date(""), "");
    }
}
