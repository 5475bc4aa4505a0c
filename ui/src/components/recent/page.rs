use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use releases::{
    declared_type, RecentReleasesView, ReleaseDataset, StaticReleaseSource, TypeSelection, Window,
};

use crate::{ReleaseCard, ReleaseFilters, ReleasesTimeline};

#[component]
pub fn RecentReleases(dataset: ReleaseDataset, window: Window) -> Element {
    // Filter types are derived once, when the page is first built.
    let view = use_hook(|| {
        Rc::new(RecentReleasesView::new(StaticReleaseSource::new(
            dataset.clone(),
        )))
    });
    let selection = use_signal(TypeSelection::new);

    let visible = view.visible(window, &selection.read());
    debug!(
        "Showing {} releases in {}..{}",
        visible.len(),
        window.start,
        window.end
    );

    rsx! {
      h3 { id: "row", class: "releases-title", "Recent and upcoming releases" }
      div { class: "releases-page",
        div { class: "releases-sidebar",
          ReleaseFilters { filters: view.types().to_vec(), selection }
        }
        div { class: "release-cards-grid",
          if visible.is_empty() {
            p { class: "releases-empty",
              "No releases to show."
            }
          }
          for release in visible.iter() {
            ReleaseCard {
              key: "{release.release_mbid}",
              release_mbid: release.release_mbid.clone(),
              release_name: release.release_name.clone(),
              artist_credit_name: release.artist_credit_name.clone(),
              release_date: release.release_date.clone(),
              release_type: declared_type(release).map(str::to_string),
              artist_mbids: release.artist_mbids.clone(),
            }
          }
        }
        div { class: "releases-aside",
          ReleasesTimeline {}
        }
      }
    }
}
