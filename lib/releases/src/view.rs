use shared::release::ReleaseRecord;
use tracing::debug;

use crate::classify::classify;
use crate::dedupe::{dedupe, Window};
use crate::filter::{filter_by_types, TypeSelection};
use crate::traits::ReleaseSource;

/// State behind the recent releases page.
///
/// The filter types are derived once, when the view is built. The visible
/// cards are recomputed from the source on every call to [`visible`](Self::visible).
pub struct RecentReleasesView<S> {
    source: S,
    types: Vec<String>,
}

impl<S: ReleaseSource> RecentReleasesView<S> {
    pub fn new(source: S) -> Self {
        let types = classify(source.releases());
        debug!(
            "Classified {} releases from {} into {} types",
            source.releases().len(),
            source.name(),
            types.len()
        );
        Self { source, types }
    }

    /// Every distinct release type, "Other" included, in first-seen order.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Releases to render: deduplicated, narrowed to `selection`, then cut to `window`.
    pub fn visible(&self, window: Window, selection: &TypeSelection) -> Vec<&ReleaseRecord> {
        let unique = dedupe(self.source.releases());
        let filtered = filter_by_types(unique, selection);
        window.apply(&filtered).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ReleaseDataset;
    use crate::traits::StaticReleaseSource;

    fn view() -> RecentReleasesView<StaticReleaseSource> {
        let releases = vec![
            ReleaseRecord::new("1", "Album One", "Artist").with_types(Some("Album"), None),
            ReleaseRecord::new("2", "album one", "ARTIST").with_types(Some("Single"), None),
            ReleaseRecord::new("3", "Extended", "Artist").with_types(None, Some("EP")),
            ReleaseRecord::new("4", "Mystery", "Other Artist"),
            ReleaseRecord::new("5", "Album Two", "Artist").with_types(Some("Album"), None),
        ];
        RecentReleasesView::new(StaticReleaseSource::new(ReleaseDataset::new(releases)))
    }

    fn ids(records: Vec<&ReleaseRecord>) -> Vec<&str> {
        records.into_iter().map(|r| r.release_mbid.as_str()).collect()
    }

    #[test]
    fn types_include_duplicates_dropped_from_grid() {
        assert_eq!(view().types(), ["Album", "Single", "EP", "Other"]);
    }

    #[test]
    fn visible_dedupes_then_windows() {
        let view = view();
        let shown = view.visible(Window::new(0, 3), &TypeSelection::new());
        assert_eq!(ids(shown), vec!["1", "3", "4"]);
    }

    #[test]
    fn visible_filters_before_windowing() {
        let view = view();
        let selection: TypeSelection = ["Album"].into_iter().collect();
        let shown = view.visible(Window::new(1, 10), &selection);
        assert_eq!(ids(shown), vec!["5"]);
    }

    #[test]
    fn visible_is_repeatable() {
        let view = view();
        let selection = TypeSelection::new();
        assert_eq!(
            view.visible(Window::default(), &selection),
            view.visible(Window::default(), &selection)
        );
        assert!(view.visible(Window::default(), &selection).is_empty());
    }
}
