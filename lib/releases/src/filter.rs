use std::collections::BTreeSet;

use shared::release::ReleaseRecord;

use crate::classify::effective_type;

/// Release types picked in the filter sidebar. Nothing picked means everything is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSelection {
    selected: BTreeSet<String>,
}

impl TypeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips `release_type` in or out of the selection. Returns whether it is now selected.
    pub fn toggle(&mut self, release_type: &str) -> bool {
        if self.selected.remove(release_type) {
            false
        } else {
            self.selected.insert(release_type.to_string());
            true
        }
    }

    pub fn is_selected(&self, release_type: &str) -> bool {
        self.selected.contains(release_type)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn matches(&self, record: &ReleaseRecord) -> bool {
        self.is_empty() || self.is_selected(effective_type(record))
    }
}

impl<S: Into<String>> FromIterator<S> for TypeSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Keeps the releases whose effective type is part of `selection`.
pub fn filter_by_types<'a, I>(records: I, selection: &TypeSelection) -> Vec<&'a ReleaseRecord>
where
    I: IntoIterator<Item = &'a ReleaseRecord>,
{
    records
        .into_iter()
        .filter(|record| selection.matches(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<ReleaseRecord> {
        vec![
            ReleaseRecord::new("1", "One", "A").with_types(Some("Album"), None),
            ReleaseRecord::new("2", "Two", "B").with_types(None, Some("EP")),
            ReleaseRecord::new("3", "Three", "C"),
            ReleaseRecord::new("4", "Four", "D").with_types(Some("Album"), Some("Live")),
        ]
    }

    #[test]
    fn empty_selection_keeps_everything() {
        let records = records();
        assert_eq!(filter_by_types(&records, &TypeSelection::new()).len(), 4);
    }

    #[test]
    fn filters_on_effective_type() {
        let records = records();
        let selection: TypeSelection = ["Album", "Other"].into_iter().collect();
        let kept: Vec<_> = filter_by_types(&records, &selection)
            .into_iter()
            .map(|r| r.release_mbid.as_str())
            .collect();
        assert_eq!(kept, vec!["1", "3", "4"]);
    }

    #[test]
    fn secondary_type_is_not_matched_when_primary_present() {
        let records = records();
        let selection: TypeSelection = ["Live"].into_iter().collect();
        assert!(filter_by_types(&records, &selection).is_empty());
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut selection = TypeSelection::new();
        assert!(selection.toggle("EP"));
        assert!(selection.is_selected("EP"));
        assert!(!selection.toggle("EP"));
        assert!(selection.is_empty());
    }
}
