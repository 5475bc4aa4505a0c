use itertools::Itertools;
use shared::release::ReleaseRecord;

/// First index shown by default.
pub const DEFAULT_WINDOW_START: usize = 990;
/// One past the last index shown by default.
pub const DEFAULT_WINDOW_END: usize = 1005;

/// Grouping key for duplicate releases: lowercased release name followed by
/// the lowercased artist credit.
///
/// "Waterslide, Diving Board, Ladder to the Sky" and "Waterslide, Diving
/// Board, Ladder To The Sky" by the same artist share a key.
pub fn release_key(record: &ReleaseRecord) -> String {
    let mut key = record.release_name.to_lowercase();
    key.push_str(&record.artist_credit_name.to_lowercase());
    key
}

/// Keeps the first release seen for every [`release_key`], in input order.
pub fn dedupe<'a, I>(records: I) -> Vec<&'a ReleaseRecord>
where
    I: IntoIterator<Item = &'a ReleaseRecord>,
{
    records.into_iter().unique_by(|r| release_key(r)).collect()
}

/// Half-open range of positions selected for display.
///
/// Out of range positions are clamped rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The part of `items` covered by this window.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start.min(items.len());
        let end = self.end.min(items.len()).max(start);
        &items[start..end]
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_START, DEFAULT_WINDOW_END)
    }
}

/// Deduplicates `records` and returns the `[start, end)` slice of the result.
pub fn dedupe_and_window(records: &[ReleaseRecord], start: usize, end: usize) -> Vec<&ReleaseRecord> {
    dedupe_and_window_in(records, Window::new(start, end))
}

pub fn dedupe_and_window_in(records: &[ReleaseRecord], window: Window) -> Vec<&ReleaseRecord> {
    let unique = dedupe(records);
    window.apply(&unique).to_vec()
}
