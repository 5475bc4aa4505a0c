use itertools::Itertools;
use shared::release::ReleaseRecord;

/// Label used for releases that carry neither a primary nor a secondary type.
pub const RELEASE_TYPE_OTHER: &str = "Other";

/// Resolves the type a release is filed under: primary, then secondary, then "Other".
///
/// Empty strings count as missing.
pub fn effective_type(record: &ReleaseRecord) -> &str {
    declared_type(record).unwrap_or(RELEASE_TYPE_OTHER)
}

/// The primary type if set, else the secondary type, without the fallback label.
pub fn declared_type(record: &ReleaseRecord) -> Option<&str> {
    if let Some(primary) = non_empty(&record.release_group_primary_type) {
        return Some(primary);
    }
    non_empty(&record.release_group_secondary_type)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Distinct effective types across `records`, in the order they are first seen.
pub fn classify(records: &[ReleaseRecord]) -> Vec<String> {
    records
        .iter()
        .map(effective_type)
        .unique()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(primary: Option<&str>, secondary: Option<&str>) -> ReleaseRecord {
        ReleaseRecord::new("id", "name", "artist").with_types(primary, secondary)
    }

    #[test]
    fn untyped_release_falls_back_to_other() {
        assert_eq!(effective_type(&typed(None, None)), RELEASE_TYPE_OTHER);
    }

    #[test]
    fn primary_type_wins_over_secondary() {
        assert_eq!(effective_type(&typed(Some("Album"), Some("Live"))), "Album");
    }

    #[test]
    fn secondary_type_used_without_primary() {
        assert_eq!(effective_type(&typed(None, Some("EP"))), "EP");
    }

    #[test]
    fn empty_primary_is_skipped() {
        assert_eq!(effective_type(&typed(Some(""), Some("Compilation"))), "Compilation");
        assert_eq!(effective_type(&typed(Some(""), Some(""))), RELEASE_TYPE_OTHER);
    }

    #[test]
    fn declared_type_has_no_fallback() {
        assert_eq!(declared_type(&typed(None, None)), None);
        assert_eq!(declared_type(&typed(None, Some("Live"))), Some("Live"));
    }

    #[test]
    fn classify_collects_distinct_types() {
        let records = vec![
            typed(Some("Album"), None),
            typed(None, Some("EP")),
            typed(None, None),
        ];
        assert_eq!(classify(&records), vec!["Album", "EP", "Other"]);
    }

    #[test]
    fn classify_compares_by_value() {
        let records = vec![
            typed(Some("Single"), None),
            typed(Some("Album"), None),
            typed(Some("Single"), Some("Remix")),
            typed(None, None),
            typed(None, None),
        ];
        assert_eq!(classify(&records), vec!["Single", "Album", "Other"]);
    }

    #[test]
    fn classify_empty_dataset() {
        assert!(classify(&[]).is_empty());
    }
}
