use serde::{Deserialize, Serialize};

/// A release as it appears in the recent releases dataset.
///
/// Field names follow the dataset JSON. Everything but the identifier and the
/// display strings is optional, and missing display strings come back empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReleaseRecord {
    pub release_mbid: String,
    #[serde(default)]
    pub release_name: String,
    #[serde(default)]
    pub artist_credit_name: String,
    #[serde(default)]
    pub release_group_primary_type: Option<String>,
    #[serde(default)]
    pub release_group_secondary_type: Option<String>,
    #[serde(default, rename = "date")]
    pub release_date: String,
    #[serde(default)]
    pub artist_mbids: Vec<String>,
}

impl ReleaseRecord {
    pub fn new(
        release_mbid: impl Into<String>,
        release_name: impl Into<String>,
        artist_credit_name: impl Into<String>,
    ) -> Self {
        Self {
            release_mbid: release_mbid.into(),
            release_name: release_name.into(),
            artist_credit_name: artist_credit_name.into(),
            release_group_primary_type: None,
            release_group_secondary_type: None,
            release_date: String::new(),
            artist_mbids: Vec::new(),
        }
    }

    pub fn with_types(mut self, primary: Option<&str>, secondary: Option<&str>) -> Self {
        self.release_group_primary_type = primary.map(str::to_string);
        self.release_group_secondary_type = secondary.map(str::to_string);
        self
    }

    pub fn with_artists<I, S>(mut self, artist_mbids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.artist_mbids = artist_mbids.into_iter().map(Into::into).collect();
        self
    }
}
