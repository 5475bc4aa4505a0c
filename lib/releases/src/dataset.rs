use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use shared::release::ReleaseRecord;
use tracing::{debug, info};

use crate::error::{ReleaseError, Result};

/// The static collection of releases the page is built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseDataset {
    releases: Vec<ReleaseRecord>,
}

impl ReleaseDataset {
    pub fn new(releases: Vec<ReleaseRecord>) -> Self {
        Self { releases }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let releases: Vec<ReleaseRecord> = serde_json::from_str(json)?;
        debug!("Parsed {} releases", releases.len());
        Ok(Self::new(releases))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let releases: Vec<ReleaseRecord> = serde_json::from_reader(reader)?;
        Ok(Self::new(releases))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ReleaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(BufReader::new(file))?;
        info!("Loaded {} releases from {:?}", dataset.len(), path);
        Ok(dataset)
    }

    pub fn releases(&self) -> &[ReleaseRecord] {
        &self.releases
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"date": "2021-01-15", "artist_credit_name": "Madlib", "artist_mbids": ["a"],
         "release_name": "Sound Ancestors", "release_mbid": "r1",
         "release_group_primary_type": "Album", "release_group_secondary_type": null},
        {"date": "2021-01-22", "artist_credit_name": "Sleaford Mods", "artist_mbids": ["b"],
         "release_name": "Spare Ribs", "release_mbid": "r2",
         "release_group_primary_type": null, "release_group_secondary_type": null}
    ]"#;

    #[test]
    fn parses_json_array() {
        let dataset = ReleaseDataset::from_json_str(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.releases()[1].release_name, "Spare Ribs");
    }

    #[test]
    fn rejects_non_array() {
        let err = ReleaseDataset::from_json_str(r#"{"release_mbid": "r1"}"#).unwrap_err();
        assert!(matches!(err, ReleaseError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dataset = ReleaseDataset::from_path(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ReleaseDataset::from_path("/nonexistent/releases.json").unwrap_err();
        match err {
            ReleaseError::Io { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/releases.json"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
