use shared::release::ReleaseRecord;

use crate::dataset::ReleaseDataset;

/// Supplies the pre-loaded collection of releases a page works over.
pub trait ReleaseSource: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;

    fn releases(&self) -> &[ReleaseRecord];
}

/// A source backed by a dataset loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticReleaseSource {
    dataset: ReleaseDataset,
}

impl StaticReleaseSource {
    pub fn new(dataset: ReleaseDataset) -> Self {
        Self { dataset }
    }
}

impl ReleaseSource for StaticReleaseSource {
    fn id(&self) -> &'static str {
        "static"
    }

    fn name(&self) -> &'static str {
        "Static dataset"
    }

    fn releases(&self) -> &[ReleaseRecord] {
        self.dataset.releases()
    }
}

impl From<ReleaseDataset> for StaticReleaseSource {
    fn from(dataset: ReleaseDataset) -> Self {
        Self::new(dataset)
    }
}
