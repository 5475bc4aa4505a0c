pub mod card;
pub mod filters;
pub mod page;
pub mod timeline;

pub use card::ReleaseCard;
pub use filters::ReleaseFilters;
pub use page::RecentReleases;
pub use timeline::ReleasesTimeline;
