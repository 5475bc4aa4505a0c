mod recent;
pub use recent::RecentReleasesPage;
