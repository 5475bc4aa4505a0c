pub mod classify;
pub mod config;
pub mod dataset;
pub mod dedupe;
pub mod discovery;
pub mod error;
pub mod filter;
pub mod traits;
pub mod view;

pub use classify::{classify, declared_type, effective_type, RELEASE_TYPE_OTHER};
pub use dataset::ReleaseDataset;
pub use config::ViewConfig;
pub use dedupe::{dedupe, dedupe_and_window, dedupe_and_window_in, release_key, Window};
pub use error::{ReleaseError, Result};
pub use filter::{filter_by_types, TypeSelection};
pub use traits::{ReleaseSource, StaticReleaseSource};
pub use view::RecentReleasesView;
