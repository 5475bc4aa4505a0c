use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use releases::{ReleaseDataset, ViewConfig};
use ui::RecentReleases;

const BUNDLED_RELEASES: &str = include_str!("../../assets/releases.json");

/// Settings baked in at build time, see build.rs.
fn compiled_var(key: &'static str) -> Option<&'static str> {
    match key {
        "RELEASES_WINDOW_START" => option_env!("RELEASES_WINDOW_START"),
        "RELEASES_WINDOW_END" => option_env!("RELEASES_WINDOW_END"),
        "RELEASES_DATA_PATH" => option_env!("RELEASES_DATA_PATH"),
        _ => None,
    }
}

fn view_config() -> ViewConfig {
    ViewConfig::from_env_or(|key| compiled_var(key).map(str::to_string))
}

fn load_dataset(config: &ViewConfig) -> ReleaseDataset {
    let loaded = match config.data_path() {
        Some(path) => ReleaseDataset::from_path(path),
        None => ReleaseDataset::from_json_str(BUNDLED_RELEASES),
    };

    match loaded {
        Ok(dataset) => {
            info!("Loaded {} releases", dataset.len());
            dataset
        }
        Err(e) => {
            error!("Failed to load releases: {}", e);
            ReleaseDataset::default()
        }
    }
}

#[component]
pub fn RecentReleasesPage() -> Element {
    let config = use_hook(view_config);
    let dataset = use_hook(|| load_dataset(&config));

    rsx! {
        RecentReleases { dataset, window: config.window() }
    }
}
