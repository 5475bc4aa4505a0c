//! Configuration for the recent releases view.
//!
//! Values come from the environment, then from a caller supplied fallback.
//! Anything still unset takes its default.

use std::path::PathBuf;

use tracing::warn;

use crate::dedupe::{Window, DEFAULT_WINDOW_END, DEFAULT_WINDOW_START};
use crate::error::{ReleaseError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Range of deduplicated releases rendered as cards (default: 990..1005)
    pub window: Window,
    /// Dataset to load instead of the bundled one
    pub data_path: Option<PathBuf>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            window: Window::default(),
            data_path: None,
        }
    }
}

impl ViewConfig {
    /// Load configuration from environment variables, consulting `fallback`
    /// for anything the environment does not set. A malformed value is
    /// logged and replaced by its own default; other settings are kept.
    pub fn from_env_or<F>(fallback: F) -> Self
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let lookup = |key: &'static str| std::env::var(key).ok().or_else(|| fallback(key));

        Self {
            window: Window::new(
                index_or_default(&lookup, "RELEASES_WINDOW_START", DEFAULT_WINDOW_START),
                index_or_default(&lookup, "RELEASES_WINDOW_END", DEFAULT_WINDOW_END),
            ),
            data_path: data_path(&lookup),
        }
    }

    /// Build configuration from an arbitrary key lookup, failing on the first malformed value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let start = parse_index(&lookup, "RELEASES_WINDOW_START", DEFAULT_WINDOW_START)?;
        let end = parse_index(&lookup, "RELEASES_WINDOW_END", DEFAULT_WINDOW_END)?;

        Ok(Self {
            window: Window::new(start, end),
            data_path: data_path(&lookup),
        })
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn data_path(&self) -> Option<&PathBuf> {
        self.data_path.as_ref()
    }
}

fn data_path<F>(lookup: &F) -> Option<PathBuf>
where
    F: Fn(&'static str) -> Option<String>,
{
    lookup("RELEASES_DATA_PATH")
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

fn index_or_default<F>(lookup: &F, key: &'static str, default: usize) -> usize
where
    F: Fn(&'static str) -> Option<String>,
{
    parse_index(lookup, key, default).unwrap_or_else(|e| {
        warn!("{}, using {}", e, default);
        default
    })
}

fn parse_index<F>(lookup: &F, key: &'static str, default: usize) -> Result<usize>
where
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ReleaseError::Config { key, value }),
        None => Ok(default),
    }
}
