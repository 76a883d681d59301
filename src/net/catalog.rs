//! Asynchronous project source.
//!
//! DESIGN
//! ======
//! The page consumes projects through [`ProjectSource`], so the shipped
//! simulated-latency catalog can be swapped for a real fetch without
//! touching the load orchestration. The error type is uninhabited for now;
//! a real data source gets to populate it without changing any signature.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::time::Duration;

use crate::state::projects::{Project, seed_projects};

/// Latency window the seed catalog waits out before yielding its items.
pub const SEED_LOAD_LATENCY: Duration = Duration::from_millis(800);

/// Load failure kind. Uninhabited: the seed catalog cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadError {}

impl std::fmt::Display for LoadError {
    fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {}
    }
}

/// An asynchronous provider of the project list.
#[allow(async_fn_in_trait)]
pub trait ProjectSource {
    /// Yield the full project list, in display order. One-shot per call;
    /// callers decide how completions race (see `ProjectsState::finish_load`).
    async fn fetch_projects(&self) -> Result<Vec<Project>, LoadError>;
}

/// The static seed behind a fixed latency window. Browser builds sleep the
/// window out; native builds resolve immediately so tests stay synchronous.
#[derive(Clone, Debug)]
pub struct SeedCatalog {
    pub items: Vec<Project>,
    pub latency: Duration,
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self {
            items: seed_projects(),
            latency: SEED_LOAD_LATENCY,
        }
    }
}

impl ProjectSource for SeedCatalog {
    async fn fetch_projects(&self) -> Result<Vec<Project>, LoadError> {
        #[cfg(feature = "csr")]
        gloo_timers::future::sleep(self.latency).await;
        Ok(self.items.clone())
    }
}
