pub mod apply;
pub mod config;
pub mod dao;
pub mod db;
pub mod error;
pub mod listing;
pub mod mapping;
pub mod sorting;
pub mod source;
pub mod storage;
pub mod types;

// --- Library API for embedding ---

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::apply::{Application, Submission};
    pub use crate::config::Config;
    pub use crate::dao::SaveOutcome;
    pub use crate::error::{ApplyError, FeedError};
    pub use crate::sorting::SortOrder;
    pub use crate::source::{HttpJobSource, JobSource, StaticJobSource};
    pub use crate::storage::{MemoryStorage, Storage};
    pub use crate::types::Job;
    pub use crate::{BoardSnapshot, JobBoard};
}

use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::apply::{Application, Submission};
use crate::config::Config;
use crate::dao::SaveOutcome;
use crate::db::Database;
use crate::error::ApplyError;
use crate::listing::{filter_jobs, JobListing};
use crate::sorting::{sort_jobs, SortOrder};
use crate::source::{HttpJobSource, JobSource};
use crate::storage::Storage;
use crate::types::Job;

/// Everything a listing screen renders in one pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub jobs: Vec<Job>,
    pub saved_ids: Vec<String>,
    pub dark_mode: bool,
}

/// Async library entry point. Owns persistence, the remote source and the
/// in-memory listing.
pub struct JobBoard {
    storage: Arc<dyn Storage>,
    source: Arc<dyn JobSource>,
    listing: RwLock<JobListing>,
}

impl JobBoard {
    /// Open the database (optionally migrating) and point at the configured endpoint.
    /// Does not fetch; call `refresh_jobs` for that.
    pub async fn connect(config: &Config, run_migrations: bool) -> Result<Self> {
        let db = Database::connect(config.database_url.as_deref()).await?;
        if run_migrations { db.run_migrations().await?; }
        let source = HttpJobSource::new(config.endpoint_url()?, &config.user_agent)?;
        Ok(Self {
            storage: Arc::new(db),
            source: Arc::new(source),
            listing: RwLock::new(JobListing::new()),
        })
    }

    /// Assemble from caller-provided storage and source.
    pub fn from_parts(storage: Arc<dyn Storage>, source: Arc<dyn JobSource>) -> Self {
        Self { storage, source, listing: RwLock::new(JobListing::new()) }
    }

    // --- Job listing ---

    /// Re-fetch the feed and replace the listing. On error the listing is
    /// left as it was. Overlapping calls are not coordinated: each swaps in
    /// its own result when it finishes, so the last one to finish wins.
    pub async fn refresh_jobs(&self) -> Result<usize> {
        // Fetch outside the lock so a slow request does not block readers.
        let fetched = self.source.fetch_jobs().await;
        let n = self.listing.write().await.apply_fetch(fetched)?;
        tracing::info!(count = n, "job listing refreshed");
        Ok(n)
    }

    pub async fn jobs(&self) -> Vec<Job> { self.listing.read().await.jobs().to_vec() }

    /// Listing filtered by title or company.
    pub async fn search(&self, query: &str) -> Vec<Job> { self.listing.read().await.filter(query) }

    pub async fn find_job(&self, id: &str) -> Option<Job> { self.listing.read().await.find(id).cloned() }

    /// Filtered listing plus saved membership and the dark-mode flag.
    pub async fn snapshot(&self, query: &str) -> BoardSnapshot {
        let (saved, dark_mode) = futures::join!(self.saved_jobs(), self.dark_mode());
        let jobs = filter_jobs(self.listing.read().await.jobs(), query);
        BoardSnapshot {
            jobs,
            saved_ids: saved.into_iter().map(|j| j.id).collect(),
            dark_mode,
        }
    }

    // --- Saved jobs ---

    pub async fn saved_jobs(&self) -> Vec<Job> { dao::load_saved_jobs(self.storage.as_ref()).await }

    pub async fn sorted_saved_jobs(&self, order: SortOrder) -> Vec<Job> {
        sort_jobs(&self.saved_jobs().await, order)
    }

    pub async fn is_saved(&self, job: &Job) -> bool { dao::is_saved(&self.saved_jobs().await, job) }

    /// Save or unsave `job`. Returns the saved collection after the change.
    pub async fn toggle_saved(&self, job: &Job) -> (Vec<Job>, SaveOutcome) {
        dao::toggle_saved_job_with_outcome(self.storage.as_ref(), job).await
    }

    pub async fn remove_saved(&self, id: &str) -> Vec<Job> {
        dao::remove_saved_job(self.storage.as_ref(), id).await
    }

    // --- Preferences ---

    pub async fn dark_mode(&self) -> bool { dao::load_dark_mode(self.storage.as_ref()).await }

    pub async fn toggle_dark_mode(&self) -> bool { dao::toggle_dark_mode(self.storage.as_ref()).await }

    // --- Apply ---

    pub fn apply(&self, application: &Application) -> std::result::Result<Submission, ApplyError> {
        apply::submit(application)
    }
}
