//! Flutter bridge for the hireizon library API.
//! Exposes a thin async wrapper around JobBoard suitable for flutter_rust_bridge.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use hireizon::prelude::*;

pub struct JobBoardBridge {
    inner: Arc<JobBoard>,
}

impl JobBoardBridge {
    /// Load config (optional path) and connect. `database_url` overrides the config.
    pub async fn new(config_path: Option<String>, database_url: Option<String>) -> Result<Self> {
        let mut config = Config::load(config_path.map(PathBuf::from).as_deref())?;
        if database_url.is_some() { config.database_url = database_url; }
        let board = JobBoard::connect(&config, true).await?;
        Ok(Self { inner: Arc::new(board) })
    }

    /// Pull-to-refresh. Returns the number of jobs now listed.
    pub async fn refresh_jobs(&self) -> Result<usize> { self.inner.refresh_jobs().await }

    pub async fn snapshot(&self, query: String) -> BoardSnapshot { self.inner.snapshot(&query).await }

    pub async fn search(&self, query: String) -> Vec<Job> { self.inner.search(&query).await }

    pub async fn saved_jobs(&self, order: Option<String>) -> Result<Vec<Job>> {
        match order {
            Some(o) => Ok(self.inner.sorted_saved_jobs(o.parse()?).await),
            None => Ok(self.inner.saved_jobs().await),
        }
    }

    /// Returns true when the job ended up saved.
    pub async fn toggle_saved(&self, job: Job) -> bool {
        let (_, outcome) = self.inner.toggle_saved(&job).await;
        outcome == SaveOutcome::Saved
    }

    pub async fn remove_saved(&self, id: String) -> Vec<Job> { self.inner.remove_saved(&id).await }

    pub async fn dark_mode(&self) -> bool { self.inner.dark_mode().await }

    pub async fn toggle_dark_mode(&self) -> bool { self.inner.toggle_dark_mode().await }

    /// Ok(message) on success, Err("title: message") for the form to show.
    pub fn apply(&self, application: Application) -> std::result::Result<String, String> {
        self.inner
            .apply(&application)
            .map(|s| s.message)
            .map_err(|e| format!("{}: {}", e.title(), e))
    }
}
