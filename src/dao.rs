use serde::{Deserialize, Serialize};

use crate::storage::Storage;
use crate::types::Job;

pub const SAVED_JOBS_KEY: &str = "savedJobs";
pub const DARK_MODE_KEY: &str = "darkMode";

/// What a toggle did to the saved collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveOutcome {
    Saved,
    Unsaved,
}

// --- Saved-Job Store ---

/// Current saved jobs. Missing, unreadable or corrupt state loads as empty.
pub async fn load_saved_jobs(storage: &dyn Storage) -> Vec<Job> {
    let raw = match storage.get_item(SAVED_JOBS_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "error loading saved jobs");
            return Vec::new();
        }
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<Job>>(&raw) {
        Ok(jobs) => jobs,
        Err(e) => {
            tracing::warn!(error = %e, "saved jobs blob is not valid, treating as empty");
            Vec::new()
        }
    }
}

pub fn is_saved(saved: &[Job], job: &Job) -> bool {
    saved.iter().any(|s| s.id == job.id)
}

/// Save `job` if no entry shares its id, otherwise unsave it. Returns the
/// persisted collection.
pub async fn toggle_saved_job(storage: &dyn Storage, job: &Job) -> Vec<Job> {
    toggle_saved_job_with_outcome(storage, job).await.0
}

pub async fn toggle_saved_job_with_outcome(storage: &dyn Storage, job: &Job) -> (Vec<Job>, SaveOutcome) {
    let mut saved = load_saved_jobs(storage).await;
    let outcome = if is_saved(&saved, job) {
        saved.retain(|s| s.id != job.id);
        SaveOutcome::Unsaved
    } else {
        saved.push(job.clone());
        SaveOutcome::Saved
    };
    persist_saved_jobs(storage, &saved).await;
    tracing::debug!(id = %job.id, ?outcome, total = saved.len(), "toggled saved job");
    (saved, outcome)
}

/// Drop the entry with `id`. Removing an id that is not saved is a no-op.
pub async fn remove_saved_job(storage: &dyn Storage, id: &str) -> Vec<Job> {
    let mut saved = load_saved_jobs(storage).await;
    let before = saved.len();
    saved.retain(|s| s.id != id);
    if saved.len() != before {
        persist_saved_jobs(storage, &saved).await;
    }
    saved
}

// Write failures are logged and otherwise ignored.
async fn persist_saved_jobs(storage: &dyn Storage, saved: &[Job]) {
    let payload = match serde_json::to_string(saved) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize saved jobs");
            return;
        }
    };
    if let Err(e) = storage.set_item(SAVED_JOBS_KEY, &payload).await {
        tracing::error!(error = %e, "failed to persist saved jobs");
    }
}

// --- Preference Store ---

pub async fn load_dark_mode(storage: &dyn Storage) -> bool {
    match storage.get_item(DARK_MODE_KEY).await {
        Ok(Some(raw)) => serde_json::from_str::<bool>(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "dark mode flag is not a boolean, using light mode");
            false
        }),
        Ok(None) => false,
        Err(e) => {
            tracing::warn!(error = %e, "error loading dark mode flag");
            false
        }
    }
}

/// Flip the persisted flag and return the new value.
pub async fn toggle_dark_mode(storage: &dyn Storage) -> bool {
    let next = !load_dark_mode(storage).await;
    if let Err(e) = storage.set_item(DARK_MODE_KEY, if next { "true" } else { "false" }).await {
        tracing::error!(error = %e, "failed to persist dark mode flag");
    }
    next
}
