use anyhow::Result;

use crate::types::Job;

/// Jobs whose title or company contains `query`, ignoring case, in their
/// original order. An empty query keeps everything.
pub fn filter_jobs(jobs: &[Job], query: &str) -> Vec<Job> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return jobs.to_vec();
    }
    jobs.iter()
        .filter(|j| j.title.to_lowercase().contains(&needle) || j.company_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// In-memory listing that a refresh replaces wholesale.
#[derive(Debug, Clone, Default)]
pub struct JobListing {
    jobs: Vec<Job>,
}

impl JobListing {
    pub fn new() -> Self { Self::default() }

    pub fn jobs(&self) -> &[Job] { &self.jobs }

    pub fn replace(&mut self, jobs: Vec<Job>) { self.jobs = jobs; }

    pub fn find(&self, id: &str) -> Option<&Job> { self.jobs.iter().find(|j| j.id == id) }

    pub fn filter(&self, query: &str) -> Vec<Job> { filter_jobs(&self.jobs, query) }

    /// Swap in the outcome of a fetch. On failure the current jobs stay
    /// and the error is handed back.
    pub fn apply_fetch(&mut self, fetched: Result<Vec<Job>>) -> Result<usize> {
        match fetched {
            Ok(jobs) => {
                let n = jobs.len();
                self.replace(jobs);
                Ok(n)
            }
            Err(e) => {
                tracing::error!(error = %e, "error fetching jobs");
                Err(e)
            }
        }
    }
}
