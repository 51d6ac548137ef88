use serde_json::Value;

use crate::types::{Feed, Job, NOT_SPECIFIED, NO_DESCRIPTION, NO_TITLE};

/// Normalize every posting of a feed, preserving order.
pub fn normalize_feed(feed: Feed) -> Vec<Job> {
    let jobs: Vec<Job> = feed.into_items().iter().map(normalize_job).collect();
    tracing::debug!(count = jobs.len(), "normalized feed");
    jobs
}

/// Map one raw posting to a `Job`. Each field defaults on its own; a
/// non-object posting yields an all-defaults record.
pub fn normalize_job(raw: &Value) -> Job {
    let id = text(raw, "id")
        .or_else(|| text(raw, "slug"))
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    Job {
        id,
        title: text(raw, "title").unwrap_or_else(|| NO_TITLE.to_string()),
        company_name: text(raw, "companyName").unwrap_or_else(|| NOT_SPECIFIED.to_string()),
        compensation: compensation_from(raw),
        description: text(raw, "description").unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        job_location: location_from(raw),
        company_logo: text(raw, "companyLogo"),
    }
}

// Both bounds or nothing.
fn compensation_from(raw: &Value) -> String {
    match (text(raw, "minSalary"), text(raw, "maxSalary")) {
        (Some(min), Some(max)) => format!("${min} - {max}"),
        _ => NOT_SPECIFIED.to_string(),
    }
}

fn location_from(raw: &Value) -> String {
    match raw.get("locations").and_then(Value::as_array).and_then(|l| l.first()) {
        Some(Value::String(first)) => first.clone(),
        _ => NOT_SPECIFIED.to_string(),
    }
}

/// Field value as text when the feed gives something meaningful: a
/// non-empty string, a non-zero number, or `true`.
fn text(raw: &Value, field: &str) -> Option<String> {
    match raw.get(field)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => number_text(n),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn number_text(n: &serde_json::Number) -> Option<String> {
    if let Some(i) = n.as_i64() {
        return (i != 0).then(|| i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.to_string());
    }
    let f = n.as_f64()?;
    if f == 0.0 || !f.is_finite() {
        return None;
    }
    // Integral floats print without a fraction: 50000.0 -> "50000"
    if f.fract() == 0.0 && f.abs() < 1e15 {
        Some(format!("{}", f as i64))
    } else {
        Some(f.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn engineer_at_acme() {
        let feed = Feed::from_value(json!([
            { "title": "Engineer", "companyName": "Acme", "minSalary": 50000, "maxSalary": 70000 }
        ]))
        .unwrap();
        let jobs = normalize_feed(feed);
        assert_eq!(jobs.len(), 1);
        let job = &jobs[0];
        assert_eq!(job.title, "Engineer");
        assert_eq!(job.company_name, "Acme");
        assert_eq!(job.compensation, "$50000 - 70000");
        assert_eq!(job.job_location, "Not specified");
        assert_eq!(job.description, "No description");
        assert!(job.company_logo.is_none());
        assert!(uuid::Uuid::parse_str(&job.id).is_ok());
    }

    #[test]
    fn id_prefers_source_id_then_slug() {
        assert_eq!(normalize_job(&json!({ "id": "abc", "slug": "s" })).id, "abc");
        assert_eq!(normalize_job(&json!({ "id": "", "slug": "s" })).id, "s");
        assert_eq!(normalize_job(&json!({ "id": 42 })).id, "42");
        assert_eq!(normalize_job(&json!({ "id": null, "slug": "eng-1" })).id, "eng-1");
    }

    #[test]
    fn generated_ids_are_unique_within_and_across_batches() {
        let raw = json!([{}, {}, {}, { "title": "x" }, 7, null]);
        let first = normalize_feed(Feed::from_value(raw.clone()).unwrap());
        let second = normalize_feed(Feed::from_value(raw).unwrap());

        let mut seen = HashSet::new();
        for job in first.iter().chain(second.iter()) {
            assert!(!job.id.is_empty());
            assert!(seen.insert(job.id.clone()), "duplicate id {}", job.id);
        }
    }

    #[test]
    fn partial_salary_is_not_specified() {
        assert_eq!(normalize_job(&json!({ "minSalary": 50000 })).compensation, "Not specified");
        assert_eq!(normalize_job(&json!({ "maxSalary": 70000 })).compensation, "Not specified");
        assert_eq!(
            normalize_job(&json!({ "minSalary": 0, "maxSalary": 70000 })).compensation,
            "Not specified"
        );
        assert_eq!(
            normalize_job(&json!({ "minSalary": "40k", "maxSalary": 60000.0 })).compensation,
            "$40k - 60000"
        );
    }

    #[test]
    fn location_takes_first_entry_only() {
        let job = normalize_job(&json!({ "locations": ["Berlin", "Remote"] }));
        assert_eq!(job.job_location, "Berlin");
        assert_eq!(normalize_job(&json!({ "locations": [] })).job_location, "Not specified");
        assert_eq!(normalize_job(&json!({ "locations": "Paris" })).job_location, "Not specified");
    }

    #[test]
    fn fields_default_independently() {
        let job = normalize_job(&json!({
            "slug": "ops",
            "description": "Keep it running",
            "companyLogo": "https://cdn.example/logo.png",
            "title": ""
        }));
        assert_eq!(job.id, "ops");
        assert_eq!(job.title, "No title");
        assert_eq!(job.company_name, "Not specified");
        assert_eq!(job.description, "Keep it running");
        assert_eq!(job.company_logo.as_deref(), Some("https://cdn.example/logo.png"));
    }

    #[test]
    fn wrapped_feed_preserves_order() {
        let feed = Feed::from_value(json!({ "jobs": [
            { "id": "1", "title": "B" },
            { "id": "2", "title": "A" },
            { "id": "3", "title": "C" }
        ]}))
        .unwrap();
        let ids: Vec<_> = normalize_feed(feed).into_iter().map(|j| j.id).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }
}
