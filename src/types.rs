use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FeedError;

pub const NO_TITLE: &str = "No title";
pub const NOT_SPECIFIED: &str = "Not specified";
pub const NO_DESCRIPTION: &str = "No description";

/// Canonical job record. Field names are the persisted `savedJobs` layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub compensation: String,
    pub description: String,
    pub job_location: String,
    #[serde(default)]
    pub company_logo: Option<String>,
}

/// Response body of the listing endpoint, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Feed {
    Bare(Vec<Value>),
    Wrapped { jobs: Vec<Value> },
}

impl Feed {
    pub fn from_value(value: Value) -> Result<Self, FeedError> {
        match value {
            Value::Array(items) => Ok(Feed::Bare(items)),
            Value::Object(mut map) => match map.remove("jobs") {
                Some(Value::Array(jobs)) => Ok(Feed::Wrapped { jobs }),
                _ => Err(FeedError::UnsupportedShape { found: "object without a `jobs` array" }),
            },
            other => Err(FeedError::UnsupportedShape { found: json_kind(&other) }),
        }
    }

    pub fn into_items(self) -> Vec<Value> {
        match self {
            Feed::Bare(items) => items,
            Feed::Wrapped { jobs } => jobs,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Feed::Bare(items) => items.len(),
            Feed::Wrapped { jobs } => jobs.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_bare_and_wrapped_feeds() {
        let bare = Feed::from_value(json!([{ "title": "a" }])).unwrap();
        assert!(matches!(bare, Feed::Bare(ref v) if v.len() == 1));

        let wrapped = Feed::from_value(json!({ "jobs": [{}, {}], "total": 2 })).unwrap();
        assert_eq!(wrapped.len(), 2);
        assert_eq!(wrapped.into_items().len(), 2);
    }

    #[test]
    fn rejects_other_shapes() {
        assert_eq!(
            Feed::from_value(json!("nope")),
            Err(FeedError::UnsupportedShape { found: "string" })
        );
        assert!(Feed::from_value(json!({ "jobs": "x" })).is_err());
        assert!(Feed::from_value(json!({ "items": [] })).is_err());
        assert!(Feed::from_value(Value::Null).is_err());
    }

    #[test]
    fn job_reads_blob_without_logo_field() {
        let raw = r#"{"id":"1","title":"t","company_name":"c","compensation":"Not specified","description":"d","job_location":"x"}"#;
        let job: Job = serde_json::from_str(raw).unwrap();
        assert!(job.company_logo.is_none());

        let back = serde_json::to_value(&job).unwrap();
        assert_eq!(back["company_logo"], Value::Null);
    }
}
