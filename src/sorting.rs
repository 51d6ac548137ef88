use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::types::Job;

/// Orderings offered on the saved-jobs screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    TitleAsc,
    TitleDesc,
    SalaryDesc,
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title-asc" => Ok(SortOrder::TitleAsc),
            "title-desc" => Ok(SortOrder::TitleDesc),
            "salary-desc" => Ok(SortOrder::SalaryDesc),
            other => Err(anyhow::anyhow!("unknown sort order: {other} (expected title-asc, title-desc or salary-desc)")),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortOrder::TitleAsc => "title-asc",
            SortOrder::TitleDesc => "title-desc",
            SortOrder::SalaryDesc => "salary-desc",
        };
        f.write_str(s)
    }
}

/// Sorted copy of `jobs`; the input is left untouched.
pub fn sort_jobs(jobs: &[Job], order: SortOrder) -> Vec<Job> {
    let mut sorted = jobs.to_vec();
    match order {
        SortOrder::TitleAsc => sorted.sort_by(compare_by_title),
        SortOrder::TitleDesc => sorted.sort_by(|a, b| compare_by_title(b, a)),
        SortOrder::SalaryDesc => sorted.sort_by(|a, b| {
            parse_salary(&b.compensation)
                .partial_cmp(&parse_salary(&a.compensation))
                .unwrap_or(Ordering::Equal)
        }),
    }
    sorted
}

// Accent- and case-folded title, then lowercase, then exact text, then id.
// Ids are unique, so no two distinct jobs compare equal.
fn compare_by_title(a: &Job, b: &Job) -> Ordering {
    collation_key(&a.title)
        .cmp(&collation_key(&b.title))
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.id.cmp(&b.id))
}

/// Lowercase `title` with diacritics removed, so "Éducateur" files under "e".
fn collation_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Numeric value of a compensation string: every character other than an
/// ASCII digit or `.` is dropped and the leading number is read. Anything
/// unparsable is `0`.
pub fn parse_salary(compensation: &str) -> f64 {
    let digits: String = compensation
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in digits.char_indices() {
        if c == '.' {
            if seen_dot { break; }
            seen_dot = true;
        }
        end = i + 1;
    }
    digits[..end].parse::<f64>().unwrap_or(0.0)
}
