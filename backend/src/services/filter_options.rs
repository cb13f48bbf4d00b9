//! Filter-option extraction for the applications list UI.
//!
//! Produces the distinct values the frontend offers as column filters.
//! CGPA is the exception: the UI always shows the same four display
//! buckets regardless of the data.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::database::models::Application;

/// Fixed CGPA display buckets; a static list, not a computed histogram.
pub const CGPA_RANGES: [&str; 4] = ["7-8", "8-9", "9-10", "10+"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub job_titles: Vec<String>,
    pub specializations: Vec<String>,
    pub years: Vec<String>,
    pub backlogs: Vec<String>,
    pub cgpa_ranges: Vec<String>,
}

pub fn extract(applications: &[Application]) -> FilterOptions {
    FilterOptions {
        job_titles: distinct_non_empty(applications.iter().map(|a| a.job_title.as_str())),
        specializations: distinct_non_empty(applications.iter().map(|a| a.specialization.as_str())),
        years: distinct_non_empty(applications.iter().map(|a| a.year_of_grad.as_str())),
        backlogs: distinct_non_empty(applications.iter().map(|a| a.backlogs.as_str())),
        cgpa_ranges: CGPA_RANGES.iter().map(|r| r.to_string()).collect(),
    }
}

/// Distinct non-empty values, ascending.
fn distinct_non_empty<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
