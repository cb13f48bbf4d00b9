//! Module for the job-applications API.
//!
//! Listing, detail views (which mark the row read), read-flag updates,
//! bulk deletion, and filter-option extraction.

pub mod handlers;
pub mod routes;
