//! Module for the dashboard and analytics summary API.
//!
//! Serves the aggregate views: unread/total counts with the 12-month
//! submissions chart, and the full analytics summary (retention,
//! submission trends, careers engagement, recent events).

pub mod handlers;
pub mod routes;
