//! Module for the contact-messages API.
//!
//! Mirrors the applications API: listing, detail views that mark the
//! row read, read-flag updates, and bulk deletion.

pub mod handlers;
pub mod routes;
