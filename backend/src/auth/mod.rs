//! Authentication module: session validation and the admin allow-list.
//!
//! OAuth sign-in itself happens outside this system. What lives here is
//! the session guard: signed-token issuance and verification, the email
//! allow-list check, and the request extractor that gates every admin
//! route.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;

// Re-exports for convenience
pub use errors::*;
pub use models::*;
pub use service::*;
