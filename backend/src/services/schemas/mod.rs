//! # Schema Service Module
//!
//! Read-only HTTP view of the form schema registry. The frontend compiles the
//! same registry in; these routes let other local tools see which form types
//! and fields the served build offers. No route here accepts form data.
//!
//! ## Sub-modules:
//! - `get`: Lists the registry or looks up a single schema by name.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for all schema-related API endpoints.
const API_PATH: &str = "/api/schemas";

/// Configures and returns the Actix `Scope` for the schema routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: every registered schema, in selector order.
/// *   **`GET /{schema_name}`**: a single schema, `404 Not Found` when unknown.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::list))
        .route("/{schema_name}", get().to(get::process))
}
