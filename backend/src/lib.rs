//! Election results backend library.
//!
//! Hexagonal layout: `domain` holds entities, services and ports,
//! `inbound::http` adapts them to Actix, `outbound` provides the in-memory
//! stores and password hashing, and `seed` loads the startup dataset.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod seed;
#[cfg(test)]
mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
pub use middleware::trace::TraceId;
