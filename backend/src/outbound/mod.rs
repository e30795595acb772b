//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: in-memory entity stores behind the generic store port
//! - **security**: Argon2id password hashing
//!
//! Adapters translate between domain types and their backing
//! representation. They contain no business logic.

pub mod persistence;
pub mod security;
