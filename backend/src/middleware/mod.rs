//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every endpoint, currently
//! trace identifiers and access logging.

pub mod trace;

pub use trace::Trace;
