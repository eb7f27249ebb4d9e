//! Core business logic - framework-agnostic donation lifecycle operations.
//!
//! Everything here works directly against the store and knows nothing about
//! any user surface. The lifecycle module is the only place donation status
//! is ever written.

/// Donation creation, lookup, and dashboard summaries
pub mod donation;
/// Status recomputation and fund release
pub mod lifecycle;
/// Milestone management and one-way completion
pub mod milestone;
/// Organization management and fund-release aggregates
pub mod organization;
/// Proof upload and oracle verdict handling
pub mod proof;
/// Organization-internal task management
pub mod task;
