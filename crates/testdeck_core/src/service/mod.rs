//! Use-case services over the repository layer.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for boundary callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Services never bypass repository validation/persistence contracts.
//! - The service layer remains storage-agnostic.

pub mod case_service;
pub mod suite_service;
