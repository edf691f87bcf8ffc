//! Persistence boundary and lifecycle orchestration for Ledgerfeed.
//!
//! The validation engine in `ledgerfeed-core` is pure; everything stateful
//! lives behind the narrow repository traits defined here. This crate
//! provides:
//!
//! - [`LedgerStore`] / [`Directory`] - the repository and reference-lookup
//!   traits consumed by the lifecycle manager
//! - [`MemoryStore`] - an in-memory, fully transactional implementation
//! - [`TransactionManager`] - the lifecycle manager wiring validation,
//!   workflow transitions, and persistence together

pub mod error;
pub mod manager;
pub mod memory;
pub mod repository;

pub use error::StoreError;
pub use manager::TransactionManager;
pub use memory::MemoryStore;
pub use repository::{Directory, LedgerStore};
