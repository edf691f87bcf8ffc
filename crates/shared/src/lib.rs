//! Shared types and configuration for Ledgerfeed.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Money formatting helpers with decimal precision
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
