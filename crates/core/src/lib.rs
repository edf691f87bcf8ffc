//! Core business logic for Ledgerfeed.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and state machine logic live here.
//!
//! # Modules
//!
//! - `ledger` - Double-entry transaction validation and domain types
//! - `workflow` - Transaction approval state machine
//! - `feed` - Post types and post/transaction link rules
//! - `clock` - Injected clock abstraction for "now"

pub mod clock;
pub mod feed;
pub mod ledger;
pub mod workflow;
