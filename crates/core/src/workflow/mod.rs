//! Transaction lifecycle management.
//!
//! This module implements the approval state machine for transactions:
//! pending → approved / rejected, with approved as the immutable terminal
//! state and rejected re-editable back to pending.
//!
//! # Modules
//!
//! - `types` - Workflow domain types (TransactionStatus, WorkflowAction)
//! - `error` - Workflow-specific error types
//! - `service` - State transition logic

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::WorkflowError;
pub use service::WorkflowService;
pub use types::{TransactionStatus, WorkflowAction};
