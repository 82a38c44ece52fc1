//! Error types for the messaging security core
//!
//! This module re-exports the failure taxonomy so consumers have a single
//! import path for error handling.

// Re-export error types from submodules
pub use crate::catalog::{CatalogEntry, ErrorCode, ResponseCode};
pub use crate::failure::{ErrorCategory, MAX_MESSAGE_ID, MessagingError};
pub use crate::report::{FailureReport, REPORT_VERSION};
