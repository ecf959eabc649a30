//! Generic operation framework for the register services.
//!
//! This module provides the building blocks shared by every operation: the
//! generic handler, mock interception and error normalization.
//!
//! # Main Components
//!
//! - [`Operation`] - Generic handler wrapping interception + normalization around default logic
//! - [`OperationLogic`] / [`Echo`] - The per-operation default behavior
//! - [`Rejection`] / [`Failure`] / [`normalize`] - Error envelope and normalization
//!
//! # Testing
//!
//! See [`mock`] module for redirecting operations to canned outcomes.

pub mod core;
pub mod error;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
pub use self::error::*;
