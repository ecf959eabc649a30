//! Wiring and observability for the running register.

pub mod register;
pub mod tracing;

pub use register::Register;
