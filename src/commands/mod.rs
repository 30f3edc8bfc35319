//! Commands module - CLI command implementations.
//!
//! Each command receives already-validated settings; none of them loads
//! configuration on its own.

pub mod check;
pub mod show;
