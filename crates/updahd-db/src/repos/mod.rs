//! Repository modules implementing the table-level operations.
//!
//! Each module adds methods to `UpService` via `impl UpService` blocks.

pub mod class;
pub mod employee;
pub mod progress_log;
