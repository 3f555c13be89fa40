//! ID prefixes for generated entity identifiers.
//!
//! IDs take the form `{prefix}-{8 hex chars}`, e.g. `emp-a3f8b2c1`.

pub const PREFIX_EMPLOYEE: &str = "emp";
pub const PREFIX_PROGRESS_LOG: &str = "prg";

pub const ALL_PREFIXES: &[&str] = &[PREFIX_EMPLOYEE, PREFIX_PROGRESS_LOG];
