//! Entity structs for all UpDAHD domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON output and schema
//! validation.

mod class;
mod employee;
mod progress_log;

pub use class::Class;
pub use employee::Employee;
pub use progress_log::ProgressLogEntry;
