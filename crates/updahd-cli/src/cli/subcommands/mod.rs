pub mod auth;
pub mod class;
pub mod employee;

pub use auth::AuthCommands;
pub use class::ClassCommands;
pub use employee::EmployeeCommands;
