pub mod auth;
pub mod class;
pub mod dispatch;
pub mod employee;
pub mod open;
pub mod shared;
