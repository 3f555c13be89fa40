//! # updahd-core
//!
//! Core types and class-progression rules for UpDAHD.
//!
//! This crate provides the foundational types shared across all UpDAHD crates:
//! - Entity structs for employees, classes, and progress log entries
//! - Action and feedback enums
//! - The class ladder (`MIN_CLASS..=MAX_CLASS`) and the promote/downgrade rules
//! - Cross-cutting error types
//! - The authenticated identity passed from `updahd-auth` to the store

pub mod entities;
pub mod enums;
pub mod errors;
pub mod feedback;
pub mod identity;
pub mod ids;
pub mod progression;

pub use feedback::Feedback;
pub use progression::{MAX_CLASS, MIN_CLASS};
