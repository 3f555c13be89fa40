pub mod feedback;
pub mod limit;
