pub mod booking;
pub mod field;
pub mod schedule;

// Re-export all models for easy importing
pub use booking::*;
pub use field::*;
pub use schedule::*;
