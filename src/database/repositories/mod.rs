pub mod booking;
pub mod field;
pub mod schedule;

// Re-export all repositories for easy importing
pub use booking::BookingRepository;
pub use field::FieldRepository;
pub use schedule::ScheduleRepository;
