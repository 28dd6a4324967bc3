pub mod availability;
pub mod booking;

pub use availability::{AvailabilityRequest, AvailabilityResult, InvalidIntervalError, TimeSlot};
pub use booking::BookingService;
