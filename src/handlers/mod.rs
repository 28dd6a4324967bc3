pub mod bookings;
pub mod fields;
pub mod schedules;
pub mod shared;
