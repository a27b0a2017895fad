pub mod assessment;
pub mod bookings;
