//! Booking intake for detailing appointments.
//!
//! Customers book a service either from a self-assessment suggestion or by picking one of
//! the listed severity/service combinations. The calendar is visible to every signed-in
//! user with contact details reserved for administrators and the booking's owner;
//! administrators also close bookings out.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    booking_slots, format_slot, Booking, BookingId, BookingRequest, BookingStatus, BookingView,
    CustomerBookings, CustomerContact, Requester,
};
pub use repository::{BookingRepository, RepositoryError};
pub use router::{booking_router, requester_from_headers, USER_ADMIN_HEADER, USER_ID_HEADER};
pub use service::{BookingError, BookingService, BookingValidationError};
