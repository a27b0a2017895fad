use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::info;

use super::domain::{
    parse_date, parse_slot, Booking, BookingId, BookingRequest, BookingStatus, BookingView,
    CustomerBookings, CustomerContact, Requester,
};
use super::repository::{BookingRepository, RepositoryError};
use crate::workflows::assessment::{
    find_service_option, service_options, PriceTable, ServiceOption,
};

/// Service handling booking intake, the shared calendar, per-customer listings, and admin
/// completion.
pub struct BookingService<R> {
    repository: Arc<R>,
    prices: PriceTable,
    options: Vec<ServiceOption>,
    sequence: AtomicU64,
}

impl<R> BookingService<R>
where
    R: BookingRepository + 'static,
{
    pub fn new(repository: Arc<R>, prices: PriceTable) -> Self {
        Self {
            repository,
            prices,
            options: service_options(&prices),
            sequence: AtomicU64::new(1),
        }
    }

    pub fn service_options(&self) -> &[ServiceOption] {
        &self.options
    }

    /// Validate and store a new booking for the signed-in customer.
    pub fn create(
        &self,
        requester: &Requester,
        request: BookingRequest,
    ) -> Result<Booking, BookingError> {
        let user_id = requester
            .user_id
            .clone()
            .ok_or(BookingError::Unauthenticated)?;
        let booking = self.draft(user_id, request)?;

        let stored = self.repository.insert(booking)?;
        info!(
            booking_id = %stored.id.0,
            service = %stored.service,
            suggested = stored.suggested.is_some(),
            "booking created"
        );
        Ok(stored)
    }

    /// Every booking on the calendar, newest appointment first.
    pub fn list(&self, requester: &Requester) -> Result<Vec<BookingView>, BookingError> {
        if !requester.is_authenticated() {
            return Err(BookingError::Unauthenticated);
        }

        let mut bookings = self.repository.list()?;
        bookings.sort_by(|a, b| b.scheduled_for.cmp(&a.scheduled_for));
        Ok(bookings
            .iter()
            .map(|booking| booking.view_for(requester))
            .collect())
    }

    /// The requester's own bookings, newest first, with the latest contact details for
    /// pre-filling the next booking form.
    pub fn list_mine(&self, requester: &Requester) -> Result<CustomerBookings, BookingError> {
        let user_id = requester
            .user_id
            .as_deref()
            .ok_or(BookingError::Unauthenticated)?;

        let mut bookings: Vec<Booking> = self
            .repository
            .list()?
            .into_iter()
            .filter(|booking| booking.user_id == user_id)
            .collect();
        bookings.sort_by(|a, b| b.scheduled_for.cmp(&a.scheduled_for));

        Ok(CustomerBookings {
            user_id: user_id.to_string(),
            is_admin: requester.is_admin,
            contact: bookings.first().map(|booking| booking.customer.clone()),
            bookings: bookings
                .iter()
                .map(|booking| booking.view_for(requester))
                .collect(),
        })
    }

    /// Mark a booking finished; administrators only.
    pub fn mark_completed(
        &self,
        requester: &Requester,
        id: &BookingId,
    ) -> Result<Booking, BookingError> {
        if !requester.is_authenticated() {
            return Err(BookingError::Unauthenticated);
        }
        if !requester.is_admin {
            return Err(BookingError::Forbidden);
        }

        let mut booking = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        booking.status = BookingStatus::Completed;
        self.repository.update(booking.clone())?;

        info!(booking_id = %booking.id.0, "booking marked completed");
        Ok(booking)
    }

    fn draft(&self, user_id: String, request: BookingRequest) -> Result<Booking, BookingError> {
        let BookingRequest {
            name,
            contact,
            date,
            time,
            service,
            notes,
            suggested_service,
        } = request;

        let name = required("name", name)?;
        let contact = required("contact", contact)?;
        let service = required("service", service)?;

        let date = parse_date(&date).ok_or(BookingValidationError::InvalidDate(date))?;
        let time = parse_slot(&time).ok_or(BookingValidationError::InvalidTimeSlot(time))?;

        let price = match &suggested_service {
            Some(suggestion) => {
                let expected = suggestion.expected_label();
                if service != expected {
                    return Err(BookingValidationError::SuggestionMismatch {
                        expected,
                        actual: service,
                    }
                    .into());
                }
                let quotes = self
                    .prices
                    .attainable_prices(suggestion.severity, suggestion.service_type);
                if !quotes.contains(&suggestion.price) {
                    return Err(BookingValidationError::SuggestionPriceMismatch {
                        service,
                        price: suggestion.price,
                    }
                    .into());
                }
                Some(suggestion.price)
            }
            None => {
                let option = find_service_option(&self.options, &service)
                    .ok_or_else(|| BookingValidationError::UnknownService(service.clone()))?;
                Some(option.list_price)
            }
        };

        Ok(Booking {
            id: self.next_booking_id(),
            user_id,
            customer: CustomerContact { name, contact },
            scheduled_for: date.and_time(time),
            service,
            price,
            suggested: suggested_service,
            notes: notes.trim().to_string(),
            status: BookingStatus::Pending,
        })
    }

    fn next_booking_id(&self) -> BookingId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        BookingId(format!("bk-{id:06}"))
    }
}

fn required(field: &'static str, value: String) -> Result<String, BookingValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(BookingValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Reasons a booking form is rejected before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid YYYY-MM-DD date")]
    InvalidDate(String),
    #[error("'{0}' is not an available time slot")]
    InvalidTimeSlot(String),
    #[error("service '{actual}' does not match the suggested '{expected}'")]
    SuggestionMismatch { expected: String, actual: String },
    #[error("price {price} was never quoted for '{service}'")]
    SuggestionPriceMismatch { service: String, price: u32 },
    #[error("unknown service '{0}'")]
    UnknownService(String),
}

/// Error raised by the booking service.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("authentication required")]
    Unauthenticated,
    #[error("admin access required")]
    Forbidden,
    #[error(transparent)]
    Invalid(#[from] BookingValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
