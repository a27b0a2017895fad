use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::assessment::{PriceTable, ServiceType, Severity, SuggestedService};
use crate::workflows::bookings::domain::{Booking, BookingId, BookingRequest};
use crate::workflows::bookings::repository::{BookingRepository, RepositoryError};
use crate::workflows::bookings::service::BookingService;

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<BookingId, Booking>>>,
}

impl MemoryRepository {
    pub(super) fn stored(&self, id: &BookingId) -> Option<Booking> {
        self.records.lock().expect("mutex poisoned").get(id).cloned()
    }
}

impl BookingRepository for MemoryRepository {
    fn insert(&self, booking: Booking) -> Result<Booking, RepositoryError> {
        let mut guard = self.records.lock().expect("mutex poisoned");
        if guard.contains_key(&booking.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(booking.id.clone(), booking.clone());
        Ok(booking)
    }

    fn update(&self, booking: Booking) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("mutex poisoned");
        if guard.contains_key(&booking.id) {
            guard.insert(booking.id.clone(), booking);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &BookingId) -> Result<Option<Booking>, RepositoryError> {
        Ok(self.records.lock().expect("mutex poisoned").get(id).cloned())
    }

    fn list(&self) -> Result<Vec<Booking>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .expect("mutex poisoned")
            .values()
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableRepository;

impl BookingRepository for UnavailableRepository {
    fn insert(&self, _booking: Booking) -> Result<Booking, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _booking: Booking) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &BookingId) -> Result<Option<Booking>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<Booking>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<BookingService<MemoryRepository>>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = BookingService::new(Arc::new(repository.clone()), PriceTable::standard());
    (Arc::new(service), repository)
}

pub(super) fn manual_request() -> BookingRequest {
    BookingRequest {
        name: "Ana Cruz".to_string(),
        contact: "0917 555 0101".to_string(),
        date: "2025-07-12".to_string(),
        time: "09:00 AM".to_string(),
        service: "🚙 Moderate Condition (Interior Only)".to_string(),
        notes: "  Dog hair on the back seat ".to_string(),
        suggested_service: None,
    }
}

pub(super) fn suggested_request() -> BookingRequest {
    let suggestion = SuggestedService::new(Severity::Severe, ServiceType::Both, 2900);
    BookingRequest {
        name: "Ben Reyes".to_string(),
        contact: "ben@example.com".to_string(),
        date: "2025-07-14".to_string(),
        time: "02:00 PM".to_string(),
        service: suggestion.label.clone(),
        notes: String::new(),
        suggested_service: Some(suggestion),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
