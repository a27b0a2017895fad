use detailing::workflows::assessment::ServiceType;
use detailing::workflows::bookings::{Booking, BookingId, BookingRepository, RepositoryError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryBookingRepository {
    records: Arc<Mutex<HashMap<BookingId, Booking>>>,
}

impl BookingRepository for InMemoryBookingRepository {
    fn insert(&self, booking: Booking) -> Result<Booking, RepositoryError> {
        let mut guard = self.records.lock().map_err(poisoned)?;
        if guard.contains_key(&booking.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(booking.id.clone(), booking.clone());
        Ok(booking)
    }

    fn update(&self, booking: Booking) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().map_err(poisoned)?;
        if guard.contains_key(&booking.id) {
            guard.insert(booking.id.clone(), booking);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &BookingId) -> Result<Option<Booking>, RepositoryError> {
        let guard = self.records.lock().map_err(poisoned)?;
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<Booking>, RepositoryError> {
        let guard = self.records.lock().map_err(poisoned)?;
        Ok(guard.values().cloned().collect())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> RepositoryError {
    RepositoryError::Unavailable("booking store lock poisoned".to_string())
}

pub(crate) fn parse_service_type(raw: &str) -> Result<ServiceType, String> {
    ServiceType::try_from(raw.to_string())
}

/// Positional option numbers for one questionnaire section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct AnswerList(pub(crate) Vec<Option<usize>>);

/// Parses positional answers such as `0,1,,2`; blank entries are unanswered questions.
pub(crate) fn parse_answers(raw: &str) -> Result<AnswerList, String> {
    if raw.trim().is_empty() {
        return Ok(AnswerList::default());
    }

    raw.split(',')
        .enumerate()
        .map(|(index, entry)| {
            let entry = entry.trim();
            if entry.is_empty() || entry == "-" {
                return Ok(None);
            }
            entry.parse::<usize>().map(Some).map_err(|err| {
                format!("answer {} ('{entry}') must be an option number ({err})", index + 1)
            })
        })
        .collect::<Result<Vec<_>, String>>()
        .map(AnswerList)
}
