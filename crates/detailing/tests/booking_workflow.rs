//! Booking scenarios driven from a self-assessment suggestion through the public facade.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use detailing::workflows::bookings::{
        Booking, BookingId, BookingRepository, BookingRequest, RepositoryError,
    };

    #[derive(Default, Clone)]
    pub(super) struct MemoryRepository {
        records: Arc<Mutex<HashMap<BookingId, Booking>>>,
    }

    impl BookingRepository for MemoryRepository {
        fn insert(&self, booking: Booking) -> Result<Booking, RepositoryError> {
            let mut guard = self.records.lock().expect("mutex poisoned");
            guard.insert(booking.id.clone(), booking.clone());
            Ok(booking)
        }

        fn update(&self, booking: Booking) -> Result<(), RepositoryError> {
            let mut guard = self.records.lock().expect("mutex poisoned");
            match guard.get_mut(&booking.id) {
                Some(existing) => {
                    *existing = booking;
                    Ok(())
                }
                None => Err(RepositoryError::NotFound),
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

    pub(super) fn request(service: String, date: &str) -> BookingRequest {
        BookingRequest {
            name: "Carla Santos".to_string(),
            contact: "0918 222 3344".to_string(),
            date: date.to_string(),
            time: "08:00 AM".to_string(),
            service,
            notes: String::new(),
            suggested_service: None,
        }
    }
}

use std::sync::Arc;

use common::{request, MemoryRepository};
use detailing::workflows::assessment::{
    AnswerSet, AssessmentCatalog, RecommendationEngine, Section, ServiceType, Severity,
};
use detailing::workflows::bookings::{BookingService, BookingStatus, Requester};

#[test]
fn recommendation_flows_into_a_booking_and_completion() {
    let catalog = AssessmentCatalog::standard();
    let engine = RecommendationEngine::new(catalog.clone());
    let service = BookingService::new(Arc::new(MemoryRepository::default()), *catalog.prices());

    let answers = AnswerSet::new()
        .with(Section::Interior, 0, 1)
        .with(Section::Interior, 2, 0);
    let recommendation = engine.recommend(&answers, ServiceType::Both);
    let suggestion = recommendation.suggested_service().expect("suggestion available");
    assert_eq!(suggestion.severity, Severity::Moderate);
    assert_eq!(suggestion.price, 800);

    let mut form = request(suggestion.label.clone(), "2025-08-01");
    form.suggested_service = Some(suggestion);
    let customer = Requester::user("customer-1");
    let booking = service.create(&customer, form).expect("booking accepted");

    assert_eq!(booking.service, "🚙 Moderate Condition (Full Service)");
    assert_eq!(booking.price, Some(800));
    assert_eq!(booking.status, BookingStatus::Pending);

    let admin = Requester::admin("admin-1");
    service
        .mark_completed(&admin, &booking.id)
        .expect("admin completes booking");

    let calendar = service
        .list(&Requester::user("customer-9"))
        .expect("calendar listing");
    assert_eq!(calendar.len(), 1);
    assert_eq!(calendar[0].status, "Completed");
    assert!(calendar[0].contact.is_none());

    let mine = service.list_mine(&customer).expect("own bookings");
    assert_eq!(mine.bookings.len(), 1);
    assert_eq!(mine.bookings[0].contact.as_deref(), Some("0918 222 3344"));
    assert_eq!(
        mine.contact.map(|contact| contact.name),
        Some("Carla Santos".to_string())
    );
}

#[test]
fn manual_bookings_choose_from_listed_options() {
    let catalog = AssessmentCatalog::standard();
    let service = BookingService::new(Arc::new(MemoryRepository::default()), *catalog.prices());
    let customer = Requester::user("customer-2");

    let option = service
        .service_options()
        .iter()
        .find(|option| {
            option.severity == Severity::Light && option.service_type == ServiceType::Both
        })
        .cloned()
        .expect("light full service listed");

    let booking = service
        .create(&customer, request(option.label.clone(), "2025-08-03"))
        .expect("booking accepted");
    service
        .create(&customer, request(option.label, "2025-08-02"))
        .expect("second booking accepted");

    assert_eq!(booking.price, Some(800));
    let calendar = service.list(&customer).expect("calendar listing");
    assert_eq!(calendar[0].date.to_string(), "2025-08-03");
    assert_eq!(calendar[1].date.to_string(), "2025-08-02");
}
