use super::domain::{Booking, BookingId};

/// Storage abstraction so the booking service can be exercised in isolation.
pub trait BookingRepository: Send + Sync {
    fn insert(&self, booking: Booking) -> Result<Booking, RepositoryError>;
    fn update(&self, booking: Booking) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &BookingId) -> Result<Option<Booking>, RepositoryError>;
    fn list(&self) -> Result<Vec<Booking>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("booking already exists")]
    Conflict,
    #[error("booking not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
