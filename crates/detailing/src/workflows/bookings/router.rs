use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Router,
};
use serde_json::json;

use super::domain::{BookingId, BookingRequest, BookingStatus, Requester};
use super::repository::{BookingRepository, RepositoryError};
use super::service::{BookingError, BookingService};

/// Header carrying the authenticated user id, set by the upstream auth layer.
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header flagging the authenticated user as an administrator.
pub const USER_ADMIN_HEADER: &str = "x-user-admin";

/// Router builder exposing booking intake, the calendar listing, the requester's own
/// bookings, and status updates.
pub fn booking_router<R>(service: Arc<BookingService<R>>) -> Router
where
    R: BookingRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/bookings",
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route("/api/v1/bookings/mine", get(mine_handler::<R>))
        .route(
            "/api/v1/bookings/:booking_id/status",
            put(complete_handler::<R>),
        )
        .with_state(service)
}

pub fn requester_from_headers(headers: &HeaderMap) -> Requester {
    let user_id = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string);
    let is_admin = user_id.is_some()
        && headers
            .get(USER_ADMIN_HEADER)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.trim().eq_ignore_ascii_case("true"));

    Requester { user_id, is_admin }
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<BookingService<R>>>,
    headers: HeaderMap,
    axum::Json(request): axum::Json<BookingRequest>,
) -> Response
where
    R: BookingRepository + 'static,
{
    let requester = requester_from_headers(&headers);
    match service.create(&requester, request) {
        Ok(booking) => {
            let view = booking.view_for(&requester);
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<BookingService<R>>>,
    headers: HeaderMap,
) -> Response
where
    R: BookingRepository + 'static,
{
    let requester = requester_from_headers(&headers);
    match service.list(&requester) {
        Ok(bookings) => (StatusCode::OK, axum::Json(bookings)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn mine_handler<R>(
    State(service): State<Arc<BookingService<R>>>,
    headers: HeaderMap,
) -> Response
where
    R: BookingRepository + 'static,
{
    let requester = requester_from_headers(&headers);
    match service.list_mine(&requester) {
        Ok(mine) => (StatusCode::OK, axum::Json(mine)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn complete_handler<R>(
    State(service): State<Arc<BookingService<R>>>,
    headers: HeaderMap,
    Path(booking_id): Path<String>,
) -> Response
where
    R: BookingRepository + 'static,
{
    let requester = requester_from_headers(&headers);
    match service.mark_completed(&requester, &BookingId(booking_id)) {
        Ok(_) => {
            let payload = json!({
                "message": "Booking marked as finished",
                "status": BookingStatus::Completed.label(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: BookingError) -> Response {
    let status = match &error {
        BookingError::Unauthenticated => StatusCode::UNAUTHORIZED,
        BookingError::Forbidden => StatusCode::FORBIDDEN,
        BookingError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        BookingError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        BookingError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        BookingError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
