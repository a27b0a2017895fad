use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::workflows::assessment::SuggestedService;

/// Identifier wrapper for stored bookings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BookingStatus {
    #[default]
    Pending,
    Completed,
}

impl BookingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

/// Identity facts supplied by the upstream authentication layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requester {
    pub user_id: Option<String>,
    pub is_admin: bool,
}

impl Requester {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(id: impl Into<String>) -> Self {
        Self {
            user_id: Some(id.into()),
            is_admin: false,
        }
    }

    pub fn admin(id: impl Into<String>) -> Self {
        Self {
            user_id: Some(id.into()),
            is_admin: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Booking form as submitted by a signed-in customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub contact: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// One of the hourly slots, e.g. `09:00 AM`.
    pub time: String,
    pub service: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub suggested_service: Option<SuggestedService>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerContact {
    pub name: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: String,
    pub customer: CustomerContact,
    pub scheduled_for: NaiveDateTime,
    pub service: String,
    pub price: Option<u32>,
    pub suggested: Option<SuggestedService>,
    pub notes: String,
    pub status: BookingStatus,
}

impl Booking {
    /// Contact details are only disclosed to administrators and the booking's owner.
    pub fn view_for(&self, requester: &Requester) -> BookingView {
        let disclosed =
            requester.is_admin || requester.user_id.as_deref() == Some(self.user_id.as_str());
        BookingView {
            id: self.id.clone(),
            name: self.customer.name.clone(),
            contact: disclosed.then(|| self.customer.contact.clone()),
            date: self.scheduled_for.date(),
            time: format_slot(self.scheduled_for.time()),
            service: self.service.clone(),
            price: self.price,
            notes: self.notes.clone(),
            status: self.status.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingView {
    pub id: BookingId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    pub date: NaiveDate,
    pub time: String,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    pub notes: String,
    pub status: &'static str,
}

/// A signed-in customer's own bookings along with the contact details used last.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerBookings {
    pub user_id: String,
    pub is_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<CustomerContact>,
    pub bookings: Vec<BookingView>,
}

const FIRST_SLOT_HOUR: u32 = 5;
const LAST_SLOT_HOUR: u32 = 22;
const SLOT_FORMAT: &str = "%I:%M %p";

/// Hourly appointment slots from 05:00 AM through 10:00 PM.
pub fn booking_slots() -> impl Iterator<Item = NaiveTime> {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR).filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
}

pub fn format_slot(time: NaiveTime) -> String {
    time.format(SLOT_FORMAT).to_string()
}

pub(crate) fn parse_slot(raw: &str) -> Option<NaiveTime> {
    let time = NaiveTime::parse_from_str(raw.trim(), SLOT_FORMAT).ok()?;
    let on_the_hour = time.minute() == 0 && time.second() == 0;
    let in_hours = (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR).contains(&time.hour());
    (on_the_hour && in_hours).then_some(time)
}

pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
