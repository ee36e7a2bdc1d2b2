use chrono::NaiveDate;

use crate::model::{BookingId, BookingStatus, Minor, RoomId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    /// `check_out <= check_in`. Recoverable client-side as form validation.
    InvalidRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    /// Check-in precedes today under the default date policy.
    PastDate(NaiveDate),
    /// The range collides with a confirmed booking; carries the earliest
    /// occupied date so the caller can render "booked until X".
    RoomUnavailable { first_conflict: NaiveDate },
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
    RoomNotFound(RoomId),
    BookingNotFound(BookingId),
    InvalidGuests(&'static str),
    InvalidRate(Minor),
    LimitExceeded(&'static str),
    /// Collaborator I/O failure. Retryable by the caller, never swallowed.
    StorageFailure(String),
}

impl std::fmt::Display for ReservationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReservationError::InvalidRange { check_in, check_out } => {
                write!(f, "invalid range: check-out {check_out} must be after check-in {check_in}")
            }
            ReservationError::PastDate(d) => write!(f, "check-in {d} is in the past"),
            ReservationError::RoomUnavailable { first_conflict } => {
                write!(f, "room unavailable: first conflicting date {first_conflict}")
            }
            ReservationError::InvalidTransition { from, to } => {
                write!(f, "invalid transition: {from} -> {to}")
            }
            ReservationError::RoomNotFound(id) => write!(f, "room not found: {id}"),
            ReservationError::BookingNotFound(id) => write!(f, "booking not found: {id}"),
            ReservationError::InvalidGuests(msg) => write!(f, "invalid guests: {msg}"),
            ReservationError::InvalidRate(rate) => write!(f, "invalid nightly rate: {rate}"),
            ReservationError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
            ReservationError::StorageFailure(e) => write!(f, "storage failure: {e}"),
        }
    }
}

impl std::error::Error for ReservationError {}

impl From<crate::store::StoreError> for ReservationError {
    fn from(e: crate::store::StoreError) -> Self {
        ReservationError::StorageFailure(e.to_string())
    }
}
