use chrono::NaiveDate;

use crate::model::{Booking, BookingStatus};

use super::error::ReservationError;

// ── Booking state machine ─────────────────────────────────────────
//
// pending → confirmed → completed
// pending | confirmed → cancelled
//
// Each transition validates before mutating, so a rejected transition leaves
// the booking untouched. The calendar consequence is implicit: the Calendar
// Index is rebuilt from statuses, so flipping a status is the whole effect.

impl Booking {
    /// `pending → confirmed`. The caller must have re-checked availability
    /// under the room's lock before calling this.
    pub fn confirm(&mut self) -> Result<(), ReservationError> {
        if self.status != BookingStatus::Pending {
            return Err(ReservationError::InvalidTransition {
                from: self.status,
                to: BookingStatus::Confirmed,
            });
        }
        self.status = BookingStatus::Confirmed;
        Ok(())
    }

    /// `pending | confirmed → cancelled`. Terminal states reject; façade-level
    /// idempotency for repeated cancels lives in the Reservation Service.
    pub fn cancel(&mut self) -> Result<(), ReservationError> {
        if self.status.is_terminal() {
            return Err(ReservationError::InvalidTransition {
                from: self.status,
                to: BookingStatus::Cancelled,
            });
        }
        self.status = BookingStatus::Cancelled;
        Ok(())
    }

    /// `confirmed → completed`, only once the check-out date has passed.
    pub fn complete(&mut self, today: NaiveDate) -> Result<(), ReservationError> {
        if self.status != BookingStatus::Confirmed {
            return Err(ReservationError::InvalidTransition {
                from: self.status,
                to: BookingStatus::Completed,
            });
        }
        if self.stay.check_out > today {
            return Err(ReservationError::InvalidTransition {
                from: self.status,
                to: BookingStatus::Completed,
            });
        }
        self.status = BookingStatus::Completed;
        Ok(())
    }
}
