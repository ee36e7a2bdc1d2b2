use chrono::NaiveDate;

use crate::limits::{MAX_ADVANCE_DAYS, MAX_STAY_NIGHTS};
use crate::model::StayRange;

use super::calendar::Calendar;
use super::error::ReservationError;

/// How to treat a check-in before today. The manager flow passes
/// `AllowBackdated` for after-the-fact corrections; everything else rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatePolicy {
    #[default]
    RejectPast,
    AllowBackdated,
}

/// Outcome of an availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable { first_conflict: NaiveDate },
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

/// Preconditions checked before the calendar is consulted.
pub fn validate_range(
    range: &StayRange,
    today: NaiveDate,
    policy: DatePolicy,
) -> Result<(), ReservationError> {
    if !range.is_well_formed() {
        return Err(ReservationError::InvalidRange {
            check_in: range.check_in,
            check_out: range.check_out,
        });
    }
    if range.nights() > MAX_STAY_NIGHTS {
        return Err(ReservationError::LimitExceeded("stay too long"));
    }
    let advance = (range.check_in - today).num_days();
    if advance > MAX_ADVANCE_DAYS {
        return Err(ReservationError::LimitExceeded("check-in too far ahead"));
    }
    if policy == DatePolicy::RejectPast && range.check_in < today {
        return Err(ReservationError::PastDate(range.check_in));
    }
    if advance < -MAX_ADVANCE_DAYS {
        return Err(ReservationError::LimitExceeded("check-in too far in the past"));
    }
    Ok(())
}

/// The interval is available iff every night in `[check_in, check_out)` is
/// free. A day missing from the calendar counts as occupied — the caller is
/// expected to build a window covering the whole range, so a gap means the
/// check would otherwise pass on unverified dates.
///
/// Ranges that merely touch (new check-in on an existing check-out day) pass,
/// since the check-out day is free in the calendar.
pub fn check_conflict(calendar: &Calendar, range: &StayRange) -> Availability {
    for day in range.days() {
        match calendar.get(&day) {
            Some(slot) if slot.available => {}
            _ => return Availability::Unavailable { first_conflict: day },
        }
    }
    Availability::Available
}
