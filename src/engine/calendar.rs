use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::{Booking, BookingId};

// ── Calendar Index ────────────────────────────────────────────────

/// One day of a room's calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySlot {
    pub available: bool,
    pub occupied_by: Option<BookingId>,
}

impl DaySlot {
    fn free() -> Self {
        Self {
            available: true,
            occupied_by: None,
        }
    }
}

/// Per-day availability over a bounded window. Derived data — rebuilt from the
/// authoritative booking list every time availability is needed, never cached.
pub type Calendar = BTreeMap<NaiveDate, DaySlot>;

/// Build the availability map for `[start, start + horizon_days)`.
///
/// Every day in the window is present. A day is unavailable iff it falls
/// within `[check_in, check_out)` of a confirmed booking; the check-out day
/// itself stays free (same-day handoff to the next guest). Pending, cancelled
/// and completed bookings never block.
///
/// Overlapping confirmed bookings violate the engine's invariant but must not
/// break the build: the day stays unavailable, last write wins.
pub fn build_calendar(bookings: &[Booking], start: NaiveDate, horizon_days: u32) -> Calendar {
    let mut calendar: Calendar = start
        .iter_days()
        .take(horizon_days as usize)
        .map(|d| (d, DaySlot::free()))
        .collect();

    for booking in bookings {
        if !booking.status.blocks_calendar() {
            continue;
        }
        for day in booking.stay.days() {
            if let Some(slot) = calendar.get_mut(&day) {
                slot.available = false;
                slot.occupied_by = Some(booking.id);
            }
        }
    }

    calendar
}
