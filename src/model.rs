use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Integer minor currency units (cents, santim, ...) — the only money type.
/// The core never formats currency; callers decide the display unit.
pub type Minor = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub Ulid);

impl RoomId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for RoomId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookingId(pub Ulid);

impl BookingId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Half-open stay `[check_in, check_out)` in whole calendar days.
/// The check-out day itself is free: a guest leaving the morning of day D
/// does not occupy the night of D.
///
/// Construction does not enforce `check_out > check_in`; a malformed range is
/// reported as `InvalidRange` by validation, never as a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayRange {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self { check_in, check_out }
    }

    pub fn is_well_formed(&self) -> bool {
        self.check_out > self.check_in
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    pub fn contains_day(&self, day: NaiveDate) -> bool {
        self.check_in <= day && day < self.check_out
    }

    /// Iterate the occupied nights: every day in `[check_in, check_out)`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let check_out = self.check_out;
        self.check_in.iter_days().take_while(move |d| *d < check_out)
    }
}

/// Room metadata as supplied by the hotel directory. Read-only to this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: Option<String>,
    /// Rate per night in minor units. Must be positive.
    pub nightly_rate: Minor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guests {
    pub adults: u32,
    pub children: u32,
}

impl Guests {
    /// Saturating sum: absurd counts must surface as a limit rejection, not
    /// an overflow panic or a wrapped total that sneaks under the cap.
    pub fn total(&self) -> u32 {
        self.adults.saturating_add(self.children)
    }
}

/// Status lifecycle: `pending → confirmed → completed`,
/// `pending | confirmed → cancelled`. `cancelled` and `completed` are terminal.
///
/// Only `confirmed` blocks the calendar; `pending` is a provisional hold
/// surfaced to the requester but not binding on anyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Cancelled | BookingStatus::Completed)
    }

    pub fn blocks_calendar(&self) -> bool {
        matches!(self, BookingStatus::Confirmed)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// A booking record. Never deleted — cancellation is a status change.
/// `total_price` is computed once at creation and immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub room_id: RoomId,
    pub stay: StayRange,
    pub status: BookingStatus,
    pub total_price: Minor,
    pub guests: Guests,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        id: BookingId,
        room_id: RoomId,
        stay: StayRange,
        status: BookingStatus,
        total_price: Minor,
        guests: Guests,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            room_id,
            stay,
            status,
            total_price,
            guests,
            created_at,
        }
    }
}
