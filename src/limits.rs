use crate::model::Minor;

/// Availability horizon when the caller does not ask for a specific window.
pub const DEFAULT_HORIZON_DAYS: u32 = 90;

/// Hard cap on any computed calendar window, requested range included.
pub const MAX_HORIZON_DAYS: u32 = 731;

/// Longest stay a single booking may cover.
pub const MAX_STAY_NIGHTS: i64 = 90;

/// How far from today a check-in may lie, forward or (for backdated
/// corrections) backward. `MAX_ADVANCE_DAYS + MAX_STAY_NIGHTS` must stay
/// within `MAX_HORIZON_DAYS` so a validated range always fits the calendar
/// window.
pub const MAX_ADVANCE_DAYS: i64 = 540;

/// Adults plus children on one booking.
pub const MAX_GUESTS_PER_BOOKING: u32 = 12;

/// Sanity ceiling on a nightly rate in minor units.
pub const MAX_NIGHTLY_RATE: Minor = 100_000_000;
