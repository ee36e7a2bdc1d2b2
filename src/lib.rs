//! Room availability and reservation-conflict core for a hotel-booking
//! application. Builds a per-day Calendar Index from a room's confirmed
//! bookings, validates proposed stays against it, and drives bookings through
//! the pending/confirmed/cancelled/completed lifecycle without ever letting
//! two guests hold the same room on overlapping nights.
//!
//! Library-level contract only: no transport, no auth, no payment capture.
//! Storage and room metadata come in through the traits in [`store`].

pub mod clock;
pub mod engine;
pub mod limits;
pub mod model;
pub mod observability;
pub mod store;
pub mod sweeper;

pub use engine::{
    Availability, Calendar, DatePolicy, DaySlot, InitialStatus, ReservationError,
    ReservationService, ServiceConfig,
};
pub use model::{Booking, BookingId, BookingStatus, Guests, Minor, Room, RoomId, StayRange};
