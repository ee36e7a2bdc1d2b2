use crate::model::BookingStatus;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: bookings created. Labels: status (pending | confirmed).
pub const BOOKINGS_CREATED_TOTAL: &str = "roomline_bookings_created_total";

/// Counter: pending bookings confirmed.
pub const BOOKINGS_CONFIRMED_TOTAL: &str = "roomline_bookings_confirmed_total";

/// Counter: bookings cancelled.
pub const BOOKINGS_CANCELLED_TOTAL: &str = "roomline_bookings_cancelled_total";

/// Counter: bookings completed via the façade.
pub const BOOKINGS_COMPLETED_TOTAL: &str = "roomline_bookings_completed_total";

/// Counter: create/confirm requests rejected on a date conflict.
pub const CONFLICTS_REJECTED_TOTAL: &str = "roomline_conflicts_rejected_total";

/// Counter: availability checks served.
pub const AVAILABILITY_CHECKS_TOTAL: &str = "roomline_availability_checks_total";

/// Histogram: availability check latency in seconds.
pub const AVAILABILITY_CHECK_DURATION_SECONDS: &str =
    "roomline_availability_check_duration_seconds";

/// Counter: bookings moved to completed by the sweeper.
pub const SWEEP_COMPLETIONS_TOTAL: &str = "roomline_sweep_completions_total";

/// Register metric descriptions with the installed recorder. The exporter
/// itself belongs to the hosting application; this library only records.
pub fn describe_metrics() {
    metrics::describe_counter!(BOOKINGS_CREATED_TOTAL, "Bookings created, by initial status");
    metrics::describe_counter!(BOOKINGS_CONFIRMED_TOTAL, "Pending bookings confirmed");
    metrics::describe_counter!(BOOKINGS_CANCELLED_TOTAL, "Bookings cancelled");
    metrics::describe_counter!(BOOKINGS_COMPLETED_TOTAL, "Bookings completed via the facade");
    metrics::describe_counter!(CONFLICTS_REJECTED_TOTAL, "Requests rejected on a date conflict");
    metrics::describe_counter!(AVAILABILITY_CHECKS_TOTAL, "Availability checks served");
    metrics::describe_histogram!(
        AVAILABILITY_CHECK_DURATION_SECONDS,
        "Availability check latency in seconds"
    );
    metrics::describe_counter!(SWEEP_COMPLETIONS_TOTAL, "Bookings completed by the sweeper");
}

/// Map a status to a short label for metrics.
pub fn status_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "pending",
        BookingStatus::Confirmed => "confirmed",
        BookingStatus::Cancelled => "cancelled",
        BookingStatus::Completed => "completed",
    }
}
