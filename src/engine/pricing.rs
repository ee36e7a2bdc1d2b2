use crate::model::{Minor, StayRange};

/// Total charge for a stay: nightly rate times the number of nights, with a
/// minimum of one night so degenerate spans never price to zero. Currency is
/// the caller's concern.
pub fn total_price(nightly_rate: Minor, stay: &StayRange) -> Minor {
    let nights = stay.nights().max(1);
    nightly_rate * nights
}
