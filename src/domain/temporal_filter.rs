use chrono::NaiveDateTime;

use super::Trip;

/// Keeps trips with `start <= checkout_time <= end`, both bounds inclusive.
///
/// Policy for malformed timestamps: skip the record and log it, never abort
/// the whole filter. A single bad row in a large upstream extract should not
/// fail an otherwise valid job.
pub fn filter_by_date(trips: Vec<Trip>, start: NaiveDateTime, end: NaiveDateTime) -> Vec<Trip> {
    trips
        .into_iter()
        .filter(|trip| match trip.checkout_time() {
            Ok(t) => start <= t && t <= end,
            Err(e) => {
                tracing::warn!(
                    checkout_datetime = %trip.checkout_datetime,
                    error = %e,
                    "Skipping trip with malformed checkout timestamp"
                );
                false
            }
        })
        .collect()
}
