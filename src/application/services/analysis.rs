use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::{
    filter_by_date, filter_by_location, ChartLabels, DailyCount, DataSeries, GeoPoint, Kiosk,
    Trip, TripDurationParams, TripsPerDayParams,
};

/// Upper bin edge of the trip-duration histogram, in minutes. Durations
/// above this are dropped; a duration of exactly this value lands in the
/// last bin.
pub const HISTOGRAM_UPPER_MINUTES: u32 = 30;

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn date_label(date: NaiveDate) -> String {
    date.format("%m/%d/%y").to_string()
}

/// Histogram of trip durations between two kiosks (in either direction)
/// over the requested date range.
pub fn trip_duration_series(trips: Vec<Trip>, params: &TripDurationParams) -> DataSeries {
    let start = midnight(params.start_date);
    let end = midnight(params.end_date);
    let in_range = filter_by_date(trips, start, end);

    let mut counts = vec![0u64; HISTOGRAM_UPPER_MINUTES as usize];
    for trip in &in_range {
        let pair_matches = (trip.checkout_kiosk_id == params.kiosk1
            && trip.return_kiosk_id == params.kiosk2)
            || (trip.checkout_kiosk_id == params.kiosk2
                && trip.return_kiosk_id == params.kiosk1);
        if !pair_matches {
            continue;
        }
        let minutes = trip.duration_minutes;
        if minutes < HISTOGRAM_UPPER_MINUTES {
            counts[minutes as usize] += 1;
        } else if minutes == HISTOGRAM_UPPER_MINUTES {
            counts[HISTOGRAM_UPPER_MINUTES as usize - 1] += 1;
        }
    }

    DataSeries::Histogram {
        labels: ChartLabels {
            title: format!(
                "Trip Durations between {} and {} ({} - {})",
                params.kiosk1,
                params.kiosk2,
                date_label(params.start_date),
                date_label(params.end_date),
            ),
            x_label: "Trip Duration (minutes)".to_string(),
            y_label: "Number of Trips".to_string(),
        },
        lower_edge: 0,
        upper_edge: HISTOGRAM_UPPER_MINUTES,
        counts,
    }
}

/// Trips per calendar day within a radius of a point, over the requested
/// date range. Points come out sorted by date ascending.
pub fn trips_per_day_series(
    trips: Vec<Trip>,
    kiosks: &[Kiosk],
    params: &TripsPerDayParams,
) -> DataSeries {
    let start = midnight(params.start_date);
    let end = midnight(params.end_date);
    let in_range = filter_by_date(trips, start, end);

    let point = GeoPoint::new(params.lat, params.long);
    let outcome = filter_by_location(in_range, kiosks, point, params.radius_km);

    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for trip in &outcome.trips {
        // The date filter already dropped unparseable timestamps.
        if let Ok(t) = trip.checkout_time() {
            *per_day.entry(t.date()).or_insert(0) += 1;
        }
    }

    DataSeries::TimeSeries {
        labels: ChartLabels {
            title: format!(
                "Trips per day {} - {}, Location: ({:.3}, {:.3}), Radius: {} km",
                date_label(params.start_date),
                date_label(params.end_date),
                params.lat,
                params.long,
                params.radius_km,
            ),
            x_label: "Date".to_string(),
            y_label: "Number of Trips".to_string(),
        },
        points: per_day
            .into_iter()
            .map(|(date, trips)| DailyCount { date, trips })
            .collect(),
    }
}
