mod data_series;
mod geo_filter;
mod job;
mod job_id;
mod job_parameters;
mod job_status;
mod kiosk;
mod temporal_filter;
mod trip;

pub use data_series::{ChartLabels, DailyCount, DataSeries};
pub use geo_filter::{
    filter_by_location, great_circle_distance, nearest_kiosks, GeoPoint,
    LocationFilterOutcome, EARTH_RADIUS_KM,
};
pub use job::Job;
pub use job_id::JobId;
pub use job_parameters::{JobParameters, TripDurationParams, TripsPerDayParams, ValidationError};
pub use job_status::JobStatus;
pub use kiosk::{Kiosk, KioskStatus};
pub use temporal_filter::filter_by_date;
pub use trip::{Trip, TRIP_TIMESTAMP_FORMAT};
