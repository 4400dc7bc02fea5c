mod static_trip_data_source;

pub use static_trip_data_source::StaticTripDataSource;
