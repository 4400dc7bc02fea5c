use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::{Kiosk, Trip};

/// Mean radius of Earth in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.009;

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance between two points via the spherical law of
/// cosines. The cosine argument is clamped to [-1, 1]: rounding can push it
/// fractionally outside the domain of `acos` for coincident or
/// near-antipodal points, which would otherwise yield NaN.
pub fn great_circle_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let delta_lambda = (a.longitude.to_radians() - b.longitude.to_radians()).abs();

    let cos_angle = phi1.sin() * phi2.sin() + phi1.cos() * phi2.cos() * delta_lambda.cos();
    let delta_sigma = cos_angle.clamp(-1.0, 1.0).acos();

    delta_sigma * EARTH_RADIUS_KM
}

/// The `n` kiosks closest to `point`, ascending by distance. Ties keep input
/// order (the sort is stable). Returns `min(n, kiosks.len())` entries.
pub fn nearest_kiosks(point: GeoPoint, kiosks: &[Kiosk], n: usize) -> Vec<Kiosk> {
    let mut by_distance: Vec<(f64, &Kiosk)> = kiosks
        .iter()
        .map(|k| (great_circle_distance(point, k.location), k))
        .collect();
    by_distance.sort_by(|a, b| a.0.total_cmp(&b.0));
    by_distance
        .into_iter()
        .take(n)
        .map(|(_, k)| k.clone())
        .collect()
}

#[derive(Debug, Default)]
pub struct LocationFilterOutcome {
    pub trips: Vec<Trip>,
    /// Kiosk ids referenced by trips but absent from the kiosk set. Those
    /// trips are excluded; the ids are surfaced for diagnostics only.
    pub missing_kiosk_ids: BTreeSet<String>,
}

/// Keeps trips whose checkout *and* return kiosks both lie within
/// `radius_km` of `point` (boundary inclusive). Distances are computed once
/// per kiosk, not once per trip.
pub fn filter_by_location(
    trips: Vec<Trip>,
    kiosks: &[Kiosk],
    point: GeoPoint,
    radius_km: f64,
) -> LocationFilterOutcome {
    let distances: HashMap<&str, f64> = kiosks
        .iter()
        .map(|k| (k.id.as_str(), great_circle_distance(point, k.location)))
        .collect();

    let mut outcome = LocationFilterOutcome::default();
    for trip in trips {
        let mut in_radius = true;
        for kiosk_id in [&trip.checkout_kiosk_id, &trip.return_kiosk_id] {
            match distances.get(kiosk_id.as_str()) {
                Some(distance) => {
                    if *distance > radius_km {
                        in_radius = false;
                    }
                }
                None => {
                    outcome.missing_kiosk_ids.insert(kiosk_id.clone());
                    in_radius = false;
                }
            }
        }
        if in_radius {
            outcome.trips.push(trip);
        }
    }

    if !outcome.missing_kiosk_ids.is_empty() {
        tracing::info!(
            missing = ?outcome.missing_kiosk_ids,
            "Trips referenced kiosk ids absent from the kiosk set"
        );
    }

    outcome
}
