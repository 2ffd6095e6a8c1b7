use std::f64::consts::PI;

use crate::Point;

/// Mean radius of the earth in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.;

pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.
}

/// Great-circle distance in kilometers between two coordinates given in
/// decimal degrees, assuming a spherical earth.
///
/// Out-of-range inputs are not rejected, see `Coordinate::checked` for that.
///
pub fn compute_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = to_radians(lat1);
    let phi2 = to_radians(lat2);
    let delta_phi = to_radians(lat2 - lat1);
    let delta_lambda = to_radians(lon2 - lon1);

    let a = (delta_phi / 2.).sin() * (delta_phi / 2.).sin() +
        phi1.cos() * phi2.cos() *
            (delta_lambda / 2.).sin() * (delta_lambda / 2.).sin();

    // rounding can push `a` just past 1 for antipodal points
    let a = a.min(1.).max(0.);

    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    trace!("haversine: a={} c={}", a, c);

    EARTH_RADIUS_KM * c
}

pub fn haversine_distance(fix1: &dyn Point, fix2: &dyn Point) -> f64 {
    compute_distance(fix1.latitude(), fix1.longitude(), fix2.latitude(), fix2.longitude())
}
