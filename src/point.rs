use failure::Error;

use crate::error::InvalidCoordinate;
use crate::haversine::haversine_distance;

pub trait Point {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    fn sign(self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.,
            Hemisphere::South | Hemisphere::West => -1.,
        }
    }
}

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate { latitude, longitude }
    }

    /// Builds a coordinate from whole degrees and minutes, e.g. `51° 03' N, 114° 04' W`
    ///
    pub fn from_dms(
        lat_degrees: f64, lat_minutes: f64, lat_hemisphere: Hemisphere,
        lon_degrees: f64, lon_minutes: f64, lon_hemisphere: Hemisphere,
    ) -> Coordinate {
        Coordinate {
            latitude: lat_hemisphere.sign() * (lat_degrees + (lat_minutes / 60.)),
            longitude: lon_hemisphere.sign() * (lon_degrees + (lon_minutes / 60.)),
        }
    }

    /// Like `new`, but rejects latitudes outside `[-90, 90]`, longitudes
    /// outside `[-180, 180]` and non-finite values
    ///
    pub fn checked(latitude: f64, longitude: f64) -> Result<Coordinate, Error> {
        let valid = latitude.is_finite() && longitude.is_finite() &&
            latitude >= -90. && latitude <= 90. &&
            longitude >= -180. && longitude <= 180.;

        if !valid {
            warn!("rejecting coordinate {}, {}", latitude, longitude);
            return Err(InvalidCoordinate { latitude, longitude }.into());
        }

        Ok(Coordinate::new(latitude, longitude))
    }

    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_distance(self, other)
    }
}

impl Point for Coordinate {
    fn latitude(&self) -> f64 {
        self.latitude
    }
    fn longitude(&self) -> f64 {
        self.longitude
    }
}
