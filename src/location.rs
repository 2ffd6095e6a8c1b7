use failure::Error;

use crate::Point;
use crate::haversine::haversine_distance;
use crate::point::{Coordinate, Hemisphere};

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub coordinate: Coordinate,
}

impl Location {
    pub fn new<S: Into<String>>(name: S, coordinate: Coordinate) -> Location {
        Location { name: name.into(), coordinate }
    }
}

impl Point for Location {
    fn latitude(&self) -> f64 {
        self.coordinate.latitude
    }
    fn longitude(&self) -> f64 {
        self.coordinate.longitude
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub from: Location,
    pub to: Location,
}

impl Route {
    pub fn new(from: Location, to: Location) -> Route {
        Route { from, to }
    }

    /// Great-circle distance from `from` to `to` in kilometers
    pub fn distance(&self) -> f64 {
        let distance = haversine_distance(&self.from, &self.to);
        debug!("{} -> {}: {} km", self.from.name, self.to.name, distance);
        distance
    }
}

/// Routes printed by the `greatcircle` binary, in output order
///
pub fn builtin_routes() -> Result<Vec<Route>, Error> {
    let manhattan_beach = Location::new("Manhattan Beach", Coordinate::checked(33.897, -118.418)?);
    let san_francisco = Location::new("San Francisco", Coordinate::checked(37.76834106, -122.41825867)?);

    let calgary = Location::new(
        "Calgary 51° 03' N, 114° 04' W",
        Coordinate::from_dms(51., 3., Hemisphere::North, 114., 4., Hemisphere::West),
    );
    let san_jose = Location::new(
        "San Jose 37° 20' N, 121° 53' W",
        Coordinate::from_dms(37., 20., Hemisphere::North, 121., 53., Hemisphere::West),
    );

    Ok(vec![
        Route::new(manhattan_beach, san_francisco),
        Route::new(calgary, san_jose),
    ])
}
