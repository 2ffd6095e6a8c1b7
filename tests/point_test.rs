#[macro_use]
extern crate assert_approx_eq;

extern crate greatcircle;

use greatcircle::{Coordinate, Hemisphere, InvalidCoordinate};

#[test]
fn dms() {
    let calgary = Coordinate::from_dms(51., 3., Hemisphere::North, 114., 4., Hemisphere::West);
    assert_eq!(calgary.latitude, 51.05);
    assert_approx_eq!(calgary.longitude, -114.0667, 1e-4);

    let sydney = Coordinate::from_dms(33., 52., Hemisphere::South, 151., 12., Hemisphere::East);
    assert_approx_eq!(sydney.latitude, -33.8667, 1e-4);
    assert_approx_eq!(sydney.longitude, 151.2, 1e-9);
}

#[test]
fn checked_accepts_bounds() {
    assert!(Coordinate::checked(90., 180.).is_ok());
    assert!(Coordinate::checked(-90., -180.).is_ok());
    assert_eq!(Coordinate::checked(33.897, -118.418).unwrap(), Coordinate::new(33.897, -118.418));
}

#[test]
fn checked_rejects_out_of_range() {
    let cases = [(90.5, 0.), (-91., 0.), (0., 180.1), (0., -200.), (std::f64::NAN, 0.), (0., std::f64::INFINITY)];

    for &(latitude, longitude) in &cases {
        let err = Coordinate::checked(latitude, longitude).unwrap_err();
        assert!(err.downcast_ref::<InvalidCoordinate>().is_some(), "{} / {} accepted", latitude, longitude);
    }
}

#[test]
fn error_message() {
    let err = Coordinate::checked(95., 10.).unwrap_err();
    assert_eq!(err.to_string(), "invalid coordinate: latitude 95, longitude 10");
}
