use std::io::{self, Write};

use crate::location::{Location, Route};

fn write_location<W: Write>(out: &mut W, index: usize, location: &Location) -> io::Result<()> {
    writeln!(out, "Location {} (from the {})", index, location.name)?;
    writeln!(
        out,
        "Latitude: {}, Longitude: {}.",
        location.coordinate.latitude,
        location.coordinate.longitude
    )
}

pub fn write_route<W: Write>(out: &mut W, route: &Route) -> io::Result<()> {
    write_location(out, 1, &route.from)?;
    write_location(out, 2, &route.to)?;
    writeln!(out, "Distance between 1 and 2: {} kilometers.", route.distance())
}

pub fn write_routes<W: Write>(out: &mut W, routes: &[Route]) -> io::Result<()> {
    routes.iter().try_for_each(|route| write_route(out, route))
}
