#[derive(Debug, Fail, PartialEq)]
#[fail(display = "invalid coordinate: latitude {}, longitude {}", latitude, longitude)]
pub struct InvalidCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}
