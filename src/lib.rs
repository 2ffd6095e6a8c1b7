#[macro_use] extern crate failure;
#[macro_use] extern crate log;

pub mod error;
pub mod haversine;
pub mod location;
pub mod point;
pub mod report;

pub use crate::error::InvalidCoordinate;
pub use crate::point::{Coordinate, Hemisphere, Point};
