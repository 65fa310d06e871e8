//! Geographic coordinates in degree/minute/second notation.
//!
//! [`parse_coordinates`] reads a latitude/longitude pair such as
//! `N 48° 30' 15" E 2° 20' 0"` or `48.504167 N, 2.333333 E`. [`Latitude`]
//! and [`Longitude`] render single values the way the device tools print
//! them, e.g. `N 48° 30.250`.

mod format;
mod parse;

pub use format::{Latitude, Longitude};
pub use parse::{ParseError, ParseErrorKind, parse_coordinates};

/// A latitude/longitude pair in signed degrees.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Coordinates {
    /// Latitude in degrees, positive north.
    pub latitude: f64,

    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl std::str::FromStr for Coordinates {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinates(s)
    }
}

/// Which of the two coordinates is being read, deciding the hemisphere
/// letters that are accepted.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Letters for the positive and the negative hemisphere.
    pub fn hemispheres(self) -> [char; 2] {
        match self {
            Axis::Latitude => ['N', 'S'],
            Axis::Longitude => ['E', 'W'],
        }
    }
}
