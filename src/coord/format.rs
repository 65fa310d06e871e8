use super::Axis;
use std::fmt;

/// Displays a latitude as `N 48° 30.250`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Latitude(pub f64);

/// Displays a longitude as `E 002° 20.000`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Longitude(pub f64);

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_degrees_minutes(f, self.0, 2, Axis::Latitude)
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_degrees_minutes(f, self.0, 3, Axis::Longitude)
    }
}

fn write_degrees_minutes(
    f: &mut fmt::Formatter<'_>,
    value: f64,
    width: usize,
    axis: Axis,
) -> fmt::Result {
    let [positive, negative] = axis.hemispheres();
    let hemisphere = if value < 0.0 { negative } else { positive };
    let degrees = value.abs().trunc();
    let minutes = (value.abs() - degrees) * 60.0;
    write!(f, "{hemisphere} {:0width$}° {minutes:06.3}", degrees as u32)
}
