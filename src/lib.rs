//! Decoder/Encoder for POI files of the GP-102 GPS tracker.
//!
//! A POI file is a single fixed-size binary record holding a name, an icon
//! and a position. The [poi] module reads and writes these records, the
//! [coord] module parses and formats the degree/minute notation used to
//! enter and show positions.
//!
//! ```
//! use gp102_poi::{Icon, poi};
//! use gp102_poi::coord::Coordinates;
//!
//! let position: Coordinates = "N 53° 37' 51\" E 9° 59' 49\"".parse()?;
//! let data = poi::encode_poi("0815", Icon::Airport, position.latitude, position.longitude)?;
//! let record = poi::decode_record(&data)?;
//! assert_eq!(record.to_string(), "0815 (airport) N 53° 37.850 E 009° 59.816");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod coord;
mod icon;
pub mod poi;

pub use icon::{ICON_NAMES, Icon};
pub use poi::PoiRecord;
