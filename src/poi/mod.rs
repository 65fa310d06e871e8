//! Decoder/Encoder for the GP-102 POI file format.
//!
//! A POI file holds exactly one [`PoiRecord`] of [`RECORD_SIZE`] bytes. Use
//! [read_record] or [decode_record] to decode a file and [encode_poi],
//! [encode_record] or [Writer] to produce one.

mod consts;
mod decode;
mod encode;
mod record;

pub use consts::{NAME_SIZE, RECORD_SIZE};
pub use decode::*;
pub use encode::*;
pub use record::PoiRecord;
