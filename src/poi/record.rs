use super::consts::*;
use super::decode::DecodeError;
use super::encode::{EncodeError, validate_name};
use crate::Icon;
use crate::coord::{Latitude, Longitude};
use encoding_rs::WINDOWS_1252;
use log::debug;
use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

/// A single point of interest as stored by the device.
///
/// The unknown regions of the format are kept verbatim so that a decoded
/// record encodes back to the same bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct PoiRecord {
    /// Always `0x01` in files written by the device.
    pub signature: u8,
    pub icon: Icon,
    /// Zero padded, not necessarily zero terminated.
    pub name: [u8; NAME_SIZE],
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
    pub reserved1: [u8; RESERVED1_SIZE],
    pub reserved2: [u8; RESERVED2_SIZE],
    pub trailer: [u8; TRAILER_SIZE],
}

impl PoiRecord {
    /// Creates a record the way the device writes it.
    ///
    /// Names longer than ten bytes are truncated.
    ///
    /// # Errors
    ///
    /// Fails with [`EncodeError::UnsupportedNameCharacter`] if `name`
    /// contains anything but ASCII letters, digits, `-`, `.`, `:`, `/` or `_`.
    pub fn new(name: &str, icon: Icon, latitude: f64, longitude: f64) -> Result<Self, EncodeError> {
        validate_name(name)?;

        let bytes = name.as_bytes();
        if bytes.len() > NAME_SIZE {
            debug!("truncating name {name:?} to {NAME_SIZE} bytes");
        }
        let len = bytes.len().min(NAME_SIZE);
        let mut name = [0u8; NAME_SIZE];
        name[..len].copy_from_slice(&bytes[..len]);

        Ok(Self {
            signature: SIGNATURE,
            icon,
            name,
            latitude,
            longitude,
            reserved1: RESERVED1,
            reserved2: RESERVED2,
            trailer: TRAILER,
        })
    }

    /// Returns the name bytes up to the first NUL.
    pub fn name_bytes(&self) -> &[u8] {
        let end = self
            .name
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(NAME_SIZE);
        &self.name[..end]
    }

    /// Returns the name for display. Bytes outside ASCII are read as
    /// Windows-1252 so that every value maps to some character.
    pub fn display_name(&self) -> Cow<'_, str> {
        WINDOWS_1252.decode_without_bom_handling(self.name_bytes()).0
    }

    /// Writes the output line `<name> (<icon>) <lat> <lon>` followed by a
    /// newline. The name is written as the raw bytes stored in the record.
    pub fn write_line<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(self.name_bytes())?;
        writeln!(
            out,
            " ({}) {} {}",
            self.icon,
            Latitude(self.latitude),
            Longitude(self.longitude)
        )
    }

    pub fn check_signature(&self) -> Result<(), DecodeError> {
        if self.signature == SIGNATURE {
            Ok(())
        } else {
            Err(DecodeError::InvalidSignature(self.signature))
        }
    }
}

impl fmt::Display for PoiRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} {}",
            self.display_name(),
            self.icon,
            Latitude(self.latitude),
            Longitude(self.longitude)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_uses_device_constants() {
        let record = PoiRecord::new("1", Icon::Office, 0.0, 0.0).unwrap();
        assert_eq!(record.signature, 0x01);
        assert_eq!(record.reserved1, [0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(record.reserved2, [0x00; 54]);
        assert_eq!(record.trailer, [0xFF; 44]);
    }

    #[test]
    fn name_stops_at_first_nul() {
        let mut record = PoiRecord::new("12345", Icon::Star, 0.0, 0.0).unwrap();
        record.name[2] = 0;
        assert_eq!(record.name_bytes(), b"12");
    }

    #[test]
    fn name_without_terminator_uses_full_field() {
        let record = PoiRecord::new("0123456789", Icon::Star, 0.0, 0.0).unwrap();
        assert_eq!(record.name_bytes(), b"0123456789");
        assert_eq!(record.display_name(), "0123456789");
    }

    #[test]
    fn display_name_maps_high_bytes() {
        let mut record = PoiRecord::new("", Icon::Star, 0.0, 0.0).unwrap();
        record.name[..4].copy_from_slice(b"caf\xE9");
        assert_eq!(record.display_name(), "café");
    }

    #[test]
    fn display_renders_output_line() {
        let record = PoiRecord::new("0815", Icon::Cafe, 48.504167, -2.333333).unwrap();
        assert_eq!(record.to_string(), "0815 (cafe) N 48° 30.250 W 002° 20.000");
    }

    #[test]
    fn output_line_keeps_raw_name_bytes() {
        let mut record = PoiRecord::new("", Icon::Star, 1.0, -1.0).unwrap();
        record.name[..2].copy_from_slice(&[0xC3, 0xA9]);
        let mut out = Vec::new();
        record.write_line(&mut out).unwrap();
        assert_eq!(out, b"\xC3\xA9 (star) N 01\xC2\xB0 00.000 W 001\xC2\xB0 00.000\n");
    }

    #[test]
    fn output_line_matches_display_for_ascii_names() {
        let record = PoiRecord::new("0815", Icon::Cafe, 48.504167, -2.333333).unwrap();
        let mut out = Vec::new();
        record.write_line(&mut out).unwrap();
        assert_eq!(out, format!("{record}\n").into_bytes());
    }

    #[test]
    fn valid_signature_passes_check() {
        let record = PoiRecord::new("", Icon::Star, 0.0, 0.0).unwrap();
        assert!(record.check_signature().is_ok());
    }
}
