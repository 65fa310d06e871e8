use super::consts::*;
use crate::{Icon, PoiRecord};
use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("unsupported character {character:?} in name at position {position}")]
    UnsupportedNameCharacter { character: char, position: usize },
}

/// Builds and encodes a POI record in one step.
pub fn encode_poi(
    name: &str,
    icon: Icon,
    latitude: f64,
    longitude: f64,
) -> Result<[u8; RECORD_SIZE], EncodeError> {
    let record = PoiRecord::new(name, icon, latitude, longitude)?;
    Ok(encode_record(&record))
}

/// Serializes `record` into the on-device layout.
///
/// Coordinates are rounded to the nearest 1/100000 degree. Values outside
/// the `i32` range saturate.
pub fn encode_record(record: &PoiRecord) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];
    buf[SIGNATURE_OFFSET] = record.signature;
    buf[ICON_OFFSET] = record.icon.index();
    buf[RESERVED1_OFFSET..RESERVED1_OFFSET + RESERVED1_SIZE].copy_from_slice(&record.reserved1);
    buf[NAME_OFFSET..NAME_OFFSET + NAME_SIZE].copy_from_slice(&record.name);
    buf[RESERVED2_OFFSET..RESERVED2_OFFSET + RESERVED2_SIZE].copy_from_slice(&record.reserved2);
    write_coordinate(&mut buf, LATITUDE_OFFSET, record.latitude);
    write_coordinate(&mut buf, LONGITUDE_OFFSET, record.longitude);
    buf[TRAILER_OFFSET..TRAILER_OFFSET + TRAILER_SIZE].copy_from_slice(&record.trailer);
    buf
}

pub struct Writer<W: Write> {
    writer: W,
}

impl<W: Write> Writer<W> {
    pub fn new(inner: W) -> Self {
        Self { writer: inner }
    }

    pub fn write(&mut self, record: &PoiRecord) -> Result<(), EncodeError> {
        self.writer.write_all(&encode_record(record))?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn write_coordinate(buf: &mut [u8; RECORD_SIZE], offset: usize, degrees: f64) {
    let fixed = (degrees * COORDINATE_SCALE).round() as i32;
    buf[offset..offset + 4].copy_from_slice(&fixed.to_le_bytes());
}

/// Checks that `name` only uses characters the device can display.
pub(crate) fn validate_name(name: &str) -> Result<(), EncodeError> {
    match name.char_indices().find(|&(_, c)| !is_name_char(c)) {
        Some((position, character)) => {
            Err(EncodeError::UnsupportedNameCharacter { character, position })
        }
        None => Ok(()),
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | ':' | '/' | '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poi::decode_record;
    use approx::assert_abs_diff_eq;
    use insta::assert_debug_snapshot;

    #[test]
    fn encoding_round_trips() {
        let encoded = encode_poi("0815", Icon::Cafe, 48.504167, 2.333333).unwrap();
        let record = decode_record(&encoded).unwrap();
        assert_eq!(&record.name, b"0815\0\0\0\0\0\0");
        assert_eq!(record.icon, Icon::Cafe);
        assert_abs_diff_eq!(record.latitude, 48.504167, epsilon = 0.00001);
        assert_abs_diff_eq!(record.longitude, 2.333333, epsilon = 0.00001);
        assert!(record.check_signature().is_ok());
    }

    #[test]
    fn encoding_writes_documented_layout() {
        let encoded = encode_poi("12:30", Icon::Star, -1.0, 0.5).unwrap();
        assert_eq!(encoded[0], 0x01);
        assert_eq!(encoded[1], 0x00);
        assert_eq!(&encoded[2..12], &[0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&encoded[12..22], b"12:30\0\0\0\0\0");
        assert!(encoded[22..76].iter().all(|&b| b == 0x00));
        assert_eq!(&encoded[76..80], &(-100_000i32).to_le_bytes());
        assert_eq!(&encoded[80..84], &50_000i32.to_le_bytes());
        assert!(encoded[84..].iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn encoding_rounds_to_nearest_fixed_point_value() {
        let encoded = encode_poi("", Icon::Star, 0.000004, -0.000006).unwrap();
        assert_eq!(&encoded[76..80], &0i32.to_le_bytes());
        assert_eq!(&encoded[80..84], &(-1i32).to_le_bytes());
    }

    #[test]
    fn encoding_saturates_out_of_range_coordinates() {
        let encoded = encode_poi("", Icon::Star, 1e9, -1e9).unwrap();
        assert_eq!(&encoded[76..80], &i32::MAX.to_le_bytes());
        assert_eq!(&encoded[80..84], &i32::MIN.to_le_bytes());
    }

    #[test]
    fn encoding_truncates_long_names() {
        let encoded = encode_poi("0123456789ABCDEF", Icon::Star, 0.0, 0.0).unwrap();
        assert_eq!(&encoded[12..22], b"0123456789");
        assert!(encoded[22..76].iter().all(|&b| b == 0x00));
    }

    #[test]
    fn encoding_accepts_supported_characters() {
        let encoded = encode_poi("trip-01:/home_2", Icon::Home, 0.0, 0.0).unwrap();
        assert_eq!(&encoded[12..22], b"trip-01:/h");
    }

    #[test]
    fn encoding_fails_for_non_ascii_name() {
        assert_debug_snapshot!(
            encode_poi("café", Icon::Cafe, 0.0, 0.0).unwrap_err(),
            @r###"
        UnsupportedNameCharacter {
            character: 'é',
            position: 3,
        }
        "###
        );
    }

    #[test]
    fn encoding_fails_for_space_in_name() {
        assert_debug_snapshot!(
            encode_poi("my home", Icon::Home, 0.0, 0.0).unwrap_err(),
            @r###"
        UnsupportedNameCharacter {
            character: ' ',
            position: 2,
        }
        "###
        );
    }

    #[test]
    fn encoding_checks_characters_beyond_truncation() {
        assert!(matches!(
            encode_poi("0123456789!", Icon::Star, 0.0, 0.0),
            Err(EncodeError::UnsupportedNameCharacter { character: '!', position: 10 })
        ));
    }

    #[test]
    fn re_encoding_reproduces_decoded_bytes() {
        let mut original = encode_poi("42", Icon::Train, 53.63083, 9.99694).unwrap();
        original[0] = 0x07;
        original[5] = 0xAB;
        original[30] = 0xCD;
        original[127] = 0x00;
        let record = decode_record(&original).unwrap();
        assert_eq!(encode_record(&record), original);
    }

    #[test]
    fn writer_writes_single_record() {
        let record = PoiRecord::new("7", Icon::Gas, 1.0, 2.0).unwrap();
        let mut writer = Writer::new(Vec::new());
        writer.write(&record).unwrap();
        let written = writer.into_inner();
        assert_eq!(written.len(), RECORD_SIZE);
        assert_eq!(decode_record(&written).unwrap(), record);
    }
}
