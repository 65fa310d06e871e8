use super::consts::*;
use crate::{Icon, PoiRecord};
use log::trace;
use std::io::Read;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("file too short: expected 128 bytes, got {actual}")]
    TruncatedInput { actual: usize },
    #[error("unexpected size: file is longer than 128 bytes")]
    UnexpectedSize,
    #[error("invalid file type: unknown icon index {0}")]
    InvalidIconIndex(u8),
    #[error("invalid signature 0x{0:02x}")]
    InvalidSignature(u8),
}

/// Reads a single POI record from `reader`.
///
/// At most one byte past the record is consumed, which is enough to tell a
/// well-formed file from one with excess data.
pub fn read_record<R: Read>(reader: R) -> Result<PoiRecord, DecodeError> {
    let mut data = Vec::with_capacity(RECORD_SIZE + 1);
    reader.take(RECORD_SIZE as u64 + 1).read_to_end(&mut data)?;
    decode_record(&data)
}

/// Decodes a POI record from a buffer that must be exactly
/// [`RECORD_SIZE`](crate::poi::RECORD_SIZE) bytes long.
///
/// A signature other than `0x01` does not fail decoding, see
/// [`PoiRecord::check_signature`].
pub fn decode_record(data: &[u8]) -> Result<PoiRecord, DecodeError> {
    if data.len() < RECORD_SIZE {
        return Err(DecodeError::TruncatedInput { actual: data.len() });
    }
    let data: &[u8; RECORD_SIZE] = data
        .try_into()
        .map_err(|_| DecodeError::UnexpectedSize)?;

    let icon_index = data[ICON_OFFSET];
    let icon = Icon::from_index(icon_index).ok_or(DecodeError::InvalidIconIndex(icon_index))?;

    let record = PoiRecord {
        signature: data[SIGNATURE_OFFSET],
        icon,
        reserved1: field(data, RESERVED1_OFFSET),
        name: field(data, NAME_OFFSET),
        reserved2: field(data, RESERVED2_OFFSET),
        latitude: decode_coordinate(data, LATITUDE_OFFSET),
        longitude: decode_coordinate(data, LONGITUDE_OFFSET),
        trailer: field(data, TRAILER_OFFSET),
    };
    trace!("decoded {record:?}");

    Ok(record)
}

fn field<const N: usize>(data: &[u8; RECORD_SIZE], offset: usize) -> [u8; N] {
    let mut buf = [0u8; N];
    buf.copy_from_slice(&data[offset..offset + N]);
    buf
}

fn decode_coordinate(data: &[u8; RECORD_SIZE], offset: usize) -> f64 {
    i32::from_le_bytes(field(data, offset)) as f64 / COORDINATE_SCALE
}
