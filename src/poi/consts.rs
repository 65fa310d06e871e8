pub const RECORD_SIZE: usize = 128;
pub const SIGNATURE: u8 = 0x01;
pub const COORDINATE_SCALE: f64 = 100_000.0;

pub const SIGNATURE_OFFSET: usize = 0;
pub const ICON_OFFSET: usize = 1;
pub const RESERVED1_OFFSET: usize = 2;
pub const RESERVED1_SIZE: usize = 10;
pub const NAME_OFFSET: usize = 12;
pub const NAME_SIZE: usize = 10;
pub const RESERVED2_OFFSET: usize = 22;
pub const RESERVED2_SIZE: usize = 54;
pub const LATITUDE_OFFSET: usize = 76;
pub const LONGITUDE_OFFSET: usize = 80;
pub const TRAILER_OFFSET: usize = 84;
pub const TRAILER_SIZE: usize = 44;

pub const RESERVED1: [u8; RESERVED1_SIZE] = [0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0, 0];
pub const RESERVED2: [u8; RESERVED2_SIZE] = [0x00; RESERVED2_SIZE];
pub const TRAILER: [u8; TRAILER_SIZE] = [0xFF; TRAILER_SIZE];
