use byteorder::LittleEndian;

pub const BITS_PER_BYTE: usize = 8;
pub const BYTES_PER_LENGTH_OFFSET: usize = size_of::<Offset>();

pub type Endianness = LittleEndian;
pub type Offset = u32;
