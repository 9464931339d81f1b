//! Common Data Representation encoding.
//!
//! Primitive values are aligned on their natural size. Offsets are counted
//! from the start of the buffer a reader or writer was created over, which
//! is the start of the GIOP message (header included) or of an
//! encapsulation.

use super::error::{BrokerError, Result};

/// Byte order of a CDR stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Most significant byte first
    Big,
    /// Least significant byte first
    Little,
}

impl ByteOrder {
    /// Order announced by a GIOP flag or encapsulation octet.
    pub fn from_flag(flag: u8) -> Self {
        if flag & 1 == 1 {
            Self::Little
        } else {
            Self::Big
        }
    }

    /// Flag octet announcing this order.
    pub fn flag(self) -> u8 {
        match self {
            Self::Big => 0,
            Self::Little => 1,
        }
    }

    /// Order of the host.
    pub fn native() -> Self {
        if cfg!(target_endian = "little") {
            Self::Little
        } else {
            Self::Big
        }
    }
}

macro_rules! write_primitive {
    ($name:ident, $ty:ty) => {
        #[doc = concat!("Append an aligned `", stringify!($ty), "`.")]
        pub fn $name(&mut self, value: $ty) {
            self.align(size_of::<$ty>());
            let bytes = match self.order {
                ByteOrder::Big => value.to_be_bytes(),
                ByteOrder::Little => value.to_le_bytes(),
            };
            self.buf.extend_from_slice(&bytes);
        }
    };
}

macro_rules! read_primitive {
    ($name:ident, $ty:ty) => {
        #[doc = concat!("Read an aligned `", stringify!($ty), "`.")]
        pub fn $name(&mut self) -> Result<$ty> {
            self.align(size_of::<$ty>());
            let bytes = self.take(size_of::<$ty>())?;
            let mut raw = [0u8; size_of::<$ty>()];
            raw.copy_from_slice(bytes);
            Ok(match self.order {
                ByteOrder::Big => <$ty>::from_be_bytes(raw),
                ByteOrder::Little => <$ty>::from_le_bytes(raw),
            })
        }
    };
}

/// Growable CDR output buffer
#[derive(Debug)]
pub struct CdrWriter {
    buf: Vec<u8>,
    order: ByteOrder,
}

impl CdrWriter {
    /// Empty buffer writing in `order`.
    pub fn new(order: ByteOrder) -> Self {
        Self {
            buf: Vec::new(),
            order,
        }
    }

    /// Buffer for an encapsulation: starts with the byte order octet.
    pub fn encapsulation(order: ByteOrder) -> Self {
        let mut writer = Self::new(order);
        writer.write_octet(order.flag());
        writer
    }

    /// Byte order in use.
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Pad with zeros up to a multiple of `alignment`.
    pub fn align(&mut self, alignment: usize) {
        let padding = (alignment - self.buf.len() % alignment) % alignment;
        self.buf.resize(self.buf.len() + padding, 0);
    }

    /// Append raw bytes without length or alignment.
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append one octet.
    pub fn write_octet(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Append a boolean octet.
    pub fn write_bool(&mut self, value: bool) {
        self.write_octet(u8::from(value));
    }

    write_primitive!(write_u16, u16);
    write_primitive!(write_u32, u32);
    write_primitive!(write_i32, i32);
    write_primitive!(write_i64, i64);

    /// Append a string: length including the terminating NUL, then bytes.
    pub fn write_string(&mut self, value: &str) {
        self.write_len(value.len() + 1);
        self.buf.extend_from_slice(value.as_bytes());
        self.buf.push(0);
    }

    /// Append an octet sequence: length, then bytes.
    pub fn write_octets(&mut self, value: &[u8]) {
        self.write_len(value.len());
        self.buf.extend_from_slice(value);
    }

    /// Overwrite four bytes at `offset` with `value` in this writer's order.
    ///
    /// Used to fill in lengths once the rest of a message is known.
    pub fn patch_u32(&mut self, offset: usize, value: u32) {
        let bytes = match self.order {
            ByteOrder::Big => value.to_be_bytes(),
            ByteOrder::Little => value.to_le_bytes(),
        };
        self.buf[offset..offset + 4].copy_from_slice(&bytes);
    }

    /// Finished buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn write_len(&mut self, len: usize) {
        self.write_u32(len as u32);
    }
}

/// Cursor over CDR input
#[derive(Debug, Clone)]
pub struct CdrReader<'a> {
    data: &'a [u8],
    pos: usize,
    order: ByteOrder,
}

impl<'a> CdrReader<'a> {
    /// Read `data` in `order`, starting at offset zero.
    pub fn new(data: &'a [u8], order: ByteOrder) -> Self {
        Self {
            data,
            pos: 0,
            order,
        }
    }

    /// Read an encapsulation: the first octet selects the byte order.
    ///
    /// # Errors
    /// Returns error if `data` is empty.
    pub fn encapsulation(data: &'a [u8]) -> Result<Self> {
        let flag = *data
            .first()
            .ok_or_else(|| BrokerError::Malformed("empty encapsulation".to_string()))?;

        Ok(Self {
            data,
            pos: 1,
            order: ByteOrder::from_flag(flag),
        })
    }

    /// Byte order in use.
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Current offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move to `offset`.
    pub fn seek(&mut self, offset: usize) {
        self.pos = offset;
    }

    /// Bytes left after the current offset.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Skip padding up to a multiple of `alignment`.
    pub fn align(&mut self, alignment: usize) {
        let padding = (alignment - self.pos % alignment) % alignment;
        self.pos += padding;
    }

    /// Read one octet.
    pub fn read_octet(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Read a boolean octet.
    pub fn read_bool(&mut self) -> Result<bool> {
        match self.read_octet()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(BrokerError::Malformed(format!("invalid boolean {other}"))),
        }
    }

    read_primitive!(read_u16, u16);
    read_primitive!(read_u32, u32);
    read_primitive!(read_i32, i32);
    read_primitive!(read_i64, i64);

    /// Read a NUL-terminated string.
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_u32()? as usize;
        if len == 0 {
            return Err(BrokerError::Malformed("string without terminator".to_string()));
        }

        let bytes = self.take(len)?;
        let (text, terminator) = bytes.split_at(len - 1);
        if terminator != [0] {
            return Err(BrokerError::Malformed("string not NUL-terminated".to_string()));
        }

        String::from_utf8(text.to_vec())
            .map_err(|e| BrokerError::Malformed(format!("string is not UTF-8: {e}")))
    }

    /// Read an octet sequence.
    pub fn read_octets(&mut self) -> Result<&'a [u8]> {
        let len = self.read_u32()? as usize;
        self.take(len)
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or(BrokerError::Truncated {
                needed: len,
                offset: self.pos,
            })?;

        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_aligned_to_their_size() {
        let mut writer = CdrWriter::new(ByteOrder::Big);
        writer.write_octet(7);
        writer.write_u32(0x0102_0304);
        writer.write_octet(9);
        writer.write_i64(-2);

        let bytes = writer.into_bytes();
        assert_eq!(&bytes[..8], &[7, 0, 0, 0, 1, 2, 3, 4]);
        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[16..], &(-2i64).to_be_bytes());
    }

    #[test]
    fn little_endian_reads_match_writes() {
        let mut writer = CdrWriter::new(ByteOrder::Little);
        writer.write_u16(0xBEEF);
        writer.write_string("get_media_position");
        writer.write_i64(1_234_567_890_123);
        let bytes = writer.into_bytes();

        let mut reader = CdrReader::new(&bytes, ByteOrder::Little);
        assert_eq!(reader.read_u16().unwrap(), 0xBEEF);
        assert_eq!(reader.read_string().unwrap(), "get_media_position");
        assert_eq!(reader.read_i64().unwrap(), 1_234_567_890_123);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn string_length_counts_terminator() {
        let mut writer = CdrWriter::new(ByteOrder::Big);
        writer.write_string("exit");

        assert_eq!(writer.into_bytes(), vec![0, 0, 0, 5, b'e', b'x', b'i', b't', 0]);
    }

    #[test]
    fn encapsulation_takes_order_from_first_octet() {
        let data = [1u8, 0, 0, 0, 0x2A, 0, 0, 0];
        let mut reader = CdrReader::encapsulation(&data).unwrap();

        assert_eq!(reader.order(), ByteOrder::Little);
        assert_eq!(reader.read_u32().unwrap(), 42);
    }

    #[test]
    fn short_input_is_reported() {
        let data = [0u8, 0, 0, 10, b'a'];
        let mut reader = CdrReader::new(&data, ByteOrder::Big);

        assert!(matches!(
            reader.read_octets(),
            Err(BrokerError::Truncated { needed: 10, offset: 4 })
        ));
    }

    #[test]
    fn unterminated_string_is_rejected() {
        let data = [0u8, 0, 0, 2, b'a', b'b'];
        let mut reader = CdrReader::new(&data, ByteOrder::Big);

        assert!(matches!(reader.read_string(), Err(BrokerError::Malformed(_))));
    }
}
