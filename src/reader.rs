use std::fmt::Debug;
use std::io;
use std::io::Read;

use crate::common::Format;
use crate::endianity::Endianity;
use crate::parser::{u64_to_offset, Error, Result};

/// A trait for reading the data from a DWARF section.
///
/// All read operations advance the section offset of the reader
/// unless specified otherwise. The number of bytes a read consumed is the
/// difference in `len()` before and after it.
pub trait Reader: Debug + Clone + Read {
    /// The endianity of bytes that are read.
    type Endian: Endianity;

    /// Return the endianity of bytes that are read.
    fn endian(&self) -> Self::Endian;

    /// Return the number of bytes remaining.
    fn len(&self) -> usize;

    /// Return true if the number of bytes remaining is zero.
    fn is_empty(&self) -> bool;

    /// Set the number of bytes remaining to zero.
    fn empty(&mut self);

    /// Set the number of bytes remaining to the specified length.
    fn truncate(&mut self, len: usize) -> Result<()>;

    /// Return the offset of this reader's data relative to the start of
    /// the given base reader's data.
    ///
    /// May panic if this reader's data is not contained within the given
    /// base reader's data.
    fn offset_from(&self, base: &Self) -> usize;

    /// Find the index of the first occurrence of the given byte.
    /// The offset of the reader is not changed.
    fn find(&self, byte: u8) -> Result<usize>;

    /// Discard the specified number of bytes.
    fn skip(&mut self, len: usize) -> Result<()>;

    /// Split a reader in two.
    ///
    /// A new reader is returned that can be used to read the next
    /// `len` bytes, and `self` is advanced so that it reads the remainder.
    fn split(&mut self, len: usize) -> Result<Self>;

    /// Read a u8.
    fn read_u8(&mut self) -> Result<u8>;

    /// Read a u16.
    fn read_u16(&mut self) -> Result<u16>;

    /// Read a u32.
    fn read_u32(&mut self) -> Result<u32>;

    /// Read a u64.
    fn read_u64(&mut self) -> Result<u64>;

    /// Read an unsigned integer of `n` bytes, where `n` is 1 to 8.
    fn read_uint(&mut self, n: usize) -> Result<u64>;

    /// Read a null-terminated slice, and return it (excluding the null).
    fn read_null_terminated_slice(&mut self) -> Result<Self> {
        let idx = self.find(0)?;
        let val = self.split(idx)?;
        self.skip(1)?;
        Ok(val)
    }

    /// Read an unsigned LEB128 encoded integer.
    fn read_uleb128(&mut self) -> Result<u64> {
        match leb128::read::unsigned(self) {
            Ok(val) => Ok(val),
            Err(leb128::read::Error::IoError(ref e))
                if e.kind() == io::ErrorKind::UnexpectedEof =>
            {
                Err(Error::UnexpectedEof)
            }
            Err(leb128::read::Error::IoError(_)) => Err(Error::Io),
            Err(leb128::read::Error::Overflow) => Err(Error::BadUnsignedLeb128),
        }
    }

    /// Read a signed LEB128 encoded integer.
    fn read_sleb128(&mut self) -> Result<i64> {
        match leb128::read::signed(self) {
            Ok(val) => Ok(val),
            Err(leb128::read::Error::IoError(ref e))
                if e.kind() == io::ErrorKind::UnexpectedEof =>
            {
                Err(Error::UnexpectedEof)
            }
            Err(leb128::read::Error::IoError(_)) => Err(Error::Io),
            Err(leb128::read::Error::Overflow) => Err(Error::BadSignedLeb128),
        }
    }

    /// Read an address-sized integer, and return it as a `u64`.
    fn read_address(&mut self, address_size: u8) -> Result<u64> {
        match address_size {
            1 => self.read_u8().map(u64::from),
            2 => self.read_u16().map(u64::from),
            4 => self.read_u32().map(u64::from),
            8 => self.read_u64(),
            otherwise => Err(Error::UnsupportedAddressSize(otherwise)),
        }
    }

    /// Parse a word-sized integer according to the DWARF format, and return it as a `u64`.
    fn read_word(&mut self, format: Format) -> Result<u64> {
        match format {
            Format::Dwarf32 => self.read_u32().map(u64::from),
            Format::Dwarf64 => self.read_u64(),
        }
    }

    /// Parse a word-sized integer according to the DWARF format, and return it as a `usize`.
    fn read_offset(&mut self, format: Format) -> Result<usize> {
        self.read_word(format).and_then(u64_to_offset)
    }

    /// Read an initial length field.
    ///
    /// This field is encoded as either a 32-bit length or
    /// a 64-bit length, and the returned `Format` indicates which.
    fn read_initial_length(&mut self) -> Result<(u64, Format)> {
        const MAX_DWARF_32_UNIT_LENGTH: u32 = 0xffff_fff0;
        const DWARF_64_INITIAL_UNIT_LENGTH: u32 = 0xffff_ffff;

        let val = self.read_u32()?;
        if val < MAX_DWARF_32_UNIT_LENGTH {
            Ok((u64::from(val), Format::Dwarf32))
        } else if val == DWARF_64_INITIAL_UNIT_LENGTH {
            self.read_u64().map(|val| (val, Format::Dwarf64))
        } else {
            Err(Error::UnknownReservedLength(val))
        }
    }

    /// Read a block whose length is given by a preceding unsigned integer
    /// of `width` bytes (1, 2 or 4).
    fn read_block(&mut self, width: u8) -> Result<Self> {
        let len = match width {
            1 => u64::from(self.read_u8()?),
            2 => u64::from(self.read_u16()?),
            4 => u64::from(self.read_u32()?),
            otherwise => return Err(Error::UnsupportedAddressSize(otherwise)),
        };
        let len = u64_to_offset(len)?;
        self.split(len)
    }

    /// Read a block whose length is given by a preceding unsigned LEB128.
    fn read_uleb128_block(&mut self) -> Result<Self> {
        let len = self.read_uleb128().and_then(u64_to_offset)?;
        self.split(len)
    }
}
