use crate::common::{DebugLineStrOffset, DebugStrOffset};
use crate::endian_slice::EndianSlice;
use crate::endianity::Endianity;
use crate::parser::{Error, Result};
use crate::reader::Reader;

/// The `DebugStr` struct represents the DWARF strings
/// found in the `.debug_str` section.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebugStr<'input, Endian>
where
    Endian: Endianity,
{
    debug_str_section: EndianSlice<'input, Endian>,
}

impl<'input, Endian> DebugStr<'input, Endian>
where
    Endian: Endianity,
{
    /// Construct a new `DebugStr` instance from the data in the `.debug_str`
    /// section.
    ///
    /// ```
    /// use dwarfscan::{DebugStr, LittleEndian};
    ///
    /// # let buf = [0x00, 0x01, 0x02, 0x03];
    /// # let read_debug_str_section_somehow = || &buf;
    /// let debug_str = DebugStr::new(read_debug_str_section_somehow(), LittleEndian);
    /// ```
    pub fn new(debug_str_section: &'input [u8], endian: Endian) -> Self {
        Self::from(EndianSlice::new(debug_str_section, endian))
    }

    /// Lookup a string from the `.debug_str` section by `DebugStrOffset`.
    ///
    /// The returned slice excludes the null terminator.
    ///
    /// ```
    /// use dwarfscan::{DebugStr, DebugStrOffset, LittleEndian};
    ///
    /// let buf = [b'a', b'b', 0x00, b'c', 0x00];
    /// let debug_str = DebugStr::new(&buf, LittleEndian);
    /// assert_eq!(debug_str.get_str(DebugStrOffset(3)).unwrap().slice(), b"c");
    /// ```
    pub fn get_str(&self, offset: DebugStrOffset) -> Result<EndianSlice<'input, Endian>> {
        read_string_at(self.debug_str_section, offset.0)
    }

    /// Iterate over every string in the section, with its offset.
    pub fn strings(&self) -> StringIter<'input, Endian> {
        StringIter {
            input: self.debug_str_section,
            offset: 0,
        }
    }
}

impl<'input, Endian> From<EndianSlice<'input, Endian>> for DebugStr<'input, Endian>
where
    Endian: Endianity,
{
    fn from(debug_str_section: EndianSlice<'input, Endian>) -> Self {
        DebugStr { debug_str_section }
    }
}

/// The `DebugLineStr` struct represents the DWARF strings
/// found in the `.debug_line_str` section.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebugLineStr<'input, Endian>
where
    Endian: Endianity,
{
    section: EndianSlice<'input, Endian>,
}

impl<'input, Endian> DebugLineStr<'input, Endian>
where
    Endian: Endianity,
{
    /// Construct a new `DebugLineStr` instance from the data in the `.debug_line_str`
    /// section.
    pub fn new(debug_line_str_section: &'input [u8], endian: Endian) -> Self {
        Self::from(EndianSlice::new(debug_line_str_section, endian))
    }

    /// Lookup a string from the `.debug_line_str` section by `DebugLineStrOffset`.
    pub fn get_str(&self, offset: DebugLineStrOffset) -> Result<EndianSlice<'input, Endian>> {
        read_string_at(self.section, offset.0)
    }

    /// Iterate over every string in the section, with its offset.
    pub fn strings(&self) -> StringIter<'input, Endian> {
        StringIter {
            input: self.section,
            offset: 0,
        }
    }
}

impl<'input, Endian> From<EndianSlice<'input, Endian>> for DebugLineStr<'input, Endian>
where
    Endian: Endianity,
{
    fn from(section: EndianSlice<'input, Endian>) -> Self {
        DebugLineStr { section }
    }
}

fn read_string_at<Endian: Endianity>(
    section: EndianSlice<'_, Endian>,
    offset: usize,
) -> Result<EndianSlice<'_, Endian>> {
    if offset >= section.len() {
        return Err(Error::OffsetOutOfBounds);
    }
    let input = &mut section.range_from(offset..);
    input.read_null_terminated_slice()
}

/// An iterator over the null-terminated strings of a string section.
///
/// A final string without a terminator is an `UnexpectedEof` error, after
/// which the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct StringIter<'input, Endian>
where
    Endian: Endianity,
{
    input: EndianSlice<'input, Endian>,
    offset: usize,
}

impl<'input, Endian> StringIter<'input, Endian>
where
    Endian: Endianity,
{
    /// Advance the iterator and return the next string and its offset.
    pub fn next(&mut self) -> Result<Option<(usize, EndianSlice<'input, Endian>)>> {
        if self.input.is_empty() {
            return Ok(None);
        }
        let offset = self.offset;
        match self.input.read_null_terminated_slice() {
            Ok(string) => {
                self.offset += string.len() + 1;
                Ok(Some((offset, string)))
            }
            Err(e) => {
                self.input.empty();
                Err(e)
            }
        }
    }
}

#[cfg(feature = "fallible-iterator")]
impl<'input, Endian> fallible_iterator::FallibleIterator for StringIter<'input, Endian>
where
    Endian: Endianity,
{
    type Item = (usize, EndianSlice<'input, Endian>);
    type Error = Error;

    fn next(&mut self) -> ::core::result::Result<Option<Self::Item>, Self::Error> {
        StringIter::next(self)
    }
}
