//! The error type shared by every parser in this crate.

use std::error;
use std::fmt;
use std::result;

use crate::constants;

/// An error that occurred when locating or parsing debugging information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred while reading.
    Io,
    /// An error parsing an unsigned LEB128 value.
    BadUnsignedLeb128,
    /// An error parsing a signed LEB128 value.
    BadSignedLeb128,
    /// An abbreviation declared that its tag is zero, but zero is reserved for
    /// null records.
    AbbreviationTagZero,
    /// An attribute specification declared that its name is zero, but zero is
    /// reserved for null records.
    AttributeNameZero,
    /// An attribute specification declared that its form is zero, but zero is
    /// reserved for null records.
    AttributeFormZero,
    /// The abbreviation's has-children byte was not one of
    /// `DW_CHILDREN_{yes,no}`.
    InvalidAbbreviationChildren(constants::DwChildren),
    /// Found an abbreviation code that has already been used in the same
    /// table.
    DuplicateAbbreviationCode(u64),
    /// Found an unknown or unsupported `DW_FORM_*` type.
    UnknownForm(constants::DwForm),
    /// An abbreviation tag does not fit in 16 bits.
    TagOutOfRange(u64),
    /// An attribute name does not fit in 16 bits.
    AttributeNameOutOfRange(u64),
    /// An attribute form does not fit in 16 bits.
    FormOutOfRange(u64),
    /// `DW_FORM_indirect` named `DW_FORM_implicit_const`, whose value can only
    /// be given by an abbreviation.
    IndirectImplicitConst,
    /// Found an unknown reserved length value.
    UnknownReservedLength(u32),
    /// Found an unknown DWARF version.
    UnknownVersion(u64),
    /// Found an unknown DWARF 5 unit type.
    UnknownUnitType(constants::DwUt),
    /// The unit header's address size is neither 4 nor 8.
    UnsupportedAddressSize(u8),
    /// A unit's length runs past the end of the `.debug_info` section.
    UnitLengthOutOfBounds(u64),
    /// Found an entry whose abbreviation code is not in the unit's table.
    InvalidAbbreviationCode(u64),
    /// Found a null entry while no entry had open children.
    UnexpectedNullEntry,
    /// The last open scope was closed before the end of the unit.
    TrailingEntries,
    /// The unit ended with this many scopes still open.
    UnclosedEntries(usize),
    /// The end of the input was reached before parsing was complete.
    UnexpectedEof,
    /// An offset value was larger than the maximum supported value.
    UnsupportedOffset,
    /// A string was not valid UTF-8.
    BadUtf8,
    /// An offset points past the end of the section it refers to.
    OffsetOutOfBounds,
    /// Expected an attribute value to be a string form.
    ExpectedStringAttributeValue,
    /// The file is smaller than an ELF file header.
    TooSmallForElf,
    /// The file does not start with the ELF magic bytes.
    BadElfMagic,
    /// The ELF class is neither `ELFCLASS32` nor `ELFCLASS64`.
    UnsupportedElfClass(u8),
    /// The ELF data encoding is neither `ELFDATA2LSB` nor `ELFDATA2MSB`.
    UnsupportedElfDataEncoding(u8),
    /// The ELF identification version is not `EV_CURRENT`.
    UnsupportedElfVersion(u8),
    /// The ELF file header could not be read.
    BadElfHeader,
    /// The ELF header claims to be smaller than it is.
    BadElfHeaderSize(u16),
    /// The section header table does not fit in the file, or its entry size
    /// is not the size of a section header.
    BadSectionTable,
    /// The section name table index is not a valid section index.
    BadSectionNameTableIndex(u16),
    /// The section name table is not of type `SHT_STRTAB`.
    BadSectionNameTableType(u32),
    /// A section's data does not fit in the file.
    SectionOutOfBounds {
        /// The section's file offset.
        offset: u64,
        /// The section's size.
        size: u64,
    },
    /// A required section is not present.
    MissingSection(&'static str),
}

/// The broad class of an [`Error`], which decides how much work a caller
/// abandons when it sees one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The file is not an ELF file this crate can read. The whole file is
    /// skipped.
    Format,
    /// Section geometry is inconsistent with the file, or a section is
    /// missing. Only the work needing that section is skipped.
    Structural,
    /// A debugging information byte stream is truncated or contradicts
    /// itself. The current unit or table is abandoned.
    Stream,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::TooSmallForElf
            | Error::BadElfMagic
            | Error::UnsupportedElfClass(_)
            | Error::UnsupportedElfDataEncoding(_)
            | Error::UnsupportedElfVersion(_)
            | Error::BadElfHeader
            | Error::BadElfHeaderSize(_) => ErrorKind::Format,
            Error::BadSectionTable
            | Error::BadSectionNameTableIndex(_)
            | Error::BadSectionNameTableType(_)
            | Error::SectionOutOfBounds { .. }
            | Error::MissingSection(_) => ErrorKind::Structural,
            _ => ErrorKind::Stream,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> result::Result<(), fmt::Error> {
        match *self {
            Error::Io => write!(f, "I/O error"),
            Error::BadUnsignedLeb128 => write!(f, "unsigned LEB128 overflow"),
            Error::BadSignedLeb128 => write!(f, "signed LEB128 overflow"),
            Error::AbbreviationTagZero => write!(f, "invalid abbreviation tag: zero"),
            Error::AttributeNameZero => write!(f, "invalid attribute name: zero"),
            Error::AttributeFormZero => write!(f, "invalid attribute form: zero"),
            Error::InvalidAbbreviationChildren(val) => {
                write!(f, "invalid abbreviation children: {}", val.0)
            }
            Error::DuplicateAbbreviationCode(val) => {
                write!(f, "duplicate abbreviation code: {}", val)
            }
            Error::UnknownForm(val) => write!(f, "unknown form: 0x{:x}", val.0),
            Error::TagOutOfRange(val) => write!(f, "tag out of range: 0x{:x}", val),
            Error::AttributeNameOutOfRange(val) => {
                write!(f, "attribute name out of range: 0x{:x}", val)
            }
            Error::FormOutOfRange(val) => write!(f, "form out of range: 0x{:x}", val),
            Error::IndirectImplicitConst => {
                write!(f, "DW_FORM_indirect cannot name DW_FORM_implicit_const")
            }
            Error::UnknownReservedLength(val) => {
                write!(f, "unknown reserved length: 0x{:x}", val)
            }
            Error::UnknownVersion(val) => write!(f, "unknown DWARF version: {}", val),
            Error::UnknownUnitType(val) => write!(f, "unknown unit type: 0x{:x}", val.0),
            Error::UnsupportedAddressSize(val) => {
                write!(f, "unsupported address size: {}", val)
            }
            Error::UnitLengthOutOfBounds(val) => {
                write!(f, "unit length {} exceeds the section", val)
            }
            Error::InvalidAbbreviationCode(val) => {
                write!(f, "invalid abbreviation code: {}", val)
            }
            Error::UnexpectedNullEntry => write!(f, "null entry without an open scope"),
            Error::TrailingEntries => write!(f, "entries after the root scope was closed"),
            Error::UnclosedEntries(val) => write!(f, "unit ended with {} open scopes", val),
            Error::UnexpectedEof => write!(f, "unexpected end of input"),
            Error::UnsupportedOffset => write!(f, "offset overflow"),
            Error::BadUtf8 => write!(f, "invalid UTF-8"),
            Error::OffsetOutOfBounds => write!(f, "offset is out of bounds"),
            Error::ExpectedStringAttributeValue => {
                write!(f, "expected a string attribute value")
            }
            Error::TooSmallForElf => write!(f, "file too small to be ELF"),
            Error::BadElfMagic => write!(f, "not an ELF file"),
            Error::UnsupportedElfClass(val) => write!(f, "unsupported ELF class: {}", val),
            Error::UnsupportedElfDataEncoding(val) => {
                write!(f, "unsupported ELF data encoding: {}", val)
            }
            Error::UnsupportedElfVersion(val) => write!(f, "unsupported ELF version: {}", val),
            Error::BadElfHeader => write!(f, "invalid ELF header"),
            Error::BadElfHeaderSize(val) => write!(f, "invalid ELF header size: {}", val),
            Error::BadSectionTable => write!(f, "invalid section header table"),
            Error::BadSectionNameTableIndex(val) => {
                write!(f, "invalid section name table index: {}", val)
            }
            Error::BadSectionNameTableType(val) => {
                write!(f, "invalid section name table type: {}", val)
            }
            Error::SectionOutOfBounds { offset, size } => write!(
                f,
                "section at offset 0x{:x} with size 0x{:x} is out of bounds",
                offset, size
            ),
            Error::MissingSection(name) => write!(f, "{} section not found", name),
        }
    }
}

impl error::Error for Error {}

/// The result of a parse.
pub type Result<T> = result::Result<T, Error>;

/// Convert a `u64` to a `usize` and return it.
#[inline]
pub fn u64_to_offset(offset64: u64) -> Result<usize> {
    let offset = offset64 as usize;
    if offset as u64 == offset64 {
        Ok(offset)
    } else {
        Err(Error::UnsupportedOffset)
    }
}
