//! A zero-copy decoder for the DWARF `.debug_abbrev` and `.debug_info`
//! sections of ELF files.
//!
//! * **Zero-copy:** strings and blocks are references into the original
//!   input buffer. No copies of the input data ever get made.
//!
//! * **Checked:** every read is bounds checked, and malformed input is
//!   reported as an [`Error`](./enum.Error.html) rather than guessed at or
//!   repaired.
//!
//! * **Explicit tree:** each unit's entries are decoded into a flat list in
//!   section order, with each entry's depth and parent recorded, so nesting
//!   never depends on recursion.
//!
//! DWARF versions 2 through 5 are supported, in both the 32- and 64-bit
//! formats.
//!
//! ## Example Usage
//!
//! Print out all of the functions in an ELF file:
//!
//! ```rust,no_run
//! # fn example() -> Result<(), dwarfscan::Error> {
//! # let file_data: Vec<u8> = Vec::new();
//! # let read_file_somehow = || &file_data;
//! let elf = dwarfscan::ElfFile::parse(read_file_somehow())?;
//! // Objects older than DWARF 5 have no `.debug_line_str`.
//! let dwarf = dwarfscan::Dwarf::load(|id| match elf.dwarf_section(id) {
//!     Err(dwarfscan::Error::MissingSection(_)) => {
//!         Ok(dwarfscan::EndianSlice::new(&[], elf.endian()))
//!     }
//!     otherwise => otherwise,
//! })?;
//!
//! // Iterate over all units.
//! let mut iter = dwarf.units();
//! while let Some(header) = iter.next()? {
//!     // Load the abbreviations and decode every entry of this unit.
//!     let unit = dwarf.unit(&header)?;
//!     for entry in unit.entries() {
//!         // If we find an entry for a function, print it.
//!         if entry.tag() == dwarfscan::DW_TAG_subprogram {
//!             if let Some(name) = entry.attr_value(dwarfscan::DW_AT_name) {
//!                 println!("{}", dwarf.attr_string(&name)?.to_string_lossy());
//!             }
//!         }
//!     }
//! }
//! # unreachable!()
//! # }
//! ```
//!
//! ## API Structure
//!
//! * Basic familiarity with DWARF is assumed.
//!
//! * [`ElfFile`](./struct.ElfFile.html) validates the ELF header and section
//! table and hands out the byte ranges of named sections.
//!
//! * Each DWARF section gets its own type:
//!
//!   * [`DebugAbbrev`](./struct.DebugAbbrev.html): The `.debug_abbrev` section.
//!
//!   * [`DebugInfo`](./struct.DebugInfo.html): The `.debug_info` section.
//!
//!   * [`DebugStr`](./struct.DebugStr.html): The `.debug_str` section.
//!
//!   * [`DebugLineStr`](./struct.DebugLineStr.html): The `.debug_line_str`
//!   section.
//!
//! * [`Dwarf`](./struct.Dwarf.html) bundles those sections so that code
//! needing strings does not reach for global state.
//!
//! * Offsets into a section are strongly typed: an offset into `.debug_info` is
//! the [`DebugInfoOffset`](./struct.DebugInfoOffset.html) type, and cannot be
//! used to look up a string in [`DebugStr`](./struct.DebugStr.html).
//!
//! ## Using with `FallibleIterator`
//!
//! The unit header, abbreviation table and string iterators implement
//! `FallibleIterator` when the default `fallible-iterator` feature is enabled:
//!
//! ```
//! # #[cfg(feature = "fallible-iterator")]
//! # fn main() {
//! use fallible_iterator::FallibleIterator;
//! use dwarfscan::{DebugStr, LittleEndian};
//!
//! let debug_str = DebugStr::new(b"a\0bc\0", LittleEndian);
//! let lengths: Vec<usize> = debug_str
//!     .strings()
//!     .map(|(_, string)| Ok(string.len()))
//!     .collect()
//!     .unwrap();
//! assert_eq!(lengths, [1, 2]);
//! # }
//! # #[cfg(not(feature = "fallible-iterator"))]
//! # fn main() {}
//! ```

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
// False positives with `fallible_iterator`.
#![allow(clippy::should_implement_trait)]
// Many false positives involving `continue`.
#![allow(clippy::never_loop)]

mod abbrev;
pub use crate::abbrev::{
    Abbreviation, AbbreviationTableIter, Abbreviations, AttributeSpecification, DebugAbbrev,
};

mod attr;
pub use crate::attr::{parse_attribute, Attribute, AttributeValue};

mod common;
pub use crate::common::*;

pub mod constants;
// For convenience.
pub use crate::constants::*;

mod dwarf;
pub use crate::dwarf::Dwarf;

mod elf;
pub use crate::elf::{ElfFile, SectionHeader};

mod endian_slice;
pub use crate::endian_slice::EndianSlice;

mod endianity;
pub use crate::endianity::{BigEndian, Endianity, LittleEndian, RunTimeEndian};

mod parser;
pub use crate::parser::{Error, ErrorKind, Result};

mod reader;
pub use crate::reader::Reader;

mod str;
pub use crate::str::{DebugLineStr, DebugStr, StringIter};

mod unit;
pub use crate::unit::{
    CompilationUnit, DebugInfo, DebuggingInformationEntry, UnitHeader, UnitHeadersIter, UnitType,
};

#[cfg(test)]
mod test_util;
