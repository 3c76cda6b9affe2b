//! Functions for parsing DWARF debugging abbreviations.

use std::collections::hash_map;
use std::convert::TryFrom;
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::common::DebugAbbrevOffset;
use crate::constants;
use crate::endian_slice::EndianSlice;
use crate::endianity::Endianity;
use crate::parser::{Error, Result};
use crate::reader::Reader;

/// The `DebugAbbrev` struct represents the abbreviations describing
/// `DebuggingInformationEntry`s' attribute names and forms found in the
/// `.debug_abbrev` section.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebugAbbrev<'input, Endian>
where
    Endian: Endianity,
{
    debug_abbrev_section: EndianSlice<'input, Endian>,
}

impl<'input, Endian> DebugAbbrev<'input, Endian>
where
    Endian: Endianity,
{
    /// Construct a new `DebugAbbrev` instance from the data in the `.debug_abbrev`
    /// section.
    ///
    /// It is the caller's responsibility to read the `.debug_abbrev` section and
    /// present it as a `&[u8]` slice. [`ElfFile`](crate::ElfFile) does that
    /// for ELF files.
    ///
    /// ```
    /// use dwarfscan::{DebugAbbrev, LittleEndian};
    ///
    /// # let buf = [0x00, 0x01, 0x02, 0x03];
    /// # let read_debug_abbrev_section_somehow = || &buf;
    /// let debug_abbrev = DebugAbbrev::new(read_debug_abbrev_section_somehow(), LittleEndian);
    /// ```
    pub fn new(debug_abbrev_section: &'input [u8], endian: Endian) -> Self {
        Self::from(EndianSlice::new(debug_abbrev_section, endian))
    }

    /// Return the size of the section in bytes.
    pub fn len(&self) -> usize {
        self.debug_abbrev_section.len()
    }

    /// Return true if the section is empty.
    pub fn is_empty(&self) -> bool {
        self.debug_abbrev_section.is_empty()
    }

    /// Parse the abbreviations at the given `offset` within this
    /// `.debug_abbrev` section.
    ///
    /// The `offset` should generally be retrieved from a unit header.
    pub fn abbreviations(&self, debug_abbrev_offset: DebugAbbrevOffset) -> Result<Abbreviations> {
        self.table(debug_abbrev_offset).map(|(abbrevs, _)| abbrevs)
    }

    /// Parse the abbreviation table at the given `offset`, and also return
    /// the number of bytes it occupies, including the terminating null code.
    ///
    /// The next table in the section, if any, starts at `offset + len`.
    pub fn table(&self, debug_abbrev_offset: DebugAbbrevOffset) -> Result<(Abbreviations, usize)> {
        let offset = debug_abbrev_offset.0;
        if offset > self.debug_abbrev_section.len() {
            return Err(Error::OffsetOutOfBounds);
        }
        let start = self.debug_abbrev_section.range_from(offset..);
        let mut input = start;
        let abbrevs = Abbreviations::parse(&mut input)?;
        let len = start.len() - input.len();
        debug!(
            offset,
            len,
            count = abbrevs.len(),
            "parsed abbreviation table"
        );
        Ok((abbrevs, len))
    }

    /// Iterate over every abbreviation table in the section, assuming they
    /// are stored back to back starting at offset 0.
    pub fn tables(&self) -> AbbreviationTableIter<'input, Endian> {
        AbbreviationTableIter {
            debug_abbrev: *self,
            offset: 0,
        }
    }
}

impl<'input, Endian> From<EndianSlice<'input, Endian>> for DebugAbbrev<'input, Endian>
where
    Endian: Endianity,
{
    fn from(debug_abbrev_section: EndianSlice<'input, Endian>) -> Self {
        DebugAbbrev {
            debug_abbrev_section,
        }
    }
}

/// An iterator over the abbreviation tables of a `.debug_abbrev` section.
///
/// Iteration stops after the first error.
#[derive(Debug, Clone)]
pub struct AbbreviationTableIter<'input, Endian>
where
    Endian: Endianity,
{
    debug_abbrev: DebugAbbrev<'input, Endian>,
    offset: usize,
}

impl<'input, Endian> AbbreviationTableIter<'input, Endian>
where
    Endian: Endianity,
{
    /// Advance the iterator and return the next table with its offset.
    ///
    /// Returns `Ok(None)` when the end of the section is reached.
    pub fn next(&mut self) -> Result<Option<(DebugAbbrevOffset, Abbreviations)>> {
        if self.offset >= self.debug_abbrev.len() {
            return Ok(None);
        }
        let offset = DebugAbbrevOffset(self.offset);
        match self.debug_abbrev.table(offset) {
            Ok((abbrevs, len)) => {
                self.offset += len;
                Ok(Some((offset, abbrevs)))
            }
            Err(e) => {
                self.offset = self.debug_abbrev.len();
                Err(e)
            }
        }
    }
}

#[cfg(feature = "fallible-iterator")]
impl<'input, Endian> fallible_iterator::FallibleIterator for AbbreviationTableIter<'input, Endian>
where
    Endian: Endianity,
{
    type Item = (DebugAbbrevOffset, Abbreviations);
    type Error = Error;

    fn next(&mut self) -> ::core::result::Result<Option<Self::Item>, Self::Error> {
        AbbreviationTableIter::next(self)
    }
}

/// A set of type abbreviations.
///
/// Construct an `Abbreviations` instance with the
/// [`abbreviations()`](struct.DebugAbbrev.html#method.abbreviations)
/// method.
///
/// Abbreviations are kept in the order they appear in the section.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Abbreviations {
    vec: Vec<Abbreviation>,
    map: HashMap<u64, usize>,
}

impl Abbreviations {
    /// Construct a new, empty set of abbreviations.
    fn empty() -> Abbreviations {
        Abbreviations::default()
    }

    /// Insert an abbreviation into the set.
    ///
    /// Returns `Ok` if it is the first abbreviation in the set with its code,
    /// `Err` if the code is a duplicate and there already exists an
    /// abbreviation in the set with the given abbreviation's code.
    fn insert(&mut self, abbrev: Abbreviation) -> ::core::result::Result<(), ()> {
        match self.map.entry(abbrev.code) {
            hash_map::Entry::Occupied(_) => Err(()),
            hash_map::Entry::Vacant(entry) => {
                entry.insert(self.vec.len());
                self.vec.push(abbrev);
                Ok(())
            }
        }
    }

    /// Get the abbreviation associated with the given code.
    #[inline]
    pub fn get(&self, code: u64) -> Option<&Abbreviation> {
        self.map.get(&code).map(|&index| &self.vec[index])
    }

    /// Iterate over the abbreviations in section order.
    pub fn iter(&self) -> std::slice::Iter<'_, Abbreviation> {
        self.vec.iter()
    }

    /// Return the number of abbreviations in the set.
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    /// Return true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Parse a series of abbreviations, terminated by a null abbreviation.
    ///
    /// On success `input` is left just past the null abbreviation code.
    fn parse<R: Reader>(input: &mut R) -> Result<Abbreviations> {
        let mut abbrevs = Abbreviations::empty();

        while let Some(abbrev) = Abbreviation::parse(input)? {
            let code = abbrev.code;
            if abbrevs.insert(abbrev).is_err() {
                return Err(Error::DuplicateAbbreviationCode(code));
            }
        }

        Ok(abbrevs)
    }
}

impl<'a> IntoIterator for &'a Abbreviations {
    type Item = &'a Abbreviation;
    type IntoIter = std::slice::Iter<'a, Abbreviation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An abbreviation describes the shape of a `DebuggingInformationEntry`'s type:
/// its code, tag type, whether it has children, and its set of attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abbreviation {
    code: u64,
    tag: constants::DwTag,
    has_children: constants::DwChildren,
    attributes: Vec<AttributeSpecification>,
}

impl Abbreviation {
    /// Construct a new `Abbreviation`.
    ///
    /// ### Panics
    ///
    /// Panics if `code` is `0`.
    pub fn new(
        code: u64,
        tag: constants::DwTag,
        has_children: constants::DwChildren,
        attributes: Vec<AttributeSpecification>,
    ) -> Abbreviation {
        assert_ne!(code, 0);
        Abbreviation {
            code,
            tag,
            has_children,
            attributes,
        }
    }

    /// Get this abbreviation's code.
    #[inline]
    pub fn code(&self) -> u64 {
        self.code
    }

    /// Get this abbreviation's tag.
    #[inline]
    pub fn tag(&self) -> constants::DwTag {
        self.tag
    }

    /// Return true if this abbreviation's type has children, false otherwise.
    #[inline]
    pub fn has_children(&self) -> bool {
        self.has_children == constants::DW_CHILDREN_yes
    }

    /// Get this abbreviation's attributes.
    #[inline]
    pub fn attributes(&self) -> &[AttributeSpecification] {
        &self.attributes[..]
    }

    /// Parse an abbreviation's tag.
    fn parse_tag<R: Reader>(input: &mut R) -> Result<constants::DwTag> {
        let val = input.read_uleb128()?;
        if val == 0 {
            return Err(Error::AbbreviationTagZero);
        }
        let tag = u16::try_from(val).map_err(|_| Error::TagOutOfRange(val))?;
        Ok(constants::DwTag(tag))
    }

    /// Parse an abbreviation's "does the type have children?" byte.
    fn parse_has_children<R: Reader>(input: &mut R) -> Result<constants::DwChildren> {
        let val = constants::DwChildren(input.read_u8()?);
        if val == constants::DW_CHILDREN_no || val == constants::DW_CHILDREN_yes {
            Ok(val)
        } else {
            Err(Error::InvalidAbbreviationChildren(val))
        }
    }

    /// Parse a series of attribute specifications, terminated by a null attribute
    /// specification.
    fn parse_attributes<R: Reader>(input: &mut R) -> Result<Vec<AttributeSpecification>> {
        let mut attrs = Vec::new();

        while let Some(attr) = AttributeSpecification::parse(input)? {
            attrs.push(attr);
        }

        Ok(attrs)
    }

    /// Parse an abbreviation. Return `None` for the null abbreviation.
    fn parse<R: Reader>(input: &mut R) -> Result<Option<Abbreviation>> {
        let code = input.read_uleb128()?;
        if code == 0 {
            return Ok(None);
        }

        let tag = Self::parse_tag(input)?;
        let has_children = Self::parse_has_children(input)?;
        let attributes = Self::parse_attributes(input)?;
        trace!(code, %tag, "parsed abbreviation");
        let abbrev = Abbreviation::new(code, tag, has_children, attributes);
        Ok(Some(abbrev))
    }
}

/// The description of an attribute in an abbreviated type. It is a pair of name
/// and form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpecification {
    name: constants::DwAt,
    form: constants::DwForm,
    implicit_const_value: i64,
}

impl AttributeSpecification {
    /// Construct a new `AttributeSpecification` from the given name and form
    /// and implicit const value.
    #[inline]
    pub fn new(
        name: constants::DwAt,
        form: constants::DwForm,
        implicit_const_value: Option<i64>,
    ) -> AttributeSpecification {
        debug_assert!(
            (form == constants::DW_FORM_implicit_const && implicit_const_value.is_some())
                || (form != constants::DW_FORM_implicit_const && implicit_const_value.is_none())
        );
        AttributeSpecification {
            name,
            form,
            implicit_const_value: implicit_const_value.unwrap_or(0),
        }
    }

    /// Get the attribute's name.
    #[inline]
    pub fn name(&self) -> constants::DwAt {
        self.name
    }

    /// Get the attribute's form.
    #[inline]
    pub fn form(&self) -> constants::DwForm {
        self.form
    }

    /// Get the attribute's implicit const value.
    #[inline]
    pub fn implicit_const_value(&self) -> Option<i64> {
        if self.form == constants::DW_FORM_implicit_const {
            Some(self.implicit_const_value)
        } else {
            None
        }
    }

    /// Parse an attribute specification. Returns `None` for the null attribute
    /// specification, `Some` for an actual attribute specification.
    fn parse<R: Reader>(input: &mut R) -> Result<Option<AttributeSpecification>> {
        let name = input.read_uleb128()?;
        let form = input.read_uleb128()?;
        match (name, form) {
            (0, 0) => return Ok(None),
            (0, _) => return Err(Error::AttributeNameZero),
            (_, 0) => return Err(Error::AttributeFormZero),
            _ => {}
        }
        let name = u16::try_from(name)
            .map(constants::DwAt)
            .map_err(|_| Error::AttributeNameOutOfRange(name))?;
        let form = u16::try_from(form)
            .map(constants::DwForm)
            .map_err(|_| Error::FormOutOfRange(form))?;
        let implicit_const_value = if form == constants::DW_FORM_implicit_const {
            Some(input.read_sleb128()?)
        } else {
            None
        };
        Ok(Some(AttributeSpecification::new(
            name,
            form,
            implicit_const_value,
        )))
    }
}
