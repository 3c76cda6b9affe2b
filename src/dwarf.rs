use crate::abbrev::{Abbreviations, DebugAbbrev};
use crate::attr::AttributeValue;
use crate::common::SectionId;
use crate::endian_slice::EndianSlice;
use crate::endianity::Endianity;
use crate::parser::{Error, Result};
use crate::str::{DebugLineStr, DebugStr};
use crate::unit::{CompilationUnit, DebugInfo, UnitHeader, UnitHeadersIter};

/// The DWARF sections this crate reads, passed around as one value.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dwarf<'input, Endian>
where
    Endian: Endianity,
{
    /// The `.debug_abbrev` section.
    pub debug_abbrev: DebugAbbrev<'input, Endian>,

    /// The `.debug_info` section.
    pub debug_info: DebugInfo<'input, Endian>,

    /// The `.debug_str` section.
    pub debug_str: DebugStr<'input, Endian>,

    /// The `.debug_line_str` section.
    pub debug_line_str: DebugLineStr<'input, Endian>,
}

impl<'input, Endian> Dwarf<'input, Endian>
where
    Endian: Endianity,
{
    /// Try to load the DWARF sections using the given loader function.
    ///
    /// `section` loads a DWARF section from the object file.
    /// It should return an empty section if the section does not exist.
    ///
    /// ```
    /// use dwarfscan::{Dwarf, EndianSlice, LittleEndian, SectionId};
    ///
    /// let dwarf = Dwarf::load(|_id: SectionId| -> Result<_, ()> {
    ///     Ok(EndianSlice::new(&[], LittleEndian))
    /// })
    /// .unwrap();
    /// assert!(dwarf.units().next().unwrap().is_none());
    /// ```
    pub fn load<F, E>(mut section: F) -> ::core::result::Result<Self, E>
    where
        F: FnMut(SectionId) -> ::core::result::Result<EndianSlice<'input, Endian>, E>,
    {
        Ok(Dwarf {
            debug_abbrev: section(SectionId::DebugAbbrev)?.into(),
            debug_info: section(SectionId::DebugInfo)?.into(),
            debug_str: section(SectionId::DebugStr)?.into(),
            debug_line_str: section(SectionId::DebugLineStr)?.into(),
        })
    }

    /// Iterate the unit headers in the `.debug_info` section.
    #[inline]
    pub fn units(&self) -> UnitHeadersIter<'input, Endian> {
        self.debug_info.units()
    }

    /// Parse the abbreviations for a unit.
    #[inline]
    pub fn abbreviations(&self, unit: &UnitHeader<'input, Endian>) -> Result<Abbreviations> {
        unit.abbreviations(&self.debug_abbrev)
    }

    /// Build the entry tree for a unit.
    #[inline]
    pub fn unit(&self, header: &UnitHeader<'input, Endian>) -> Result<CompilationUnit<'input, Endian>> {
        header.parse(&self.debug_abbrev)
    }

    /// Return the string an attribute value refers to.
    ///
    /// Inline `DW_FORM_string` values are returned directly; `DW_FORM_strp`
    /// and `DW_FORM_line_strp` offsets are looked up in their sections and
    /// checked against the section length.
    pub fn attr_string(
        &self,
        value: &AttributeValue<'input, Endian>,
    ) -> Result<EndianSlice<'input, Endian>> {
        match *value {
            AttributeValue::String(string) => Ok(string),
            AttributeValue::DebugStrRef(offset) => self.debug_str.get_str(offset),
            AttributeValue::DebugLineStrRef(offset) => self.debug_line_str.get_str(offset),
            _ => Err(Error::ExpectedStringAttributeValue),
        }
    }
}
