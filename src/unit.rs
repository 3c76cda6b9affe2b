//! Functions for parsing DWARF `.debug_info` units and building their
//! `DebuggingInformationEntry` trees.

use tracing::{debug, trace};

use crate::abbrev::{Abbreviations, DebugAbbrev};
use crate::attr::{parse_attribute, Attribute, AttributeValue};
use crate::common::{
    DebugAbbrevOffset, DebugInfoOffset, DebugTypeSignature, Encoding, Format, UnitOffset,
};
use crate::constants;
use crate::endian_slice::EndianSlice;
use crate::endianity::Endianity;
use crate::parser::{u64_to_offset, Error, Result};
use crate::reader::Reader;

/// The `DebugInfo` struct represents the DWARF debugging information found in
/// the `.debug_info` section.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebugInfo<'input, Endian>
where
    Endian: Endianity,
{
    debug_info_section: EndianSlice<'input, Endian>,
}

impl<'input, Endian> DebugInfo<'input, Endian>
where
    Endian: Endianity,
{
    /// Construct a new `DebugInfo` instance from the data in the `.debug_info`
    /// section.
    ///
    /// It is the caller's responsibility to read the `.debug_info` section and
    /// present it as a `&[u8]` slice.
    ///
    /// ```
    /// use dwarfscan::{DebugInfo, LittleEndian};
    ///
    /// # let buf = [0x00, 0x01, 0x02, 0x03];
    /// # let read_debug_info_section_somehow = || &buf;
    /// let debug_info = DebugInfo::new(read_debug_info_section_somehow(), LittleEndian);
    /// ```
    pub fn new(debug_info_section: &'input [u8], endian: Endian) -> Self {
        Self::from(EndianSlice::new(debug_info_section, endian))
    }

    /// Iterate the units in this `.debug_info` section.
    ///
    /// ```
    /// use dwarfscan::{DebugInfo, LittleEndian};
    ///
    /// # let buf: [u8; 0] = [];
    /// # let read_debug_info_section_somehow = || &buf;
    /// let debug_info = DebugInfo::new(read_debug_info_section_somehow(), LittleEndian);
    ///
    /// let mut iter = debug_info.units();
    /// while let Some(unit) = iter.next().unwrap() {
    ///     println!("unit's length is {}", unit.unit_length());
    /// }
    /// ```
    pub fn units(&self) -> UnitHeadersIter<'input, Endian> {
        UnitHeadersIter {
            input: self.debug_info_section,
            offset: DebugInfoOffset(0),
        }
    }

    /// Get the `UnitHeader` located at offset from this `.debug_info` section.
    pub fn header_from_offset(&self, offset: DebugInfoOffset) -> Result<UnitHeader<'input, Endian>> {
        if offset.0 > self.debug_info_section.len() {
            return Err(Error::OffsetOutOfBounds);
        }
        let input = &mut self.debug_info_section.range_from(offset.0..);
        parse_unit_header(input, offset)
    }

    /// Parse every unit in the section and build its entry tree.
    ///
    /// Fails with the first error encountered; no partial result is returned.
    pub fn compilation_units(
        &self,
        debug_abbrev: &DebugAbbrev<'input, Endian>,
    ) -> Result<Vec<CompilationUnit<'input, Endian>>> {
        let mut units = Vec::new();
        let mut iter = self.units();
        while let Some(header) = iter.next()? {
            units.push(header.parse(debug_abbrev)?);
        }
        Ok(units)
    }
}

impl<'input, Endian> From<EndianSlice<'input, Endian>> for DebugInfo<'input, Endian>
where
    Endian: Endianity,
{
    fn from(debug_info_section: EndianSlice<'input, Endian>) -> Self {
        DebugInfo { debug_info_section }
    }
}

/// An iterator over the units of a `.debug_info` section.
///
/// See the [documentation on
/// `DebugInfo::units`](./struct.DebugInfo.html#method.units) for more detail.
#[derive(Clone, Debug)]
pub struct UnitHeadersIter<'input, Endian>
where
    Endian: Endianity,
{
    input: EndianSlice<'input, Endian>,
    offset: DebugInfoOffset,
}

impl<'input, Endian> UnitHeadersIter<'input, Endian>
where
    Endian: Endianity,
{
    /// Advance the iterator to the next unit header.
    ///
    /// After an error, the iterator is exhausted.
    pub fn next(&mut self) -> Result<Option<UnitHeader<'input, Endian>>> {
        if self.input.is_empty() {
            Ok(None)
        } else {
            let len = self.input.len();
            match parse_unit_header(&mut self.input, self.offset) {
                Ok(header) => {
                    self.offset.0 += len - self.input.len();
                    Ok(Some(header))
                }
                Err(e) => {
                    self.input.empty();
                    Err(e)
                }
            }
        }
    }
}

#[cfg(feature = "fallible-iterator")]
impl<'input, Endian> fallible_iterator::FallibleIterator for UnitHeadersIter<'input, Endian>
where
    Endian: Endianity,
{
    type Item = UnitHeader<'input, Endian>;
    type Error = Error;

    fn next(&mut self) -> ::core::result::Result<Option<Self::Item>, Self::Error> {
        UnitHeadersIter::next(self)
    }
}

/// This enum specifies the type of the unit and any type
/// specific data carried in the header (e.g. the type
/// signature/type offset of a type unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitType {
    /// In DWARF5, a unit with type `DW_UT_compile`. In previous DWARF versions,
    /// any unit appearing in the .debug_info section.
    Compilation,
    /// In DWARF5, a unit with type `DW_UT_type`.
    Type {
        /// The unique type signature for this type unit.
        type_signature: DebugTypeSignature,
        /// The offset within this type unit where the type is defined.
        type_offset: UnitOffset,
    },
    /// A unit with type `DW_UT_partial`.
    Partial,
    /// A unit with type `DW_UT_skeleton`. The enclosed dwo_id can be used to
    /// link this with the corresponding `SplitCompilation` unit in a dwo file.
    Skeleton(u64),
    /// A unit with type `DW_UT_split_compile`. The enclosed dwo_id can be used to
    /// link this with the corresponding `Skeleton` unit in the original binary.
    SplitCompilation(u64),
    /// A type unit with type `DW_UT_split_type`.
    SplitType {
        /// The unique type signature for this type unit.
        type_signature: DebugTypeSignature,
        /// The offset within this type unit where the type is defined.
        type_offset: UnitOffset,
    },
}

impl UnitType {
    /// Return the `DW_UT_*` constant for this unit type.
    pub fn dw_ut(&self) -> constants::DwUt {
        match self {
            UnitType::Compilation => constants::DW_UT_compile,
            UnitType::Type { .. } => constants::DW_UT_type,
            UnitType::Partial => constants::DW_UT_partial,
            UnitType::Skeleton(_) => constants::DW_UT_skeleton,
            UnitType::SplitCompilation(_) => constants::DW_UT_split_compile,
            UnitType::SplitType { .. } => constants::DW_UT_split_type,
        }
    }
}

/// The common fields for the headers of compilation units and
/// type units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitHeader<'input, Endian>
where
    Endian: Endianity,
{
    encoding: Encoding,
    unit_length: u64,
    unit_type: UnitType,
    debug_abbrev_offset: DebugAbbrevOffset,
    unit_offset: DebugInfoOffset,
    header_size: usize,
    entries_buf: EndianSlice<'input, Endian>,
}

impl<'input, Endian> UnitHeader<'input, Endian>
where
    Endian: Endianity,
{
    /// Get the offset of this unit within its section.
    pub fn offset(&self) -> DebugInfoOffset {
        self.unit_offset
    }

    /// Get the length of the debugging info for this compilation unit, not
    /// including the byte length of the encoded length itself.
    pub fn unit_length(&self) -> u64 {
        self.unit_length
    }

    /// Get the length of the debugging info for this compilation unit,
    /// including the byte length of the encoded length itself.
    pub fn length_including_self(&self) -> u64 {
        u64::from(self.format().initial_length_size()) + self.unit_length
    }

    /// Return the section offset just past the end of this unit, which is
    /// where the next unit's header starts.
    pub fn end_offset(&self) -> DebugInfoOffset {
        DebugInfoOffset(self.unit_offset.0 + self.header_size + self.entries_buf.len())
    }

    /// Return the encoding parameters for this unit.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Get the DWARF version of the debugging info for this compilation unit.
    pub fn version(&self) -> u16 {
        self.encoding.version
    }

    /// Get the unit type, with any type specific header fields.
    pub fn unit_type(&self) -> UnitType {
        self.unit_type
    }

    /// The offset into the `.debug_abbrev` section for this compilation unit's
    /// debugging information entries' abbreviations.
    pub fn debug_abbrev_offset(&self) -> DebugAbbrevOffset {
        self.debug_abbrev_offset
    }

    /// The size of addresses (in bytes) in this compilation unit.
    pub fn address_size(&self) -> u8 {
        self.encoding.address_size
    }

    /// Whether this compilation unit is encoded in 64- or 32-bit DWARF.
    pub fn format(&self) -> Format {
        self.encoding.format
    }

    /// The serialized size of the header, up to the first entry.
    pub fn header_size(&self) -> usize {
        self.header_size
    }

    /// The raw bytes of this unit's entries.
    pub fn entries_buf(&self) -> EndianSlice<'input, Endian> {
        self.entries_buf
    }

    /// Parse this unit's abbreviations.
    pub fn abbreviations(&self, debug_abbrev: &DebugAbbrev<'input, Endian>) -> Result<Abbreviations> {
        debug_abbrev.abbreviations(self.debug_abbrev_offset)
    }

    /// Load this unit's abbreviations and build its entry tree.
    pub fn parse(
        &self,
        debug_abbrev: &DebugAbbrev<'input, Endian>,
    ) -> Result<CompilationUnit<'input, Endian>> {
        let abbreviations = self.abbreviations(debug_abbrev)?;
        let entries = parse_entries(self, &abbreviations)?;
        Ok(CompilationUnit {
            header: *self,
            abbreviations,
            entries,
        })
    }
}

/// Parse a unit header.
fn parse_unit_header<'input, Endian>(
    input: &mut EndianSlice<'input, Endian>,
    unit_offset: DebugInfoOffset,
) -> Result<UnitHeader<'input, Endian>>
where
    Endian: Endianity,
{
    let (unit_length, format) = input.read_initial_length()?;
    if unit_length > input.len() as u64 {
        return Err(Error::UnitLengthOutOfBounds(unit_length));
    }
    let unit_len = u64_to_offset(unit_length)?;
    let mut rest = input.split(unit_len)?;

    // DWARF 1 was very different, and is obsolete, so isn't supported by this
    // reader.
    let version = rest.read_u16()?;
    if !(2..=5).contains(&version) {
        return Err(Error::UnknownVersion(u64::from(version)));
    }

    let unit_type;
    let address_size;
    let debug_abbrev_offset;
    if version >= 5 {
        unit_type = constants::DwUt(rest.read_u8()?);
        address_size = rest.read_u8()?;
        debug_abbrev_offset = DebugAbbrevOffset(rest.read_offset(format)?);
    } else {
        debug_abbrev_offset = DebugAbbrevOffset(rest.read_offset(format)?);
        address_size = rest.read_u8()?;
        unit_type = constants::DW_UT_compile;
    }

    if address_size != 4 && address_size != 8 {
        return Err(Error::UnsupportedAddressSize(address_size));
    }

    let unit_type = match unit_type {
        constants::DW_UT_compile => UnitType::Compilation,
        constants::DW_UT_type => UnitType::Type {
            type_signature: DebugTypeSignature(rest.read_u64()?),
            type_offset: UnitOffset(rest.read_offset(format)?),
        },
        constants::DW_UT_partial => UnitType::Partial,
        constants::DW_UT_skeleton => UnitType::Skeleton(rest.read_u64()?),
        constants::DW_UT_split_compile => UnitType::SplitCompilation(rest.read_u64()?),
        constants::DW_UT_split_type => UnitType::SplitType {
            type_signature: DebugTypeSignature(rest.read_u64()?),
            type_offset: UnitOffset(rest.read_offset(format)?),
        },
        otherwise => return Err(Error::UnknownUnitType(otherwise)),
    };

    let header_size = usize::from(format.initial_length_size()) + unit_len - rest.len();
    let encoding = Encoding {
        address_size,
        format,
        version,
    };
    debug!(
        offset = unit_offset.0,
        unit_length,
        version,
        address_size,
        abbrev_offset = debug_abbrev_offset.0,
        "parsed unit header"
    );
    Ok(UnitHeader {
        encoding,
        unit_length,
        unit_type,
        debug_abbrev_offset,
        unit_offset,
        header_size,
        entries_buf: rest,
    })
}

/// A unit whose entries have all been decoded.
///
/// The entries are kept in the order they appear in the section, which is a
/// depth-first preorder walk of the tree. Each entry records its depth and
/// the index of its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit<'input, Endian>
where
    Endian: Endianity,
{
    header: UnitHeader<'input, Endian>,
    abbreviations: Abbreviations,
    entries: Vec<DebuggingInformationEntry<'input, Endian>>,
}

impl<'input, Endian> CompilationUnit<'input, Endian>
where
    Endian: Endianity,
{
    /// The header of this unit.
    pub fn header(&self) -> &UnitHeader<'input, Endian> {
        &self.header
    }

    /// The abbreviations this unit's entries were decoded with.
    pub fn abbreviations(&self) -> &Abbreviations {
        &self.abbreviations
    }

    /// All entries in section order.
    pub fn entries(&self) -> &[DebuggingInformationEntry<'input, Endian>] {
        &self.entries
    }

    /// The entry at `index` in section order.
    pub fn entry(&self, index: usize) -> Option<&DebuggingInformationEntry<'input, Endian>> {
        self.entries.get(index)
    }

    /// The entries at depth 0. This is normally a single unit entry.
    pub fn roots<'a>(
        &'a self,
    ) -> impl Iterator<Item = &'a DebuggingInformationEntry<'input, Endian>> + 'a {
        self.entries.iter().filter(|entry| entry.depth == 0)
    }

    /// The direct children of the entry at `index`.
    pub fn children<'a>(
        &'a self,
        index: usize,
    ) -> impl Iterator<Item = &'a DebuggingInformationEntry<'input, Endian>> + 'a {
        let depth = self.entries.get(index).map_or(0, |entry| entry.depth);
        let start = (index + 1).min(self.entries.len());
        self.entries[start..]
            .iter()
            .take_while(move |entry| entry.depth > depth)
            .filter(move |entry| entry.parent == Some(index))
    }

    /// Find the index of the entry starting at the given section offset.
    pub fn index_of(&self, offset: DebugInfoOffset) -> Option<usize> {
        self.entries
            .binary_search_by_key(&offset, |entry| entry.offset)
            .ok()
    }

    /// Find the entry starting at the given section offset.
    pub fn entry_at(&self, offset: DebugInfoOffset) -> Option<&DebuggingInformationEntry<'input, Endian>> {
        self.index_of(offset).map(|index| &self.entries[index])
    }

    /// Find the entry of this unit that a reference value points at.
    ///
    /// Unit-relative references are offset by the unit's start. Returns
    /// `None` for values that are not references or that do not land on the
    /// start of an entry in this unit.
    pub fn resolve_reference(
        &self,
        value: &AttributeValue<'input, Endian>,
    ) -> Option<&DebuggingInformationEntry<'input, Endian>> {
        let offset = match *value {
            AttributeValue::UnitRef(UnitOffset(offset)) => {
                DebugInfoOffset(self.header.offset().0.checked_add(offset)?)
            }
            AttributeValue::DebugInfoRef(offset) => offset,
            _ => return None,
        };
        self.entry_at(offset)
    }
}

/// A Debugging Information Entry (DIE).
///
/// The DIE is the fundamental unit of debugging information in DWARF. Each
/// DIE has a tag, a set of attributes, and zero or more children entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebuggingInformationEntry<'input, Endian>
where
    Endian: Endianity,
{
    offset: DebugInfoOffset,
    depth: usize,
    code: u64,
    tag: constants::DwTag,
    has_children: bool,
    parent: Option<usize>,
    attrs: Vec<Attribute<'input, Endian>>,
}

impl<'input, Endian> DebuggingInformationEntry<'input, Endian>
where
    Endian: Endianity,
{
    /// Get this entry's section offset, which is the offset of its
    /// abbreviation code.
    pub fn offset(&self) -> DebugInfoOffset {
        self.offset
    }

    /// Get the nesting depth of this entry. Root entries have depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Get this entry's abbreviation code.
    pub fn code(&self) -> u64 {
        self.code
    }

    /// Get this entry's `DW_TAG_whatever` tag.
    pub fn tag(&self) -> constants::DwTag {
        self.tag
    }

    /// Return true if this entry's type can have children, false otherwise.
    pub fn has_children(&self) -> bool {
        self.has_children
    }

    /// Get the index of this entry's parent within its unit.
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Get this entry's attributes, in abbreviation order.
    pub fn attrs(&self) -> &[Attribute<'input, Endian>] {
        &self.attrs
    }

    /// Find the first attribute in this entry which has the given name.
    pub fn attr(&self, name: constants::DwAt) -> Option<&Attribute<'input, Endian>> {
        self.attrs.iter().find(|attr| attr.name() == name)
    }

    /// Find the first attribute in this entry which has the given name,
    /// and return its value.
    pub fn attr_value(&self, name: constants::DwAt) -> Option<AttributeValue<'input, Endian>> {
        self.attr(name).map(Attribute::value)
    }
}

/// Decode every entry of a unit, tracking open scopes on an explicit stack.
fn parse_entries<'input, Endian>(
    header: &UnitHeader<'input, Endian>,
    abbreviations: &Abbreviations,
) -> Result<Vec<DebuggingInformationEntry<'input, Endian>>>
where
    Endian: Endianity,
{
    let entries_start = header.unit_offset.0 + header.header_size;
    let encoding = header.encoding;
    let mut input = header.entries_buf;
    let mut entries = Vec::new();
    // Indices of entries whose children are still being read.
    let mut open: Vec<usize> = Vec::new();

    while !input.is_empty() {
        let offset = DebugInfoOffset(entries_start + input.offset_from(header.entries_buf));
        let code = input.read_uleb128()?;
        if code == 0 {
            if open.pop().is_none() {
                return Err(Error::UnexpectedNullEntry);
            }
            if open.is_empty() && !input.is_empty() {
                return Err(Error::TrailingEntries);
            }
            continue;
        }

        let abbrev = abbreviations
            .get(code)
            .ok_or(Error::InvalidAbbreviationCode(code))?;
        let mut attrs = Vec::with_capacity(abbrev.attributes().len());
        for spec in abbrev.attributes() {
            attrs.push(parse_attribute(&mut input, encoding, *spec)?);
        }

        trace!(offset = offset.0, depth = open.len(), code, tag = %abbrev.tag(), "decoded entry");
        let index = entries.len();
        entries.push(DebuggingInformationEntry {
            offset,
            depth: open.len(),
            code,
            tag: abbrev.tag(),
            has_children: abbrev.has_children(),
            parent: open.last().copied(),
            attrs,
        });
        if abbrev.has_children() {
            open.push(index);
        }
    }

    if !open.is_empty() {
        return Err(Error::UnclosedEntries(open.len()));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endianity::LittleEndian;
    use crate::test_util::DwarfSectionMethods;
    use test_assembler::{Endian, Section};

    fn encoding(version: u16, format: Format, address_size: u8) -> Encoding {
        Encoding {
            address_size,
            format,
            version,
        }
    }

    fn abbrev_section() -> Vec<u8> {
        Section::with_endian(Endian::Little)
            .abbrev(1, constants::DW_TAG_compile_unit, constants::DW_CHILDREN_yes)
            .abbrev_attr(constants::DW_AT_name, constants::DW_FORM_string)
            .abbrev_attr(constants::DW_AT_low_pc, constants::DW_FORM_addr)
            .abbrev_attr(constants::DW_AT_language, constants::DW_FORM_data2)
            .abbrev_attr_null()
            .abbrev(2, constants::DW_TAG_base_type, constants::DW_CHILDREN_no)
            .abbrev_attr(constants::DW_AT_name, constants::DW_FORM_string)
            .abbrev_attr(constants::DW_AT_byte_size, constants::DW_FORM_data1)
            .abbrev_attr(constants::DW_AT_encoding, constants::DW_FORM_data1)
            .abbrev_attr_null()
            .abbrev(3, constants::DW_TAG_variable, constants::DW_CHILDREN_no)
            .abbrev_attr(constants::DW_AT_name, constants::DW_FORM_string)
            .abbrev_attr(constants::DW_AT_type, constants::DW_FORM_ref4)
            .abbrev_attr_null()
            .abbrev(4, constants::DW_TAG_subprogram, constants::DW_CHILDREN_yes)
            .abbrev_attr(constants::DW_AT_name, constants::DW_FORM_string)
            .abbrev_attr(constants::DW_AT_external, constants::DW_FORM_flag_present)
            .abbrev_attr_null()
            .abbrev_null()
            .get_contents()
            .unwrap()
    }

    /// A unit entry containing a base type and a function with one local
    /// variable referring to the base type.
    fn entries(header_size: u64, address_size: u8) -> Vec<u8> {
        let base_type_offset = header_size + 1 + 4 + u64::from(address_size) + 2;
        Section::with_endian(Endian::Little)
            .uleb(1)
            .append_bytes(b"a.c\0")
            .word(address_size, 0x1000)
            .D16(constants::DW_LANG_C99.0)
            .uleb(2)
            .append_bytes(b"int\0")
            .D8(4)
            .D8(constants::DW_ATE_signed.0)
            .uleb(4)
            .append_bytes(b"main\0")
            .uleb(3)
            .append_bytes(b"x\0")
            .D32(base_type_offset as u32)
            .D8(0)
            .D8(0)
            .get_contents()
            .unwrap()
    }

    fn unit(encoding: Encoding, entries: &[u8]) -> Vec<u8> {
        Section::with_endian(Endian::Little)
            .comp_unit(encoding, 0, entries)
            .get_contents()
            .unwrap()
    }

    #[test]
    fn test_parse_v4_header() {
        let encoding = encoding(4, Format::Dwarf32, 8);
        let buf = unit(encoding, &entries(11, 8));
        let debug_info = DebugInfo::new(&buf, LittleEndian);

        let header = debug_info.units().next().unwrap().unwrap();
        assert_eq!(header.offset(), DebugInfoOffset(0));
        assert_eq!(header.unit_length(), buf.len() as u64 - 4);
        assert_eq!(header.length_including_self(), buf.len() as u64);
        assert_eq!(header.encoding(), encoding);
        assert_eq!(header.debug_abbrev_offset(), DebugAbbrevOffset(0));
        assert_eq!(header.unit_type(), UnitType::Compilation);
        assert_eq!(header.header_size(), 11);
        assert_eq!(header.end_offset(), DebugInfoOffset(buf.len()));
    }

    #[test]
    fn test_parse_dwarf64_header() {
        let encoding = encoding(4, Format::Dwarf64, 8);
        let buf = unit(encoding, &entries(23, 8));
        let debug_info = DebugInfo::new(&buf, LittleEndian);

        let header = debug_info.units().next().unwrap().unwrap();
        assert_eq!(header.format(), Format::Dwarf64);
        assert_eq!(header.header_size(), 23);
        assert_eq!(header.unit_length(), buf.len() as u64 - 12);

        let debug_abbrev_buf = abbrev_section();
        let debug_abbrev = DebugAbbrev::new(&debug_abbrev_buf, LittleEndian);
        let unit = header.parse(&debug_abbrev).unwrap();
        assert_eq!(unit.entries().len(), 4);
    }

    #[test]
    fn test_parse_v5_header() {
        let encoding = encoding(5, Format::Dwarf32, 4);
        let buf = unit(encoding, &entries(12, 4));
        let debug_info = DebugInfo::new(&buf, LittleEndian);

        let header = debug_info.units().next().unwrap().unwrap();
        assert_eq!(header.version(), 5);
        assert_eq!(header.address_size(), 4);
        assert_eq!(header.unit_type(), UnitType::Compilation);
        assert_eq!(header.header_size(), 12);

        let debug_abbrev_buf = abbrev_section();
        let debug_abbrev = DebugAbbrev::new(&debug_abbrev_buf, LittleEndian);
        let unit = header.parse(&debug_abbrev).unwrap();
        assert_eq!(
            unit.entries()[0].attr_value(constants::DW_AT_low_pc),
            Some(AttributeValue::Addr(0x1000))
        );
    }

    #[test]
    fn test_parse_v5_type_unit_header() {
        let section = Section::with_endian(Endian::Little)
            .D32(2 + 1 + 1 + 4 + 8 + 4)
            .D16(5)
            .D8(constants::DW_UT_type.0)
            .D8(8)
            .D32(0x10)
            .D64(0xdead_beef_0123_4567)
            .D32(0x19);
        let buf = section.get_contents().unwrap();
        let debug_info = DebugInfo::new(&buf, LittleEndian);

        let header = debug_info.units().next().unwrap().unwrap();
        assert_eq!(header.debug_abbrev_offset(), DebugAbbrevOffset(0x10));
        assert_eq!(
            header.unit_type(),
            UnitType::Type {
                type_signature: DebugTypeSignature(0xdead_beef_0123_4567),
                type_offset: UnitOffset(0x19),
            }
        );
        assert_eq!(header.unit_type().dw_ut(), constants::DW_UT_type);
        assert_eq!(header.header_size(), buf.len());
        assert!(header.entries_buf().is_empty());
    }

    #[test]
    fn test_parse_header_errors() {
        fn check(section: Section, expect: Error) {
            let buf = section.get_contents().unwrap();
            let debug_info = DebugInfo::new(&buf, LittleEndian);
            match debug_info.units().next() {
                Err(e) if e == expect => {}
                otherwise => panic!("Unexpected result: {:?}", otherwise),
            };
        }

        // Version 1.
        check(
            Section::with_endian(Endian::Little).D32(7).D16(1).D32(0).D8(4),
            Error::UnknownVersion(1),
        );
        // Version 6.
        check(
            Section::with_endian(Endian::Little).D32(7).D16(6).D32(0).D8(4),
            Error::UnknownVersion(6),
        );
        // Reserved initial length.
        check(
            Section::with_endian(Endian::Little).D32(0xffff_fff0).D16(4),
            Error::UnknownReservedLength(0xffff_fff0),
        );
        // Address size 2.
        check(
            Section::with_endian(Endian::Little).D32(7).D16(4).D32(0).D8(2),
            Error::UnsupportedAddressSize(2),
        );
        // Length runs past the section.
        check(
            Section::with_endian(Endian::Little).D32(100).D16(4).D32(0).D8(4),
            Error::UnitLengthOutOfBounds(100),
        );
        // Length too short for the header.
        check(
            Section::with_endian(Endian::Little).D32(3).D16(4).D8(0),
            Error::UnexpectedEof,
        );
        // Unknown unit type.
        check(
            Section::with_endian(Endian::Little).D32(8).D16(5).D8(0x7f).D8(8).D32(0),
            Error::UnknownUnitType(constants::DwUt(0x7f)),
        );
    }

    #[test]
    fn test_units_stop_after_error() {
        let buf = [0x07, 0x00, 0x00, 0x00, 0x01, 0x00];
        let debug_info = DebugInfo::new(&buf, LittleEndian);
        let mut iter = debug_info.units();
        assert!(iter.next().is_err());
        assert_eq!(iter.next(), Ok(None));
    }

    #[test]
    fn test_build_entry_tree() {
        let encoding = encoding(4, Format::Dwarf32, 4);
        let buf = unit(encoding, &entries(11, 4));
        let debug_abbrev_buf = abbrev_section();
        let debug_info = DebugInfo::new(&buf, LittleEndian);
        let debug_abbrev = DebugAbbrev::new(&debug_abbrev_buf, LittleEndian);

        let units = debug_info.compilation_units(&debug_abbrev).unwrap();
        assert_eq!(units.len(), 1);
        let unit = &units[0];
        let entries = unit.entries();

        let tags: Vec<_> = entries.iter().map(|entry| entry.tag()).collect();
        assert_eq!(
            tags,
            vec![
                constants::DW_TAG_compile_unit,
                constants::DW_TAG_base_type,
                constants::DW_TAG_subprogram,
                constants::DW_TAG_variable,
            ]
        );
        let depths: Vec<_> = entries.iter().map(|entry| entry.depth()).collect();
        assert_eq!(depths, vec![0, 1, 1, 2]);
        let parents: Vec<_> = entries.iter().map(|entry| entry.parent()).collect();
        assert_eq!(parents, vec![None, Some(0), Some(0), Some(2)]);

        // Offsets are those of the abbreviation codes.
        let offsets: Vec<_> = entries.iter().map(|entry| entry.offset().0).collect();
        assert_eq!(offsets, vec![11, 22, 29, 35]);

        assert_eq!(unit.roots().count(), 1);
        let children: Vec<_> = unit.children(0).map(|entry| entry.tag()).collect();
        assert_eq!(
            children,
            vec![constants::DW_TAG_base_type, constants::DW_TAG_subprogram]
        );
        assert_eq!(unit.children(1).count(), 0);
        assert_eq!(unit.children(2).count(), 1);

        let name = entries[0].attr_value(constants::DW_AT_name);
        assert_eq!(
            name,
            Some(AttributeValue::String(EndianSlice::new(b"a.c", LittleEndian)))
        );
        assert_eq!(
            entries[2].attr_value(constants::DW_AT_external),
            Some(AttributeValue::Flag(true))
        );

        let reference = entries[3].attr_value(constants::DW_AT_type).unwrap();
        assert_eq!(reference, AttributeValue::UnitRef(UnitOffset(22)));
        let target = unit.resolve_reference(&reference).unwrap();
        assert_eq!(target.tag(), constants::DW_TAG_base_type);
        assert_eq!(unit.entry_at(DebugInfoOffset(23)), None);
    }

    #[test]
    fn test_unknown_abbreviation_code() {
        let entries = Section::with_endian(Endian::Little)
            .uleb(2)
            .append_bytes(b"int\0")
            .D8(4)
            .D8(5)
            .uleb(9)
            .get_contents()
            .unwrap();
        let buf = unit(encoding(4, Format::Dwarf32, 4), &entries);
        let debug_abbrev_buf = abbrev_section();
        let debug_info = DebugInfo::new(&buf, LittleEndian);
        let debug_abbrev = DebugAbbrev::new(&debug_abbrev_buf, LittleEndian);

        match debug_info.compilation_units(&debug_abbrev) {
            Err(Error::InvalidAbbreviationCode(9)) => {}
            otherwise => panic!("Unexpected result: {:?}", otherwise),
        };
    }

    #[test]
    fn test_unbalanced_null_entries() {
        fn check(entries: &[u8], expect: Error) {
            let buf = unit(encoding(4, Format::Dwarf32, 4), entries);
            let debug_abbrev_buf = abbrev_section();
            let debug_info = DebugInfo::new(&buf, LittleEndian);
            let debug_abbrev = DebugAbbrev::new(&debug_abbrev_buf, LittleEndian);
            let header = debug_info.units().next().unwrap().unwrap();
            match header.parse(&debug_abbrev) {
                Err(e) if e == expect => {}
                otherwise => panic!("Unexpected result: {:?}", otherwise),
            };
        }

        // Null entry at depth 0.
        check(&[0x00], Error::UnexpectedNullEntry);
        // Subprogram scope never closed.
        check(&[0x04, b'f', 0x00], Error::UnclosedEntries(1));
        // Bytes after the root scope closed.
        check(&[0x04, b'f', 0x00, 0x00, 0x02], Error::TrailingEntries);
    }

    #[test]
    fn test_sibling_roots() {
        let entries = Section::with_endian(Endian::Little)
            .uleb(2)
            .append_bytes(b"int\0")
            .D8(4)
            .D8(5)
            .uleb(2)
            .append_bytes(b"char\0")
            .D8(1)
            .D8(6)
            .get_contents()
            .unwrap();
        let buf = unit(encoding(4, Format::Dwarf32, 4), &entries);
        let debug_abbrev_buf = abbrev_section();
        let debug_info = DebugInfo::new(&buf, LittleEndian);
        let debug_abbrev = DebugAbbrev::new(&debug_abbrev_buf, LittleEndian);

        let units = debug_info.compilation_units(&debug_abbrev).unwrap();
        assert_eq!(units[0].roots().count(), 2);
    }

    #[test]
    fn test_back_to_back_units() {
        let first = unit(encoding(4, Format::Dwarf32, 4), &entries(11, 4));
        let second = unit(encoding(2, Format::Dwarf32, 8), &entries(11, 8));
        let mut buf = first.clone();
        buf.extend_from_slice(&second);

        let debug_abbrev_buf = abbrev_section();
        let debug_info = DebugInfo::new(&buf, LittleEndian);
        let debug_abbrev = DebugAbbrev::new(&debug_abbrev_buf, LittleEndian);
        let units = debug_info.compilation_units(&debug_abbrev).unwrap();

        assert_eq!(units.len(), 2);
        assert_eq!(units[0].header().address_size(), 4);
        assert_eq!(units[1].header().address_size(), 8);
        assert_eq!(units[1].header().offset(), units[0].header().end_offset());
        assert_eq!(units[1].header().offset(), DebugInfoOffset(first.len()));
        assert_eq!(
            units[1].entries()[0].offset(),
            DebugInfoOffset(first.len() + 11)
        );

        // Unit-relative references resolve against their own unit.
        let reference = units[1].entries()[3].attr_value(constants::DW_AT_type).unwrap();
        let target = units[1].resolve_reference(&reference).unwrap();
        assert_eq!(target.tag(), constants::DW_TAG_base_type);

        let header = debug_info
            .header_from_offset(DebugInfoOffset(first.len()))
            .unwrap();
        assert_eq!(header, *units[1].header());
    }

    #[test]
    fn test_parse_is_repeatable() {
        let buf = unit(encoding(3, Format::Dwarf32, 8), &entries(11, 8));
        let debug_abbrev_buf = abbrev_section();
        let debug_info = DebugInfo::new(&buf, LittleEndian);
        let debug_abbrev = DebugAbbrev::new(&debug_abbrev_buf, LittleEndian);

        let first = debug_info.compilation_units(&debug_abbrev).unwrap();
        let second = debug_info.compilation_units(&debug_abbrev).unwrap();
        assert_eq!(first, second);
    }
}
