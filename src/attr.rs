//! Decoding of attribute values according to their form.

use std::convert::TryFrom;

use crate::abbrev::AttributeSpecification;
use crate::common::{
    DebugInfoOffset, DebugLineStrOffset, DebugStrOffset, DebugTypeSignature, Encoding, UnitOffset,
};
use crate::constants;
use crate::endian_slice::EndianSlice;
use crate::endianity::Endianity;
use crate::parser::{u64_to_offset, Error, Result};
use crate::reader::Reader;

/// An attribute in a `DebuggingInformationEntry`, consisting of a name,
/// the form it was encoded with, and its decoded value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Attribute<'input, Endian>
where
    Endian: Endianity,
{
    name: constants::DwAt,
    form: constants::DwForm,
    value: AttributeValue<'input, Endian>,
}

impl<'input, Endian> Attribute<'input, Endian>
where
    Endian: Endianity,
{
    /// Get this attribute's name.
    pub fn name(&self) -> constants::DwAt {
        self.name
    }

    /// Get the form this attribute was decoded from.
    ///
    /// For `DW_FORM_indirect` this is the form read from the entry, not
    /// `DW_FORM_indirect` itself.
    pub fn form(&self) -> constants::DwForm {
        self.form
    }

    /// Get this attribute's value.
    pub fn value(&self) -> AttributeValue<'input, Endian> {
        self.value
    }

    /// Try to convert this attribute's value to an unsigned integer.
    pub fn udata_value(&self) -> Option<u64> {
        self.value.udata_value()
    }

    /// Try to convert this attribute's value to a signed integer.
    pub fn sdata_value(&self) -> Option<i64> {
        self.value.sdata_value()
    }

    /// Try to convert this attribute's value to an offset.
    pub fn offset_value(&self) -> Option<usize> {
        self.value.offset_value()
    }
}

/// The value of an attribute in a `DebuggingInformationEntry`.
///
/// Strings and blocks borrow from the `.debug_info` section they were
/// decoded from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AttributeValue<'input, Endian>
where
    Endian: Endianity,
{
    /// "Refers to some location in the address space of the described program."
    Addr(u64),

    /// A slice of an arbitrary number of bytes.
    Block(EndianSlice<'input, Endian>),

    /// A one byte constant data value. How to interpret the byte depends on context.
    ///
    /// From section 7 of the standard: "Depending on context, it may be a
    /// signed integer, an unsigned integer, a floating-point constant, or
    /// anything else."
    Data1(u8),

    /// A two byte constant data value. How to interpret the bytes depends on context.
    Data2(u16),

    /// A four byte constant data value. How to interpret the bytes depends on context.
    Data4(u32),

    /// An eight byte constant data value. How to interpret the bytes depends on context.
    Data8(u64),

    /// A signed integer constant.
    Sdata(i64),

    /// An unsigned integer constant.
    Udata(u64),

    /// "The information bytes contain a DWARF expression (see Section 2.5) or
    /// location description (see Section 2.6)."
    Exprloc(EndianSlice<'input, Endian>),

    /// A boolean that indicates presence or absence of the attribute.
    Flag(bool),

    /// An offset into another section. Which section this is an offset into
    /// depends on context.
    SecOffset(usize),

    /// An offset to a `DebuggingInformationEntry` in the current compilation unit.
    UnitRef(UnitOffset),

    /// An offset into the current `.debug_info` section, but possibly a
    /// different compilation unit from the current one.
    DebugInfoRef(DebugInfoOffset),

    /// An offset into the `.debug_info` section of the supplementary object file.
    DebugInfoRefSup(DebugInfoOffset),

    /// A type signature.
    DebugTypesRef(DebugTypeSignature),

    /// An offset into the `.debug_str` section.
    DebugStrRef(DebugStrOffset),

    /// An offset into the `.debug_str` section of the supplementary object file.
    DebugStrRefSup(DebugStrOffset),

    /// An offset into the `.debug_line_str` section.
    DebugLineStrRef(DebugLineStrOffset),

    /// An index into the entries of the `.debug_str_offsets` section.
    DebugStrOffsetsIndex(u64),

    /// An index into the entries of the `.debug_addr` section.
    DebugAddrIndex(u64),

    /// An index into the offsets of the `.debug_loclists` section.
    DebugLocListsIndex(u64),

    /// An index into the offsets of the `.debug_rnglists` section.
    DebugRngListsIndex(u64),

    /// A null terminated string, excluding the final null byte. Not
    /// guaranteed to be UTF-8 or anything like that.
    String(EndianSlice<'input, Endian>),
}

impl<'input, Endian> AttributeValue<'input, Endian>
where
    Endian: Endianity,
{
    /// Try to convert this value to an unsigned integer.
    pub fn udata_value(&self) -> Option<u64> {
        Some(match *self {
            AttributeValue::Data1(data) => u64::from(data),
            AttributeValue::Data2(data) => u64::from(data),
            AttributeValue::Data4(data) => u64::from(data),
            AttributeValue::Data8(data) => data,
            AttributeValue::Udata(data) => data,
            AttributeValue::Sdata(data) => {
                if data < 0 {
                    return None;
                }
                data as u64
            }
            _ => return None,
        })
    }

    /// Try to convert this value to a signed integer.
    pub fn sdata_value(&self) -> Option<i64> {
        Some(match *self {
            AttributeValue::Data1(data) => i64::from(data as i8),
            AttributeValue::Data2(data) => i64::from(data as i16),
            AttributeValue::Data4(data) => i64::from(data as i32),
            AttributeValue::Data8(data) => data as i64,
            AttributeValue::Sdata(data) => data,
            AttributeValue::Udata(data) => {
                if data > i64::MAX as u64 {
                    return None;
                }
                data as i64
            }
            _ => return None,
        })
    }

    /// Try to convert this value to an offset.
    ///
    /// Offsets will be `Data` in DWARF version 2/3, and `SecOffset` otherwise.
    pub fn offset_value(&self) -> Option<usize> {
        match *self {
            AttributeValue::Data4(data) => u64_to_offset(u64::from(data)).ok(),
            AttributeValue::Data8(data) => u64_to_offset(data).ok(),
            AttributeValue::SecOffset(offset) => Some(offset),
            _ => None,
        }
    }
}

/// Decode the value of one attribute from `input`, as described by `spec`.
///
/// Exactly the bytes the form mandates are consumed. Address-sized forms use
/// `encoding.address_size` and offset-sized forms use `encoding.format`.
pub fn parse_attribute<'input, Endian>(
    input: &mut EndianSlice<'input, Endian>,
    encoding: Encoding,
    spec: AttributeSpecification,
) -> Result<Attribute<'input, Endian>>
where
    Endian: Endianity,
{
    let mut form = spec.form();
    loop {
        let value = match form {
            constants::DW_FORM_indirect => {
                let dynamic_form = input.read_uleb128()?;
                form = u16::try_from(dynamic_form)
                    .map(constants::DwForm)
                    .map_err(|_| Error::FormOutOfRange(dynamic_form))?;
                continue;
            }
            constants::DW_FORM_addr => {
                let addr = input.read_address(encoding.address_size)?;
                AttributeValue::Addr(addr)
            }
            constants::DW_FORM_block1 => {
                let block = input.read_block(1)?;
                AttributeValue::Block(block)
            }
            constants::DW_FORM_block2 => {
                let block = input.read_block(2)?;
                AttributeValue::Block(block)
            }
            constants::DW_FORM_block4 => {
                let block = input.read_block(4)?;
                AttributeValue::Block(block)
            }
            constants::DW_FORM_block => {
                let block = input.read_uleb128_block()?;
                AttributeValue::Block(block)
            }
            constants::DW_FORM_data1 => {
                let data = input.read_u8()?;
                AttributeValue::Data1(data)
            }
            constants::DW_FORM_data2 => {
                let data = input.read_u16()?;
                AttributeValue::Data2(data)
            }
            constants::DW_FORM_data4 => {
                let data = input.read_u32()?;
                AttributeValue::Data4(data)
            }
            constants::DW_FORM_data8 => {
                let data = input.read_u64()?;
                AttributeValue::Data8(data)
            }
            constants::DW_FORM_data16 => {
                let block = input.split(16)?;
                AttributeValue::Block(block)
            }
            constants::DW_FORM_udata => {
                let data = input.read_uleb128()?;
                AttributeValue::Udata(data)
            }
            constants::DW_FORM_sdata => {
                let data = input.read_sleb128()?;
                AttributeValue::Sdata(data)
            }
            constants::DW_FORM_exprloc => {
                let block = input.read_uleb128_block()?;
                AttributeValue::Exprloc(block)
            }
            constants::DW_FORM_flag => {
                let present = input.read_u8()?;
                AttributeValue::Flag(present != 0)
            }
            constants::DW_FORM_flag_present => {
                // FlagPresent is this weird compile time always true thing that
                // isn't actually present in the serialized DIEs, only in the abbreviation.
                AttributeValue::Flag(true)
            }
            constants::DW_FORM_implicit_const => {
                // The value lives in the abbreviation, not in the entry, so
                // an indirect form has nothing to take it from.
                let data = spec
                    .implicit_const_value()
                    .ok_or(Error::IndirectImplicitConst)?;
                AttributeValue::Sdata(data)
            }
            constants::DW_FORM_sec_offset => {
                let offset = input.read_offset(encoding.format)?;
                AttributeValue::SecOffset(offset)
            }
            constants::DW_FORM_ref1 => {
                let reference = input.read_u8()?;
                AttributeValue::UnitRef(UnitOffset(reference.into()))
            }
            constants::DW_FORM_ref2 => {
                let reference = input.read_u16()?;
                AttributeValue::UnitRef(UnitOffset(reference.into()))
            }
            constants::DW_FORM_ref4 => {
                let reference = input.read_u32()?;
                AttributeValue::UnitRef(UnitOffset(u64_to_offset(reference.into())?))
            }
            constants::DW_FORM_ref8 => {
                let reference = input.read_u64().and_then(u64_to_offset)?;
                AttributeValue::UnitRef(UnitOffset(reference))
            }
            constants::DW_FORM_ref_udata => {
                let reference = input.read_uleb128().and_then(u64_to_offset)?;
                AttributeValue::UnitRef(UnitOffset(reference))
            }
            constants::DW_FORM_ref_addr => {
                // This is an offset, but DWARF version 2 specifies that DW_FORM_ref_addr
                // has the same size as an address on the target system.  This was changed
                // in DWARF version 3.
                let offset = if encoding.version <= 2 {
                    input
                        .read_address(encoding.address_size)
                        .and_then(u64_to_offset)?
                } else {
                    input.read_offset(encoding.format)?
                };
                AttributeValue::DebugInfoRef(DebugInfoOffset(offset))
            }
            constants::DW_FORM_ref_sig8 => {
                let signature = input.read_u64()?;
                AttributeValue::DebugTypesRef(DebugTypeSignature(signature))
            }
            constants::DW_FORM_ref_sup4 => {
                let offset = input.read_u32()?;
                AttributeValue::DebugInfoRefSup(DebugInfoOffset(u64_to_offset(offset.into())?))
            }
            constants::DW_FORM_ref_sup8 => {
                let offset = input.read_u64().and_then(u64_to_offset)?;
                AttributeValue::DebugInfoRefSup(DebugInfoOffset(offset))
            }
            constants::DW_FORM_GNU_ref_alt => {
                let offset = input.read_offset(encoding.format)?;
                AttributeValue::DebugInfoRefSup(DebugInfoOffset(offset))
            }
            constants::DW_FORM_string => {
                let string = input.read_null_terminated_slice()?;
                AttributeValue::String(string)
            }
            constants::DW_FORM_strp => {
                let offset = input.read_offset(encoding.format)?;
                AttributeValue::DebugStrRef(DebugStrOffset(offset))
            }
            constants::DW_FORM_strp_sup | constants::DW_FORM_GNU_strp_alt => {
                let offset = input.read_offset(encoding.format)?;
                AttributeValue::DebugStrRefSup(DebugStrOffset(offset))
            }
            constants::DW_FORM_line_strp => {
                let offset = input.read_offset(encoding.format)?;
                AttributeValue::DebugLineStrRef(DebugLineStrOffset(offset))
            }
            constants::DW_FORM_strx | constants::DW_FORM_GNU_str_index => {
                let index = input.read_uleb128()?;
                AttributeValue::DebugStrOffsetsIndex(index)
            }
            constants::DW_FORM_strx1 => {
                let index = input.read_u8()?;
                AttributeValue::DebugStrOffsetsIndex(index.into())
            }
            constants::DW_FORM_strx2 => {
                let index = input.read_u16()?;
                AttributeValue::DebugStrOffsetsIndex(index.into())
            }
            constants::DW_FORM_strx3 => {
                let index = input.read_uint(3)?;
                AttributeValue::DebugStrOffsetsIndex(index)
            }
            constants::DW_FORM_strx4 => {
                let index = input.read_u32()?;
                AttributeValue::DebugStrOffsetsIndex(index.into())
            }
            constants::DW_FORM_addrx | constants::DW_FORM_GNU_addr_index => {
                let index = input.read_uleb128()?;
                AttributeValue::DebugAddrIndex(index)
            }
            constants::DW_FORM_addrx1 => {
                let index = input.read_u8()?;
                AttributeValue::DebugAddrIndex(index.into())
            }
            constants::DW_FORM_addrx2 => {
                let index = input.read_u16()?;
                AttributeValue::DebugAddrIndex(index.into())
            }
            constants::DW_FORM_addrx3 => {
                let index = input.read_uint(3)?;
                AttributeValue::DebugAddrIndex(index)
            }
            constants::DW_FORM_addrx4 => {
                let index = input.read_u32()?;
                AttributeValue::DebugAddrIndex(index.into())
            }
            constants::DW_FORM_loclistx => {
                let index = input.read_uleb128()?;
                AttributeValue::DebugLocListsIndex(index)
            }
            constants::DW_FORM_rnglistx => {
                let index = input.read_uleb128()?;
                AttributeValue::DebugRngListsIndex(index)
            }
            otherwise => {
                return Err(Error::UnknownForm(otherwise));
            }
        };
        return Ok(Attribute {
            name: spec.name(),
            form,
            value,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Format;
    use crate::endianity::{BigEndian, LittleEndian};
    use crate::test_util::DwarfSectionMethods;
    use test_assembler::{Endian, Section};

    const ENCODING_4: Encoding = Encoding {
        address_size: 4,
        format: Format::Dwarf32,
        version: 4,
    };

    const ENCODING_8: Encoding = Encoding {
        address_size: 8,
        format: Format::Dwarf32,
        version: 4,
    };

    fn spec(form: constants::DwForm) -> AttributeSpecification {
        AttributeSpecification::new(constants::DW_AT_name, form, None)
    }

    /// Decode `buf` with `form` and check both the value and the number of
    /// bytes consumed. Four trailing bytes are appended to catch overreads.
    fn check_form(
        encoding: Encoding,
        form: constants::DwForm,
        buf: &[u8],
        consumed: usize,
        expect: AttributeValue<LittleEndian>,
    ) {
        let mut bytes = buf.to_vec();
        bytes.extend_from_slice(&[0xaa, 0xbb, 0xcc, 0xdd]);
        let mut input = EndianSlice::new(&bytes, LittleEndian);
        let attr = parse_attribute(&mut input, encoding, spec(form)).expect("Should parse");
        assert_eq!(attr.value(), expect);
        assert_eq!(bytes.len() - input.len(), consumed, "{}", form);
    }

    #[test]
    fn test_fixed_width_forms() {
        let buf = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        check_form(ENCODING_4, constants::DW_FORM_data1, &buf, 1, AttributeValue::Data1(0x01));
        check_form(ENCODING_4, constants::DW_FORM_data2, &buf, 2, AttributeValue::Data2(0x0201));
        check_form(ENCODING_4, constants::DW_FORM_data4, &buf, 4, AttributeValue::Data4(0x0403_0201));
        check_form(
            ENCODING_4,
            constants::DW_FORM_data8,
            &buf,
            8,
            AttributeValue::Data8(0x0807_0605_0403_0201),
        );
        check_form(ENCODING_4, constants::DW_FORM_ref1, &buf, 1, AttributeValue::UnitRef(UnitOffset(1)));
        check_form(
            ENCODING_4,
            constants::DW_FORM_ref2,
            &buf,
            2,
            AttributeValue::UnitRef(UnitOffset(0x0201)),
        );
        check_form(
            ENCODING_4,
            constants::DW_FORM_ref4,
            &buf,
            4,
            AttributeValue::UnitRef(UnitOffset(0x0403_0201)),
        );
        check_form(ENCODING_4, constants::DW_FORM_flag, &buf, 1, AttributeValue::Flag(true));
        check_form(
            ENCODING_4,
            constants::DW_FORM_ref_sig8,
            &buf,
            8,
            AttributeValue::DebugTypesRef(DebugTypeSignature(0x0807_0605_0403_0201)),
        );
        check_form(
            ENCODING_4,
            constants::DW_FORM_strx3,
            &buf,
            3,
            AttributeValue::DebugStrOffsetsIndex(0x03_0201),
        );
        check_form(
            ENCODING_4,
            constants::DW_FORM_addrx2,
            &buf,
            2,
            AttributeValue::DebugAddrIndex(0x0201),
        );
    }

    #[test]
    fn test_address_forms_follow_unit() {
        let buf = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        check_form(ENCODING_4, constants::DW_FORM_addr, &buf, 4, AttributeValue::Addr(0x0403_0201));
        check_form(
            ENCODING_8,
            constants::DW_FORM_addr,
            &buf,
            8,
            AttributeValue::Addr(0x0807_0605_0403_0201),
        );
    }

    #[test]
    fn test_ref_addr_width() {
        let buf = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        let v2 = Encoding {
            address_size: 8,
            format: Format::Dwarf32,
            version: 2,
        };
        check_form(
            v2,
            constants::DW_FORM_ref_addr,
            &buf,
            8,
            AttributeValue::DebugInfoRef(DebugInfoOffset(0x0807_0605_0403_0201)),
        );
        check_form(
            ENCODING_8,
            constants::DW_FORM_ref_addr,
            &buf,
            4,
            AttributeValue::DebugInfoRef(DebugInfoOffset(0x0403_0201)),
        );
        let dwarf64 = Encoding {
            address_size: 4,
            format: Format::Dwarf64,
            version: 4,
        };
        check_form(
            dwarf64,
            constants::DW_FORM_strp,
            &buf,
            8,
            AttributeValue::DebugStrRef(DebugStrOffset(0x0807_0605_0403_0201)),
        );
    }

    #[test]
    fn test_blocks_and_strings() {
        let buf = [0x02, 0x11, 0x22, 0x33];
        let block = [0x11, 0x22];
        let expect = AttributeValue::Block(EndianSlice::new(&block, LittleEndian));
        check_form(ENCODING_4, constants::DW_FORM_block1, &buf, 3, expect);
        check_form(ENCODING_4, constants::DW_FORM_block, &buf, 3, expect);
        check_form(
            ENCODING_4,
            constants::DW_FORM_exprloc,
            &buf,
            3,
            AttributeValue::Exprloc(EndianSlice::new(&block, LittleEndian)),
        );

        let buf = [0x02, 0x00, 0x11, 0x22];
        check_form(ENCODING_4, constants::DW_FORM_block2, &buf, 4, expect);

        let buf = [0x02, 0x00, 0x00, 0x00, 0x11, 0x22];
        check_form(ENCODING_4, constants::DW_FORM_block4, &buf, 6, expect);

        let buf = b"int\0";
        check_form(
            ENCODING_4,
            constants::DW_FORM_string,
            buf,
            4,
            AttributeValue::String(EndianSlice::new(b"int", LittleEndian)),
        );

        let buf = [0x5a; 16];
        check_form(
            ENCODING_4,
            constants::DW_FORM_data16,
            &buf,
            16,
            AttributeValue::Block(EndianSlice::new(&buf, LittleEndian)),
        );
    }

    #[test]
    fn test_flag_present_consumes_nothing() {
        check_form(ENCODING_4, constants::DW_FORM_flag_present, &[], 0, AttributeValue::Flag(true));
    }

    #[test]
    fn test_leb_forms() {
        let buf = [0xe5, 0x8e, 0x26];
        check_form(ENCODING_4, constants::DW_FORM_udata, &buf, 3, AttributeValue::Udata(624_485));
        check_form(
            ENCODING_4,
            constants::DW_FORM_ref_udata,
            &buf,
            3,
            AttributeValue::UnitRef(UnitOffset(624_485)),
        );
        let buf = [0x7f];
        check_form(ENCODING_4, constants::DW_FORM_sdata, &buf, 1, AttributeValue::Sdata(-1));
    }

    #[test]
    fn test_indirect() {
        let section = Section::with_endian(Endian::Little)
            .uleb(constants::DW_FORM_data2.0.into())
            .D16(0x1234);
        let buf = section.get_contents().unwrap();
        let mut input = EndianSlice::new(&buf, LittleEndian);
        let attr = parse_attribute(&mut input, ENCODING_4, spec(constants::DW_FORM_indirect)).unwrap();
        assert_eq!(attr.form(), constants::DW_FORM_data2);
        assert_eq!(attr.value(), AttributeValue::Data2(0x1234));
        assert!(input.is_empty());
    }

    #[test]
    fn test_indirect_implicit_const() {
        let buf = [0x21, 0xaa];
        let mut input = EndianSlice::new(&buf, LittleEndian);
        match parse_attribute(&mut input, ENCODING_4, spec(constants::DW_FORM_indirect)) {
            Err(Error::IndirectImplicitConst) => {}
            otherwise => panic!("Unexpected result: {:?}", otherwise),
        };
    }

    #[test]
    fn test_indirect_wide_form() {
        // 0x10005 shares its low 16 bits with DW_FORM_data2.
        let buf = [0x85, 0x80, 0x04, 0x34, 0x12];
        let mut input = EndianSlice::new(&buf, LittleEndian);
        match parse_attribute(&mut input, ENCODING_4, spec(constants::DW_FORM_indirect)) {
            Err(Error::FormOutOfRange(0x10005)) => {}
            otherwise => panic!("Unexpected result: {:?}", otherwise),
        };
    }

    #[test]
    fn test_implicit_const() {
        let spec = AttributeSpecification::new(
            constants::DW_AT_decl_line,
            constants::DW_FORM_implicit_const,
            Some(42),
        );
        let buf = [0x99];
        let mut input = EndianSlice::new(&buf, LittleEndian);
        let attr = parse_attribute(&mut input, ENCODING_4, spec).unwrap();
        assert_eq!(attr.value(), AttributeValue::Sdata(42));
        assert_eq!(input.len(), 1);
    }

    #[test]
    fn test_big_endian_data() {
        let buf = [0x12, 0x34, 0x56, 0x78];
        let mut input = EndianSlice::new(&buf, BigEndian);
        let attr = parse_attribute(&mut input, ENCODING_4, spec(constants::DW_FORM_data4)).unwrap();
        assert_eq!(attr.value(), AttributeValue::Data4(0x1234_5678));
    }

    #[test]
    fn test_unknown_form() {
        let buf = [0x00, 0x00];
        let mut input = EndianSlice::new(&buf, LittleEndian);
        match parse_attribute(&mut input, ENCODING_4, spec(constants::DwForm(0x7f))) {
            Err(Error::UnknownForm(constants::DwForm(0x7f))) => {}
            otherwise => panic!("Unexpected result: {:?}", otherwise),
        };
    }

    #[test]
    fn test_truncated_value() {
        let buf = [0x01, 0x02];
        let mut input = EndianSlice::new(&buf, LittleEndian);
        match parse_attribute(&mut input, ENCODING_4, spec(constants::DW_FORM_data4)) {
            Err(Error::UnexpectedEof) => {}
            otherwise => panic!("Unexpected result: {:?}", otherwise),
        };

        let buf = [0x05, 0x01];
        let mut input = EndianSlice::new(&buf, LittleEndian);
        match parse_attribute(&mut input, ENCODING_4, spec(constants::DW_FORM_block1)) {
            Err(Error::UnexpectedEof) => {}
            otherwise => panic!("Unexpected result: {:?}", otherwise),
        };
    }

    #[test]
    fn test_value_conversions() {
        let value: AttributeValue<LittleEndian> = AttributeValue::Data1(0xff);
        assert_eq!(value.udata_value(), Some(255));
        assert_eq!(value.sdata_value(), Some(-1));
        assert_eq!(value.offset_value(), None);

        let value: AttributeValue<LittleEndian> = AttributeValue::Data4(0x10);
        assert_eq!(value.offset_value(), Some(0x10));

        let value: AttributeValue<LittleEndian> = AttributeValue::SecOffset(0x20);
        assert_eq!(value.offset_value(), Some(0x20));
        assert_eq!(value.udata_value(), None);

        let value: AttributeValue<LittleEndian> = AttributeValue::Sdata(-4);
        assert_eq!(value.udata_value(), None);
        assert_eq!(value.sdata_value(), Some(-4));
    }
}
