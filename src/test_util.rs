#![allow(missing_docs)]

use test_assembler::Section;

use crate::common::{Encoding, Format};
use crate::constants;

pub trait DwarfSectionMethods {
    fn sleb(self, val: i64) -> Self;
    fn uleb(self, val: u64) -> Self;
    fn word(self, size: u8, val: u64) -> Self;
    fn abbrev(self, code: u64, tag: constants::DwTag, children: constants::DwChildren) -> Self;
    fn abbrev_attr(self, name: constants::DwAt, form: constants::DwForm) -> Self;
    fn abbrev_attr_null(self) -> Self;
    fn abbrev_null(self) -> Self;
    fn comp_unit(self, encoding: Encoding, debug_abbrev_offset: u64, entries: &[u8]) -> Self;
}

impl DwarfSectionMethods for Section {
    fn sleb(self, val: i64) -> Self {
        let mut buf = Vec::new();
        let written = leb128::write::signed(&mut buf, val).unwrap();
        self.append_bytes(&buf[0..written])
    }

    fn uleb(self, val: u64) -> Self {
        let mut buf = Vec::new();
        let written = leb128::write::unsigned(&mut buf, val).unwrap();
        self.append_bytes(&buf[0..written])
    }

    fn word(self, size: u8, val: u64) -> Self {
        match size {
            4 => self.D32(val as u32),
            8 => self.D64(val),
            _ => panic!("unsupported word size"),
        }
    }

    fn abbrev(self, code: u64, tag: constants::DwTag, children: constants::DwChildren) -> Self {
        self.uleb(code).uleb(tag.0.into()).D8(children.0)
    }

    fn abbrev_attr(self, name: constants::DwAt, form: constants::DwForm) -> Self {
        self.uleb(name.0.into()).uleb(form.0.into())
    }

    fn abbrev_attr_null(self) -> Self {
        self.D8(0).D8(0)
    }

    fn abbrev_null(self) -> Self {
        self.D8(0)
    }

    /// Append a complete compilation unit header followed by `entries`.
    ///
    /// Version 5 units are written as `DW_UT_compile`.
    fn comp_unit(self, encoding: Encoding, debug_abbrev_offset: u64, entries: &[u8]) -> Self {
        let word_size = encoding.format.word_size();
        let header_len = (if encoding.version >= 5 { 4 } else { 3 }) + u64::from(word_size);
        let length = header_len + entries.len() as u64;
        let section = match encoding.format {
            Format::Dwarf32 => self.D32(length as u32),
            Format::Dwarf64 => self.D32(0xffff_ffff).D64(length),
        };
        let section = section.D16(encoding.version);
        let section = if encoding.version >= 5 {
            section
                .D8(constants::DW_UT_compile.0)
                .D8(encoding.address_size)
                .word(word_size, debug_abbrev_offset)
        } else {
            section
                .word(word_size, debug_abbrev_offset)
                .D8(encoding.address_size)
        };
        section.append_bytes(entries)
    }
}
