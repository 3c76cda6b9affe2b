//! Locating DWARF sections inside an ELF file.
//!
//! The headers are read with `object::read::elf`. On top of that, the ELF
//! header size and the section name table are validated up front, and every
//! section range is checked against the file size before it is used.

use std::mem;

use object::elf;
use object::read::elf::{FileHeader, SectionHeader as _, SectionTable};
use object::read::ReadRef;
use object::Endianness;

use crate::common::SectionId;
use crate::endian_slice::EndianSlice;
use crate::endianity::RunTimeEndian;
use crate::parser::{Error, Result};

/// The parsed header of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader {
    /// Index of this section in the section header table.
    pub index: usize,
    /// Offset of the section name in the section name string table.
    pub name: u32,
    /// The `SHT_*` section type.
    pub sh_type: u32,
    /// The `SHF_*` section flags.
    pub flags: u64,
    /// File offset of the section data.
    pub offset: u64,
    /// Size in bytes of the section data.
    pub size: u64,
    /// Index of an associated section.
    pub link: u32,
    /// Size of each entry, for sections holding a table.
    pub entsize: u64,
}

#[derive(Debug, Clone, Copy)]
enum Tables<'data> {
    Elf32(SectionTable<'data, elf::FileHeader32<Endianness>>),
    Elf64(SectionTable<'data, elf::FileHeader64<Endianness>>),
}

/// A validated ELF file.
#[derive(Debug, Clone)]
pub struct ElfFile<'data> {
    data: &'data [u8],
    endian: RunTimeEndian,
    is_64: bool,
    tables: Tables<'data>,
    sections: Vec<SectionHeader>,
}

impl<'data> ElfFile<'data> {
    /// Validate the ELF header and section table of `data`.
    ///
    /// Both ELFCLASS32 and ELFCLASS64 are accepted, in either byte order.
    pub fn parse(data: &'data [u8]) -> Result<ElfFile<'data>> {
        // Every class starts with the identification bytes, and the ELF32
        // header is the smallest.
        let ident = data
            .read_at::<elf::FileHeader32<Endianness>>(0)
            .map(|header| header.e_ident)
            .map_err(|()| Error::TooSmallForElf)?;
        let is_64 = ident.class == elf::ELFCLASS64;
        if is_64 && data.len() < mem::size_of::<elf::FileHeader64<Endianness>>() {
            return Err(Error::TooSmallForElf);
        }

        // Report the first bad identification byte, in file order.
        if ident.magic != elf::ELFMAG {
            return Err(Error::BadElfMagic);
        }
        match ident.class {
            elf::ELFCLASS32 | elf::ELFCLASS64 => {}
            class => return Err(Error::UnsupportedElfClass(class)),
        }
        let endian = match ident.data {
            elf::ELFDATA2LSB => RunTimeEndian::Little,
            elf::ELFDATA2MSB => RunTimeEndian::Big,
            encoding => return Err(Error::UnsupportedElfDataEncoding(encoding)),
        };
        if ident.version != elf::EV_CURRENT {
            return Err(Error::UnsupportedElfVersion(ident.version));
        }

        let (tables, sections) = if is_64 {
            let (table, object_endian) = parse_tables::<elf::FileHeader64<Endianness>>(data)?;
            (Tables::Elf64(table), section_summaries(&table, object_endian))
        } else {
            let (table, object_endian) = parse_tables::<elf::FileHeader32<Endianness>>(data)?;
            (Tables::Elf32(table), section_summaries(&table, object_endian))
        };

        Ok(ElfFile {
            data,
            endian,
            is_64,
            tables,
            sections,
        })
    }

    /// The byte order recorded in the ELF identification.
    pub fn endian(&self) -> RunTimeEndian {
        self.endian
    }

    /// True for ELFCLASS64 files.
    pub fn is_64(&self) -> bool {
        self.is_64
    }

    /// The raw file data.
    pub fn data(&self) -> &'data [u8] {
        self.data
    }

    /// All section headers, in table order.
    pub fn section_headers(&self) -> &[SectionHeader] {
        &self.sections
    }

    /// The name of a section, or `None` if its name offset is outside the
    /// section name table.
    pub fn section_name(&self, header: &SectionHeader) -> Option<&'data [u8]> {
        let endian = self.object_endian();
        match self.tables {
            Tables::Elf32(ref table) => raw_section_name(table, endian, header.index),
            Tables::Elf64(ref table) => raw_section_name(table, endian, header.index),
        }
    }

    /// Find the first section whose name is exactly `name`.
    ///
    /// Sections with an out of range link or name offset are ignored.
    pub fn section_by_name(&self, name: &str) -> Option<SectionHeader> {
        let shnum = self.sections.len() as u64;
        self.sections
            .iter()
            .filter(|header| u64::from(header.link) < shnum)
            .find(|header| self.section_name(header) == Some(name.as_bytes()))
            .copied()
    }

    /// The data of a section, checked against the file size.
    ///
    /// `SHT_NOBITS` sections have no data in the file and yield an empty slice.
    pub fn section_data(&self, header: &SectionHeader) -> Result<EndianSlice<'data, RunTimeEndian>> {
        let endian = self.object_endian();
        let data = match self.tables {
            Tables::Elf32(ref table) => raw_section_data(table, endian, self.data, header.index),
            Tables::Elf64(ref table) => raw_section_data(table, endian, self.data, header.index),
        };
        data.map(|data| EndianSlice::new(data, self.endian))
            .ok_or(Error::SectionOutOfBounds {
                offset: header.offset,
                size: header.size,
            })
    }

    /// Find and return the data of a DWARF section.
    pub fn dwarf_section(&self, id: SectionId) -> Result<EndianSlice<'data, RunTimeEndian>> {
        let header = self
            .section_by_name(id.name())
            .ok_or(Error::MissingSection(id.name()))?;
        self.section_data(&header)
    }

    fn object_endian(&self) -> Endianness {
        match self.endian {
            RunTimeEndian::Little => Endianness::Little,
            RunTimeEndian::Big => Endianness::Big,
        }
    }
}

/// Read the file header and section table, and check the fields that the
/// section lookups rely on.
fn parse_tables<'data, Elf>(data: &'data [u8]) -> Result<(SectionTable<'data, Elf>, Endianness)>
where
    Elf: FileHeader<Endian = Endianness>,
{
    let header = Elf::parse(data).map_err(|_| Error::BadElfHeader)?;
    let endian = header.endian().map_err(|_| Error::BadElfHeader)?;
    let e_ehsize = header.e_ehsize(endian);
    if usize::from(e_ehsize) < mem::size_of::<Elf>() {
        return Err(Error::BadElfHeaderSize(e_ehsize));
    }

    let headers = header
        .section_headers(endian, data)
        .map_err(|_| Error::BadSectionTable)?;
    let strtab = header
        .section_strings_index(endian, data)
        .ok()
        .and_then(|index| headers.get(index.0))
        .ok_or_else(|| Error::BadSectionNameTableIndex(header.e_shstrndx(endian)))?;
    let sh_type = strtab.sh_type(endian);
    if sh_type != elf::SHT_STRTAB {
        return Err(Error::BadSectionNameTableType(sh_type));
    }
    if strtab.data(endian, data).is_err() {
        return Err(Error::SectionOutOfBounds {
            offset: strtab.sh_offset(endian).into(),
            size: strtab.sh_size(endian).into(),
        });
    }

    let table = header
        .sections(endian, data)
        .map_err(|_| Error::BadSectionTable)?;
    Ok((table, endian))
}

fn section_summaries<Elf>(table: &SectionTable<'_, Elf>, endian: Endianness) -> Vec<SectionHeader>
where
    Elf: FileHeader<Endian = Endianness>,
{
    table
        .enumerate()
        .map(|(index, section)| SectionHeader {
            index: index.0,
            name: section.sh_name(endian),
            sh_type: section.sh_type(endian),
            flags: section.sh_flags(endian).into(),
            offset: section.sh_offset(endian).into(),
            size: section.sh_size(endian).into(),
            link: section.sh_link(endian),
            entsize: section.sh_entsize(endian).into(),
        })
        .collect()
}

fn raw_section_name<'data, Elf>(
    table: &SectionTable<'data, Elf>,
    endian: Endianness,
    index: usize,
) -> Option<&'data [u8]>
where
    Elf: FileHeader<Endian = Endianness>,
{
    let section = table.iter().nth(index)?;
    table.section_name(endian, section).ok()
}

fn raw_section_data<'data, Elf>(
    table: &SectionTable<'data, Elf>,
    endian: Endianness,
    data: &'data [u8],
    index: usize,
) -> Option<&'data [u8]>
where
    Elf: FileHeader<Endian = Endianness>,
{
    let section = table.iter().nth(index)?;
    section.data(endian, data).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ErrorKind;
    use crate::reader::Reader;
    use test_assembler::{Endian, Section};

    struct TestSection<'a> {
        name: &'a str,
        sh_type: u32,
        link: u32,
        data: &'a [u8],
    }

    fn debug(name: &'static str, data: &'static [u8]) -> TestSection<'static> {
        TestSection {
            name,
            sh_type: elf::SHT_PROGBITS,
            link: 0,
            data,
        }
    }

    fn section_header(
        section: Section,
        is_64: bool,
        name: u32,
        sh_type: u32,
        offset: u64,
        size: u64,
        link: u32,
    ) -> Section {
        let section = section.D32(name).D32(sh_type);
        if is_64 {
            section
                .D64(0)
                .D64(0)
                .D64(offset)
                .D64(size)
                .D32(link)
                .D32(0)
                .D64(1)
                .D64(0)
        } else {
            section
                .D32(0)
                .D32(0)
                .D32(offset as u32)
                .D32(size as u32)
                .D32(link)
                .D32(0)
                .D32(1)
                .D32(0)
        }
    }

    /// Lay out an ELF header, the section name table, the section data and
    /// finally the section header table. Section 0 is the null section and
    /// the name table is last.
    fn build_elf(is_64: bool, endian: Endian, sections: &[TestSection]) -> Vec<u8> {
        let (ehsize, shentsize) = if is_64 { (64u64, 64u64) } else { (52, 40) };

        let mut shstrtab = vec![0u8];
        let mut names = Vec::new();
        for section in sections {
            names.push(shstrtab.len() as u32);
            shstrtab.extend_from_slice(section.name.as_bytes());
            shstrtab.push(0);
        }
        let shstrtab_name = shstrtab.len() as u32;
        shstrtab.extend_from_slice(b".shstrtab\0");

        let shstrtab_offset = ehsize;
        let mut offset = shstrtab_offset + shstrtab.len() as u64;
        let mut offsets = Vec::new();
        for section in sections {
            offsets.push(offset);
            offset += section.data.len() as u64;
        }
        let shoff = offset;
        let shnum = sections.len() as u16 + 2;

        let address = |section: Section, value: u64| {
            if is_64 {
                section.D64(value)
            } else {
                section.D32(value as u32)
            }
        };
        let data_encoding = match endian {
            Endian::Little => elf::ELFDATA2LSB,
            Endian::Big => elf::ELFDATA2MSB,
        };
        let mut out = Section::with_endian(endian)
            .append_bytes(&elf::ELFMAG)
            .D8(if is_64 { elf::ELFCLASS64 } else { elf::ELFCLASS32 })
            .D8(data_encoding)
            .D8(elf::EV_CURRENT)
            .append_repeated(0, 9)
            .D16(elf::ET_REL)
            .D16(elf::EM_X86_64)
            .D32(u32::from(elf::EV_CURRENT));
        out = address(out, 0);
        out = address(out, 0);
        out = address(out, shoff);
        out = out
            .D32(0)
            .D16(ehsize as u16)
            .D16(0)
            .D16(0)
            .D16(shentsize as u16)
            .D16(shnum)
            .D16(shnum - 1)
            .append_bytes(&shstrtab);
        for section in sections {
            out = out.append_bytes(section.data);
        }
        out = section_header(out, is_64, 0, elf::SHT_NULL, 0, 0, 0);
        for (i, section) in sections.iter().enumerate() {
            out = section_header(
                out,
                is_64,
                names[i],
                section.sh_type,
                offsets[i],
                section.data.len() as u64,
                section.link,
            );
        }
        out = section_header(
            out,
            is_64,
            shstrtab_name,
            elf::SHT_STRTAB,
            shstrtab_offset,
            shstrtab.len() as u64,
            0,
        );
        out.get_contents().unwrap()
    }

    fn standard_elf(is_64: bool, endian: Endian) -> Vec<u8> {
        build_elf(
            is_64,
            endian,
            &[
                debug(".debug_abbrev", &[0x01, 0x11, 0x00, 0x00, 0x00, 0x00]),
                debug(".debug_info", &[0xaa; 12]),
                debug(".debug_str", b"main\0"),
            ],
        )
    }

    fn assert_error(buf: &[u8], expect: Error) {
        match ElfFile::parse(buf) {
            Err(e) if e == expect => {}
            otherwise => panic!("Unexpected result: {:?}", otherwise),
        }
    }

    fn set_u16(buf: &mut [u8], pos: usize, value: u16) {
        buf[pos..pos + 2].copy_from_slice(&value.to_le_bytes());
    }

    fn set_u64(buf: &mut [u8], pos: usize, value: u64) {
        buf[pos..pos + 8].copy_from_slice(&value.to_le_bytes());
    }

    // Offsets of identification bytes.
    const EI_CLASS: usize = 4;
    const EI_DATA: usize = 5;
    const EI_VERSION: usize = 6;

    // Offsets of ELF64 header fields.
    const E_SHOFF: usize = 0x28;
    const E_EHSIZE: usize = 0x34;
    const E_SHENTSIZE: usize = 0x3a;
    const E_SHNUM: usize = 0x3c;
    const E_SHSTRNDX: usize = 0x3e;

    fn shoff(buf: &[u8]) -> usize {
        let mut bytes = [0; 8];
        bytes.copy_from_slice(&buf[E_SHOFF..E_SHOFF + 8]);
        u64::from_le_bytes(bytes) as usize
    }

    #[test]
    fn test_parse_elf64_little() {
        let buf = standard_elf(true, Endian::Little);
        let file = ElfFile::parse(&buf).unwrap();
        assert!(file.is_64());
        assert_eq!(file.endian(), RunTimeEndian::Little);
        assert_eq!(file.section_headers().len(), 5);

        let info = file.dwarf_section(SectionId::DebugInfo).unwrap();
        assert_eq!(info.slice(), &[0xaa; 12][..]);
        let strings = file.dwarf_section(SectionId::DebugStr).unwrap();
        assert_eq!(strings.slice(), b"main\0");

        let header = file.section_by_name(".debug_abbrev").unwrap();
        assert_eq!(header.index, 1);
        assert_eq!(header.size, 6);
        assert_eq!(file.section_name(&header), Some(&b".debug_abbrev"[..]));
    }

    #[test]
    fn test_parse_elf32_big() {
        let buf = standard_elf(false, Endian::Big);
        let file = ElfFile::parse(&buf).unwrap();
        assert!(!file.is_64());
        assert_eq!(file.endian(), RunTimeEndian::Big);

        let abbrev = file.dwarf_section(SectionId::DebugAbbrev).unwrap();
        assert_eq!(abbrev.slice(), &[0x01, 0x11, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(abbrev.endian(), RunTimeEndian::Big);
    }

    #[test]
    fn test_missing_section() {
        let buf = build_elf(true, Endian::Little, &[debug(".debug_info", &[0; 4])]);
        let file = ElfFile::parse(&buf).unwrap();
        assert_eq!(file.section_by_name(".debug_abbrev"), None);
        match file.dwarf_section(SectionId::DebugAbbrev) {
            Err(e @ Error::MissingSection(".debug_abbrev")) => {
                assert_eq!(e.kind(), ErrorKind::Structural);
            }
            otherwise => panic!("Unexpected result: {:?}", otherwise),
        };
    }

    #[test]
    fn test_section_name_is_exact() {
        let buf = build_elf(
            true,
            Endian::Little,
            &[
                debug(".debug_str_offsets", &[1, 2, 3, 4]),
                debug(".debug_str", b"x\0"),
            ],
        );
        let file = ElfFile::parse(&buf).unwrap();
        let strings = file.dwarf_section(SectionId::DebugStr).unwrap();
        assert_eq!(strings.slice(), b"x\0");
        assert_eq!(file.section_by_name(".debug"), None);
    }

    #[test]
    fn test_section_with_bad_link_is_skipped() {
        let buf = build_elf(
            true,
            Endian::Little,
            &[
                TestSection {
                    name: ".debug_info",
                    sh_type: elf::SHT_PROGBITS,
                    link: 99,
                    data: &[1],
                },
                debug(".debug_info", &[2]),
            ],
        );
        let file = ElfFile::parse(&buf).unwrap();
        let info = file.dwarf_section(SectionId::DebugInfo).unwrap();
        assert_eq!(info.slice(), &[2]);
    }

    #[test]
    fn test_nobits_section_is_empty() {
        let buf = build_elf(
            true,
            Endian::Little,
            &[TestSection {
                name: ".debug_str",
                sh_type: elf::SHT_NOBITS,
                link: 0,
                data: &[1, 2, 3],
            }],
        );
        let file = ElfFile::parse(&buf).unwrap();
        assert!(file.dwarf_section(SectionId::DebugStr).unwrap().is_empty());
    }

    #[test]
    fn test_section_at_end_of_file() {
        let mut buf = standard_elf(true, Endian::Little);
        let filesize = buf.len() as u64;
        // Section 2 is .debug_info.
        let header = shoff(&buf) + 2 * 64;
        set_u64(&mut buf, header + 24, filesize);
        set_u64(&mut buf, header + 32, 1);

        let file = ElfFile::parse(&buf).unwrap();
        match file.dwarf_section(SectionId::DebugInfo) {
            Err(e @ Error::SectionOutOfBounds { .. }) => {
                assert_eq!(e.kind(), ErrorKind::Structural);
            }
            otherwise => panic!("Unexpected result: {:?}", otherwise),
        };

        // Zero bytes at the end of the file is still in bounds.
        set_u64(&mut buf, header + 32, 0);
        let file = ElfFile::parse(&buf).unwrap();
        assert!(file.dwarf_section(SectionId::DebugInfo).unwrap().is_empty());

        // Sizes that would overflow are rejected too.
        set_u64(&mut buf, header + 24, 1);
        set_u64(&mut buf, header + 32, u64::MAX);
        let file = ElfFile::parse(&buf).unwrap();
        assert!(file.dwarf_section(SectionId::DebugInfo).is_err());
    }

    #[test]
    fn test_identification_errors() {
        assert_error(&[0x7f, b'E', b'L', b'F'], Error::TooSmallForElf);

        let good = standard_elf(true, Endian::Little);
        assert_error(&good[..60], Error::TooSmallForElf);

        let mut buf = good.clone();
        buf[1] = b'X';
        assert_error(&buf, Error::BadElfMagic);

        let mut buf = good.clone();
        buf[EI_CLASS] = 3;
        assert_error(&buf, Error::UnsupportedElfClass(3));

        let mut buf = good.clone();
        buf[EI_DATA] = 0;
        assert_error(&buf, Error::UnsupportedElfDataEncoding(0));

        let mut buf = good.clone();
        buf[EI_VERSION] = 2;
        assert_error(&buf, Error::UnsupportedElfVersion(2));

        let mut buf = good;
        set_u16(&mut buf, E_EHSIZE, 32);
        assert_error(&buf, Error::BadElfHeaderSize(32));
        assert_eq!(Error::BadElfHeaderSize(32).kind(), ErrorKind::Format);
    }

    #[test]
    fn test_section_table_errors() {
        let good = standard_elf(true, Endian::Little);

        let mut buf = good.clone();
        let past_end = buf.len() as u64 + 1;
        set_u64(&mut buf, E_SHOFF, past_end);
        assert_error(&buf, Error::BadSectionTable);

        // The entry size must match the ELF64 section header exactly.
        let mut buf = good.clone();
        set_u16(&mut buf, E_SHENTSIZE, 40);
        assert_error(&buf, Error::BadSectionTable);

        let mut buf = good.clone();
        set_u16(&mut buf, E_SHENTSIZE, 72);
        assert_error(&buf, Error::BadSectionTable);

        let mut buf = good.clone();
        set_u16(&mut buf, E_SHNUM, 6);
        assert_error(&buf, Error::BadSectionTable);
        assert_eq!(Error::BadSectionTable.kind(), ErrorKind::Structural);

        let mut buf = good.clone();
        set_u16(&mut buf, E_SHSTRNDX, 5);
        assert_error(&buf, Error::BadSectionNameTableIndex(5));

        let mut buf = good.clone();
        set_u16(&mut buf, E_SHSTRNDX, 0);
        assert_error(&buf, Error::BadSectionNameTableIndex(0));

        // Point the name table index at .debug_info.
        let mut buf = good.clone();
        set_u16(&mut buf, E_SHSTRNDX, 2);
        assert_error(&buf, Error::BadSectionNameTableType(elf::SHT_PROGBITS));

        let mut buf = good;
        let header = shoff(&buf) + 4 * 64;
        let size = buf.len() as u64;
        set_u64(&mut buf, header + 32, size);
        match ElfFile::parse(&buf) {
            Err(Error::SectionOutOfBounds { .. }) => {}
            otherwise => panic!("Unexpected result: {:?}", otherwise),
        };
    }
}
