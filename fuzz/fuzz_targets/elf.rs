#![no_main]

use dwarfscan::{Dwarf, ElfFile, EndianSlice, Error};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let elf = match ElfFile::parse(data) {
        Ok(elf) => elf,
        Err(_) => return,
    };
    for header in elf.section_headers() {
        let _ = elf.section_data(header);
    }
    let dwarf = Dwarf::load(|id| match elf.dwarf_section(id) {
        Err(Error::MissingSection(_)) => Ok(EndianSlice::new(&[], elf.endian())),
        otherwise => otherwise,
    });
    if let Ok(dwarf) = dwarf {
        let mut units = dwarf.units();
        while let Ok(Some(header)) = units.next() {
            let _ = dwarf.unit(&header);
        }
    }
});
