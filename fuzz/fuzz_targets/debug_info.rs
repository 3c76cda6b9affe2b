#![no_main]

use dwarfscan::{DebugAbbrev, DebugInfo, LittleEndian};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|sections: (Vec<u8>, Vec<u8>)| {
    let (debug_abbrev, debug_info) = sections;
    let debug_abbrev = DebugAbbrev::new(&debug_abbrev, LittleEndian);
    let debug_info = DebugInfo::new(&debug_info, LittleEndian);

    let mut units = debug_info.units();
    while let Ok(Some(header)) = units.next() {
        if let Ok(unit) = header.parse(&debug_abbrev) {
            for (index, entry) in unit.entries().iter().enumerate() {
                if let Some(parent) = entry.parent() {
                    assert!(parent < index);
                    assert_eq!(unit.entries()[parent].depth() + 1, entry.depth());
                }
            }
        }
    }
});
