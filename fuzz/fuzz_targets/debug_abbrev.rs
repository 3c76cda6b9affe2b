#![no_main]

use dwarfscan::{DebugAbbrev, LittleEndian};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|debug_abbrev: &[u8]| {
    let debug_abbrev = DebugAbbrev::new(debug_abbrev, LittleEndian);

    let mut tables = debug_abbrev.tables();
    while let Ok(Some((_, abbreviations))) = tables.next() {
        for abbrev in &abbreviations {
            assert_eq!(
                abbreviations.get(abbrev.code()).map(|a| a.code()),
                Some(abbrev.code())
            );
        }
    }
});
