use std::convert::TryFrom;
use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::io::{BufWriter, Write};
use std::process;
use std::result;

use dwarfscan::{
    constants, Attribute, AttributeValue, DebugAbbrev, DebugInfoOffset, DebugStr, Dwarf, ElfFile,
    EndianSlice, RunTimeEndian, SectionId, UnitHeader, UnitOffset, UnitType,
};
use fallible_iterator::FallibleIterator;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum Error {
    Dwarf(dwarfscan::Error),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Dwarf(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "an I/O error occurred while writing: {}", err),
        }
    }
}

impl From<dwarfscan::Error> for Error {
    fn from(err: dwarfscan::Error) -> Self {
        Error::Dwarf(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

type Result<T> = result::Result<T, Error>;

type Slice<'input> = EndianSlice<'input, RunTimeEndian>;

#[derive(Default)]
struct Flags {
    abbrev: bool,
    info: bool,
    line: bool,
    strings: bool,
}

fn print_usage(opts: &getopts::Options) -> ! {
    let program = env::args().next().unwrap_or_else(|| "dwarfscan".to_string());
    let brief = format!("Usage: {} [-ails] <file>...", program);
    write!(&mut io::stderr(), "{}", opts.usage(&brief)).ok();
    process::exit(1);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut opts = getopts::Options::new();
    opts.optflag("a", "", "print .debug_abbrev section");
    opts.optflag("i", "", "print .debug_info section");
    opts.optflag("l", "", "print .debug_line section");
    opts.optflag("s", "", "print .debug_str section");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(env::args().skip(1)) {
        Ok(m) => m,
        Err(e) => {
            writeln!(&mut io::stderr(), "{}\n", e).ok();
            print_usage(&opts);
        }
    };
    if matches.opt_present("h") || matches.free.is_empty() {
        print_usage(&opts);
    }

    let mut all = true;
    let mut flags = Flags::default();
    if matches.opt_present("a") {
        flags.abbrev = true;
        all = false;
    }
    if matches.opt_present("i") {
        flags.info = true;
        all = false;
    }
    if matches.opt_present("l") {
        flags.line = true;
        all = false;
    }
    if matches.opt_present("s") {
        flags.strings = true;
        all = false;
    }
    if all {
        // The line program dump is not implemented, so it is only ever
        // reached by asking for it.
        flags.abbrev = true;
        flags.info = true;
        flags.strings = true;
    }

    let stdout = io::stdout();
    let w = &mut BufWriter::new(stdout.lock());
    let mut failed = false;
    for path in &matches.free {
        if !dump_path(w, path, &flags) {
            failed = true;
        }
    }
    if let Err(err) = w.flush() {
        eprintln!("Failed to write output: {}", err);
        failed = true;
    }
    if failed {
        process::exit(1);
    }
}

/// Dump one file, reporting any failure on stderr. Returns false on failure.
fn dump_path<W: Write>(w: &mut W, path: &str, flags: &Flags) -> bool {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("{}: {}", path, err);
            return false;
        }
    };
    let mmap = match unsafe { memmap2::Mmap::map(&file) } {
        Ok(mmap) => mmap,
        Err(err) => {
            eprintln!("{}: {}", path, err);
            return false;
        }
    };
    let elf = match ElfFile::parse(&mmap) {
        Ok(elf) => elf,
        Err(err) => {
            debug!(kind = ?err.kind(), "rejected {}", path);
            eprintln!("{}: {}", path, err);
            return false;
        }
    };

    let mut ok = true;
    if flags.abbrev {
        ok &= report(path, dump_abbrev(w, &elf));
    }
    if flags.info {
        ok &= report(path, dump_info(w, &elf));
    }
    if flags.line {
        warn!("{}: the .debug_line dump is not supported", path);
    }
    if flags.strings {
        ok &= report(path, dump_str(w, &elf));
    }
    ok
}

fn report(path: &str, result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            eprintln!("{}: {}", path, err);
            false
        }
    }
}

/// Look up `.debug_str`, treating a missing section as empty.
fn debug_str_section<'data>(elf: &ElfFile<'data>) -> Result<Slice<'data>> {
    match elf.dwarf_section(SectionId::DebugStr) {
        Ok(section) => Ok(section),
        Err(dwarfscan::Error::MissingSection(name)) => {
            warn!("{} section not found", name);
            Ok(EndianSlice::new(&[], elf.endian()))
        }
        Err(err) => Err(err.into()),
    }
}

fn dump_abbrev<W: Write>(w: &mut W, elf: &ElfFile) -> Result<()> {
    let section = elf.dwarf_section(SectionId::DebugAbbrev)?;
    let debug_abbrev = DebugAbbrev::from(section);
    // Parse everything before printing, so a bad table produces no output.
    let tables: Vec<_> = debug_abbrev.tables().collect()?;

    writeln!(w, "The section {} contains:\n", SectionId::DebugAbbrev.name())?;
    for (offset, abbrevs) in tables {
        writeln!(w, "  Abbreviation table @ offset 0x{:x}:", offset.0)?;
        for abbrev in &abbrevs {
            writeln!(
                w,
                "[{}] {}\t\t[{} children]",
                abbrev.code(),
                abbrev.tag(),
                if abbrev.has_children() { "has" } else { "no" }
            )?;
            for spec in abbrev.attributes() {
                write!(w, "      {}\t{}", spec.name(), spec.form())?;
                if let Some(value) = spec.implicit_const_value() {
                    write!(w, ": {}", value)?;
                }
                writeln!(w)?;
            }
        }
    }
    writeln!(w)?;
    Ok(())
}

fn dump_info<W: Write>(w: &mut W, elf: &ElfFile) -> Result<()> {
    let dwarf = Dwarf {
        debug_abbrev: elf.dwarf_section(SectionId::DebugAbbrev)?.into(),
        debug_info: elf.dwarf_section(SectionId::DebugInfo)?.into(),
        debug_str: debug_str_section(elf)?.into(),
        debug_line_str: match elf.dwarf_section(SectionId::DebugLineStr) {
            Err(dwarfscan::Error::MissingSection(_)) => EndianSlice::new(&[], elf.endian()).into(),
            section => section?.into(),
        },
    };

    writeln!(w, "The section {} contains:\n", SectionId::DebugInfo.name())?;
    let mut units = dwarf.units();
    while let Some(header) = units.next()? {
        dump_unit_header(w, &header)?;
        // Decode the whole unit before printing any of its entries.
        let unit = dwarf.unit(&header)?;
        for entry in unit.entries() {
            writeln!(
                w,
                " <{}><0x{:x}>: Abbrev Number: {} ({})",
                entry.depth(),
                entry.offset().0,
                entry.code(),
                entry.tag()
            )?;
            for attr in entry.attrs() {
                write!(w, "     {:<18}: ", attr.name())?;
                dump_attr_value(w, &dwarf, attr)?;
            }
        }
    }
    Ok(())
}

fn dump_unit_header<W: Write>(w: &mut W, header: &UnitHeader<RunTimeEndian>) -> Result<()> {
    writeln!(w, "  Compilation Unit @ offset 0x{:x}:", header.offset().0)?;
    writeln!(w, "   Length:        {}", header.unit_length())?;
    writeln!(w, "   Version:       {}", header.version())?;
    writeln!(w, "   Abbrev Offset: {}", header.debug_abbrev_offset().0)?;
    writeln!(w, "   Pointer Size:  {}", header.address_size())?;
    if header.version() >= 5 {
        writeln!(w, "   Unit Type:     {}", header.unit_type().dw_ut())?;
        match header.unit_type() {
            UnitType::Type {
                type_signature,
                type_offset,
            }
            | UnitType::SplitType {
                type_signature,
                type_offset,
            } => {
                writeln!(w, "   Signature:     0x{:016x}", type_signature.0)?;
                writeln!(w, "   Type Offset:   0x{:x}", type_offset.0)?;
            }
            UnitType::Skeleton(dwo_id) | UnitType::SplitCompilation(dwo_id) => {
                writeln!(w, "   DWO Id:        0x{:016x}", dwo_id)?;
            }
            UnitType::Compilation | UnitType::Partial => {}
        }
    }
    Ok(())
}

fn dump_attr_value<W: Write>(
    w: &mut W,
    dwarf: &Dwarf<RunTimeEndian>,
    attr: &Attribute<RunTimeEndian>,
) -> Result<()> {
    let value = attr.value();
    match value {
        AttributeValue::Addr(address) => {
            writeln!(w, "0x{:x}", address)?;
        }
        AttributeValue::Block(data) | AttributeValue::Exprloc(data) => {
            writeln!(w, "{} byte block", data.len())?;
        }
        AttributeValue::Data1(_)
        | AttributeValue::Data2(_)
        | AttributeValue::Data4(_)
        | AttributeValue::Data8(_)
        | AttributeValue::Udata(_) => {
            let data = value.udata_value().unwrap_or(0);
            match constant_name(attr.name(), data) {
                Some(name) => writeln!(w, "{}", name)?,
                None => writeln!(w, "{}", data)?,
            }
        }
        AttributeValue::Sdata(data) => {
            writeln!(w, "{}", data)?;
        }
        AttributeValue::Flag(flag) => {
            writeln!(w, "{}", u8::from(flag))?;
        }
        AttributeValue::SecOffset(offset) => {
            writeln!(w, "0x{:x}", offset)?;
        }
        AttributeValue::UnitRef(UnitOffset(offset)) => {
            writeln!(w, "<0x{:x}>", offset)?;
        }
        AttributeValue::DebugInfoRef(DebugInfoOffset(offset)) => {
            writeln!(w, "<0x{:x}>", offset)?;
        }
        AttributeValue::DebugInfoRefSup(DebugInfoOffset(offset)) => {
            writeln!(w, "<alt 0x{:x}>", offset)?;
        }
        AttributeValue::DebugTypesRef(signature) => {
            writeln!(w, "signature: 0x{:016x}", signature.0)?;
        }
        AttributeValue::DebugStrRef(offset) => {
            let string = dwarf.attr_string(&value)?;
            writeln!(
                w,
                "(indirect string, offset: 0x{:x}): {}",
                offset.0,
                string.to_string_lossy()
            )?;
        }
        AttributeValue::DebugStrRefSup(offset) => {
            writeln!(w, "(alt indirect string, offset: 0x{:x})", offset.0)?;
        }
        AttributeValue::DebugLineStrRef(offset) => {
            let string = dwarf.attr_string(&value)?;
            writeln!(
                w,
                "(indirect line string, offset: 0x{:x}): {}",
                offset.0,
                string.to_string_lossy()
            )?;
        }
        AttributeValue::DebugStrOffsetsIndex(index) => {
            writeln!(w, "(indexed string: 0x{:x})", index)?;
        }
        AttributeValue::DebugAddrIndex(index) => {
            writeln!(w, "(index: 0x{:x})", index)?;
        }
        AttributeValue::DebugLocListsIndex(index) => {
            writeln!(w, "(location list index: 0x{:x})", index)?;
        }
        AttributeValue::DebugRngListsIndex(index) => {
            writeln!(w, "(range list index: 0x{:x})", index)?;
        }
        AttributeValue::String(string) => {
            writeln!(w, "\"{}\"", string.to_string_lossy())?;
        }
    }
    Ok(())
}

/// The symbolic name of a constant-class value, for attributes whose values
/// are enumerations.
fn constant_name(name: constants::DwAt, value: u64) -> Option<String> {
    fn byte(value: u64) -> Option<u8> {
        u8::try_from(value).ok()
    }
    let name = match name {
        constants::DW_AT_language => constants::DwLang(u16::try_from(value).ok()?).to_string(),
        constants::DW_AT_encoding => constants::DwAte(byte(value)?).to_string(),
        constants::DW_AT_inline => constants::DwInl(byte(value)?).to_string(),
        constants::DW_AT_accessibility => constants::DwAccess(byte(value)?).to_string(),
        constants::DW_AT_visibility => constants::DwVis(byte(value)?).to_string(),
        constants::DW_AT_virtuality => constants::DwVirtuality(byte(value)?).to_string(),
        constants::DW_AT_identifier_case => constants::DwId(byte(value)?).to_string(),
        constants::DW_AT_calling_convention => constants::DwCc(byte(value)?).to_string(),
        constants::DW_AT_decimal_sign => constants::DwDs(byte(value)?).to_string(),
        constants::DW_AT_endianity => constants::DwEnd(byte(value)?).to_string(),
        constants::DW_AT_ordering => constants::DwOrd(byte(value)?).to_string(),
        _ => return None,
    };
    Some(name)
}

fn dump_str<W: Write>(w: &mut W, elf: &ElfFile) -> Result<()> {
    let debug_str = DebugStr::from(debug_str_section(elf)?);
    let strings: Vec<_> = debug_str.strings().collect()?;

    writeln!(w, "The section {} contains:\n", SectionId::DebugStr.name())?;
    for (offset, string) in strings {
        writeln!(w, "  [{:6x}]  {}", offset, string.to_string_lossy())?;
    }
    writeln!(w)?;
    Ok(())
}
