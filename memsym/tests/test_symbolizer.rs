use memsym::filter::filter_frames;
use memsym::symbolization::{DebugInfo, Resolve, Symbolizer, UNRESOLVED};
use object::{Object, ObjectSymbol, SymbolKind};
use std::borrow::Cow;

/// Address of the first defined text symbol whose demangled name is `name`
fn symbol_address(binary_path: &str, name: &str) -> Option<u64> {
    let data = std::fs::read(binary_path).expect("Failed to read binary");
    let obj = object::File::parse(&*data).expect("Failed to parse binary");

    obj.symbols()
        .filter(|sym| sym.kind() == SymbolKind::Text && sym.is_definition() && sym.size() > 0)
        .find(|sym| {
            sym.name().is_ok_and(|raw| addr2line::demangle_auto(Cow::Borrowed(raw), None) == name)
        })
        .map(|sym| sym.address())
}

#[test]
fn test_symbolizer_creation() {
    // Test that we can create a symbolizer for a binary
    let binary_path = env!("CARGO_BIN_EXE_memsym");

    let symbolizer = Symbolizer::new(binary_path);
    assert!(symbolizer.is_ok(), "Failed to create symbolizer: {:?}", symbolizer.err());
}

#[test]
fn test_own_binary_has_full_debug_info() {
    let binary_path = env!("CARGO_BIN_EXE_memsym");
    let symbolizer = Symbolizer::new(binary_path).expect("Failed to create symbolizer");

    assert_eq!(symbolizer.debug_info(), DebugInfo::Full);
}

#[test]
fn test_symbolizer_rejects_non_object_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut file, b"12344 2 0x1234\n").unwrap();

    assert!(Symbolizer::new(file.path()).is_err());
}

#[test]
fn test_resolves_entry_point() {
    let binary_path = env!("CARGO_BIN_EXE_memsym");
    let symbolizer = Symbolizer::new(binary_path).expect("Failed to create symbolizer");

    let addr = symbol_address(binary_path, "main").expect("binary has no main symbol");
    let block = symbolizer.resolve(&format!("0x{addr:x}"));

    let frames = filter_frames(&block);
    assert_eq!(frames.last(), Some(&"main"), "unexpected block for main: {block:?}");
}

#[test]
fn test_resolves_rust_function_with_location() {
    let binary_path = env!("CARGO_BIN_EXE_memsym");
    let symbolizer = Symbolizer::new(binary_path).expect("Failed to create symbolizer");

    let addr = symbol_address(binary_path, "memsym::main").expect("binary has no memsym::main symbol");
    let block = symbolizer.resolve(&format!("{addr:x}"));

    assert!(block.contains("memsym::main"), "unexpected block: {block:?}");
    assert!(block.contains("main.rs"), "expected a source location in {block:?}");
    assert_eq!(filter_frames(&block).last(), Some(&"memsym::main"));
}

#[test]
fn test_repeated_lookup_is_stable() {
    let binary_path = env!("CARGO_BIN_EXE_memsym");
    let symbolizer = Symbolizer::new(binary_path).expect("Failed to create symbolizer");

    let addr = symbol_address(binary_path, "main").expect("binary has no main symbol");
    let token = format!("0x{addr:x}");
    assert_eq!(symbolizer.resolve(&token), symbolizer.resolve(&token));
}

#[test]
fn test_unresolvable_addresses() {
    let binary_path = env!("CARGO_BIN_EXE_memsym");
    let symbolizer = Symbolizer::new(binary_path).expect("Failed to create symbolizer");

    assert_eq!(symbolizer.resolve("0xffffffffffff0000"), UNRESOLVED);
    assert_eq!(symbolizer.resolve("not-an-address"), UNRESOLVED);
    assert_eq!(symbolizer.resolve(""), UNRESOLVED);
}
