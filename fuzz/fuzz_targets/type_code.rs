#![no_main]

use libfuzzer_sys::fuzz_target;
use npv_wire::TypeSpec;

// Fuzz target: TypeSpec::parse.
//
// Any accepted code has a width its kind supports, and its canonical
// form re-parses to an equivalent spec.
fuzz_target!(|code: &str| {
    if let Ok(spec) = TypeSpec::parse(code) {
        assert!(spec.kind.supports_width(spec.width));
        let canonical = spec.type_code();
        let reparsed = TypeSpec::parse(&canonical).unwrap();
        assert_eq!((reparsed.kind, reparsed.width), (spec.kind, spec.width));
        assert_eq!(reparsed.type_code(), canonical);
    }
});
