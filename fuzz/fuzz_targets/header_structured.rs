#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use npv_header::{FieldDescr, HeaderParser};

// Fuzz target: well-formed headers built from structured input.
//
// Names are drawn from a small alphabet so duplicates occur; the parser
// must accept exactly the headers whose names are unique and whose
// dimensions are all non-zero, and report them back unchanged.

#[derive(Debug, Arbitrary)]
struct Field {
    name: u8,
    marker: u8,
    kind: u8,
    width: u8,
}

#[derive(Debug, Arbitrary)]
struct Header {
    fields: Vec<Field>,
    shape: Vec<u8>,
    fortran_order: bool,
    trailing_comma: bool,
    padding: u8,
}

fn type_code(field: &Field) -> String {
    let marker = ['<', '>', '|', '='][usize::from(field.marker % 4)];
    let kind = ['u', 'i', 'f', 'S'][usize::from(field.kind % 4)];
    format!("{marker}{kind}{}", field.width)
}

fn shape_literal(shape: &[u8]) -> String {
    match shape {
        [] => "()".to_string(),
        [n] => format!("({n},)"),
        dims => {
            let parts: Vec<String> = dims.iter().map(ToString::to_string).collect();
            format!("({})", parts.join(", "))
        }
    }
}

fuzz_target!(|header: Header| {
    if header.fields.is_empty() || header.fields.len() > 16 || header.shape.len() > 8 {
        return;
    }

    let descr: Vec<FieldDescr> = header
        .fields
        .iter()
        .map(|f| FieldDescr::new(format!("f{}", f.name % 8), type_code(f)))
        .collect();
    let entries: Vec<String> = descr
        .iter()
        .map(|f| format!("('{}', '{}')", f.name, f.type_code))
        .collect();

    let mut text = format!(
        "{{'descr': [{}], 'fortran_order': {}, 'shape': {}",
        entries.join(", "),
        if header.fortran_order { "True" } else { "False" },
        shape_literal(&header.shape),
    );
    if header.trailing_comma {
        text.push_str(", ");
    }
    text.push('}');
    text.extend(std::iter::repeat(' ').take(usize::from(header.padding % 64)));
    text.push('\n');

    let mut names: Vec<&str> = descr.iter().map(|f| f.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    let expect_valid = names.len() == descr.len() && !header.shape.contains(&0);

    match HeaderParser::parse(&text) {
        Some(meta) => {
            assert!(expect_valid, "accepted invalid header {text:?}");
            assert_eq!(meta.descr, descr);
            assert_eq!(meta.fortran_order, header.fortran_order);
            let shape: Vec<usize> = header.shape.iter().map(|&d| usize::from(d)).collect();
            assert_eq!(meta.shape, shape);
        }
        None => assert!(!expect_valid, "rejected valid header {text:?}"),
    }
});
