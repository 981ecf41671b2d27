//! Golden fixture generator for the npv conformance suite.
//!
//! Writes every fixture under `tests/golden/`. Run it after changing a
//! fixture builder in `npv_tests`, then re-run the conformance tests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p npv-tests
//! ```
//!
//! # Generated fixtures
//!
//! | Directory       | Contents                                          |
//! |-----------------|---------------------------------------------------|
//! | uint8           | `[1, 2, 255]` as `\|u1`                           |
//! | float64_be_2x2  | Big-endian `f8`, shape `(2, 2)`                   |
//! | records         | `id: <u2`, `temp: <f4`, `tag: \|S4`, three rows   |
//! | int_mix         | Every integer kind, both byte orders              |
//! | scalar          | Zero-dimensional `<i4` holding 42                 |

#![allow(clippy::pedantic)]

use std::path::Path;

use npv_tests::{
    NpyFixture, float64_be_fixture, int_mix_fixture, records_fixture, scalar_fixture,
    uint8_fixture,
};

fn main() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let golden_dir = manifest_dir.join("tests/golden");

    let fixtures: [(&str, &str, NpyFixture); 5] = [
        ("uint8", "Unsigned bytes [1, 2, 255].", uint8_fixture()),
        (
            "float64_be_2x2",
            "Big-endian doubles [[1.5, -2.25], [0.1, 1024.0]].",
            float64_be_fixture(),
        ),
        (
            "records",
            "Structured records (id, temp, tag) with an empty trailing tag.",
            records_fixture(),
        ),
        (
            "int_mix",
            "Signed and unsigned integers of widths 1, 2, 4 in mixed byte order.",
            int_mix_fixture(),
        ),
        ("scalar", "Zero-dimensional array holding 42.", scalar_fixture()),
    ];

    for (name, description, fixture) in &fixtures {
        let dir = golden_dir.join(name);
        write_manifest(&dir, description, fixture);
        write_file(&dir.join("payload.npy"), &fixture.build());
    }

    println!("All golden fixtures written to {}", golden_dir.display());
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_file(path: &Path, data: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create_dir_all");
    }
    std::fs::write(path, data).expect("write_file");
    println!("  wrote {}", path.display());
}

fn write_manifest(dir: &Path, description: &str, fixture: &NpyFixture) {
    let header = fixture.header_text();
    let json = format!(
        "{{\n  \"description\": \"{description}\",\n  \"header\": \"{}\"\n}}\n",
        header.trim_end(),
    );
    write_file(&dir.join("manifest.json"), json.as_bytes());
}
