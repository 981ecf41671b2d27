#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use npv_view::ArrayView;

// Fuzz target: ArrayView::from_buffer on arbitrary bytes.
//
// Once construction succeeds every in-range row must decode, and
// iteration must yield exactly `len()` rows.
fuzz_target!(|data: &[u8]| {
    let Ok(view) = ArrayView::from_buffer(Bytes::copy_from_slice(data), None) else {
        return;
    };

    let limit = view.len().min(4096);
    for i in 0..limit {
        view.row(i).unwrap();
    }
    if view.len() <= 4096 {
        assert_eq!(view.iter().count(), view.len());
    }
    assert!(view.row(view.len()).is_err());
});
