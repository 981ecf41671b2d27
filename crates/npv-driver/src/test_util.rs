use bytes::Bytes;
use npv_view::ArrayView;

fn npy(header: &str, data: &[u8]) -> Bytes {
    let mut buf = b"\x93NUMPY\x01\x00".to_vec();
    buf.extend_from_slice(&u16::try_from(header.len()).unwrap().to_le_bytes());
    buf.extend_from_slice(header.as_bytes());
    buf.extend_from_slice(data);
    Bytes::from(buf)
}

/// `|u1` values `[1, 2, 255]`.
pub fn uint8_view() -> ArrayView {
    let buf = npy(
        "{'descr': '|u1', 'fortran_order': False, 'shape': (3,), }",
        &[1, 2, 255],
    );
    ArrayView::from_buffer(buf, None).unwrap()
}

/// Records `(a: <i4, b: |S2)` = `[(-7, "hi"), (42, "x")]`.
pub fn record_view() -> ArrayView {
    let mut data = Vec::new();
    data.extend_from_slice(&(-7i32).to_le_bytes());
    data.extend_from_slice(b"hi");
    data.extend_from_slice(&42i32.to_le_bytes());
    data.extend_from_slice(b"x\0");
    let buf = npy(
        "{'descr': [('a', '<i4'), ('b', '|S2')], 'fortran_order': False, 'shape': (2,), }",
        &data,
    );
    ArrayView::from_buffer(buf, None).unwrap()
}
