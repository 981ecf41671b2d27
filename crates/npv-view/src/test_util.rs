use bytes::Bytes;

/// Frame `header` and `data` as a version 1.0 array buffer.
pub fn npy(header: &str, data: &[u8]) -> Bytes {
    let mut buf = b"\x93NUMPY\x01\x00".to_vec();
    let len = u16::try_from(header.len()).expect("header fits in u16");
    buf.extend_from_slice(&len.to_le_bytes());
    buf.extend_from_slice(header.as_bytes());
    buf.extend_from_slice(data);
    Bytes::from(buf)
}
