//! Buffer acquisition.
//!
//! This is the only place the view stack waits on anything. The helpers
//! here resolve a complete buffer and hand it, unchanged, to
//! [`ArrayView::from_buffer`]; retries, timeouts, and transport concerns
//! belong to whatever `AsyncRead` the caller passes in.

use std::path::Path;

use bytes::Bytes;
use npv_header::HeaderMetadata;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::ViewError;
use crate::view::ArrayView;

/// Read `reader` to the end into a shared buffer.
///
/// # Errors
///
/// Returns [`ViewError::Io`] if the reader fails.
pub async fn read_buffer<R: AsyncRead + Unpin>(mut reader: R) -> Result<Bytes, ViewError> {
    let mut buf = Vec::with_capacity(4096);
    reader.read_to_end(&mut buf).await?;
    Ok(Bytes::from(buf))
}

/// Read a whole file into a shared buffer.
///
/// # Errors
///
/// Returns [`ViewError::Io`] if the file cannot be read.
pub async fn fetch_path(path: impl AsRef<Path>) -> Result<Bytes, ViewError> {
    Ok(Bytes::from(tokio::fs::read(path).await?))
}

impl ArrayView {
    /// Read a complete buffer from `reader`, then build a view over it.
    ///
    /// # Errors
    ///
    /// [`ViewError::Io`] from the reader, plus everything
    /// [`from_buffer`](Self::from_buffer) can return.
    pub async fn from_reader<R: AsyncRead + Unpin>(
        reader: R,
        header: Option<HeaderMetadata>,
    ) -> Result<Self, ViewError> {
        Self::from_buffer(read_buffer(reader).await?, header)
    }

    /// Read the file at `path`, then build a view over it.
    ///
    /// # Errors
    ///
    /// [`ViewError::Io`] if the file cannot be read, plus everything
    /// [`from_buffer`](Self::from_buffer) can return.
    pub async fn from_path(
        path: impl AsRef<Path>,
        header: Option<HeaderMetadata>,
    ) -> Result<Self, ViewError> {
        Self::from_buffer(fetch_path(path).await?, header)
    }
}
