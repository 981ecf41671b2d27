use npv_view::ViewError;

/// Errors that can occur while rendering a view.
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────┐
/// │ Variant      │ Cause                                        │
/// ├──────────────┼──────────────────────────────────────────────┤
/// │ NoFields     │ Projection left no fields to render          │
/// │ View         │ Unknown field or out-of-range row requested  │
/// │ Json         │ A row failed to serialize                    │
/// └──────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("no fields to render")]
    NoFields,

    #[error(transparent)]
    View(#[from] ViewError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
