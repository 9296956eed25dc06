/// Crate-wide Result alias backed by `anyhow::Error`.
///
/// Typed failures are raised as [`GraphError`](crate::shared::error::GraphError)
/// and converted into `anyhow::Error` at the `?` boundary, so callers can still
/// `downcast_ref::<GraphError>()` when they need to branch on the kind.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
