/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod graph_request;
mod graph_response;
mod render_format;
mod source_kind;

pub use graph_request::{GraphRequest, GraphRequestBuilder};
pub use graph_response::{CacheStatus, GraphResponse};
pub use render_format::RenderFormat;
pub use source_kind::SourceKind;
