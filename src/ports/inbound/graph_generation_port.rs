use crate::application::dto::{GraphRequest, GraphResponse};
use crate::shared::Result;
use async_trait::async_trait;

/// GraphGenerationPort - Inbound port for the dependency graph use case
///
/// This is the application's public entry point: resolve a package, keep the
/// cache current, render the picture.
#[async_trait(?Send)]
pub trait GraphGenerationPort {
    /// Generates and renders the dependency graph described by `request`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The root package name is invalid
    /// - The dependency cache exists but is corrupt
    /// - Rendering or writing the output file fails
    ///
    /// Per-package lookup failures and cache write failures are not errors;
    /// they are reported and listed in the response.
    async fn generate_graph(&self, request: GraphRequest) -> Result<GraphResponse>;
}
