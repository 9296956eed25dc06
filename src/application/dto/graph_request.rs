use crate::graph_resolution::domain::{FigureSize, ResolutionMode};
use crate::shared::error::GraphError;
use crate::shared::Result;

/// GraphRequest - Internal request DTO for the graph generation use case
///
/// Where the cache lives and where the picture goes are properties of the
/// adapters the use case is built with; the request only carries what varies
/// per run.
#[derive(Debug, Clone)]
pub struct GraphRequest {
    /// Root package name as given by the user (validated by the use case)
    pub package: String,
    /// How the dependency cache participates in this run
    pub mode: ResolutionMode,
    /// Explicit canvas size; `None` derives it from the graph size
    pub figure_size: Option<FigureSize>,
}

impl GraphRequest {
    pub fn new(
        package: impl Into<String>,
        mode: ResolutionMode,
        figure_size: Option<FigureSize>,
    ) -> Self {
        Self {
            package: package.into(),
            mode,
            figure_size,
        }
    }

    pub fn builder() -> GraphRequestBuilder {
        GraphRequestBuilder::default()
    }
}

/// Builder for [`GraphRequest`]
#[derive(Debug, Default)]
pub struct GraphRequestBuilder {
    package: Option<String>,
    mode: ResolutionMode,
    figure_size: Option<FigureSize>,
}

impl GraphRequestBuilder {
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn mode(mut self, mode: ResolutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn figure_size(mut self, figure_size: Option<FigureSize>) -> Self {
        self.figure_size = figure_size;
        self
    }

    /// # Errors
    /// Returns `GraphError::Validation` if no package was set.
    pub fn build(self) -> Result<GraphRequest> {
        let package = self.package.ok_or_else(|| GraphError::Validation {
            message: "package is required".to_string(),
        })?;
        Ok(GraphRequest::new(package, self.mode, self.figure_size))
    }
}
