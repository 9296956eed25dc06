//! pydepgraph - dependency graphs for Python packages
//!
//! This library resolves the direct and transitive dependencies of a Python
//! package into a directed graph, keeps what it looked up in a JSON cache, and
//! renders the graph with Graphviz. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_resolution`): Graph, cache and resolver, free of I/O
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pydepgraph::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let metadata_source = PyPiMetadataSource::new()?;
//! let cache_repository = JsonCacheRepository::new(PathBuf::from(DEFAULT_CACHE_FILE));
//! let renderer = DotFileRenderer::new(PathBuf::from("requests.dot"));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Label nodes with release sizes from the same index
//! let size_source = Some(PyPiMetadataSource::new()?);
//!
//! // Create use case
//! let use_case = GenerateGraphUseCase::new(
//!     metadata_source,
//!     cache_repository,
//!     renderer,
//!     progress_reporter,
//!     size_source,
//! );
//!
//! // Execute
//! let request = GraphRequest::new("requests", ResolutionMode::Default, None);
//! let response = use_case.execute(request).await?;
//! println!("{} packages", response.graph.node_count());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod graph_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, JsonCacheRepository, DEFAULT_CACHE_FILE,
    };
    pub use crate::adapters::outbound::formatters::{DotFormatter, TreeFormatter};
    pub use crate::adapters::outbound::network::PyPiMetadataSource;
    pub use crate::adapters::outbound::process::InstalledMetadataSource;
    pub use crate::adapters::outbound::renderers::{DotFileRenderer, GraphvizRenderer};
    pub use crate::application::dto::{
        CacheStatus, GraphRequest, GraphResponse, RenderFormat, SourceKind,
    };
    pub use crate::application::factories::{MetadataSourceFactory, RendererFactory};
    pub use crate::application::use_cases::GenerateGraphUseCase;
    pub use crate::graph_resolution::domain::{
        CacheStore, DependencyGraph, FigureSize, PackageName, PackageSize, ResolutionMode,
        ResolutionWarning, SizeUnit, WarningKind,
    };
    pub use crate::graph_resolution::policies::{
        FigureSizePolicy, RequirementPolicy, SizeColorPolicy,
    };
    pub use crate::graph_resolution::services::{DependencyResolver, ResolutionOutcome};
    pub use crate::ports::inbound::GraphGenerationPort;
    pub use crate::ports::outbound::{
        CacheRepository, GraphRenderer, MetadataSource, PackageSizeSource, ProgressReporter,
    };
    pub use crate::shared::Result;
}
