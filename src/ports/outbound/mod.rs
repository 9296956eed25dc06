/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach package metadata and sizes, the cache file, the renderer and the
/// console.
pub mod cache_repository;
pub mod graph_renderer;
pub mod metadata_source;
pub mod package_size_source;
pub mod progress_reporter;

pub use cache_repository::CacheRepository;
pub use graph_renderer::GraphRenderer;
pub use metadata_source::MetadataSource;
pub use package_size_source::PackageSizeSource;
pub use progress_reporter::ProgressReporter;
