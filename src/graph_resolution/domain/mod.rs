pub mod cache_store;
pub mod dependency_graph;
pub mod figure_size;
pub mod package;
pub mod package_size;
pub mod resolution_mode;
pub mod resolution_warning;

pub use cache_store::CacheStore;
pub use dependency_graph::DependencyGraph;
pub use figure_size::FigureSize;
pub use package::PackageName;
pub use package_size::{PackageSize, SizeUnit};
pub use resolution_mode::ResolutionMode;
pub use resolution_warning::{ResolutionWarning, WarningKind};
