use crate::graph_resolution::domain::{DependencyGraph, FigureSize, ResolutionWarning};

/// What happened to the dependency cache file at the end of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheStatus {
    /// New or changed entries were written
    Saved,
    /// Nothing changed, so the file was left alone
    Unchanged,
    /// The run did not use the cache (`--no-cache`)
    Disabled,
    /// Writing failed; the graph was still rendered
    SaveFailed(String),
}

/// GraphResponse - Internal response DTO from the graph generation use case
#[derive(Debug, Clone)]
pub struct GraphResponse {
    /// The resolved dependency graph
    pub graph: DependencyGraph,
    /// Packages that ended up as leaves because their lookup failed
    pub warnings: Vec<ResolutionWarning>,
    /// Canvas size the graph was rendered with
    pub figure_size: FigureSize,
    pub cache_status: CacheStatus,
    /// Number of metadata source queries issued
    pub metadata_queries: usize,
    /// Number of packages answered from the cache
    pub cache_hits: usize,
}

impl GraphResponse {
    pub fn new(
        graph: DependencyGraph,
        warnings: Vec<ResolutionWarning>,
        figure_size: FigureSize,
        cache_status: CacheStatus,
        metadata_queries: usize,
        cache_hits: usize,
    ) -> Self {
        Self {
            graph,
            warnings,
            figure_size,
            cache_status,
            metadata_queries,
            cache_hits,
        }
    }
}
