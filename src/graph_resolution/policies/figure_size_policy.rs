use crate::graph_resolution::domain::{DependencyGraph, FigureSize};

/// FigureSizePolicy picks a canvas size when the user did not give one
///
/// Small graphs get an 8x6 inch canvas. Width grows linearly with the node
/// count, height with its square root, and both are capped.
pub struct FigureSizePolicy;

impl FigureSizePolicy {
    const BASE_WIDTH: f64 = FigureSize::DEFAULT.width;
    const BASE_HEIGHT: f64 = FigureSize::DEFAULT.height;
    const SCALING_FACTOR: f64 = 0.4;
    const MAX_WIDTH: f64 = 100.0;
    const MAX_HEIGHT: f64 = 40.0;

    /// Canvas size for a graph with `node_count` nodes
    pub fn for_node_count(node_count: usize) -> FigureSize {
        let n = node_count as f64;
        let width = (Self::BASE_WIDTH + Self::SCALING_FACTOR * n).min(Self::MAX_WIDTH);
        let height = (Self::BASE_HEIGHT + Self::SCALING_FACTOR * n.sqrt()).min(Self::MAX_HEIGHT);

        FigureSize::new(width, height).unwrap_or(FigureSize::DEFAULT)
    }

    /// Canvas size for `graph`, unless `requested` overrides it
    pub fn select(graph: &DependencyGraph, requested: Option<FigureSize>) -> FigureSize {
        requested.unwrap_or_else(|| Self::for_node_count(graph.node_count()))
    }
}
