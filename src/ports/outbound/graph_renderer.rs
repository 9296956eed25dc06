use crate::graph_resolution::domain::{DependencyGraph, FigureSize};
use crate::shared::Result;

/// GraphRenderer port for drawing a resolved graph
///
/// Implementations own their output destination; the port only carries what
/// to draw and how large the canvas should be.
pub trait GraphRenderer {
    /// Renders `graph` on a canvas of `figure_size` inches
    ///
    /// # Errors
    /// Returns `GraphError::RenderError` if drawing fails, or
    /// `GraphError::FileWriteError` if the result cannot be written.
    fn render(&self, graph: &DependencyGraph, figure_size: FigureSize) -> Result<()>;
}

impl<R: GraphRenderer + ?Sized> GraphRenderer for Box<R> {
    fn render(&self, graph: &DependencyGraph, figure_size: FigureSize) -> Result<()> {
        (**self).render(graph, figure_size)
    }
}
