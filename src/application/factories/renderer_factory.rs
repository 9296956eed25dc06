use crate::adapters::outbound::renderers::{DotFileRenderer, GraphvizRenderer};
use crate::application::dto::RenderFormat;
use crate::ports::outbound::GraphRenderer;
use crate::shared::Result;
use std::path::Path;

/// Factory for creating graph renderers
///
/// This factory encapsulates the creation logic for different renderer implementations,
/// following the Factory Pattern. The output file extension decides both the
/// image format and whether Graphviz is needed at all.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer for `output_path`
    ///
    /// # Errors
    /// Returns `GraphError::InvalidOutputPath` if the extension is missing or
    /// unsupported. This happens before any resolution work is done.
    ///
    /// # Examples
    /// ```
    /// use pydepgraph::application::factories::RendererFactory;
    /// use std::path::Path;
    ///
    /// assert!(RendererFactory::create(Path::new("graph.svg")).is_ok());
    /// assert!(RendererFactory::create(Path::new("graph.txt")).is_err());
    /// ```
    pub fn create(output_path: &Path) -> Result<Box<dyn GraphRenderer>> {
        let format = RenderFormat::from_path(output_path)?;
        let output_path = output_path.to_path_buf();
        Ok(match format {
            RenderFormat::Dot => Box::new(DotFileRenderer::new(output_path)),
            _ => Box::new(GraphvizRenderer::new(output_path, format)),
        })
    }
}
