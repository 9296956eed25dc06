/// Renderer adapters writing the graph picture to disk
mod dot_file_renderer;
mod graphviz_renderer;

pub use dot_file_renderer::DotFileRenderer;
pub use graphviz_renderer::{GraphvizRenderer, DEFAULT_DOT_COMMAND};
