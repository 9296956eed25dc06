use crate::adapters::outbound::filesystem::FileSystemWriter;
use crate::adapters::outbound::formatters::DotFormatter;
use crate::graph_resolution::domain::{DependencyGraph, FigureSize};
use crate::ports::outbound::GraphRenderer;
use crate::shared::Result;
use std::path::PathBuf;

/// DotFileRenderer adapter writing Graphviz source text
///
/// Used for `.dot` and `.gv` outputs; needs no external tool.
pub struct DotFileRenderer {
    writer: FileSystemWriter,
}

impl DotFileRenderer {
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            writer: FileSystemWriter::new(output_path),
        }
    }
}

impl GraphRenderer for DotFileRenderer {
    fn render(&self, graph: &DependencyGraph, figure_size: FigureSize) -> Result<()> {
        let dot = DotFormatter::format(graph, figure_size);
        self.writer.write_atomic(dot.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_resolution::domain::PackageName;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_writes_dot_text() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("graph.dot");

        let mut graph = DependencyGraph::new(PackageName::new("requests").unwrap());
        graph.add_edge(
            &PackageName::new("requests").unwrap(),
            &PackageName::new("idna").unwrap(),
        );

        DotFileRenderer::new(output_path.clone())
            .render(&graph, FigureSize::DEFAULT)
            .unwrap();

        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("\"requests\" -> \"idna\";"));
        assert!(content.contains("size=\"8.00,6.00!\""));
    }

    #[test]
    fn test_render_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("missing").join("graph.dot");
        let graph = DependencyGraph::new(PackageName::new("six").unwrap());

        let result = DotFileRenderer::new(output_path.clone()).render(&graph, FigureSize::DEFAULT);
        assert!(result.is_err());
        assert!(!output_path.exists());
    }
}
