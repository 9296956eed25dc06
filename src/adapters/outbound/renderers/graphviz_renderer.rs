use crate::adapters::outbound::filesystem::FileSystemWriter;
use crate::adapters::outbound::formatters::DotFormatter;
use crate::application::dto::RenderFormat;
use crate::graph_resolution::domain::{DependencyGraph, FigureSize};
use crate::ports::outbound::GraphRenderer;
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Graphviz layout executable looked up on PATH
pub const DEFAULT_DOT_COMMAND: &str = "dot";

const INSTALL_HINT: &str = "Install Graphviz (https://graphviz.org/download/) so that `dot` is on your PATH, or write a .dot file instead";

/// GraphvizRenderer adapter producing images through the Graphviz `dot` tool
///
/// The DOT text is piped into `dot -T<format>` and the image bytes read from
/// its stdout are written atomically to the output path, so a failed render
/// never leaves a truncated image behind.
pub struct GraphvizRenderer {
    writer: FileSystemWriter,
    format: RenderFormat,
    dot_command: PathBuf,
}

impl GraphvizRenderer {
    pub fn new(output_path: PathBuf, format: RenderFormat) -> Self {
        Self::with_dot_command(output_path, format, DEFAULT_DOT_COMMAND)
    }

    pub fn with_dot_command(
        output_path: PathBuf,
        format: RenderFormat,
        dot_command: impl Into<PathBuf>,
    ) -> Self {
        Self {
            writer: FileSystemWriter::new(output_path),
            format,
            dot_command: dot_command.into(),
        }
    }

    fn output_path(&self) -> &Path {
        self.writer.output_path()
    }

    fn render_error(&self, details: impl Into<String>, hint: impl Into<String>) -> GraphError {
        GraphError::RenderError {
            path: self.output_path().to_path_buf(),
            details: details.into(),
            hint: hint.into(),
        }
    }

    /// Runs Graphviz on `dot` and returns the rendered image bytes
    fn run_graphviz(&self, dot: &str) -> Result<Vec<u8>> {
        let graphviz_type = self.format.graphviz_type().ok_or_else(|| {
            self.render_error(
                format!("{} output does not go through Graphviz", self.format),
                "Use DotFileRenderer for .dot and .gv outputs",
            )
        })?;

        let mut child = Command::new(&self.dot_command)
            .arg(format!("-T{}", graphviz_type))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    self.render_error(
                        format!("'{}' was not found", self.dot_command.display()),
                        INSTALL_HINT,
                    )
                } else {
                    self.render_error(
                        format!("cannot run '{}': {}", self.dot_command.display(), e),
                        INSTALL_HINT,
                    )
                }
            })?;

        // dot reads its whole input before writing, so feeding stdin first cannot deadlock
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(dot.as_bytes()).map_err(|e| {
                self.render_error(
                    format!("cannot send graph to Graphviz: {}", e),
                    "Check the Graphviz installation",
                )
            })?;
        }

        let output = child.wait_with_output().map_err(|e| {
            self.render_error(
                format!("Graphviz did not finish: {}", e),
                "Check the Graphviz installation",
            )
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self
                .render_error(
                    format!("Graphviz exited with {}: {}", output.status, stderr.trim()),
                    "Check that your Graphviz build supports this output format",
                )
                .into());
        }

        Ok(output.stdout)
    }
}

impl GraphRenderer for GraphvizRenderer {
    fn render(&self, graph: &DependencyGraph, figure_size: FigureSize) -> Result<()> {
        let dot = DotFormatter::format(graph, figure_size);
        let image = self.run_graphviz(&dot)?;
        self.writer.write_atomic(&image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_resolution::domain::PackageName;
    use tempfile::TempDir;

    fn single_node_graph() -> DependencyGraph {
        DependencyGraph::new(PackageName::new("six").unwrap())
    }

    #[test]
    fn test_missing_dot_executable_is_render_error() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("graph.png");
        let renderer = GraphvizRenderer::with_dot_command(
            output_path.clone(),
            RenderFormat::Png,
            "/nonexistent/bin/dot",
        );

        let err = renderer
            .render(&single_node_graph(), FigureSize::DEFAULT)
            .unwrap_err();

        match err.downcast_ref::<GraphError>() {
            Some(GraphError::RenderError { hint, .. }) => assert!(hint.contains("Graphviz")),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!output_path.exists());
    }

    #[test]
    fn test_dot_format_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let renderer =
            GraphvizRenderer::new(temp_dir.path().join("graph.dot"), RenderFormat::Dot);

        let err = renderer
            .render(&single_node_graph(), FigureSize::DEFAULT)
            .unwrap_err();
        assert!(err.to_string().contains("does not go through Graphviz"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_dot_executable_keeps_existing_output() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("graph.svg");
        std::fs::write(&output_path, "previous").unwrap();

        // `false` exits non-zero like a Graphviz that rejects its input
        let renderer =
            GraphvizRenderer::with_dot_command(output_path.clone(), RenderFormat::Svg, "false");

        let result = renderer.render(&single_node_graph(), FigureSize::DEFAULT);
        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "previous");
    }
}
