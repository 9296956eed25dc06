use crate::graph_resolution::domain::{DependencyGraph, FigureSize};
use crate::graph_resolution::policies::SizeColorPolicy;

/// Output resolution passed to Graphviz, in dots per inch
const DPI: u32 = 100;

/// Fill color of the root package node
const ROOT_FILL_COLOR: &str = "#ffd966";

/// Fill color of every other node
const NODE_FILL_COLOR: &str = "#dae8fc";

/// DotFormatter builds Graphviz DOT text for a dependency graph
///
/// Nodes are boxes laid out top to bottom with the root highlighted. A node
/// with a known size is labeled `name\nSIZE` and filled by its size band. The
/// canvas is pinned to the figure size with `size="w,h!"`, which makes
/// Graphviz scale the drawing up or down to exactly that many inches.
pub struct DotFormatter;

impl DotFormatter {
    pub fn format(graph: &DependencyGraph, figure_size: FigureSize) -> String {
        let mut output = String::new();

        output.push_str("digraph dependencies {\n");
        output.push_str(&format!(
            "    graph [size=\"{:.2},{:.2}!\", dpi={}, rankdir=TB];\n",
            figure_size.width(),
            figure_size.height(),
            DPI
        ));
        output.push_str(&format!(
            "    node [shape=box, style=filled, fillcolor=\"{}\", fontname=\"Helvetica\"];\n",
            NODE_FILL_COLOR
        ));
        output.push_str("    edge [arrowsize=0.6];\n");

        Self::render_nodes(&mut output, graph);
        Self::render_edges(&mut output, graph);

        output.push_str("}\n");
        output
    }

    fn render_nodes(output: &mut String, graph: &DependencyGraph) {
        if graph.nodes().is_empty() {
            return;
        }
        output.push('\n');
        for node in graph.nodes() {
            let mut attributes = Vec::new();
            match graph.size_of(node) {
                Some(size) => {
                    attributes.push(format!(
                        "label=\"{}\\n{}\"",
                        Self::escape(node.as_str()),
                        size
                    ));
                    attributes.push(format!("fillcolor=\"{}\"", SizeColorPolicy::color(size)));
                }
                None if node == graph.root() => {
                    attributes.push(format!("fillcolor=\"{}\"", ROOT_FILL_COLOR));
                }
                None => {}
            }
            if node == graph.root() {
                attributes.push("penwidth=2".to_string());
            }

            if attributes.is_empty() {
                output.push_str(&format!("    {};\n", Self::quote_id(node.as_str())));
            } else {
                output.push_str(&format!(
                    "    {} [{}];\n",
                    Self::quote_id(node.as_str()),
                    attributes.join(", ")
                ));
            }
        }
    }

    fn render_edges(output: &mut String, graph: &DependencyGraph) {
        if graph.edges().is_empty() {
            return;
        }
        output.push('\n');
        for (parent, child) in graph.edges() {
            output.push_str(&format!(
                "    {} -> {};\n",
                Self::quote_id(parent.as_str()),
                Self::quote_id(child.as_str())
            ));
        }
    }

    /// Quotes a DOT identifier, escaping backslashes and double quotes
    fn quote_id(id: &str) -> String {
        format!("\"{}\"", Self::escape(id))
    }

    fn escape(text: &str) -> String {
        text.replace('\\', "\\\\").replace('"', "\\\"")
    }
}
