use crate::graph_resolution::domain::{DependencyGraph, PackageName};
use std::collections::HashSet;

/// Prefix placed in front of every non-root entry
const BRANCH: &str = "|- ";

/// Indentation added per level below the first
const INDENT: &str = "   ";

/// TreeFormatter prints a dependency graph as an indented text tree
///
/// ```text
/// requests
/// |- charset-normalizer
/// |- idna
/// |- urllib3
/// |- certifi
/// ```
///
/// A measured package is followed by its size, as in `idna [150KB]`. A
/// package that was already printed with its dependencies is marked `(*)`
/// instead of being expanded again, and an edge back to an ancestor is marked
/// `(cycle)`.
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn format(graph: &DependencyGraph) -> String {
        let mut output = String::new();
        let mut expanded: HashSet<&PackageName> = HashSet::new();
        let mut path: Vec<&PackageName> = Vec::new();
        let mut on_path: HashSet<&PackageName> = HashSet::new();
        let mut stack: Vec<(&PackageName, usize)> = vec![(graph.root(), 0)];

        while let Some((package, depth)) = stack.pop() {
            while path.len() > depth {
                if let Some(left) = path.pop() {
                    on_path.remove(left);
                }
            }

            if depth > 0 {
                output.push_str(&INDENT.repeat(depth - 1));
                output.push_str(BRANCH);
            }
            output.push_str(package.as_str());
            if let Some(size) = graph.size_of(package) {
                output.push_str(&format!(" [{}]", size));
            }

            let children = graph.children(package);
            if on_path.contains(package) {
                output.push_str(" (cycle)\n");
                continue;
            }
            if !children.is_empty() && expanded.contains(package) {
                output.push_str(" (*)\n");
                continue;
            }
            output.push('\n');

            expanded.insert(package);
            path.push(package);
            on_path.insert(package);
            for child in children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        output
    }
}
