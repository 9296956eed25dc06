use super::{PackageName, PackageSize};
use std::collections::{HashMap, HashSet};

/// DependencyGraph aggregate: the resolved "declares a dependency on" relation
///
/// Nodes and edges keep their insertion order so that two resolutions over the
/// same inputs render identically. Duplicate nodes and duplicate edges are
/// ignored. Self-loops are stored like any other edge.
///
/// Nodes may carry a [`PackageSize`] for display; sizes play no part in the
/// structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    root: PackageName,
    nodes: Vec<PackageName>,
    node_set: HashSet<PackageName>,
    edges: Vec<(PackageName, PackageName)>,
    adjacency: HashMap<PackageName, Vec<PackageName>>,
    sizes: HashMap<PackageName, PackageSize>,
}

impl DependencyGraph {
    /// Creates a graph containing only the root node
    pub fn new(root: PackageName) -> Self {
        let mut node_set = HashSet::new();
        node_set.insert(root.clone());
        Self {
            nodes: vec![root.clone()],
            root,
            node_set,
            edges: Vec::new(),
            adjacency: HashMap::new(),
            sizes: HashMap::new(),
        }
    }

    /// Adds a node; returns false if it was already present
    pub fn add_node(&mut self, name: PackageName) -> bool {
        if self.node_set.contains(&name) {
            return false;
        }
        self.node_set.insert(name.clone());
        self.nodes.push(name);
        true
    }

    /// Adds `parent -> child`, inserting either endpoint if missing
    ///
    /// Returns false if the edge was already present.
    pub fn add_edge(&mut self, parent: &PackageName, child: &PackageName) -> bool {
        if self.contains_edge(parent, child) {
            return false;
        }
        self.add_node(parent.clone());
        self.add_node(child.clone());
        self.adjacency
            .entry(parent.clone())
            .or_default()
            .push(child.clone());
        self.edges.push((parent.clone(), child.clone()));
        true
    }

    /// Records the size of a node; returns false if the node is not in the graph
    pub fn set_size(&mut self, name: &PackageName, size: PackageSize) -> bool {
        if !self.contains_node(name) {
            return false;
        }
        self.sizes.insert(name.clone(), size);
        true
    }

    pub fn size_of(&self, name: &PackageName) -> Option<PackageSize> {
        self.sizes.get(name).copied()
    }

    pub fn root(&self) -> &PackageName {
        &self.root
    }

    pub fn nodes(&self) -> &[PackageName] {
        &self.nodes
    }

    pub fn edges(&self) -> &[(PackageName, PackageName)] {
        &self.edges
    }

    /// Direct dependencies of `name`, in insertion order
    pub fn children(&self, name: &PackageName) -> &[PackageName] {
        self.adjacency
            .get(name)
            .map(|children| children.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_node(&self, name: &PackageName) -> bool {
        self.node_set.contains(name)
    }

    pub fn contains_edge(&self, parent: &PackageName, child: &PackageName) -> bool {
        self.children(parent).contains(child)
    }

    pub fn is_leaf(&self, name: &PackageName) -> bool {
        self.children(name).is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of nodes other than the root
    pub fn dependency_count(&self) -> usize {
        self.nodes.len() - 1
    }
}
