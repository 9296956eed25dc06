use crate::graph_resolution::domain::{
    CacheStore, DependencyGraph, PackageName, ResolutionWarning, WarningKind,
};
use crate::ports::outbound::MetadataSource;
use crate::shared::error::GraphError;
use std::collections::HashSet;

/// Result of one resolution run
#[derive(Debug, Clone)]
pub struct ResolutionOutcome {
    /// The resolved graph, rooted at the requested package
    pub graph: DependencyGraph,
    /// Non-fatal problems, in the order they were met
    pub warnings: Vec<ResolutionWarning>,
    /// Number of lookups sent to the metadata source
    pub metadata_queries: usize,
    /// Number of packages answered from the cache
    pub cache_hits: usize,
}

/// DependencyResolver service for expanding a package into its full graph
///
/// Expansion is depth-first over an explicit work list, so arbitrarily deep
/// dependency chains do not grow the call stack. A `visited` set guarantees
/// each package is expanded at most once per run: cycles terminate, and a
/// package reachable through several parents is looked up once.
///
/// When a package is expanded, all of its edges are inserted in declaration
/// order before any child is expanded. Children are then expanded in
/// declaration order, which makes node and edge order a pure function of the
/// metadata.
pub struct DependencyResolver;

impl DependencyResolver {
    /// Resolves `root` without progress reporting
    pub async fn resolve<M>(
        root: &PackageName,
        cache: &mut CacheStore,
        source: &M,
    ) -> ResolutionOutcome
    where
        M: MetadataSource + ?Sized,
    {
        Self::resolve_with_progress(root, cache, source, |_, _| {}).await
    }

    /// Resolves `root`, calling `on_expand(package, expanded_so_far)` each time
    /// a package is expanded
    ///
    /// Lookups go to `cache` first and fall back to `source`; successful
    /// lookups are written back to `cache`. The cache's mode decides whether
    /// either step actually touches stored entries.
    ///
    /// Failures never abort the run. A package whose lookup fails stays in the
    /// graph as a leaf and produces a warning. Nothing is cached for it, and in
    /// refresh mode its old entry is dropped.
    pub async fn resolve_with_progress<M, F>(
        root: &PackageName,
        cache: &mut CacheStore,
        source: &M,
        mut on_expand: F,
    ) -> ResolutionOutcome
    where
        M: MetadataSource + ?Sized,
        F: FnMut(&PackageName, usize),
    {
        let mut graph = DependencyGraph::new(root.clone());
        let mut visited: HashSet<PackageName> = HashSet::new();
        let mut work_list = vec![root.clone()];
        let mut warnings = Vec::new();
        let mut metadata_queries = 0;
        let mut cache_hits = 0;

        while let Some(package) = work_list.pop() {
            if !visited.insert(package.clone()) {
                continue;
            }
            on_expand(&package, visited.len());

            let cached = cache.get(&package).map(|deps| deps.to_vec());
            let declared = match cached {
                Some(deps) => {
                    cache_hits += 1;
                    deps
                }
                None => {
                    metadata_queries += 1;
                    match source.lookup(&package).await {
                        Ok(deps) => {
                            let deps: Vec<String> = deps.iter().map(|d| d.to_string()).collect();
                            cache.put(&package, deps.clone());
                            deps
                        }
                        Err(e) => {
                            // A refresh must not keep what the source no longer confirms
                            cache.invalidate(&package);
                            warnings.push(Self::lookup_warning(&package, &e));
                            continue;
                        }
                    }
                }
            };

            let mut children = Vec::with_capacity(declared.len());
            for raw_name in &declared {
                match PackageName::new(raw_name) {
                    Ok(child) => {
                        graph.add_edge(&package, &child);
                        children.push(child);
                    }
                    Err(e) => warnings.push(ResolutionWarning::new(
                        package.clone(),
                        WarningKind::InvalidDependencyName,
                        e.to_string(),
                    )),
                }
            }

            // Reversed so the first declared dependency is popped first
            work_list.extend(
                children
                    .into_iter()
                    .rev()
                    .filter(|child| !visited.contains(child)),
            );
        }

        ResolutionOutcome {
            graph,
            warnings,
            metadata_queries,
            cache_hits,
        }
    }

    fn lookup_warning(package: &PackageName, error: &anyhow::Error) -> ResolutionWarning {
        match error.downcast_ref::<GraphError>() {
            Some(GraphError::PackageNotFound { details, .. }) => {
                ResolutionWarning::new(package.clone(), WarningKind::PackageNotFound, details)
            }
            Some(GraphError::MetadataLookupError { details, .. }) => {
                ResolutionWarning::new(package.clone(), WarningKind::LookupFailed, details)
            }
            _ => ResolutionWarning::new(
                package.clone(),
                WarningKind::LookupFailed,
                error.to_string(),
            ),
        }
    }
}
