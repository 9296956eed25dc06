use crate::application::dto::{CacheStatus, GraphRequest, GraphResponse};
use crate::graph_resolution::domain::{
    CacheStore, DependencyGraph, PackageName, ResolutionMode, ResolutionWarning, WarningKind,
};
use crate::graph_resolution::policies::FigureSizePolicy;
use crate::graph_resolution::services::{DependencyResolver, ResolutionOutcome};
use crate::ports::inbound::GraphGenerationPort;
use crate::ports::outbound::{
    CacheRepository, GraphRenderer, MetadataSource, PackageSizeSource, ProgressReporter,
};
use crate::shared::Result;
use async_trait::async_trait;

/// GenerateGraphUseCase - Core use case for dependency graph generation
///
/// This use case orchestrates the workflow using generic dependency
/// injection for all infrastructure dependencies:
///
/// 1. validate the root package name
/// 2. load the dependency cache (a corrupt cache stops here, before any lookup)
/// 3. resolve the graph, cache first, metadata source second
/// 4. measure package sizes, when a size source is given (failures are warnings)
/// 5. persist the cache (failure is only a warning)
/// 6. pick the figure size and render
///
/// # Type Parameters
/// * `MS` - MetadataSource implementation
/// * `CR` - CacheRepository implementation
/// * `GR` - GraphRenderer implementation
/// * `PR` - ProgressReporter implementation
/// * `SS` - PackageSizeSource implementation (optional)
pub struct GenerateGraphUseCase<MS, CR, GR, PR, SS> {
    metadata_source: MS,
    cache_repository: CR,
    renderer: GR,
    progress_reporter: PR,
    size_source: Option<SS>,
}

impl<MS, CR, GR, PR, SS> GenerateGraphUseCase<MS, CR, GR, PR, SS>
where
    MS: MetadataSource,
    CR: CacheRepository,
    GR: GraphRenderer,
    PR: ProgressReporter,
    SS: PackageSizeSource,
{
    /// Creates a new GenerateGraphUseCase with injected dependencies
    pub fn new(
        metadata_source: MS,
        cache_repository: CR,
        renderer: GR,
        progress_reporter: PR,
        size_source: Option<SS>,
    ) -> Self {
        Self {
            metadata_source,
            cache_repository,
            renderer,
            progress_reporter,
            size_source,
        }
    }

    /// Executes the graph generation use case
    ///
    /// # Arguments
    /// * `request` - Root package, cache mode and optional figure size
    ///
    /// # Returns
    /// GraphResponse containing the graph, warnings and cache status
    pub async fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        // Step 1: Validate the root before touching any file
        let root = PackageName::new(&request.package)?;

        // Step 2: Load cache
        let mut cache = self.load_cache(request.mode)?;

        // Step 3: Resolve
        let mut outcome = self.resolve(&root, &mut cache).await;

        // Step 4: Measure sizes
        if let Some(size_source) = &self.size_source {
            let size_warnings = self.measure_sizes(size_source, &mut outcome.graph).await;
            outcome.warnings.extend(size_warnings);
        }
        self.report_warnings(&outcome);

        // Step 5: Persist cache
        let cache_status = self.save_cache(&cache);

        // Step 6: Render
        let figure_size = FigureSizePolicy::select(&outcome.graph, request.figure_size);
        self.progress_reporter.report(&format!(
            "🎨 Rendering dependency graph ({})...",
            figure_size
        ));
        self.renderer.render(&outcome.graph, figure_size)?;

        Ok(GraphResponse::new(
            outcome.graph,
            outcome.warnings,
            figure_size,
            cache_status,
            outcome.metadata_queries,
            outcome.cache_hits,
        ))
    }

    fn load_cache(&self, mode: ResolutionMode) -> Result<CacheStore> {
        if !mode.reads_cache() && !mode.writes_cache() {
            return Ok(CacheStore::new(mode));
        }

        self.progress_reporter
            .report(&format!("📖 Loading dependency cache (mode: {})...", mode));
        let cache = self.cache_repository.load(mode)?;
        if mode.reads_cache() {
            self.progress_reporter
                .report(&format!("✅ {} package(s) in cache", cache.len()));
        }
        Ok(cache)
    }

    async fn resolve(&self, root: &PackageName, cache: &mut CacheStore) -> ResolutionOutcome {
        self.progress_reporter
            .report(&format!("🔍 Resolving dependencies of {}...", root));

        let reporter = &self.progress_reporter;
        let outcome = DependencyResolver::resolve_with_progress(
            root,
            cache,
            &self.metadata_source,
            |package, expanded| {
                reporter.report_progress(expanded, 0, Some(package.as_str()));
            },
        )
        .await;

        self.progress_reporter.report_completion(&format!(
            "✅ Resolved {} package(s) and {} dependency edge(s) ({} looked up, {} from cache)",
            outcome.graph.node_count(),
            outcome.graph.edge_count(),
            outcome.metadata_queries,
            outcome.cache_hits
        ));
        outcome
    }

    /// Attaches a size to every node it can measure; returns one warning per failure
    async fn measure_sizes(
        &self,
        size_source: &SS,
        graph: &mut DependencyGraph,
    ) -> Vec<ResolutionWarning> {
        let packages = graph.nodes().to_vec();
        let total = packages.len();
        let mut warnings = Vec::new();

        self.progress_reporter.report("📏 Measuring package sizes...");
        for (index, package) in packages.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(package.as_str()));
            match size_source.size_of(package).await {
                Ok(size) => {
                    graph.set_size(package, size);
                }
                Err(e) => warnings.push(ResolutionWarning::new(
                    package.clone(),
                    WarningKind::SizeUnavailable,
                    e.to_string(),
                )),
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Measured {} of {} package(s)",
            total - warnings.len(),
            total
        ));
        warnings
    }

    fn report_warnings(&self, outcome: &ResolutionOutcome) {
        for warning in &outcome.warnings {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", warning));
        }
    }

    fn save_cache(&self, cache: &CacheStore) -> CacheStatus {
        if !cache.mode().writes_cache() {
            return CacheStatus::Disabled;
        }

        match self.cache_repository.save(cache) {
            Ok(true) => {
                self.progress_reporter
                    .report(&format!("💾 Saved dependency cache ({} package(s))", cache.len()));
                CacheStatus::Saved
            }
            Ok(false) => CacheStatus::Unchanged,
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: {}", e));
                CacheStatus::SaveFailed(e.to_string())
            }
        }
    }
}

#[async_trait(?Send)]
impl<MS, CR, GR, PR, SS> GraphGenerationPort for GenerateGraphUseCase<MS, CR, GR, PR, SS>
where
    MS: MetadataSource,
    CR: CacheRepository,
    GR: GraphRenderer,
    PR: ProgressReporter,
    SS: PackageSizeSource,
{
    async fn generate_graph(&self, request: GraphRequest) -> Result<GraphResponse> {
        self.execute(request).await
    }
}
