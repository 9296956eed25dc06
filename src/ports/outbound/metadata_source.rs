use crate::graph_resolution::domain::PackageName;
use crate::shared::Result;
use async_trait::async_trait;

/// MetadataSource port for looking up a package's declared dependencies
///
/// This port abstracts where dependency metadata comes from (the PyPI JSON
/// API, the local Python environment, a test fake). It answers one level
/// only; the resolver walks the rest of the tree.
///
/// # Async Support
/// Lookups may be network-bound, so the method is async. Implementations must
/// be `Send + Sync`.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Returns the direct dependencies declared by `package`
    ///
    /// # Errors
    /// Returns `GraphError::PackageNotFound` if the source has no such
    /// package, or `GraphError::MetadataLookupError` for any other failure.
    async fn lookup(&self, package: &PackageName) -> Result<Vec<PackageName>>;
}

#[async_trait]
impl<M: MetadataSource + ?Sized> MetadataSource for Box<M> {
    async fn lookup(&self, package: &PackageName) -> Result<Vec<PackageName>> {
        (**self).lookup(package).await
    }
}
