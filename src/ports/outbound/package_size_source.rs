use crate::graph_resolution::domain::{PackageName, PackageSize};
use crate::shared::Result;
use async_trait::async_trait;

/// PackageSizeSource port for measuring how large a package is
///
/// Sizes only decorate the drawing, so a failed measurement is reported and
/// the node is drawn without one.
#[async_trait]
pub trait PackageSizeSource: Send + Sync {
    /// Returns the size of `package`
    ///
    /// # Errors
    /// Returns `GraphError::PackageNotFound` if the source has no such
    /// package, or `GraphError::MetadataLookupError` if it cannot be measured.
    async fn size_of(&self, package: &PackageName) -> Result<PackageSize>;
}

#[async_trait]
impl<S: PackageSizeSource + ?Sized> PackageSizeSource for Box<S> {
    async fn size_of(&self, package: &PackageName) -> Result<PackageSize> {
        (**self).size_of(package).await
    }
}
