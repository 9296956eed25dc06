use crate::adapters::outbound::network::{PyPiMetadataSource, DEFAULT_INDEX_URL};
use crate::adapters::outbound::process::{InstalledMetadataSource, DEFAULT_PYTHON};
use crate::application::dto::SourceKind;
use crate::ports::outbound::{MetadataSource, PackageSizeSource};
use crate::shared::Result;
use std::path::Path;

/// Factory for creating metadata sources
///
/// Options that do not apply to the selected kind are ignored: `index_url`
/// only matters for PyPI, `python` only for the installed environment.
pub struct MetadataSourceFactory;

impl MetadataSourceFactory {
    pub fn create(
        kind: SourceKind,
        index_url: Option<&str>,
        python: Option<&Path>,
    ) -> Result<Box<dyn MetadataSource>> {
        Ok(match kind {
            SourceKind::PyPi => Box::new(PyPiMetadataSource::with_index_url(
                index_url.unwrap_or(DEFAULT_INDEX_URL),
            )?),
            SourceKind::Installed => Box::new(InstalledMetadataSource::new(
                python.unwrap_or(Path::new(DEFAULT_PYTHON)),
            )),
        })
    }

    /// Creates the size source matching `kind`
    ///
    /// PyPI reports release download sizes; the installed environment reports
    /// the size on disk.
    pub fn create_size_source(
        kind: SourceKind,
        index_url: Option<&str>,
        python: Option<&Path>,
    ) -> Result<Box<dyn PackageSizeSource>> {
        Ok(match kind {
            SourceKind::PyPi => Box::new(PyPiMetadataSource::with_index_url(
                index_url.unwrap_or(DEFAULT_INDEX_URL),
            )?),
            SourceKind::Installed => Box::new(InstalledMetadataSource::new(
                python.unwrap_or(Path::new(DEFAULT_PYTHON)),
            )),
        })
    }

    /// Returns a short description of where metadata comes from
    pub fn describe(kind: SourceKind, index_url: Option<&str>, python: Option<&Path>) -> String {
        match kind {
            SourceKind::PyPi => format!("package index {}", index_url.unwrap_or(DEFAULT_INDEX_URL)),
            SourceKind::Installed => format!(
                "installed packages of {}",
                python.unwrap_or(Path::new(DEFAULT_PYTHON)).display()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_pypi_source() {
        assert!(MetadataSourceFactory::create(SourceKind::PyPi, None, None).is_ok());
    }

    #[test]
    fn test_create_pypi_source_rejects_bad_index_url() {
        let result = MetadataSourceFactory::create(SourceKind::PyPi, Some("ftp://mirror"), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_installed_source_ignores_index_url() {
        let result =
            MetadataSourceFactory::create(SourceKind::Installed, Some("ftp://mirror"), None);
        assert!(result.is_ok());
    }

    #[test]
    fn test_create_size_source() {
        assert!(MetadataSourceFactory::create_size_source(SourceKind::PyPi, None, None).is_ok());
        assert!(MetadataSourceFactory::create_size_source(
            SourceKind::Installed,
            None,
            Some(Path::new("/usr/bin/python3"))
        )
        .is_ok());
        assert!(
            MetadataSourceFactory::create_size_source(SourceKind::PyPi, Some("ftp://x"), None)
                .is_err()
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            MetadataSourceFactory::describe(SourceKind::PyPi, None, None),
            "package index https://pypi.org/pypi"
        );
        assert_eq!(
            MetadataSourceFactory::describe(
                SourceKind::Installed,
                None,
                Some(Path::new("/usr/bin/python3"))
            ),
            "installed packages of /usr/bin/python3"
        );
    }
}
