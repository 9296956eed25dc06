use crate::graph_resolution::domain::{PackageName, PackageSize};
use crate::graph_resolution::policies::RequirementPolicy;
use crate::ports::outbound::{MetadataSource, PackageSizeSource};
use crate::shared::error::GraphError;
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use walkdir::WalkDir;

/// Interpreter used when no explicit one is configured
pub const DEFAULT_PYTHON: &str = "python3";

/// InstalledMetadataSource adapter reading dependencies of installed distributions
///
/// Runs `<python> -m pip show <package>` and reads the `Requires:` field, so the
/// graph reflects what is installed in that interpreter's environment rather
/// than the latest release on an index.
///
/// As a [`PackageSizeSource`] it reads the `Location:` field and adds up the
/// files of the package's import directory (or module) and its
/// `.dist-info`/`.egg-info` directory.
pub struct InstalledMetadataSource {
    python: PathBuf,
}

impl InstalledMetadataSource {
    pub fn new(python: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
        }
    }

    pub fn python(&self) -> &Path {
        &self.python
    }

    async fn pip_show(&self, package: &PackageName) -> Result<String> {
        let output = Command::new(&self.python)
            .args(["-m", "pip", "show", package.as_str()])
            .env("PIP_DISABLE_PIP_VERSION_CHECK", "1")
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| GraphError::MetadataLookupError {
                package_name: package.to_string(),
                details: format!("cannot run {}: {}", self.python.display(), e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GraphError::PackageNotFound {
                package_name: package.to_string(),
                details: stderr.trim().to_string(),
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Extracts the `Requires:` list from `pip show` output.
    ///
    /// Returns `None` when the field is absent.
    fn parse_requires(output: &str) -> Option<Vec<String>> {
        let line = output
            .lines()
            .find_map(|line| line.strip_prefix("Requires:"))?;

        Some(
            line.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Extracts the `Location:` directory from `pip show` output.
    fn parse_location(output: &str) -> Option<PathBuf> {
        output
            .lines()
            .find_map(|line| line.strip_prefix("Location:"))
            .map(str::trim)
            .filter(|location| !location.is_empty())
            .map(PathBuf::from)
    }

    /// True when `entry_name` in site-packages holds files of the package whose
    /// import name is `module` (the normalized name with `_` separators).
    fn belongs_to(entry_name: &str, module: &str) -> bool {
        let entry = entry_name.to_lowercase();
        if entry == module || entry == format!("{}.py", module) {
            return true;
        }

        match entry.split_once('-') {
            Some((name, rest)) => {
                name.replace('.', "_") == module
                    && (rest.ends_with(".dist-info") || rest.ends_with(".egg-info"))
            }
            None => false,
        }
    }

    /// Total size in bytes of the files `package` installed under `location`
    fn installed_bytes(location: &Path, package: &PackageName) -> Result<u64> {
        let module = package.as_str().replace('-', "_");
        let mut matched = 0;
        let mut bytes = 0;

        for entry in fs::read_dir(location)? {
            let entry = entry?;
            if !Self::belongs_to(&entry.file_name().to_string_lossy(), &module) {
                continue;
            }
            matched += 1;

            for file in WalkDir::new(entry.path()) {
                let file = file?;
                if file.file_type().is_file() {
                    bytes += file.metadata()?.len();
                }
            }
        }

        if matched == 0 {
            anyhow::bail!("no files of {} under {}", package, location.display());
        }
        Ok(bytes)
    }
}

impl Default for InstalledMetadataSource {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON)
    }
}

#[async_trait]
impl MetadataSource for InstalledMetadataSource {
    async fn lookup(&self, package: &PackageName) -> Result<Vec<PackageName>> {
        let stdout = self.pip_show(package).await?;
        let requires = Self::parse_requires(&stdout).ok_or_else(|| {
            GraphError::MetadataLookupError {
                package_name: package.to_string(),
                details: "pip show output has no Requires field".to_string(),
            }
        })?;

        Ok(RequirementPolicy::direct_dependencies(&requires))
    }
}

#[async_trait]
impl PackageSizeSource for InstalledMetadataSource {
    async fn size_of(&self, package: &PackageName) -> Result<PackageSize> {
        let stdout = self.pip_show(package).await?;
        let location = Self::parse_location(&stdout).ok_or_else(|| {
            GraphError::MetadataLookupError {
                package_name: package.to_string(),
                details: "pip show output has no Location field".to_string(),
            }
        })?;

        let package_name = package.clone();
        let bytes = tokio::task::spawn_blocking(move || {
            Self::installed_bytes(&location, &package_name)
        })
        .await
        .map_err(anyhow::Error::from)
        .and_then(|measured| measured)
        .map_err(|e| GraphError::MetadataLookupError {
            package_name: package.to_string(),
            details: e.to_string(),
        })?;

        Ok(PackageSize::from_bytes(bytes))
    }
}
