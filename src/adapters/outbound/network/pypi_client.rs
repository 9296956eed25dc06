use crate::graph_resolution::domain::{PackageName, PackageSize};
use crate::graph_resolution::policies::RequirementPolicy;
use crate::ports::outbound::{MetadataSource, PackageSizeSource};
use crate::shared::error::GraphError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

/// Default base URL of the PyPI JSON API
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org/pypi";

#[derive(Debug, Deserialize)]
struct PyPiProject {
    info: PyPiInfo,
    /// Files of the latest release
    #[serde(default)]
    urls: Vec<PyPiReleaseFile>,
}

#[derive(Debug, Deserialize)]
struct PyPiInfo {
    #[serde(default)]
    requires_dist: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct PyPiReleaseFile {
    #[serde(default)]
    packagetype: String,
    size: u64,
}

impl PyPiProject {
    /// Size in bytes of the largest wheel, or of the largest file if there is no wheel
    fn release_size(&self) -> Option<u64> {
        let largest_wheel = self
            .urls
            .iter()
            .filter(|file| file.packagetype == "bdist_wheel")
            .map(|file| file.size)
            .max();
        largest_wheel.or_else(|| self.urls.iter().map(|file| file.size).max())
    }
}

/// Outcome of a single HTTP attempt
enum FetchError {
    /// The index answered that the package does not exist; retrying is pointless
    NotFound(String),
    /// Anything else (network, 5xx, bad JSON)
    Transient(anyhow::Error),
}

/// PyPiMetadataSource adapter reading declared dependencies from a PyPI JSON API
///
/// Looks up `{index_url}/{package}/json` and reads `info.requires_dist` of the
/// latest release. Requirements behind an `extra` marker are skipped, see
/// [`RequirementPolicy`]. As a [`PackageSizeSource`] it reports the download
/// size of the release's largest wheel.
pub struct PyPiMetadataSource {
    client: reqwest::Client,
    index_url: String,
    max_retries: u32,
}

impl PyPiMetadataSource {
    /// Creates a source for the public PyPI index
    pub fn new() -> Result<Self> {
        Self::with_index_url(DEFAULT_INDEX_URL)
    }

    /// Creates a source for a PyPI-compatible JSON API rooted at `index_url`
    pub fn with_index_url(index_url: &str) -> Result<Self> {
        let index_url = index_url.trim_end_matches('/');
        if !(index_url.starts_with("https://") || index_url.starts_with("http://")) {
            return Err(GraphError::Validation {
                message: format!("Index URL must start with http:// or https://: {}", index_url),
            }
            .into());
        }

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("pydepgraph/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            index_url: index_url.to_string(),
            max_retries: 3,
        })
    }

    pub fn index_url(&self) -> &str {
        &self.index_url
    }

    /// Fetches project metadata with retry logic for transient failures
    async fn fetch_with_retry(&self, package: &PackageName) -> Result<PyPiProject> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_project(package).await {
                Ok(project) => return Ok(project),
                Err(FetchError::NotFound(details)) => {
                    return Err(GraphError::PackageNotFound {
                        package_name: package.to_string(),
                        details,
                    }
                    .into());
                }
                Err(FetchError::Transient(e)) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(GraphError::MetadataLookupError {
            package_name: package.to_string(),
            details: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no attempt was made".to_string()),
        }
        .into())
    }

    async fn fetch_project(&self, package: &PackageName) -> std::result::Result<PyPiProject, FetchError> {
        // PackageName already restricts the alphabet; encoding keeps the URL well-formed regardless
        let url = format!(
            "{}/{}/json",
            self.index_url,
            urlencoding::encode(package.as_str())
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transient(e.into()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(FetchError::NotFound(format!(
                "{} returned 404 Not Found",
                url
            ))),
            status if !status.is_success() => Err(FetchError::Transient(anyhow::anyhow!(
                "Package index returned status code {}",
                status
            ))),
            _ => response
                .json::<PyPiProject>()
                .await
                .map_err(|e| FetchError::Transient(e.into())),
        }
    }
}

#[async_trait]
impl MetadataSource for PyPiMetadataSource {
    async fn lookup(&self, package: &PackageName) -> Result<Vec<PackageName>> {
        let project = self.fetch_with_retry(package).await?;
        let requirements = project.info.requires_dist.unwrap_or_default();
        Ok(RequirementPolicy::direct_dependencies(&requirements))
    }
}

#[async_trait]
impl PackageSizeSource for PyPiMetadataSource {
    async fn size_of(&self, package: &PackageName) -> Result<PackageSize> {
        let project = self.fetch_with_retry(package).await?;
        let bytes = project
            .release_size()
            .ok_or_else(|| GraphError::MetadataLookupError {
                package_name: package.to_string(),
                details: "the latest release has no files".to_string(),
            })?;
        Ok(PackageSize::from_bytes(bytes))
    }
}
