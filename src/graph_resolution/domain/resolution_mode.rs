use crate::shared::error::GraphError;
use crate::shared::Result;

/// How the dependency cache takes part in a run
///
/// The mode is chosen once per run and carried by the
/// [`CacheStore`](super::CacheStore), so the resolver never has to check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionMode {
    /// Read cached entries, write back newly resolved ones
    #[default]
    Default,
    /// Ignore cached entries but write fresh results back
    Refresh,
    /// Neither read nor write the cache
    NoCache,
}

impl ResolutionMode {
    /// Builds the mode from the two CLI switches
    ///
    /// # Errors
    /// Returns a validation error if both switches are set
    pub fn from_flags(refresh: bool, no_cache: bool) -> Result<Self> {
        match (refresh, no_cache) {
            (false, false) => Ok(ResolutionMode::Default),
            (true, false) => Ok(ResolutionMode::Refresh),
            (false, true) => Ok(ResolutionMode::NoCache),
            (true, true) => Err(GraphError::Validation {
                message: "--refresh and --no-cache cannot be used together".to_string(),
            }
            .into()),
        }
    }

    /// Whether cached entries may answer lookups
    pub fn reads_cache(self) -> bool {
        matches!(self, ResolutionMode::Default)
    }

    /// Whether resolved entries are recorded and persisted
    pub fn writes_cache(self) -> bool {
        !matches!(self, ResolutionMode::NoCache)
    }
}

impl std::fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionMode::Default => write!(f, "default"),
            ResolutionMode::Refresh => write!(f, "refresh"),
            ResolutionMode::NoCache => write!(f, "no-cache"),
        }
    }
}
