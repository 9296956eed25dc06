use crate::graph_resolution::domain::{CacheStore, ResolutionMode};
use crate::shared::Result;

/// CacheRepository port for persisting the dependency cache between runs
pub trait CacheRepository {
    /// Loads the persisted cache for a run in `mode`
    ///
    /// A missing cache is not an error and yields an empty store. In
    /// `NoCache` mode nothing is read at all.
    ///
    /// # Errors
    /// Returns `GraphError::CacheCorrupt` if the stored data exists but cannot
    /// be parsed.
    fn load(&self, mode: ResolutionMode) -> Result<CacheStore>;

    /// Writes `store` back if it has unsaved changes
    ///
    /// The write must be all-or-nothing: on failure the previous cache is left
    /// untouched.
    ///
    /// # Returns
    /// `true` if anything was written
    fn save(&self, store: &CacheStore) -> Result<bool>;
}
