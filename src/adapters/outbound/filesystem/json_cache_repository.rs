use crate::adapters::outbound::filesystem::FileSystemWriter;
use crate::graph_resolution::domain::{CacheStore, ResolutionMode};
use crate::ports::outbound::CacheRepository;
use crate::shared::error::GraphError;
use crate::shared::security::{validate_readable_file, MAX_CACHE_FILE_SIZE};
use crate::shared::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default cache file name, relative to the working directory
pub const DEFAULT_CACHE_FILE: &str = "deps_cache.json";

/// JsonCacheRepository adapter storing the dependency cache as a JSON file
///
/// The file is a single object mapping each package name to the ordered list
/// of its direct dependency names:
///
/// ```json
/// {
///   "requests": ["charset-normalizer", "idna", "urllib3", "certifi"],
///   "idna": []
/// }
/// ```
///
/// Keys are written sorted so that the file diffs cleanly between runs.
pub struct JsonCacheRepository {
    path: PathBuf,
}

impl JsonCacheRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, Vec<String>>> {
        validate_readable_file(&self.path, "Dependency cache", MAX_CACHE_FILE_SIZE)?;

        let content = fs::read_to_string(&self.path).map_err(|e| GraphError::CacheReadError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| {
            GraphError::CacheCorrupt {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl CacheRepository for JsonCacheRepository {
    fn load(&self, mode: ResolutionMode) -> Result<CacheStore> {
        if matches!(mode, ResolutionMode::NoCache) || !self.path.exists() {
            return Ok(CacheStore::new(mode));
        }

        Ok(CacheStore::from_entries(self.read_entries()?, mode))
    }

    fn save(&self, store: &CacheStore) -> Result<bool> {
        if !store.needs_save() {
            return Ok(false);
        }

        let content = serde_json::to_string_pretty(store.entries()).map_err(|e| {
            GraphError::CacheWriteError {
                path: self.path.clone(),
                details: e.to_string(),
            }
        })?;

        FileSystemWriter::new(self.path.clone())
            .write_atomic(format!("{}\n", content).as_bytes())
            .map_err(|e| GraphError::CacheWriteError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        Ok(true)
    }
}
