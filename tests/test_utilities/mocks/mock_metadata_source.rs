use pydepgraph::prelude::*;
use pydepgraph::shared::error::GraphError;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock MetadataSource backed by a fixed package index, counting every lookup
#[derive(Default, Clone)]
pub struct MockMetadataSource {
    packages: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
    calls: Arc<AtomicUsize>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockMetadataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, name: &str, dependencies: &[&str]) -> Self {
        self.packages.insert(
            name.to_string(),
            dependencies.iter().map(|d| d.to_string()).collect(),
        );
        self
    }

    /// Makes lookups of `name` fail with a network-style error
    pub fn with_failure(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MetadataSource for MockMetadataSource {
    async fn lookup(&self, package: &PackageName) -> Result<Vec<PackageName>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.lookups.lock().unwrap().push(package.to_string());

        if self.failing.contains(package.as_str()) {
            return Err(GraphError::MetadataLookupError {
                package_name: package.to_string(),
                details: "connection reset by peer".to_string(),
            }
            .into());
        }

        match self.packages.get(package.as_str()) {
            Some(deps) => deps.iter().map(PackageName::new).collect(),
            None => Err(GraphError::PackageNotFound {
                package_name: package.to_string(),
                details: "404 Not Found".to_string(),
            }
            .into()),
        }
    }
}
