use pydepgraph::prelude::*;
use pydepgraph::shared::error::GraphError;
use std::collections::HashMap;

/// Mock PackageSizeSource with fixed sizes in kilobytes
#[derive(Default, Clone)]
pub struct MockSizeSource {
    kilobytes: HashMap<String, u64>,
}

impl MockSizeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, name: &str, kilobytes: u64) -> Self {
        self.kilobytes.insert(name.to_string(), kilobytes);
        self
    }
}

#[async_trait::async_trait]
impl PackageSizeSource for MockSizeSource {
    async fn size_of(&self, package: &PackageName) -> Result<PackageSize> {
        self.kilobytes
            .get(package.as_str())
            .map(|kb| PackageSize::from_kilobytes(*kb))
            .ok_or_else(|| {
                GraphError::MetadataLookupError {
                    package_name: package.to_string(),
                    details: "no size on record".to_string(),
                }
                .into()
            })
    }
}
