/// Network adapters for package index API calls
mod pypi_client;

pub use pypi_client::{PyPiMetadataSource, DEFAULT_INDEX_URL};
