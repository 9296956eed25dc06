/// Process adapters that query local tooling through subprocesses
mod installed_metadata_source;

pub use installed_metadata_source::{InstalledMetadataSource, DEFAULT_PYTHON};
