/// Filesystem adapters for the cache file and rendered output
mod file_writer;
mod json_cache_repository;

pub use file_writer::FileSystemWriter;
pub use json_cache_repository::{JsonCacheRepository, DEFAULT_CACHE_FILE};
