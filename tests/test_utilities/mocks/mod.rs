/// Mock implementations for testing
mod mock_graph_renderer;
mod mock_metadata_source;
mod mock_progress_reporter;
mod mock_size_source;

#[allow(unused_imports)]
pub use mock_graph_renderer::MockGraphRenderer;
pub use mock_metadata_source::MockMetadataSource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_size_source::MockSizeSource;
