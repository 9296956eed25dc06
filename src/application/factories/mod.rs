mod metadata_source_factory;
mod renderer_factory;

pub use metadata_source_factory::MetadataSourceFactory;
pub use renderer_factory::RendererFactory;
