/// Metadata adapters - composition of pip, the registry, and install state
/// into the MetadataProvider port
mod pip_provider;

pub use pip_provider::PipMetadataProvider;
