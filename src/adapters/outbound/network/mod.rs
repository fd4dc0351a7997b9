/// Network adapters for registry access
mod caching_registry_client;
mod pypi_client;

pub use caching_registry_client::CachingRegistryClient;
pub use pypi_client::PyPiRegistryClient;
