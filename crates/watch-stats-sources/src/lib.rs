pub mod cache;
pub mod client;
pub mod error;
pub mod gate;
pub mod traits;

pub use cache::{CacheStats, ResponseCache};
pub use client::{CachedMetadataClient, MetadataCaches};
pub use error::SourceError;
pub use gate::RequestGate;
pub use traits::MetadataClient;
