//! Response cache for slowly-changing upstream lookups.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`MemoryCache`] - process-local TTL cache
//! - [`NullCache`] - no-op implementation for testing/disabled caching
//!
//! Handlers go through [`get_or_compute`], which stores the mapped output
//! record (not the raw upstream payload) keyed by endpoint identity plus
//! every resolved parameter value.

mod memory;
mod null_cache;
mod service;

pub use memory::MemoryCache;
pub use null_cache::NullCache;
pub use service::{CacheService, get_or_compute};
