pub mod flush_cache;
pub mod forward_lookup;
pub mod health_check;
pub mod propagation;
pub mod reverse_lookup;

pub use flush_cache::FlushCacheUseCase;
pub use forward_lookup::ForwardLookupUseCase;
pub use health_check::HealthCheckUseCase;
pub use propagation::PropagationCheckUseCase;
pub use reverse_lookup::ReverseLookupUseCase;
