pub mod dns;

pub use dns::{
    FlushCacheUseCase, ForwardLookupUseCase, HealthCheckUseCase, PropagationCheckUseCase,
    ReverseLookupUseCase,
};
