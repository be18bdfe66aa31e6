pub mod dns;

pub use dns::{ExchangeState, Resolution, ResolveDomainUseCase, RetryPolicy};
