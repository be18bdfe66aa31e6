mod exchange_state;
mod resolve_domain;

pub use exchange_state::ExchangeState;
pub use resolve_domain::{Resolution, ResolveDomainUseCase, RetryPolicy};
