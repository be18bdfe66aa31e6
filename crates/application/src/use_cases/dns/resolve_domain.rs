use super::ExchangeState;
use crate::ports::{DnsTransport, RetryListener};
use dns_client_domain::wire::{build_query, parse_response, Response, HEADER_LEN};
use dns_client_domain::{DnsRequest, DomainError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// How long each attempt waits for a response.
    pub timeout: Duration,

    /// Retransmissions allowed after the first attempt.
    pub max_retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            max_retries: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub response: Response,

    /// Queries sent, the successful one included.
    pub attempts: u32,

    /// Attempts that timed out before the response arrived.
    pub retries: u32,

    /// Time between sending the successful query and receiving its response.
    pub elapsed: Duration,

    pub query_id: u16,
}

pub struct ResolveDomainUseCase {
    transport: Arc<dyn DnsTransport>,
    policy: RetryPolicy,
    listener: Option<Arc<dyn RetryListener>>,
}

impl ResolveDomainUseCase {
    pub fn new(transport: Arc<dyn DnsTransport>, policy: RetryPolicy) -> Self {
        Self {
            transport,
            policy,
            listener: None,
        }
    }

    pub fn with_retry_listener(mut self, listener: Arc<dyn RetryListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Sends the query and waits for its response, retransmitting on timeout.
    ///
    /// The transaction ID is drawn once and reused by every retransmission,
    /// so a late answer to an earlier attempt is still accepted.
    pub async fn execute(&self, request: &DnsRequest) -> Result<Resolution, DomainError> {
        let query_id = fastrand::u16(..);
        let mut exchange = Exchange::new(query_id);
        let mut retries = 0u32;

        info!(
            domain = %request.domain,
            record_type = %request.query_type,
            server = %request.server,
            protocol = self.transport.protocol_name(),
            "Resolving"
        );

        loop {
            let query = exchange.guard(build_query(
                &request.domain,
                request.query_type,
                query_id,
            ))?;

            let started = Instant::now();
            exchange.guard(self.transport.send(&query).await)?;
            exchange.advance(ExchangeState::QuerySent);
            exchange.advance(ExchangeState::AwaitingResponse);

            match self.transport.receive(self.policy.timeout).await {
                Ok(bytes) => {
                    let elapsed = started.elapsed();
                    debug!(
                        id = query_id,
                        bytes_received = bytes.len(),
                        elapsed_ms = elapsed.as_millis() as u64,
                        "Response received"
                    );
                    let question_len = query.len() - HEADER_LEN;
                    let response =
                        exchange.guard(decode(&bytes, question_len, query_id, request))?;
                    exchange.advance(ExchangeState::Decoded);

                    return Ok(Resolution {
                        response,
                        attempts: retries + 1,
                        retries,
                        elapsed,
                        query_id,
                    });
                }
                Err(e) if e.is_retryable() => {
                    exchange.advance(ExchangeState::TimedOut);
                    if retries >= self.policy.max_retries {
                        debug!(
                            domain = %request.domain,
                            max_retries = self.policy.max_retries,
                            "Maximum number of retries exceeded"
                        );
                        exchange.advance(ExchangeState::Failed);
                        return Err(DomainError::MaxRetriesExceeded(self.policy.max_retries));
                    }
                    retries += 1;
                    let retries_left = self.policy.max_retries - retries;
                    debug!(
                        domain = %request.domain,
                        attempt = retries,
                        retries_left,
                        "Query timed out, retrying"
                    );
                    if let Some(listener) = &self.listener {
                        listener.on_retry(retries, retries_left);
                    }
                }
                Err(e) => return exchange.guard(Err(e)),
            }
        }
    }
}

/// Parses the response and checks that it answers the question that was sent.
fn decode(
    bytes: &[u8],
    question_len: usize,
    query_id: u16,
    request: &DnsRequest,
) -> Result<Response, DomainError> {
    let response = parse_response(bytes, question_len)?;

    if response.id() != query_id {
        return Err(DomainError::IdMismatch {
            expected: query_id,
            received: response.id(),
        });
    }

    match response.question_type {
        Some(echoed) if echoed == request.query_type => {}
        None if response.header.qdcount == 0 => {}
        echoed => {
            return Err(DomainError::QuestionMismatch {
                requested: request.query_type.to_string(),
                received: echoed
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
            });
        }
    }

    Ok(response)
}

struct Exchange {
    id: u16,
    state: ExchangeState,
}

impl Exchange {
    fn new(id: u16) -> Self {
        Self {
            id,
            state: ExchangeState::Idle,
        }
    }

    fn advance(&mut self, next: ExchangeState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid exchange transition {} -> {}",
            self.state,
            next
        );
        debug!(id = self.id, from = %self.state, to = %next, "Exchange state");
        self.state = next;
    }

    /// Moves to `Failed` when `result` is an error, then hands it back.
    fn guard<T>(&mut self, result: Result<T, DomainError>) -> Result<T, DomainError> {
        if let Err(e) = &result {
            debug!(id = self.id, error = %e, "Exchange failed");
            self.advance(ExchangeState::Failed);
        }
        result
    }
}
