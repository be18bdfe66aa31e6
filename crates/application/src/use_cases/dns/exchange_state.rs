use std::fmt;

/// Lifecycle of one query/response exchange.
///
/// `Idle → QuerySent → AwaitingResponse → {Decoded | TimedOut | Failed}`;
/// `TimedOut` re-enters `QuerySent` when a retry is allowed. `Decoded` and
/// `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeState {
    Idle,
    QuerySent,
    AwaitingResponse,
    Decoded,
    TimedOut,
    Failed,
}

impl ExchangeState {
    pub fn can_transition_to(&self, next: ExchangeState) -> bool {
        use ExchangeState::*;
        matches!(
            (self, next),
            (Idle, QuerySent)
                | (Idle, Failed)
                | (QuerySent, AwaitingResponse)
                | (QuerySent, Failed)
                | (AwaitingResponse, Decoded)
                | (AwaitingResponse, TimedOut)
                | (AwaitingResponse, Failed)
                | (TimedOut, QuerySent)
                | (TimedOut, Failed)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ExchangeState::Decoded | ExchangeState::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeState::Idle => "idle",
            ExchangeState::QuerySent => "query_sent",
            ExchangeState::AwaitingResponse => "awaiting_response",
            ExchangeState::Decoded => "decoded",
            ExchangeState::TimedOut => "timed_out",
            ExchangeState::Failed => "failed",
        }
    }
}

impl fmt::Display for ExchangeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
