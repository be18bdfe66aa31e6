#![allow(dead_code)]

use async_trait::async_trait;
use dns_client_application::ports::{DnsTransport, RetryListener};
use dns_client_domain::DomainError;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

type Responder = Box<dyn Fn(&[u8]) -> Vec<u8> + Send + Sync>;

/// What the next `receive` call yields.
pub enum Scripted {
    Timeout,
    /// Builds the datagram from the most recently sent query.
    Reply(Responder),
    Fail(DomainError),
}

impl Scripted {
    pub fn reply(f: impl Fn(&[u8]) -> Vec<u8> + Send + Sync + 'static) -> Self {
        Scripted::Reply(Box::new(f))
    }
}

/// Transport that replays a script instead of touching the network.
/// An exhausted script behaves like a silent server.
pub struct MockTransport {
    script: Mutex<VecDeque<Scripted>>,
    sent: Mutex<Vec<Vec<u8>>>,
    timeouts: Mutex<Vec<Duration>>,
    send_error: Mutex<Option<DomainError>>,
}

impl MockTransport {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            sent: Mutex::new(Vec::new()),
            timeouts: Mutex::new(Vec::new()),
            send_error: Mutex::new(None),
        }
    }

    pub fn failing_send(error: DomainError) -> Self {
        let transport = Self::new(vec![]);
        *transport.send_error.lock().unwrap() = Some(error);
        transport
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.sent.lock().unwrap().clone()
    }

    pub fn receive_timeouts(&self) -> Vec<Duration> {
        self.timeouts.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send(&self, message: &[u8]) -> Result<(), DomainError> {
        if let Some(error) = self.send_error.lock().unwrap().clone() {
            return Err(error);
        }
        self.sent.lock().unwrap().push(message.to_vec());
        Ok(())
    }

    async fn receive(&self, timeout: Duration) -> Result<Vec<u8>, DomainError> {
        self.timeouts.lock().unwrap().push(timeout);
        let next = self.script.lock().unwrap().pop_front();
        match next {
            None | Some(Scripted::Timeout) => Err(DomainError::QueryTimeout),
            Some(Scripted::Fail(error)) => Err(error),
            Some(Scripted::Reply(respond)) => {
                let query = self.sent.lock().unwrap().last().cloned().unwrap_or_default();
                Ok(respond(&query))
            }
        }
    }
}

#[derive(Default)]
pub struct RecordingListener {
    events: Mutex<Vec<(u32, u32)>>,
}

impl RecordingListener {
    pub fn events(&self) -> Vec<(u32, u32)> {
        self.events.lock().unwrap().clone()
    }
}

impl RetryListener for RecordingListener {
    fn on_retry(&self, retry: u32, retries_left: u32) {
        self.events.lock().unwrap().push((retry, retries_left));
    }
}
