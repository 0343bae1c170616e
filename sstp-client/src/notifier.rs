// Notifier facade
//
// The single entry point the IDE-side event extractor calls. Each call is a
// stateless one-shot transaction over its own connection; the notifier holds
// only read-only configuration, so sharing it across threads is safe.

use crate::charset;
use crate::connection;
use crate::events::NotificationEvent;
use crate::protocol::{NotifyRequest, SstpResult, DEFAULT_CHARSET, DEFAULT_HOST, DEFAULT_PORT};
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct SstpNotifier {
    sender: String,
    host: String,
    port: u16,
    charset: String,
    timeout: Duration,
}

impl SstpNotifier {
    /// Create a notifier for the default listener at 127.0.0.1:9801.
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            charset: DEFAULT_CHARSET.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Cap on the connect and reply-read phases of each send.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send a named event with positional reference values, surfacing
    /// transport and charset failures to the caller as typed errors.
    pub async fn send(&self, event: &str, references: &[&str]) -> SstpResult<String> {
        let encoding = charset::resolve(&self.charset)?;
        let request = NotifyRequest::new(&self.sender, event, references, &self.charset);

        debug!("Sending {} with {} references", event, references.len());

        connection::send_request(
            &self.host,
            self.port,
            &request.encode(),
            encoding,
            self.timeout,
        )
        .await
    }

    /// Fire-and-forget variant for the debugger event path. Failures are
    /// logged and swallowed; the debugging session must never observe one.
    /// Returns the (reserved, currently always empty) reply string.
    pub async fn notify(&self, event: &str, references: &[&str]) -> String {
        match self.send(event, references).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Notification {} not delivered: {}", event, e);
                String::new()
            }
        }
    }

    /// Fire a typed event, with reference order pinned by the event type.
    pub async fn notify_event(&self, event: &impl NotificationEvent) -> String {
        let references = event.references();
        let references: Vec<&str> = references.iter().map(String::as_str).collect();
        self.notify(event.event_name(), &references).await
    }
}
