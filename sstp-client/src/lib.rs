// SSTP NOTIFY client for ukagaka desktop companions
//
// Forwards debugger state-change and unhandled-exception events to a
// companion listener as SSTP/1.1 NOTIFY requests:
// - CRLF-framed header block with positional Reference fields
// - one fresh TCP connection per notification, no reuse, no retry
// - best-effort delivery: a dead listener never disturbs the caller

pub mod charset;
pub mod connection;
pub mod events;
pub mod notifier;
pub mod protocol;

pub use events::{NotificationEvent, SessionStart, UnhandledException};
pub use notifier::SstpNotifier;
pub use protocol::{NotifyRequest, SstpError, SstpResult};
