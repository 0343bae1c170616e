// SSTP protocol definitions and request framing
//
// Reference: https://ssp.shillest.net/ukadoc/manual/spec_sstp.html

use thiserror::Error;

pub type SstpResult<T> = Result<T, SstpError>;

#[derive(Debug, Error)]
pub enum SstpError {
    #[error("connect to {host}:{port} failed: {source}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("unknown charset: {0}")]
    Charset(String),
}

// Request structure (text, no length prefix):
// NOTIFY SSTP/1.1
// Sender: <identity>
// Event: <name>
// Reference<N>: <value>   (one per value, N from 0, input order)
// Charset: <label>
// <blank line>
// Every line ends with CRLF; the blank line terminates the request.

pub const SSTP_VERSION_LINE: &str = "NOTIFY SSTP/1.1";
pub const CRLF: &str = "\r\n";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 9801;
pub const DEFAULT_CHARSET: &str = "Shift-JIS";

/// One NOTIFY request, built fresh per send and immutable once encoded.
#[derive(Debug, Clone)]
pub struct NotifyRequest {
    pub sender: String,
    pub event: String,
    pub references: Vec<String>,
    pub charset: String,
}

impl NotifyRequest {
    pub fn new(sender: &str, event: &str, references: &[&str], charset: &str) -> Self {
        Self {
            sender: sender.to_string(),
            event: event.to_string(),
            references: references.iter().map(|r| r.to_string()).collect(),
            charset: charset.to_string(),
        }
    }

    /// Encode the request as a CRLF-framed header block.
    ///
    /// Header values are written verbatim. A value containing CRLF corrupts
    /// framing; the protocol has no escaping and existing listeners expect
    /// none, so none is performed here.
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(64 + self.references.len() * 32);

        out.push_str(SSTP_VERSION_LINE);
        out.push_str(CRLF);
        out.push_str("Sender: ");
        out.push_str(&self.sender);
        out.push_str(CRLF);
        out.push_str("Event: ");
        out.push_str(&self.event);
        out.push_str(CRLF);

        for (i, reference) in self.references.iter().enumerate() {
            out.push_str("Reference");
            out.push_str(&i.to_string());
            out.push_str(": ");
            out.push_str(reference);
            out.push_str(CRLF);
        }

        out.push_str("Charset: ");
        out.push_str(&self.charset);
        out.push_str(CRLF);
        out.push_str(CRLF);

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test-only reference parser: recovers (event, references) from an
    // encoded request. Production code never parses its own format.
    fn parse_request(encoded: &str) -> (String, Vec<String>) {
        let mut event = String::new();
        let mut references = Vec::new();

        for line in encoded.split(CRLF) {
            if let Some(name) = line.strip_prefix("Event: ") {
                event = name.to_string();
            } else if let Some(rest) = line.strip_prefix("Reference") {
                if let Some((_, value)) = rest.split_once(": ") {
                    references.push(value.to_string());
                }
            }
        }

        (event, references)
    }

    #[test]
    fn test_encode_golden_vector() {
        let request = NotifyRequest::new("GIPS.NET", "OnGIPSStart", &["0.1", "0"], "Shift-JIS");

        assert_eq!(
            request.encode(),
            "NOTIFY SSTP/1.1\r\n\
             Sender: GIPS.NET\r\n\
             Event: OnGIPSStart\r\n\
             Reference0: 0.1\r\n\
             Reference1: 0\r\n\
             Charset: Shift-JIS\r\n\
             \r\n"
        );
    }

    #[test]
    fn test_encode_no_references() {
        let request = NotifyRequest::new("GIPS.NET", "AnyEvent", &[], "Shift-JIS");
        let encoded = request.encode();

        assert!(!encoded.contains("Reference"));
        assert!(encoded.ends_with("Charset: Shift-JIS\r\n\r\n"));
    }

    #[test]
    fn test_reference_headers_in_input_order() {
        let refs = ["a", "b", "c", "d", "e"];
        let request = NotifyRequest::new("s", "E", &refs, "UTF-8");
        let encoded = request.encode();

        for (i, value) in refs.iter().enumerate() {
            assert!(encoded.contains(&format!("Reference{}: {}\r\n", i, value)));
        }
        assert!(!encoded.contains("Reference5"));

        // Exactly one blank line, at the very end
        assert!(encoded.ends_with("\r\n\r\n"));
        assert_eq!(encoded.matches("\r\n\r\n").count(), 1);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let a = NotifyRequest::new("s", "E", &["x", "y"], "Shift-JIS").encode();
        let b = NotifyRequest::new("s", "E", &["x", "y"], "Shift-JIS").encode();
        assert_eq!(a, b);
    }

    #[test]
    fn test_round_trip_framing() {
        let refs = ["C#", "System.NullReferenceException", "Program.cs", "42"];
        let request = NotifyRequest::new("GIPS.NET", "OnExceptionOccured", &refs, "Shift-JIS");

        let (event, references) = parse_request(&request.encode());
        assert_eq!(event, "OnExceptionOccured");
        assert_eq!(references, refs);
    }

    #[test]
    fn test_empty_sender_is_not_rejected() {
        // The protocol does not forbid an empty Sender value
        let request = NotifyRequest::new("", "E", &[], "UTF-8");
        assert!(request.encode().contains("Sender: \r\n"));
    }
}
