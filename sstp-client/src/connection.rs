// One-shot SSTP transport
//
// Every notification owns a fresh TCP connection: connect, write, flush,
// read one reply line, close. No reuse, no retry, no queueing.

use crate::charset;
use crate::protocol::{SstpError, SstpResult};
use encoding_rs::Encoding;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// Deliver one encoded request to the listener and best-effort read its
/// reply line. Connect and read are each capped by `deadline`, so a dead or
/// stalled listener can never hang the caller past the cap.
///
/// The reply is reserved by the current contract: it is logged at debug
/// level and discarded, and the returned string is always empty. The socket
/// is released on every exit path (dropped on return).
pub async fn send_request(
    host: &str,
    port: u16,
    request: &str,
    encoding: &'static Encoding,
    deadline: Duration,
) -> SstpResult<String> {
    debug!("Connecting to SSTP listener at {}:{}", host, port);

    let mut stream = timeout(deadline, TcpStream::connect((host, port)))
        .await
        .map_err(|_| SstpError::Timeout(deadline))?
        .map_err(|source| SstpError::Connect {
            host: host.to_string(),
            port,
            source,
        })?;

    let bytes = charset::encode_request(request, encoding);
    stream.write_all(&bytes).await?;
    stream.flush().await?;

    debug!("Wrote {} bytes, waiting for reply line", bytes.len());

    let mut reader = BufReader::new(stream);
    let mut line = Vec::new();
    match timeout(deadline, reader.read_until(b'\n', &mut line)).await {
        Ok(Ok(0)) => debug!("Listener closed without reply"),
        Ok(Ok(_)) => {
            let reply = charset::decode_reply(&line, encoding);
            debug!("Listener replied: {}", reply.trim_end());
        }
        Ok(Err(e)) => return Err(SstpError::Io(e)),
        Err(_) => return Err(SstpError::Timeout(deadline)),
    }

    Ok(String::new())
}
