// Charset resolution and request byte conversion
//
// The configured label travels on the wire verbatim in the Charset header;
// resolution to an actual encoding uses WHATWG label lookup, so "Shift-JIS",
// "shift_jis" and "sjis" all map to the same encoding.

use crate::protocol::{SstpError, SstpResult};
use encoding_rs::Encoding;

/// Resolve a charset label to its encoding, or fail that call only.
pub fn resolve(label: &str) -> SstpResult<&'static Encoding> {
    Encoding::for_label(label.as_bytes()).ok_or_else(|| SstpError::Charset(label.to_string()))
}

/// Encode the framed request text into listener-facing bytes.
/// Unmappable characters become numeric character references, never an error.
pub fn encode_request(text: &str, encoding: &'static Encoding) -> Vec<u8> {
    let (bytes, _, _) = encoding.encode(text);
    bytes.into_owned()
}

/// Decode a reply line read from the listener, lossily.
pub fn decode_reply(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}
