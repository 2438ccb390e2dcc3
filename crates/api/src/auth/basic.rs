//! HTTP Basic credential parsing (RFC 7617).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Parse an `Authorization` header value of the form `Basic <base64>` into
/// `(username, password)`.
///
/// Returns `None` for any malformed input: wrong scheme, invalid base64,
/// non-UTF-8 payload, or a payload without a `:` separator. The password may
/// itself contain `:`; only the first separator splits.
pub fn parse_basic_header(value: &str) -> Option<(String, String)> {
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}
