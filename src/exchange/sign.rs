//! Canonical-string HMAC-SHA256 request signing
//!
//! The exchange authenticates private calls by recomputing an HMAC over
//! the exact parameter string the client signed. Field order is part of
//! the contract: parameters are joined in insertion order, never sorted.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Build the canonical parameter string: `key=value` pairs joined with
/// `&`, values url-encoded, in exact insertion order.
pub fn canonical_string(params: &[(&str, String)]) -> String {
    serde_urlencoded::to_string(params).expect("string pairs always encode")
}

/// Sign the canonical form of `params` with HMAC-SHA256 keyed by
/// `secret_key`, returning the digest as lowercase hex.
///
/// Any formatting drift between client and exchange (e.g. an integer
/// rendered with a trailing fraction) produces a valid-looking signature
/// that the exchange rejects, so callers must stringify numbers through
/// the same path they serialize with.
pub fn sign(secret_key: &str, params: &[(&str, String)]) -> String {
    let canonical = canonical_string(params);
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(canonical.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
