//! Canonical forms of a request used as the signature input.
//!
//! Refer to [Create a canonical request](https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html#create-canonical-request).

use std::collections::BTreeMap;

use awsign_core::hash::hex_sha256;
use awsign_core::{Error, Result};

use crate::request::{encode_parameters, uri_encode, HttpMethod, Request};

/// Canonical resource path.
///
/// - Empty path becomes `/`.
/// - With `double_encode`, the path is percent encoded once more (`/` kept).
/// - A leading `/` is added when missing.
pub fn canonical_resource_path(path: &str, double_encode: bool) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    let value = if double_encode {
        uri_encode(path, true)
    } else {
        path.to_string()
    };
    if value.starts_with('/') {
        value
    } else {
        format!("/{value}")
    }
}

/// Canonical query string.
///
/// POST requests carry their parameters in the body, so the canonical query
/// is empty for them. Other methods use the encoded parameters in insertion
/// order, the same string that goes on the wire.
pub fn canonical_query_string(req: &Request) -> String {
    match req.method {
        HttpMethod::Post => String::new(),
        HttpMethod::Get => encode_parameters(&req.parameters),
    }
}

/// Replace every ASCII whitespace (including vertical tab) with a space.
fn canonical_header_value(v: &str) -> String {
    v.chars()
        .map(|c| match c {
            ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r' => ' ',
            c => c,
        })
        .collect()
}

/// Headers folded to lowercase names, later entries winning over earlier ones.
///
/// Lowercased keys in a `BTreeMap` give the case insensitive order.
fn canonical_headers(req: &Request) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    for (k, v) in req.headers.iter() {
        headers.insert(
            canonical_header_value(&k.to_lowercase()),
            canonical_header_value(v),
        );
    }
    headers
}

/// Canonical header block: `name:value\n` for every header, sorted by name.
pub fn canonical_header_string(req: &Request) -> String {
    let mut s = String::with_capacity(128);
    for (k, v) in canonical_headers(req) {
        s.push_str(&k);
        s.push(':');
        s.push_str(&v);
        s.push('\n');
    }
    s
}

/// Signed headers: lowercase header names, sorted and joined by `;`.
pub fn signed_headers_string(req: &Request) -> String {
    canonical_headers(req)
        .into_keys()
        .collect::<Vec<_>>()
        .join(";")
}

/// Hex encoded SHA256 of the payload.
///
/// For POST requests the payload is the encoded parameter string. Hashing
/// any other payload is not supported.
pub fn content_hash(req: &Request) -> Result<String> {
    match req.method {
        HttpMethod::Post => Ok(hex_sha256(encode_parameters(&req.parameters).as_bytes())),
        m => Err(Error::unsupported_payload(format!(
            "content hash of {m} request is not supported"
        ))),
    }
}
