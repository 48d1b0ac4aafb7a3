use awsign_core::hash::hmac_sha256;

use crate::constants::{AWS4_KEY_PREFIX, AWS4_TERMINATOR};

/// Derive the signing key for one date, region and service.
///
/// ```text
/// kSecret  = "AWS4" + secret
/// kDate    = HMAC-SHA256(kSecret, date)
/// kRegion  = HMAC-SHA256(kDate, region)
/// kService = HMAC-SHA256(kRegion, service)
/// kSigning = HMAC-SHA256(kService, "aws4_request")
/// ```
///
/// `date` must be formatted as `yyyyMMdd`.
pub fn generate_signing_key(secret: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("{AWS4_KEY_PREFIX}{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), AWS4_TERMINATOR.as_bytes())
}
