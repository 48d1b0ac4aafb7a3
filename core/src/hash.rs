// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Hash related utils.

use std::fmt;
use std::str::FromStr;

use crate::Error;
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::Hmac;
use hmac::Mac;
use sha1::Sha1;
use sha2::Digest;
use sha2::Sha256;

/// Keyed hash algorithms accepted by [`hmac`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningAlgorithm {
    /// HMAC with SHA1, 20 bytes output.
    HmacSha1,
    /// HMAC with SHA256, 32 bytes output.
    HmacSha256,
}

impl SigningAlgorithm {
    /// The canonical name of this algorithm, e.g. `HmacSHA256`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SigningAlgorithm::HmacSha1 => "HmacSHA1",
            SigningAlgorithm::HmacSha256 => "HmacSHA256",
        }
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SigningAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "HmacSHA1" => Ok(SigningAlgorithm::HmacSha1),
            "HmacSHA256" => Ok(SigningAlgorithm::HmacSha256),
            v => Err(Error::unsupported_algorithm(format!(
                "signing algorithm {v} is not supported"
            ))),
        }
    }
}

/// Base64 encode
pub fn base64_encode(content: &[u8]) -> String {
    BASE64_STANDARD.encode(content)
}

/// Lowercase hex encode
pub fn hex_encode(content: &[u8]) -> String {
    hex::encode(content)
}

/// SHA256 digest.
pub fn sha256(content: &[u8]) -> Vec<u8> {
    Sha256::digest(content).to_vec()
}

/// Hex encoded SHA256 hash.
///
/// Use this function instead of `hex::encode(sha256(content))` can reduce
/// extra copy.
pub fn hex_sha256(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content).as_slice())
}

/// HMAC with the given algorithm.
///
/// Never fails for a supported algorithm, any key length is accepted.
pub fn hmac(algorithm: SigningAlgorithm, key: &[u8], content: &[u8]) -> Vec<u8> {
    match algorithm {
        SigningAlgorithm::HmacSha1 => hmac_sha1(key, content),
        SigningAlgorithm::HmacSha256 => hmac_sha256(key, content),
    }
}

/// HMAC with SHA1 hash.
pub fn hmac_sha1(key: &[u8], content: &[u8]) -> Vec<u8> {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha1>::new_from_slice(key).unwrap();
    h.update(content);

    h.finalize().into_bytes().to_vec()
}

/// HMAC with SHA256 hash.
pub fn hmac_sha256(key: &[u8], content: &[u8]) -> Vec<u8> {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(content);

    h.finalize().into_bytes().to_vec()
}

/// Hex encoded HMAC with SHA256 hash.
///
/// Use this function instead of `hex::encode(hmac_sha256(key, content))` can
/// reduce extra copy.
pub fn hex_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(content);

    hex::encode(h.finalize().into_bytes())
}

/// Base64 encoded HMAC with the given algorithm.
pub fn base64_hmac(algorithm: SigningAlgorithm, key: &[u8], content: &[u8]) -> String {
    base64_encode(&hmac(algorithm, key, content))
}
