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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Headers written by the v4 signer.
pub const HOST: &str = "Host";
pub const X_AMZ_DATE: &str = "X-Amz-Date";
pub const AUTHORIZATION: &str = "Authorization";

// Signature Version 4 values.
pub const AWS4_SIGNING_ALGORITHM: &str = "AWS4-HMAC-SHA256";
pub const AWS4_TERMINATOR: &str = "aws4_request";
pub const AWS4_KEY_PREFIX: &str = "AWS4";

/// AsciiSet for RFC 2396 unreserved characters.
///
/// Letters, digits and `-_.!~*'()` are kept as is, every other byte is
/// encoded as `%XX` with uppercase hex digits.
pub static AWS_URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// AsciiSet for resource paths: [`AWS_URI_ENCODE_SET`] with `/` kept.
pub static AWS_PATH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');
