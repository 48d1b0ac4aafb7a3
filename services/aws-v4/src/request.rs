use std::fmt;

use awsign_core::{Error, Result};
use http::header::{HeaderName, HeaderValue};
use percent_encoding::utf8_percent_encode;

use crate::constants::{AWS_PATH_ENCODE_SET, AWS_URI_ENCODE_SET};

/// HTTP method of a request to be signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    /// Parameters travel in the query string.
    Get,
    /// Parameters travel in the form encoded body.
    #[default]
    Post,
}

impl HttpMethod {
    /// Method name as it appears on the wire and in the canonical request.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for http::Method {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Post => http::Method::POST,
        }
    }
}

/// An insertion ordered string to string map.
///
/// Keys are compared exactly, so `X-Amz-Date` and `x-amz-date` are two
/// different entries. [`StringMap::set`] moves the written entry to the end,
/// which makes the last write win for any consumer that folds keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringMap {
    entries: Vec<(String, String)>,
}

impl StringMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any entry with the exact same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.entries.retain(|(k, _)| *k != key);
        self.entries.push((key, value.into()));
    }

    /// Get the value stored under exactly `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Remove the entry stored under exactly `key`.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StringMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut m = StringMap::new();
        for (k, v) in iter {
            m.set(k, v);
        }
        m
    }
}

/// Represents a request being sent to a service endpoint.
///
/// The signer reads every field and only ever writes into `headers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// HTTP method.
    pub method: HttpMethod,
    /// Scheme and host of the service, e.g. `https://sqs.cn-north-1.amazonaws.com.cn`.
    pub endpoint: String,
    /// Path to the resource, may be empty and may omit the leading `/`.
    pub resource_path: String,
    /// Service parameters, sent in the body for POST and in the query for GET.
    pub parameters: StringMap,
    /// HTTP headers.
    pub headers: StringMap,
}

impl Request {
    /// Create a request against `endpoint`.
    pub fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the resource path.
    pub fn with_resource_path(mut self, path: impl Into<String>) -> Self {
        self.resource_path = path.into();
        self
    }

    /// Set a parameter.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.set(key, value);
        self
    }

    /// Set a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(key, value);
        self
    }

    /// Host portion of the endpoint.
    ///
    /// Everything up to and including `://` is dropped, so is everything from
    /// the first `/` after it.
    pub fn host(&self) -> Result<&str> {
        let host = match self.endpoint.find("://") {
            Some(idx) => &self.endpoint[idx + 3..],
            None => self.endpoint.as_str(),
        };
        let host = match host.find('/') {
            Some(idx) => &host[..idx],
            None => host,
        };

        if host.is_empty() {
            return Err(Error::request_invalid(format!(
                "endpoint {:?} doesn't contain a host",
                self.endpoint
            )));
        }
        Ok(host)
    }

    /// Build the http request that carries this request on the wire.
    ///
    /// POST requests carry the encoded parameters as body, GET requests as
    /// query string. Headers are folded by case insensitive name with later
    /// entries winning, matching the canonical headers that were signed.
    pub fn to_http(&self) -> Result<http::Request<String>> {
        let mut url = append_uri(&self.endpoint, &self.resource_path, true);
        let encoded_params = encode_parameters(&self.parameters);

        let body = match self.method {
            HttpMethod::Post => encoded_params,
            HttpMethod::Get => {
                if !encoded_params.is_empty() {
                    url.push('?');
                    url.push_str(&encoded_params);
                }
                String::new()
            }
        };

        let mut req = http::Request::builder()
            .method(http::Method::from(self.method))
            .uri(url)
            .body(body)?;
        for (k, v) in self.headers.iter() {
            req.headers_mut()
                .insert(HeaderName::from_bytes(k.as_bytes())?, HeaderValue::from_str(v)?);
        }
        Ok(req)
    }
}

/// Percent encode `value` keeping RFC 2396 unreserved characters.
///
/// When `path` is true, `/` is kept as well.
pub fn uri_encode(value: &str, path: bool) -> String {
    if path {
        utf8_percent_encode(value, &AWS_PATH_ENCODE_SET).to_string()
    } else {
        utf8_percent_encode(value, &AWS_URI_ENCODE_SET).to_string()
    }
}

/// Append the encoded `path` to `base` with exactly one `/` between them.
///
/// With `escape_double_slash`, any `//` left in the encoded path becomes
/// `/%2F` so that servers don't collapse empty segments.
pub fn append_uri(base: &str, path: &str, escape_double_slash: bool) -> String {
    let mut uri = base.to_string();
    if path.is_empty() {
        if !uri.ends_with('/') {
            uri.push('/');
        }
        return uri;
    }

    if path.starts_with('/') {
        if uri.ends_with('/') {
            uri.pop();
        }
    } else if !uri.ends_with('/') {
        uri.push('/');
    }

    let encoded = uri_encode(path, true);
    if escape_double_slash {
        uri.push_str(&encoded.replace("//", "/%2F"));
    } else {
        uri.push_str(&encoded);
    }
    uri
}

/// Encode parameters as `k1=v1&k2=v2` in insertion order.
///
/// This is both the POST body and the GET query string.
pub fn encode_parameters(params: &StringMap) -> String {
    let mut s = String::with_capacity(64);
    for (idx, (k, v)) in params.iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }
        s.push_str(&uri_encode(k, false));
        s.push('=');
        s.push_str(&uri_encode(v, false));
    }
    s
}
