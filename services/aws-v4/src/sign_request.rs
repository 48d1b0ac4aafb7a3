use awsign_core::hash::{hex_hmac_sha256, hex_sha256};
use awsign_core::time::{format_date, format_iso8601, DateTime};
use awsign_core::utils::Redact;
use awsign_core::{Context, Error, Result, SignRequest, SigningCredential};
use log::debug;

use crate::canonical::{
    canonical_header_string, canonical_query_string, canonical_resource_path, content_hash,
    signed_headers_string,
};
use crate::constants::{
    AUTHORIZATION, AWS4_SIGNING_ALGORITHM, AWS4_TERMINATOR, HOST, X_AMZ_DATE,
};
use crate::key::generate_signing_key;
use crate::request::{append_uri, Request};
use crate::Credential;

/// RequestSigner that implement AWS SigV4.
///
/// Service and region are fixed at construction. To sign for several
/// services or regions, build one signer for each of them.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSigner {
    service: String,
    region: String,
    double_url_encode: bool,
}

impl RequestSigner {
    /// Create a new signer for `service` in `region`.
    ///
    /// The resource path is double url encoded by default.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.into(),
            region: region.into(),
            double_url_encode: true,
        }
    }

    /// Control whether the resource path is url encoded a second time while
    /// building the canonical request.
    pub fn with_double_url_encode(mut self, enabled: bool) -> Self {
        self.double_url_encode = enabled;
        self
    }

    /// Service name used in the credential scope.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Region name used in the credential scope.
    pub fn region(&self) -> &str {
        &self.region
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;
    type Request = Request;

    fn sign_request(
        &self,
        ctx: &Context,
        req: &mut Request,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Ok(());
        };
        if !cred.is_valid() {
            return Err(Error::request_invalid(format!(
                "credential {cred:?} must have both access key id and secret access key"
            )));
        }

        let params = SigningParams::new(ctx.now(), &self.region, &self.service)?;
        debug!(
            "signing request with access key {} and scope {}",
            Redact::from(&cred.access_key_id),
            params.scope
        );

        // Every fallible step happens before the request is touched.
        let host = req.host()?.to_string();
        let content_sha256 = content_hash(req)?;

        // Host and X-Amz-Date must be present before the canonical headers are built.
        req.headers.set(HOST, host);
        req.headers.set(X_AMZ_DATE, params.formatted_date_time.as_str());

        let creq = canonical_request_string(req, self.double_url_encode, &content_sha256);
        debug!("calculated canonical request: {creq}");

        let string_to_sign = string_to_sign(&creq, &params);
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = generate_signing_key(
            &cred.secret_access_key,
            &params.formatted_date,
            &params.region,
            &params.service,
        );
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let authorization = format!(
            "{AWS4_SIGNING_ALGORITHM} Credential={}/{},SignedHeaders={},Signature={}",
            cred.access_key_id,
            params.scope,
            signed_headers_string(req),
            signature
        );
        req.headers.set(AUTHORIZATION, authorization);

        Ok(())
    }
}

/// Values derived from the signing instant, valid for a single sign call.
#[derive(Debug)]
struct SigningParams<'a> {
    region: &'a str,
    service: &'a str,

    /// `yyyyMMdd`
    formatted_date: String,
    /// `yyyyMMdd'T'HHmmss'Z'`
    formatted_date_time: String,
    /// `<date>/<region>/<service>/aws4_request`
    scope: String,
}

impl<'a> SigningParams<'a> {
    fn new(now: DateTime, region: &'a str, service: &'a str) -> Result<Self> {
        if region.is_empty() {
            return Err(Error::config_invalid("region name must not be empty"));
        }
        if service.is_empty() {
            return Err(Error::config_invalid("service name must not be empty"));
        }

        let formatted_date = format_date(now);
        let scope = format!("{formatted_date}/{region}/{service}/{AWS4_TERMINATOR}");

        Ok(Self {
            region,
            service,
            formatted_date,
            formatted_date_time: format_iso8601(now),
            scope,
        })
    }
}

/// Build the canonical request.
///
/// ```text
/// POST
/// /
///
/// host:sqs.cn-north-1.amazonaws.com.cn
/// x-amz-date:20150830T123600Z
///
/// host;x-amz-date
/// <hex sha256 of payload>
/// ```
fn canonical_request_string(req: &Request, double_url_encode: bool, content_sha256: &str) -> String {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    f.push_str(req.method.as_str());
    f.push('\n');
    // The path is url encoded once here, and optionally a second time while
    // being canonicalized.
    let path = append_uri("/", &req.resource_path, false);
    f.push_str(&canonical_resource_path(&path, double_url_encode));
    f.push('\n');
    f.push_str(&canonical_query_string(req));
    f.push('\n');
    f.push_str(&canonical_header_string(req));
    f.push('\n');
    f.push_str(&signed_headers_string(req));
    f.push('\n');
    f.push_str(content_sha256);

    f
}

/// Build the string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20150830T123600Z
/// 20150830/<region>/<service>/aws4_request
/// <hashed_canonical_request>
/// ```
fn string_to_sign(canonical_request: &str, params: &SigningParams<'_>) -> String {
    format!(
        "{AWS4_SIGNING_ALGORITHM}\n{}\n{}\n{}",
        params.formatted_date_time,
        params.scope,
        hex_sha256(canonical_request.as_bytes())
    )
}
