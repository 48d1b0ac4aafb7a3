use std::collections::HashSet;

use awsign_core::{Error, Result};
use log::debug;
use serde::Deserialize;

/// SignerType tells which signing scheme a service endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignerType {
    /// Requests are not signed.
    #[default]
    NoOp,
    /// Legacy query string signing.
    QueryString,
    /// Signature Version 3.
    V3,
    /// Signature Version 4.
    V4,
}

/// A service endpoint inside a region.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Endpoint {
    /// Service name, e.g. `sqs`.
    pub service: String,
    /// Hostname serving this service, e.g. `sqs.cn-north-1.amazonaws.com.cn`.
    pub hostname: String,
    /// Whether plain HTTP is served.
    #[serde(default = "default_true")]
    pub http: bool,
    /// Whether HTTPS is served.
    #[serde(default = "default_true")]
    pub https: bool,
    /// Signing scheme expected by this endpoint.
    #[serde(default)]
    pub signer: SignerType,
}

fn default_true() -> bool {
    true
}

/// A region and the service endpoints it offers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Region {
    /// Region name, e.g. `cn-north-1`.
    pub name: String,
    /// Domain of the region, e.g. `amazonaws.com.cn`.
    pub domain: String,
    /// Endpoints served in this region.
    #[serde(default, rename = "endpoint")]
    pub endpoints: Vec<Endpoint>,
}

impl Region {
    /// Lookup the endpoint of `service`.
    pub fn endpoint(&self, service: &str) -> Option<&Endpoint> {
        debug!("looking up endpoint for service name: {service}");
        self.endpoints.iter().find(|ep| ep.service == service)
    }

    /// Check if `service` is served in this region.
    pub fn is_service_supported(&self, service: &str) -> bool {
        self.endpoint(service).is_some()
    }

    /// Check if `service` is served over plain HTTP.
    pub fn has_http_endpoint(&self, service: &str) -> bool {
        self.endpoint(service).map(|ep| ep.http).unwrap_or(false)
    }

    /// Check if `service` is served over HTTPS.
    pub fn has_https_endpoint(&self, service: &str) -> bool {
        self.endpoint(service).map(|ep| ep.https).unwrap_or(false)
    }

    /// Signing scheme of `service`, unknown services are not signed.
    pub fn signer_type(&self, service: &str) -> SignerType {
        self.endpoint(service)
            .map(|ep| ep.signer)
            .unwrap_or(SignerType::NoOp)
    }

    /// Endpoint url of `service`, preferring HTTPS over HTTP.
    pub fn service_endpoint(&self, service: &str) -> Result<String> {
        let ep = self.endpoint(service).ok_or_else(|| {
            Error::config_invalid(format!(
                "service {service} is not supported in region {}",
                self.name
            ))
        })?;

        if ep.https {
            Ok(format!("https://{}", ep.hostname))
        } else if ep.http {
            Ok(format!("http://{}", ep.hostname))
        } else {
            Err(Error::config_invalid(format!(
                "service {service} in region {} has neither http nor https endpoint",
                self.name
            )))
        }
    }
}

/// Regions is the immutable registry of known regions.
///
/// It's built once at startup and handed to
/// [`SignerFactory`](crate::SignerFactory), there is no global state.
///
/// ```
/// use awsign_v4::{Regions, SignerType};
///
/// let regions = Regions::from_toml(
///     r#"
///     [[region]]
///     name = "cn-north-1"
///     domain = "amazonaws.com.cn"
///
///     [[region.endpoint]]
///     service = "sqs"
///     hostname = "sqs.cn-north-1.amazonaws.com.cn"
///     signer = "v4"
///     "#,
/// )
/// .unwrap();
///
/// let region = regions.region("cn-north-1").unwrap();
/// assert_eq!(region.signer_type("sqs"), SignerType::V4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Regions {
    #[serde(default, rename = "region")]
    regions: Vec<Region>,
}

impl Regions {
    /// Build a registry from a list of regions.
    pub fn new(regions: Vec<Region>) -> Result<Self> {
        let mut names = HashSet::new();
        for region in &regions {
            if region.name.is_empty() {
                return Err(Error::config_invalid("region name must not be empty"));
            }
            if let Some(ep) = region
                .endpoints
                .iter()
                .find(|ep| ep.service.is_empty() || ep.hostname.is_empty())
            {
                return Err(Error::config_invalid(format!(
                    "endpoint {ep:?} in region {} must have a service and a hostname",
                    region.name
                )));
            }
            if !names.insert(region.name.as_str()) {
                return Err(Error::config_invalid(format!(
                    "region {} is defined more than once",
                    region.name
                )));
            }
        }

        Ok(Self { regions })
    }

    /// Load a registry from a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let parsed: Regions = toml::from_str(content)
            .map_err(|e| Error::config_invalid("failed to parse regions").with_source(e))?;
        Self::new(parsed.regions)
    }

    /// The regions shipped with this crate.
    pub fn builtin() -> Self {
        let endpoint = |service: &str| Endpoint {
            service: service.to_string(),
            hostname: format!("{service}.cn-north-1.amazonaws.com.cn"),
            http: true,
            https: true,
            signer: SignerType::V4,
        };

        Self {
            regions: vec![Region {
                name: "cn-north-1".to_string(),
                domain: "amazonaws.com.cn".to_string(),
                endpoints: vec![endpoint("sqs"), endpoint("s3")],
            }],
        }
    }

    /// Lookup a region by name.
    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Iterate over all regions.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }
}
