use awsign_core::{Context, Error, Result, SignRequest};
use log::{debug, warn};

use crate::region::{Regions, SignerType};
use crate::request::Request;
use crate::{Credential, RequestSigner};

/// Signer is the signing scheme selected for one service in one region.
///
/// Only [`Signer::V4`] carries a real implementation. Every other variant
/// returns an [`ErrorKind::UnsupportedSigner`](awsign_core::ErrorKind::UnsupportedSigner)
/// error as soon as it is asked to sign with a credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signer {
    /// Requests are sent unsigned.
    NoOp,
    /// Legacy query string signing, not implemented.
    QueryString,
    /// Signature Version 3, not implemented.
    V3,
    /// Signature Version 4.
    V4(RequestSigner),
}

impl Signer {
    /// The type tag of this signer.
    pub fn signer_type(&self) -> SignerType {
        match self {
            Signer::NoOp => SignerType::NoOp,
            Signer::QueryString => SignerType::QueryString,
            Signer::V3 => SignerType::V3,
            Signer::V4(_) => SignerType::V4,
        }
    }
}

impl SignRequest for Signer {
    type Credential = Credential;
    type Request = Request;

    fn sign_request(
        &self,
        ctx: &Context,
        req: &mut Request,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        if let Signer::V4(signer) = self {
            return signer.sign_request(ctx, req, credential);
        }

        // Anonymous requests are never signed, whatever the scheme.
        if credential.is_none() {
            return Ok(());
        }

        Err(Error::unsupported_signer(format!(
            "signer {:?} can't sign requests",
            self.signer_type()
        )))
    }
}

/// SignerFactory picks the signer for a service and region.
#[derive(Debug, Clone)]
pub struct SignerFactory {
    regions: Regions,
}

impl Default for SignerFactory {
    fn default() -> Self {
        Self::new(Regions::builtin())
    }
}

impl SignerFactory {
    /// Create a factory over the given region registry.
    pub fn new(regions: Regions) -> Self {
        Self { regions }
    }

    /// Region registry used by this factory.
    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    /// Build the signer for `service` in `region`.
    ///
    /// Returns an error if either name is empty or the region is unknown.
    /// Services the region doesn't know are given a [`Signer::NoOp`].
    pub fn signer(&self, service: &str, region: &str) -> Result<Signer> {
        if service.is_empty() || region.is_empty() {
            return Err(Error::config_invalid(format!(
                "service {service:?} and region {region:?} must not be empty"
            )));
        }

        let Some(r) = self.regions.region(region) else {
            return Err(Error::config_invalid(format!("region {region} is unknown")));
        };

        if !r.is_service_supported(service) {
            warn!("service {service} is not supported in region {region}, requests won't be signed");
        }

        let signer_type = r.signer_type(service);
        debug!("selected signer {signer_type:?} for service {service} in region {region}");
        Ok(Self::signer_by_type(signer_type, service, region))
    }

    /// Build the signer of the given type.
    pub fn signer_by_type(signer_type: SignerType, service: &str, region: &str) -> Signer {
        match signer_type {
            SignerType::NoOp => Signer::NoOp,
            SignerType::QueryString => Signer::QueryString,
            SignerType::V3 => Signer::V3,
            SignerType::V4 => Signer::V4(RequestSigner::new(service, region)),
        }
    }
}
