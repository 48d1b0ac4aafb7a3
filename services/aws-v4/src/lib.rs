//! AWS Signature Version 4 signer.
//!
//! ## Example
//!
//! ```
//! use awsign_core::{Context, SignRequest};
//! use awsign_v4::{Credential, HttpMethod, Request, SignerFactory};
//!
//! # fn main() -> awsign_core::Result<()> {
//! let signer = SignerFactory::default().signer("sqs", "cn-north-1")?;
//!
//! let mut req = Request::new(HttpMethod::Post, "https://sqs.cn-north-1.amazonaws.com.cn")
//!     .with_parameter("Action", "SendMessage")
//!     .with_parameter("MessageBody", "hello");
//! let cred = Credential::new("AKID", "SECRET");
//!
//! signer.sign_request(&Context::new(), &mut req, Some(&cred))?;
//! assert!(req.headers.get("Authorization").is_some());
//!
//! // Hand the signed request to any http client.
//! let http_req = req.to_http()?;
//! assert_eq!(http_req.body(), "Action=SendMessage&MessageBody=hello");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod constants;

mod credential;
pub use credential::Credential;

mod request;
pub use request::{append_uri, encode_parameters, uri_encode, HttpMethod, Request, StringMap};

pub mod canonical;

mod key;
pub use key::generate_signing_key;

mod sign_request;
pub use sign_request::RequestSigner;

mod region;
pub use region::{Endpoint, Region, Regions, SignerType};

mod signer;
pub use signer::{Signer, SignerFactory};
