//! Core components for signing API requests.
//!
//! This crate provides the service agnostic building blocks used by the
//! awsign signers.
//!
//! ## Overview
//!
//! - **Context**: carries the clock that signing reads the current time from
//! - **Traits**: [`SignRequest`] signs a request in place, [`SigningCredential`]
//!   validates the credential handed to it
//! - **Error**: a single [`Error`] type whose [`ErrorKind`] tells configuration
//!   mistakes apart from malformed requests
//!
//! ## Example
//!
//! ```
//! use awsign_core::{Context, SignRequest, SigningCredential};
//! use awsign_core::hash::hex_hmac_sha256;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.secret.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MySigner;
//!
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!     type Request = Vec<(String, String)>;
//!
//!     fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         req: &mut Self::Request,
//!         credential: Option<&Self::Credential>,
//!     ) -> awsign_core::Result<()> {
//!         let Some(cred) = credential else {
//!             return Ok(());
//!         };
//!         let sig = hex_hmac_sha256(cred.secret.as_bytes(), b"payload");
//!         req.push(("Signature".to_string(), sig));
//!         Ok(())
//!     }
//! }
//!
//! let mut req = Vec::new();
//! let cred = MyCredential { secret: "secret".to_string() };
//! MySigner.sign_request(&Context::new(), &mut req, Some(&cred)).unwrap();
//! assert_eq!(req.len(), 1);
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Hashing, HMAC and encoding utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Clock;
pub use context::Context;
pub use context::FixedClock;
pub use context::SystemClock;

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{SignRequest, SigningCredential};
