mod special_chars;
mod standard;

use anyhow::Result;
use awsign_core::time::parse_iso8601;
use awsign_core::{Context, FixedClock, SignRequest};
use awsign_v4::{Credential, Request, SignerFactory};
use log::debug;

pub const ENDPOINT: &str = "https://sqs.cn-north-1.amazonaws.com.cn";

/// Context frozen at 2015-08-30T12:36:00Z.
pub fn init_signing_test() -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    let now = parse_iso8601("20150830T123600Z").expect("time must be valid");
    Context::new().with_clock(FixedClock::new(now))
}

pub fn static_credential() -> Credential {
    Credential::new("AKID", "SECRET")
}

/// Sign the request with the builtin sqs signer and return it.
pub fn sign_sqs_request(ctx: &Context, mut req: Request) -> Result<Request> {
    let signer = SignerFactory::default().signer("sqs", "cn-north-1")?;
    signer.sign_request(ctx, &mut req, Some(&static_credential()))?;

    debug!("signed request: {req:?}");
    Ok(req)
}
