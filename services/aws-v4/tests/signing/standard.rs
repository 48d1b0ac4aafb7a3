use super::{init_signing_test, sign_sqs_request, static_credential, ENDPOINT};
use anyhow::Result;
use awsign_core::{ErrorKind, SignRequest};
use awsign_v4::{HttpMethod, Request, RequestSigner, Signer, SignerFactory};
use pretty_assertions::assert_eq;
use sha2::{Digest, Sha256};

#[test]
fn test_send_message() -> Result<()> {
    let ctx = init_signing_test();

    let req = Request::new(HttpMethod::Post, ENDPOINT)
        .with_resource_path("")
        .with_parameter("Action", "SendMessage")
        .with_parameter("MessageBody", "hello");
    let req = sign_sqs_request(&ctx, req)?;

    assert_eq!(req.headers.get("Host"), Some("sqs.cn-north-1.amazonaws.com.cn"));
    assert_eq!(req.headers.get("X-Amz-Date"), Some("20150830T123600Z"));
    assert_eq!(
        req.headers.get("Authorization"),
        Some(
            "AWS4-HMAC-SHA256 Credential=AKID/20150830/cn-north-1/sqs/aws4_request,\
             SignedHeaders=host;x-amz-date,\
             Signature=f56adb2ded74cba15e2d8f2d972e3624967460c30f01ae6cfd4a0695d7a5db55"
        )
    );
    Ok(())
}

#[test]
fn test_receive_message_with_queue_path() -> Result<()> {
    let ctx = init_signing_test();

    let req = Request::new(HttpMethod::Post, ENDPOINT)
        .with_resource_path("/123456789012/my queue")
        .with_header(
            "Content-Type",
            "application/x-www-form-urlencoded; charset=utf-8",
        )
        .with_parameter("Action", "ReceiveMessage")
        .with_parameter("MaxNumberOfMessages", "10");
    let req = sign_sqs_request(&ctx, req)?;

    assert_eq!(req.headers.len(), 4);
    assert_eq!(
        req.headers.get("Authorization"),
        Some(
            "AWS4-HMAC-SHA256 Credential=AKID/20150830/cn-north-1/sqs/aws4_request,\
             SignedHeaders=content-type;host;x-amz-date,\
             Signature=79c55825c92857e67e6c8c4cf8a580ca276c4c1fbfb707d1fb346461ba9baf17"
        )
    );
    Ok(())
}

#[test]
fn test_sign_leaves_other_fields_alone() -> Result<()> {
    let ctx = init_signing_test();

    let origin = Request::new(HttpMethod::Post, ENDPOINT)
        .with_resource_path("123456789012/queue")
        .with_header("Content-Type", "text/plain")
        .with_parameter("Action", "SendMessage");
    let signed = sign_sqs_request(&ctx, origin.clone())?;

    assert_eq!(signed.method, origin.method);
    assert_eq!(signed.endpoint, origin.endpoint);
    assert_eq!(signed.resource_path, origin.resource_path);
    assert_eq!(signed.parameters, origin.parameters);
    assert_eq!(signed.headers.get("Content-Type"), Some("text/plain"));
    assert_eq!(signed.headers.len(), origin.headers.len() + 3);
    Ok(())
}

#[test]
fn test_signed_body_matches_content_hash() -> Result<()> {
    let ctx = init_signing_test();

    let req = Request::new(HttpMethod::Post, ENDPOINT)
        .with_parameter("Action", "SendMessage")
        .with_parameter("MessageBody", "hello");
    let req = sign_sqs_request(&ctx, req)?;
    let http_req = req.to_http()?;

    // The payload the server hashes is exactly the body we send.
    let digest = hex::encode(Sha256::digest(http_req.body().as_bytes()));
    assert_eq!(
        digest,
        awsign_v4::canonical::content_hash(&req).expect("post must be supported")
    );
    assert_eq!(
        http_req.headers()["authorization"].to_str()?,
        req.headers.get("Authorization").unwrap()
    );
    assert_eq!(
        http_req.headers()["host"].to_str()?,
        "sqs.cn-north-1.amazonaws.com.cn"
    );
    Ok(())
}

#[test]
fn test_stale_caller_headers_stay_off_the_wire() -> Result<()> {
    let ctx = init_signing_test();

    let req = Request::new(HttpMethod::Post, ENDPOINT)
        .with_header("host", "stale.example.com")
        .with_header("x-amz-date", "19700101T000000Z")
        .with_parameter("Action", "SendMessage")
        .with_parameter("MessageBody", "hello");
    let req = sign_sqs_request(&ctx, req)?;
    let http_req = req.to_http()?;

    for (name, expected) in [
        ("host", "sqs.cn-north-1.amazonaws.com.cn"),
        ("x-amz-date", "20150830T123600Z"),
    ] {
        let values = http_req
            .headers()
            .get_all(name)
            .iter()
            .map(|v| v.to_str())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        assert_eq!(values, vec![expected], "header {name}");
    }
    // Same signature as a request without the stale headers.
    assert!(req
        .headers
        .get("Authorization")
        .unwrap()
        .ends_with("Signature=f56adb2ded74cba15e2d8f2d972e3624967460c30f01ae6cfd4a0695d7a5db55"));
    Ok(())
}

#[test]
fn test_anonymous_request() -> Result<()> {
    let ctx = init_signing_test();
    let signer = SignerFactory::default().signer("sqs", "cn-north-1")?;

    let mut req = Request::new(HttpMethod::Post, ENDPOINT).with_parameter("Action", "SendMessage");
    let origin = req.clone();
    signer.sign_request(&ctx, &mut req, None)?;

    assert_eq!(req, origin);
    Ok(())
}

#[test]
fn test_get_request_is_rejected() -> Result<()> {
    let ctx = init_signing_test();
    let signer = SignerFactory::default().signer("sqs", "cn-north-1")?;

    let mut req = Request::new(HttpMethod::Get, ENDPOINT).with_parameter("Action", "ListQueues");
    let err = signer
        .sign_request(&ctx, &mut req, Some(&static_credential()))
        .expect_err("get payload can't be hashed");

    assert_eq!(err.kind(), ErrorKind::UnsupportedPayload);
    assert!(err.is_unsupported());
    assert!(req.headers.is_empty());
    Ok(())
}

#[test]
fn test_signers_are_independent_values() -> Result<()> {
    let ctx = init_signing_test();
    let factory = SignerFactory::default();
    let sqs = factory.signer("sqs", "cn-north-1")?;
    let s3 = factory.signer("s3", "cn-north-1")?;

    assert_eq!(sqs, Signer::V4(RequestSigner::new("sqs", "cn-north-1")));
    assert_eq!(s3, Signer::V4(RequestSigner::new("s3", "cn-north-1")));

    let mut a = Request::new(HttpMethod::Post, ENDPOINT).with_parameter("Action", "SendMessage");
    let mut b = a.clone();
    sqs.sign_request(&ctx, &mut a, Some(&static_credential()))?;
    s3.sign_request(&ctx, &mut b, Some(&static_credential()))?;

    let auth_a = a.headers.get("Authorization").unwrap();
    let auth_b = b.headers.get("Authorization").unwrap();
    assert!(auth_a.contains("/cn-north-1/sqs/aws4_request,"));
    assert!(auth_b.contains("/cn-north-1/s3/aws4_request,"));
    assert_ne!(auth_a, auth_b);
    Ok(())
}
