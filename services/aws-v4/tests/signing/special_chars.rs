use super::{init_signing_test, static_credential, ENDPOINT};
use anyhow::Result;
use awsign_core::SignRequest;
use awsign_v4::{HttpMethod, Request, RequestSigner};
use pretty_assertions::assert_eq;

fn special_request() -> Request {
    Request::new(HttpMethod::Post, ENDPOINT)
        .with_resource_path("/123456789012/queue name")
        .with_parameter("Action", "SendMessage")
        .with_parameter("MessageBody", "!@#$%^&*()_+-=;:'><,/?.txt 中文")
        .with_parameter("Version", "2012-11-05")
}

#[test]
fn test_special_chars_body() -> Result<()> {
    let http_req = special_request().to_http()?;

    assert_eq!(
        http_req.body(),
        "Action=SendMessage\
         &MessageBody=!%40%23%24%25%5E%26*()_%2B-%3D%3B%3A'%3E%3C%2C%2F%3F.txt%20%E4%B8%AD%E6%96%87\
         &Version=2012-11-05"
    );
    assert_eq!(
        http_req.uri().path(),
        "/123456789012/queue%20name"
    );
    Ok(())
}

#[test]
fn test_special_chars_double_encoded() -> Result<()> {
    let ctx = init_signing_test();
    let signer = RequestSigner::new("sqs", "cn-north-1");

    let mut req = special_request();
    signer.sign_request(&ctx, &mut req, Some(&static_credential()))?;

    assert_eq!(
        req.headers.get("Authorization"),
        Some(
            "AWS4-HMAC-SHA256 Credential=AKID/20150830/cn-north-1/sqs/aws4_request,\
             SignedHeaders=host;x-amz-date,\
             Signature=a8ac7a73ee0750c60e84735e96aea742b237affe11892dc0c6b5a4e9752a67a6"
        )
    );
    Ok(())
}

#[test]
fn test_special_chars_single_encoded() -> Result<()> {
    let ctx = init_signing_test();
    let signer = RequestSigner::new("sqs", "cn-north-1").with_double_url_encode(false);

    let mut req = special_request();
    signer.sign_request(&ctx, &mut req, Some(&static_credential()))?;

    assert_eq!(
        req.headers.get("Authorization"),
        Some(
            "AWS4-HMAC-SHA256 Credential=AKID/20150830/cn-north-1/sqs/aws4_request,\
             SignedHeaders=host;x-amz-date,\
             Signature=1d6f773c9e4c903c3a8e27fe9178eeb84a5aabeb1835aae776f4ec31b7909a71"
        )
    );
    Ok(())
}

#[test]
fn test_header_whitespace_is_normalized() -> Result<()> {
    let ctx = init_signing_test();
    let signer = RequestSigner::new("sqs", "cn-north-1");

    let mut tabbed = Request::new(HttpMethod::Post, ENDPOINT)
        .with_header("X-Custom", "a\tb")
        .with_parameter("Action", "SendMessage");
    let mut spaced = Request::new(HttpMethod::Post, ENDPOINT)
        .with_header("x-custom", "a b")
        .with_parameter("Action", "SendMessage");
    signer.sign_request(&ctx, &mut tabbed, Some(&static_credential()))?;
    signer.sign_request(&ctx, &mut spaced, Some(&static_credential()))?;

    assert_eq!(
        tabbed.headers.get("Authorization"),
        spaced.headers.get("Authorization")
    );
    assert!(tabbed
        .headers
        .get("Authorization")
        .unwrap()
        .contains(",SignedHeaders=host;x-amz-date;x-custom,"));
    Ok(())
}
