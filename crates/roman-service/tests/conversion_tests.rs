//! Conversion endpoint integration tests.
//!
//! Tests `/romannumeral` end to end using the `TestRomanServer` harness.

use roman_test_utils::TestRomanServer;

async fn convert(
    server: &TestRomanServer,
    query: &str,
) -> Result<(u16, serde_json::Value), anyhow::Error> {
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/romannumeral", server.url()))
        .query(&[("query", query)])
        .send()
        .await?;

    let status = response.status().as_u16();
    let body: serde_json::Value = response.json().await?;
    Ok((status, body))
}

/// Test that a valid number returns 200 with input and output.
#[tokio::test]
async fn test_conversion_returns_numeral() -> Result<(), anyhow::Error> {
    let server = TestRomanServer::spawn().await?;

    let (status, body) = convert(&server, "42").await?;

    assert_eq!(status, 200);
    assert_eq!(body, serde_json::json!({ "input": "42", "output": "XLII" }));

    Ok(())
}

/// Test the documented boundary values through the HTTP layer.
#[tokio::test]
async fn test_conversion_boundary_values() -> Result<(), anyhow::Error> {
    let server = TestRomanServer::spawn().await?;

    for (input, expected) in [
        ("1", "I"),
        ("4", "IV"),
        ("9", "IX"),
        ("40", "XL"),
        ("90", "XC"),
        ("400", "CD"),
        ("900", "CM"),
        ("1000", "M"),
        ("3999", "MMMCMXCIX"),
    ] {
        let (status, body) = convert(&server, input).await?;
        assert_eq!(status, 200, "status for {input}");
        assert_eq!(body["output"], expected, "output for {input}");
    }

    Ok(())
}

/// Test that the input is echoed exactly as received.
#[tokio::test]
async fn test_conversion_echoes_raw_input() -> Result<(), anyhow::Error> {
    let server = TestRomanServer::spawn().await?;

    let (status, body) = convert(&server, "+0010").await?;

    assert_eq!(status, 200);
    assert_eq!(body["input"], "+0010");
    assert_eq!(body["output"], "X");

    Ok(())
}

/// Test that non-integer input is rejected as a format error.
#[tokio::test]
async fn test_invalid_format_returns_400() -> Result<(), anyhow::Error> {
    let server = TestRomanServer::spawn().await?;

    for input in ["abc", "", "12.5", "1,000", "IV"] {
        let (status, body) = convert(&server, input).await?;
        assert_eq!(status, 400, "status for {input:?}");
        assert_eq!(body["error"]["code"], "INVALID_NUMBER_FORMAT");
        assert_eq!(body["error"]["message"], "Invalid number format");
    }

    Ok(())
}

/// Test that integers outside 1..=3999 are rejected with the valid range.
#[tokio::test]
async fn test_out_of_range_returns_400() -> Result<(), anyhow::Error> {
    let server = TestRomanServer::spawn().await?;

    for input in ["0", "-1", "4000", "123456789012345678901234567890"] {
        let (status, body) = convert(&server, input).await?;
        assert_eq!(status, 400, "status for {input}");
        assert_eq!(body["error"]["code"], "OUT_OF_RANGE");
        assert_eq!(
            body["error"]["message"],
            "Number must be between 1 and 3999"
        );
    }

    Ok(())
}

/// Test that a missing parameter is a client error.
#[tokio::test]
async fn test_missing_parameter_returns_400() -> Result<(), anyhow::Error> {
    let server = TestRomanServer::spawn().await?;

    let response = reqwest::get(format!("{}/romannumeral", server.url())).await?;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["error"]["code"], "MISSING_PARAMETER");

    Ok(())
}

/// Test that concurrent requests are independent.
#[tokio::test]
async fn test_concurrent_conversions() -> Result<(), anyhow::Error> {
    let server = TestRomanServer::spawn().await?;
    let client = reqwest::Client::new();

    let requests = (1..=50u32).map(|n| {
        let client = client.clone();
        let url = format!("{}/romannumeral?query={}", server.url(), n * 71);
        async move {
            let body: serde_json::Value = client.get(url).send().await?.json().await?;
            Ok::<_, anyhow::Error>((n * 71, body))
        }
    });

    let mut handles = Vec::new();
    for request in requests {
        handles.push(tokio::spawn(request));
    }

    for handle in handles {
        let (value, body) = handle.await??;
        let expected = roman_numeral::convert(value)?;
        assert_eq!(body["input"], value.to_string());
        assert_eq!(body["output"], expected);
    }

    Ok(())
}
