use anyhow::Result;
use serde::Serialize;

/// Document carried, JSON-encoded, in [`Response::body`].
#[derive(Serialize, Debug)]
struct Message<'a> {
    message: &'a str,
}

/// Proxy-style response understood by API Gateway and function URLs.
#[derive(Serialize, PartialEq, Eq, Debug)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

/// Builds the greeting. Does not depend on anything about the invocation.
pub fn response() -> Result<Response> {
    let body = serde_json::to_string(&Message {
        message: "hello world",
    })?;

    Ok(Response {
        status_code: 200,
        body,
    })
}
