use std::io::Write;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::HelperError;

/// Content type announced by [`write_json_response`].
pub const CONTENT_TYPE: &str = "application/json";

/// Message of [`JsonResponse::access_denied`].
pub const ACCESS_DENIED_MESSAGE: &str = "Access denied";

/// Message of [`JsonResponse::not_found`].
pub const NOT_FOUND_MESSAGE: &str = "The resource you are trying to access could not be found.";

/// A JSON response: body fields plus HTTP status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonResponse {
    pub success: bool,
    pub message: String,
    /// Payload; an empty array when there is none.
    pub data: Value,
    /// HTTP status code, not part of the body.
    #[serde(skip)]
    pub status: u16,
}

impl Default for JsonResponse {
    fn default() -> Self {
        Self {
            success: false,
            message: String::new(),
            data: Value::Array(Vec::new()),
            status: 200,
        }
    }
}

impl JsonResponse {
    /// Build a response from all of its parts.
    pub fn simple(message: impl Into<String>, success: bool, data: Value, status: u16) -> Self {
        Self {
            success,
            message: message.into(),
            data,
            status,
        }
    }

    /// 200, success, no data.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            ..Default::default()
        }
    }

    /// 200, failure, no data.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// 403 with a fixed message.
    pub fn access_denied() -> Self {
        Self {
            message: ACCESS_DENIED_MESSAGE.into(),
            status: 403,
            ..Default::default()
        }
    }

    /// 404 with a fixed message.
    pub fn not_found() -> Self {
        Self {
            message: NOT_FOUND_MESSAGE.into(),
            status: 404,
            ..Default::default()
        }
    }

    /// Attach a payload.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Serialized body (`success`, `message`, `data`).
    pub fn body(&self) -> Result<String, HelperError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// How [`json_response_string`] interprets the evaluated value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseOptions {
    /// A string result is a failure message that replaces the default one.
    pub allow_custom_message: bool,
    /// On success, return the evaluated value as `data` instead of a message.
    pub data_on_success: bool,
}

/// Turn the outcome of an operation into a JSON response body.
///
/// `false` (or a string, when custom messages are allowed) means failure;
/// anything else is success.
pub fn json_response_string(
    eval: &Value,
    success_message: &str,
    fail_message: &str,
    options: ResponseOptions,
) -> Result<String, HelperError> {
    let outcome = match eval {
        Value::String(custom) if options.allow_custom_message => Some((false, custom.as_str())),
        Value::Bool(false) => Some((false, fail_message)),
        _ if options.data_on_success => None,
        _ => Some((true, success_message)),
    };
    let body = match outcome {
        Some((success, message)) => serde_json::to_string(&MessageBody { success, message })?,
        None => serde_json::to_string(&DataBody {
            success: true,
            data: eval,
        })?,
    };
    Ok(body)
}

#[derive(Serialize)]
struct MessageBody<'a> {
    success: bool,
    message: &'a str,
}

#[derive(Serialize)]
struct DataBody<'a> {
    success: bool,
    data: &'a Value,
}

/// Write a CGI-style JSON response: content-type header, blank line, body.
pub fn write_json_response<W: Write>(out: &mut W, body: &str) -> Result<(), HelperError> {
    write!(out, "Content-Type: {CONTENT_TYPE}\r\n\r\n{body}")?;
    out.flush()?;
    Ok(())
}
