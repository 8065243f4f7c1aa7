//! The `{code, message, data}` envelope every Marketingforce endpoint returns.
//!
//! The gateway is loosely typed: `code` has been seen as an integer, a float
//! and a numeric string, and `message` is not always a string. Decoding goes
//! through [`serde_json::Value`] and reads each field leniently instead of
//! rejecting the whole body.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, ErrorKind, Result};
use crate::{INVALID_RESPONSE_MESSAGE, UNKNOWN_ERROR_MESSAGE};

/// Code assumed when the envelope has no usable `code`.
const MISSING_CODE: i64 = 1;

/// Response envelope.
///
/// `code == 0` is success. A missing, `null` or unreadable code is treated
/// as failure (`1`).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiEnvelope {
    pub code: i64,
    pub message: Option<String>,
    pub data: Option<Value>,
}

impl ApiEnvelope {
    /// Read an envelope out of any JSON value.
    ///
    /// Values other than objects carry no fields and read as
    /// `{code: 1}`.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => Self {
                code: fields.get("code").map_or(MISSING_CODE, envelope_code),
                message: fields.get("message").and_then(message_text),
                data: fields.remove("data"),
            },
            _ => Self {
                code: MISSING_CODE,
                message: None,
                data: None,
            },
        }
    }

    /// Read an envelope out of a raw body without rejecting it.
    ///
    /// A body that is not JSON reads as `{code: 1}`, so it surfaces as a
    /// remote failure once passed through [`into_result`](Self::into_result).
    pub fn from_body(body: &str) -> Self {
        Self::from_value(serde_json::from_str(body).unwrap_or(Value::Null))
    }

    /// Returns true if the envelope reports success.
    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Server message, or the default used when none was sent.
    pub fn message_or_default(&self) -> &str {
        self.message.as_deref().unwrap_or(UNKNOWN_ERROR_MESSAGE)
    }

    /// Convert a failed envelope into a [`ErrorKind::RemoteApi`] error.
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            let message = self.message_or_default().to_string();
            Err(Error::remote_api(self.code, message))
        }
    }

    /// Deserialize `data` into a concrete type.
    ///
    /// A missing `data` field is presented to `T` as JSON `null`, so
    /// `Option<_>` and `()` targets accept it.
    pub fn data_as<T: DeserializeOwned>(self) -> Result<T> {
        let data = self.data.unwrap_or(Value::Null);
        serde_json::from_value(data).map_err(|e| {
            Error::with_source(ErrorKind::Json(format!("unexpected data shape: {e}")), e)
        })
    }
}

/// Read an integer from a JSON number or numeric string.
///
/// Integral floats (`0.0`, `"3600.0"`) are accepted; anything else is `None`.
pub fn lenient_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

fn integral(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
}

fn envelope_code(value: &Value) -> i64 {
    match value {
        // `false` compares equal to zero on the gateway side.
        Value::Bool(b) => i64::from(*b),
        other => lenient_integer(other).unwrap_or(MISSING_CODE),
    }
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some(String::new()),
        other => Some(other.to_string()),
    }
}

/// Decode a raw response body into a successful envelope.
///
/// Fails with [`ErrorKind::InvalidResponse`] when the body is not JSON or
/// decodes to a falsy value (`null`, `false`, `0`, `""`, `"0"`, `{}`, `[]`).
/// Fails with [`ErrorKind::RemoteApi`] when the envelope code is non-zero,
/// which includes any truthy body that is not an object.
pub fn decode_envelope(body: &str) -> Result<ApiEnvelope> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        Error::with_source(
            ErrorKind::InvalidResponse(INVALID_RESPONSE_MESSAGE.to_string()),
            e,
        )
    })?;

    if is_falsy(&value) {
        return Err(Error::invalid_response());
    }

    ApiEnvelope::from_value(value).into_result()
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
