use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

use crate::error::{RadeError, Result};
use crate::services::kind::ServiceKind;

pub const INVALID_RESPONSE: &str = "Invalid Response";

const TRACE_ID_POINTER: &str = "/data/RadeTraceID";
const RESULT_POINTER: &str = "/data/result";
const NESTED_RESULT_POINTER: &str = "/data/result/result";
const DATA_POINTER: &str = "/data";

/// `data.RadeTraceID`, as a string.
pub fn trace_id(body: &Value, kind: ServiceKind) -> Result<String> {
    match body.pointer(TRACE_ID_POINTER) {
        Some(Value::String(id)) => Ok(id.to_owned()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        _ => Err(invalid(kind, "missing RadeTraceID")),
    }
}

/// Decode `data.result.result` into `T`.
pub fn nested_result<T: DeserializeOwned>(body: &Value, kind: ServiceKind) -> Result<T> {
    decode(body, NESTED_RESULT_POINTER, kind)
}

/// `data.result`, which must be present and non-null.
pub fn result_value(body: &Value, kind: ServiceKind) -> Result<Value> {
    match body.pointer(RESULT_POINTER) {
        Some(Value::Null) | None => Err(invalid(kind, "missing data.result")),
        Some(value) => Ok(value.clone()),
    }
}

/// Decode `data` into `T`.
pub fn data<T: DeserializeOwned>(body: &Value, kind: ServiceKind) -> Result<T> {
    decode(body, DATA_POINTER, kind)
}

fn decode<T: DeserializeOwned>(body: &Value, pointer: &str, kind: ServiceKind) -> Result<T> {
    let value = match body.pointer(pointer) {
        Some(Value::Null) | None => return Err(invalid(kind, &format!("missing {pointer}"))),
        Some(value) => value,
    };
    T::deserialize(value).map_err(|e| invalid(kind, &e.to_string()))
}

fn invalid(kind: ServiceKind, detail: &str) -> RadeError {
    error!(service = %kind, detail, "unexpected response shape");
    RadeError::protocol(kind.as_str(), INVALID_RESPONSE)
}
