use std::borrow::Cow;

use bookstore_core::{ControlError, Lookup};
use rmcp::ErrorData;
use rmcp::model::{CallToolResult, Content, ErrorCode};
use serde::Serialize;

pub(crate) fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

pub(crate) fn map_err(err: ControlError) -> ErrorData {
    match err {
        ControlError::InvalidInput(message) => mcp_err(ErrorCode::INVALID_PARAMS, message),
    }
}

/// Found values go out as JSON; not-found messages go out as plain text on a
/// successful result.
pub(crate) fn lookup_result<T: Serialize>(lookup: Lookup<T>) -> Result<CallToolResult, ErrorData> {
    match lookup {
        Lookup::Found(value) => Ok(CallToolResult::success(vec![Content::json(value)?])),
        Lookup::NotFound(reason) => Ok(CallToolResult::success(vec![Content::text(
            reason.to_string(),
        )])),
    }
}

/// Renders a lookup through its `Display` form either way.
pub(crate) fn text_result<T: std::fmt::Display>(lookup: Lookup<T>) -> CallToolResult {
    let message = match lookup {
        Lookup::Found(value) => value.to_string(),
        Lookup::NotFound(reason) => reason.to_string(),
    };
    CallToolResult::success(vec![Content::text(message)])
}
