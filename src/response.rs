// ABOUTME: Generic response decoder for upstream replies
// ABOUTME: Maps status codes to errors and decodes bodies against a schema with raw-text fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 dravr.ai

use reqwest::StatusCode;
use tracing::debug;

use crate::schema::{self, SchemaDef};
use crate::types::ToolError;

/// Turn an upstream status and body into the tool's text result
///
/// A status of 400 or above is an upstream error carrying the body verbatim.
/// A success body that does not match `schema` is returned unchanged; a
/// matching one is re-serialized with two-space indentation.
///
/// # Errors
///
/// Returns [`ErrorKind::Upstream`](crate::ErrorKind::Upstream) for error
/// statuses and [`ErrorKind::Encoding`](crate::ErrorKind::Encoding) if the
/// decoded value cannot be formatted.
pub fn decode_response(
    status: StatusCode,
    body: &[u8],
    schema: &SchemaDef,
) -> Result<String, ToolError> {
    let text = String::from_utf8_lossy(body);
    if status.as_u16() >= 400 {
        return Err(ToolError::upstream(&text));
    }

    match schema::decode(body, schema) {
        Ok(value) => serde_json::to_string_pretty(&value)
            .map_err(|e| ToolError::encoding("Failed to format JSON", e)),
        Err(e) => {
            debug!(schema = schema.name, error = %e, "Response did not match schema, returning raw body");
            Ok(text.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::models;
    use crate::types::ErrorKind;

    #[test]
    fn error_status_carries_body_verbatim() {
        let err = decode_response(
            StatusCode::NOT_FOUND,
            br#"{"error":"not found"}"#,
            &models::REPOSITORY,
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Upstream);
        assert!(err.message.contains(r#"{"error":"not found"}"#));
    }

    #[test]
    fn matching_body_is_pretty_printed() {
        let out = decode_response(
            StatusCode::OK,
            br#"{"name":"operations/1","done":true,"extra":"dropped"}"#,
            &models::OPERATION,
        )
        .expect("decode");
        assert_eq!(out, "{\n  \"name\": \"operations/1\",\n  \"done\": true\n}");
    }

    #[test]
    fn mismatched_body_is_returned_raw() {
        let raw = br#"{"done":"not-a-bool"}"#;
        let out = decode_response(StatusCode::OK, raw, &models::OPERATION).expect("raw");
        assert_eq!(out.as_bytes(), raw);
    }

    #[test]
    fn empty_success_body_is_returned_as_empty_text() {
        let out = decode_response(StatusCode::OK, b"", &models::EMPTY).expect("raw");
        assert_eq!(out, "");
    }

    #[test]
    fn empty_object_decodes_for_empty_schema() {
        let out = decode_response(StatusCode::OK, b"{}", &models::EMPTY).expect("decode");
        assert_eq!(serde_json::from_str::<Value>(&out).expect("json"), json!({}));
    }
}
