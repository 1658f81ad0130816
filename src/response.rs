//! Decoding of query-endpoint bodies into [`QueryResponse`].
//!
//! The wire format carries no type tag. A body with a non-empty `output`
//! string is text; anything else is treated as geometry, with missing or
//! `null` point lists read as empty. Classification happens here, once, so
//! renderers only ever see the sum type.

use serde::Deserialize;

use crate::error::Result;
use crate::model::{Geometry, Point, QueryResponse};

/// Raw body as sent by the server. Every field is optional.
#[derive(Debug, Default, Deserialize)]
struct RawResponse {
    #[serde(default)]
    output: Option<String>,
    #[serde(default)]
    orientation: Option<Vec<Point>>,
    #[serde(default)]
    texture: Option<Vec<Point>>,
    #[serde(default)]
    error: Option<String>,
}

/// Decode a JSON body.
pub fn decode(body: &str) -> Result<QueryResponse> {
    let raw: RawResponse = serde_json::from_str(body)?;
    Ok(classify(raw))
}

/// Decode from an already-parsed JSON value.
pub fn decode_value(value: serde_json::Value) -> Result<QueryResponse> {
    let raw: RawResponse = serde_json::from_value(value)?;
    Ok(classify(raw))
}

fn classify(raw: RawResponse) -> QueryResponse {
    if let Some(message) = raw.error.as_deref() {
        log::warn!("response carries an error field: {message}");
    }
    match raw.output {
        Some(output) if !output.is_empty() => {
            if raw.orientation.is_some() || raw.texture.is_some() {
                log::warn!("response carries both output and geometry; rendering output");
            }
            QueryResponse::Text(output)
        }
        _ => QueryResponse::Geometry(Geometry {
            orientation: raw.orientation.unwrap_or_default(),
            texture: raw.texture.unwrap_or_default(),
        }),
    }
}
