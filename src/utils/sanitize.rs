use axum::{
    body::Body,
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

const MAX_JSON_BODY: usize = 1024 * 1024;

pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

fn sanitize_string(value: &str) -> String {
    let cleaned = value.replace('\0', "");
    escape_html(&cleaned).trim().to_string()
}

/// Recursively cleans a JSON value: keys starting with `$` are dropped,
/// null bytes are stripped and HTML-significant characters entity-escaped
/// in every string, strings are trimmed.
pub fn sanitize_value(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(sanitize_string(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize_value).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .filter(|(key, _)| !key.starts_with('$'))
                .map(|(key, value)| (key, sanitize_value(value)))
                .collect(),
        ),
        other => other,
    }
}

pub async fn middleware(req: Request, next: Next) -> Response {
    let is_json = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false);

    if !is_json {
        return next.run(req).await;
    }

    let (mut parts, body) = req.into_parts();

    let bytes = match axum::body::to_bytes(body, MAX_JSON_BODY).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(json!({ "success": false, "error": "Request body too large" })),
            )
                .into_response();
        }
    };

    // Unparseable bodies pass through untouched so the handler's JSON
    // extractor reports the rejection.
    let body = match serde_json::from_slice::<Value>(&bytes) {
        Ok(value) => {
            let cleaned = sanitize_value(value);
            let encoded = match serde_json::to_vec(&cleaned) {
                Ok(encoded) => encoded,
                Err(err) => {
                    tracing::error!("Failed to re-encode sanitized body: {}", err);
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({ "success": false, "error": "Internal server error" })),
                    )
                        .into_response();
                }
            };
            parts.headers.insert(
                header::CONTENT_LENGTH,
                header::HeaderValue::from(encoded.len()),
            );
            Body::from(encoded)
        }
        Err(_) => Body::from(bytes),
    };

    next.run(Request::from_parts(parts, body)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn drops_keys_starting_with_dollar() {
        let cleaned = sanitize_value(json!({
            "name": "John",
            "$gt": "malicious",
            "nested": { "$where": "hack", "kept": "yes" }
        }));

        assert_eq!(cleaned.get("$gt"), None);
        assert_eq!(cleaned["nested"].get("$where"), None);
        assert_eq!(cleaned["name"], "John");
        assert_eq!(cleaned["nested"]["kept"], "yes");
    }

    #[test]
    fn escapes_angle_brackets() {
        let cleaned = sanitize_value(json!({ "name": "<script>alert(\"xss\")</script>" }));

        let name = cleaned["name"].as_str().unwrap();
        assert!(!name.contains('<'));
        assert!(!name.contains('>'));
        assert!(name.contains("&lt;script&gt;"));
    }

    #[test]
    fn strips_null_bytes() {
        let cleaned = sanitize_value(json!({ "name": "John\u{0}Doe" }));
        assert_eq!(cleaned["name"], "JohnDoe");
    }

    #[test]
    fn trims_whitespace() {
        let cleaned = sanitize_value(json!({ "name": "  padded  " }));
        assert_eq!(cleaned["name"], "padded");
    }

    #[test]
    fn walks_arrays() {
        let cleaned = sanitize_value(json!({ "tags": ["<b>", "ok"] }));
        assert_eq!(cleaned["tags"][0], "&lt;b&gt;");
        assert_eq!(cleaned["tags"][1], "ok");
    }

    #[test]
    fn leaves_non_strings_alone() {
        let cleaned = sanitize_value(json!({ "count": 3, "flag": true, "none": null }));
        assert_eq!(cleaned["count"], 3);
        assert_eq!(cleaned["flag"], true);
        assert_eq!(cleaned["none"], Value::Null);
    }
}
