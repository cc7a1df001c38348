//! JSON extractor: recovers the JSON object from a normalized model response.
//!
//! Fast path: the whole text is a JSON object. Fallback: the greedy brace span
//! (first `{` to last `}`) with `//` line comments removed. Anything that still
//! fails to parse is reported rather than guessed at.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no JSON object found")]
    NoObject,

    #[error("malformed JSON payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub fn extract(cleaned: &str) -> Result<Map<String, Value>, ExtractionError> {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(cleaned) {
        return Ok(map);
    }

    let start = cleaned.find('{').ok_or(ExtractionError::NoObject)?;
    let end = cleaned
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or(ExtractionError::NoObject)?;

    let span = strip_line_comments(&cleaned[start..=end]);

    match serde_json::from_str::<Value>(&span)? {
        Value::Object(map) => Ok(map),
        _ => Err(ExtractionError::NoObject),
    }
}

/// Removes `//` comments through end of line, keeping the line break.
fn strip_line_comments(span: &str) -> String {
    let mut out = String::with_capacity(span.len());
    for line in span.split_inclusive('\n') {
        match comment_start(line) {
            Some(idx) => {
                out.push_str(&line[..idx]);
                if line.ends_with('\n') {
                    out.push('\n');
                }
            }
            None => out.push_str(line),
        }
    }
    out
}

/// Byte offset of the first `//` outside a string literal.
///
/// JSON strings cannot span lines, so string state resets per line.
fn comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
        } else if b == b'"' {
            in_string = true;
        } else if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_strict_object_takes_fast_path() {
        let original = json!({
            "score": 75,
            "summary_insights": {"overall_grade": "B", "top_strengths": ["Rust", "Go"]},
            "flag": true,
            "nothing": null
        });
        let text = serde_json::to_string(&original).unwrap();
        assert_eq!(extract(&text).unwrap(), object(original));
    }

    #[test]
    fn test_brace_span_recovers_from_surrounding_prose() {
        let result = extract("Here is the result: {\"a\": 1} Hope that helps!").unwrap();
        assert_eq!(result, object(json!({"a": 1})));
    }

    #[test]
    fn test_line_comments_are_stripped() {
        let result = extract("{\"a\": 1, // note\n\"b\": 2}").unwrap();
        assert_eq!(result, object(json!({"a": 1, "b": 2})));
    }

    #[test]
    fn test_comment_markers_inside_strings_are_kept() {
        let text = "{\"url\": \"https://example.com/a\", // homepage\n\"b\": 2}";
        let result = extract(text).unwrap();
        assert_eq!(result["url"], "https://example.com/a");
        assert_eq!(result["b"], 2);
    }

    #[test]
    fn test_escaped_quote_does_not_end_string() {
        let text = "{\"quote\": \"say \\\"//hi\\\"\", // trailing\n\"n\": 1}";
        let result = extract(text).unwrap();
        assert_eq!(result["quote"], "say \"//hi\"");
        assert_eq!(result["n"], 1);
    }

    #[test]
    fn test_nested_objects_survive_greedy_span() {
        let text = "Result:\n{\"outer\": {\"inner\": {\"deep\": 3}}}\nThanks";
        let result = extract(text).unwrap();
        assert_eq!(result["outer"]["inner"]["deep"], 3);
    }

    #[test]
    fn test_no_json_fails() {
        let err = extract("I cannot help with that.").unwrap_err();
        assert!(matches!(err, ExtractionError::NoObject));
        assert_eq!(err.to_string(), "no JSON object found");
    }

    #[test]
    fn test_closing_brace_before_opening_fails() {
        let err = extract("} nothing here {").unwrap_err();
        assert!(matches!(err, ExtractionError::NoObject));
    }

    #[test]
    fn test_malformed_span_reports_parse_error() {
        // Truncated response: the last brace closes an inner object only.
        let err = extract("{\"a\": {\"b\": 1}, \"c\": [1, 2").unwrap_err();
        assert!(matches!(err, ExtractionError::Malformed(_)));
    }

    #[test]
    fn test_top_level_array_falls_back_to_inner_object() {
        let result = extract("[{\"a\": 1}]").unwrap();
        assert_eq!(result, object(json!({"a": 1})));
    }

    #[test]
    fn test_two_objects_are_unrecoverable() {
        let err = extract("{\"a\": 1} and also {\"b\": 2}").unwrap_err();
        assert!(matches!(err, ExtractionError::Malformed(_)));
    }
}
