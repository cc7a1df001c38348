//! Response normalizer: removes markdown code fences the model wraps around JSON.

use std::sync::LazyLock;

use regex::Regex;

/// A fence marker plus at most one line break on each side.
///
/// A language tag is only consumed when the rest of the line is empty, so text
/// that directly follows a closing or inline fence is kept.
static FENCE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r?\n?```(?:[A-Za-z0-9_+-]*[ \t]*(?:\r?\n|$))?")
        .expect("fence pattern is a valid regex")
});

/// Strips every fence marker from the raw model output, wherever it occurs.
///
/// Text between fences is left untouched; only the markers and the line breaks
/// directly adjacent to them are removed, then the result is trimmed.
pub fn normalize(raw: &str) -> String {
    FENCE_MARKER.replace_all(raw, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_json_tagged_fence() {
        assert_eq!(normalize("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_strips_bare_fence() {
        assert_eq!(normalize("```\n{\"key\": \"value\"}\n```"), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_no_fences_is_unchanged() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(normalize(input), input);
    }

    #[test]
    fn test_fences_mid_text_are_removed() {
        let input = "Here you go:\n```json\n{\"a\": 1}\n```\nLet me know!";
        let cleaned = normalize(input);
        assert!(!cleaned.contains("```"));
        assert!(cleaned.contains("{\"a\": 1}"));
        assert!(cleaned.starts_with("Here you go:"));
    }

    #[test]
    fn test_inner_lines_are_preserved() {
        let input = "```json\n{\n  \"a\": 1,\n  \"b\": [1, 2]\n}\n```";
        assert_eq!(normalize(input), "{\n  \"a\": 1,\n  \"b\": [1, 2]\n}");
    }

    #[test]
    fn test_crlf_fences() {
        assert_eq!(normalize("```json\r\n{\"a\":1}\r\n```\r\n"), "{\"a\":1}");
    }

    #[test]
    fn test_inline_fences_keep_surrounding_words() {
        let input = "```json\n{\"improved_text\": \"Run ```npm test``` before every merge\"}\n```";
        assert_eq!(
            normalize(input),
            "{\"improved_text\": \"Run npm test before every merge\"}"
        );
    }

    #[test]
    fn test_prose_after_closing_fence_is_kept() {
        assert_eq!(
            normalize("```json\n{\"a\": 1}\n```Hope this helps"),
            "{\"a\": 1}Hope this helps"
        );
    }

    #[test]
    fn test_tag_followed_by_text_is_not_a_tag() {
        assert_eq!(normalize("```rust is great"), "rust is great");
    }

    #[test]
    fn test_tagged_fence_with_trailing_spaces() {
        assert_eq!(normalize("```json  \n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_unterminated_fence_is_still_stripped() {
        // Truncated responses often lose the closing fence.
        assert_eq!(normalize("```json\n{\"a\": 1"), "{\"a\": 1");
    }
}
