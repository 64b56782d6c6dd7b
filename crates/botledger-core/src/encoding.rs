//! Turning rendered key-field values into a composite key string.

use serde_json::Value;

use botledger_types::config::KeyEncoding;

/// Separator between key-field values.
pub const KEY_SEPARATOR: char = '_';

const ESCAPE: char = '\\';

/// Join rendered key-field values into a composite key.
///
/// With [`KeyEncoding::Joined`], `("a_b", "c")` and `("a", "b_c")` both give
/// `"a_b_c"`. That ambiguity is part of the stored format and is kept.
/// [`KeyEncoding::Escaped`] escapes the separator inside values instead.
pub fn encode_key<I, S>(parts: I, encoding: KeyEncoding) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut key = String::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            key.push(KEY_SEPARATOR);
        }
        match encoding {
            KeyEncoding::Joined => key.push_str(part.as_ref()),
            KeyEncoding::Escaped => escape_into(part.as_ref(), &mut key),
        }
    }
    key
}

fn escape_into(part: &str, out: &mut String) {
    for c in part.chars() {
        if c == ESCAPE || c == KEY_SEPARATOR {
            out.push(ESCAPE);
        }
        out.push(c);
    }
}

/// Split a key produced with [`KeyEncoding::Escaped`] back into its values.
pub fn split_escaped_key(key: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = key.chars();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE => {
                // A trailing lone escape is kept literally.
                current.push(chars.next().unwrap_or(ESCAPE));
            }
            KEY_SEPARATOR => parts.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    parts.push(current);
    parts
}

/// Render any JSON value the way the legacy writer stringified key fields.
///
/// Scalars render as [`KeyValue`](botledger_types::key::KeyValue) does.
/// Arrays join their elements with `,` (null elements become empty),
/// and objects become `[object Object]`. Only reachable when
/// `scalar_only` is off.
pub fn legacy_render(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => legacy_render(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        scalar => botledger_types::key::KeyValue::from_json(scalar)
            .map(|v| v.to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_joined_is_plain_join() {
        assert_eq!(
            encode_key(["abc123", "merge", "1000"], KeyEncoding::Joined),
            "abc123_merge_1000"
        );
        assert_eq!(encode_key(["merge-bot"], KeyEncoding::Joined), "merge-bot");
    }

    #[test]
    fn test_joined_keeps_separator_ambiguity() {
        let left = encode_key(["a_b", "c"], KeyEncoding::Joined);
        let right = encode_key(["a", "b_c"], KeyEncoding::Joined);
        assert_eq!(left, right);
    }

    #[test]
    fn test_escaped_disambiguates() {
        let left = encode_key(["a_b", "c"], KeyEncoding::Escaped);
        let right = encode_key(["a", "b_c"], KeyEncoding::Escaped);
        assert_eq!(left, r"a\_b_c");
        assert_eq!(right, r"a_b\_c");
        assert_ne!(left, right);
    }

    #[test]
    fn test_escaped_without_special_chars_matches_joined() {
        let parts = ["default", "500"];
        assert_eq!(
            encode_key(parts, KeyEncoding::Escaped),
            encode_key(parts, KeyEncoding::Joined)
        );
    }

    #[test]
    fn test_split_escaped_key() {
        let key = encode_key([r"dir\name", "a_b", ""], KeyEncoding::Escaped);
        assert_eq!(split_escaped_key(&key), vec![r"dir\name", "a_b", ""]);
    }

    #[test]
    fn test_legacy_render() {
        assert_eq!(legacy_render(&json!({"a": 1})), "[object Object]");
        assert_eq!(legacy_render(&json!([1, "x", null, true])), "1,x,,true");
        assert_eq!(legacy_render(&json!([[1, 2], 3])), "1,2,3");
        assert_eq!(legacy_render(&json!([])), "");
        assert_eq!(legacy_render(&json!(1000.0)), "1000");
    }
}
