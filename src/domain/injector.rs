//! Placeholder substitution for `${NAME}` and `$NAME` references.

use super::env_map::EnvMap;

/// Replace every `${key}` and every bare `$key` with the value bound to `key`.
///
/// A bare reference only matches when the character after the key is not
/// `[A-Za-z0-9_]`, so `$XY` is never rewritten by a binding for `X`. When
/// several keys match at the same position the longest one wins.
/// Placeholders without a binding are kept byte-for-byte, and inserted values
/// are never rescanned.
pub fn inject_variables(text: &str, vars: &EnvMap) -> String {
    if vars.is_empty() || !text.contains('$') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find('$') {
        let dollar = cursor + offset;
        out.push_str(&text[cursor..dollar]);

        let rest = &text[dollar + 1..];
        match resolve_at(rest, vars) {
            Some((value, consumed)) => {
                out.push_str(value);
                cursor = dollar + 1 + consumed;
            }
            None => {
                out.push('$');
                cursor = dollar + 1;
            }
        }
    }

    out.push_str(&text[cursor..]);
    out
}

/// Resolve the reference that follows a `$`, returning the value and the
/// number of bytes consumed after the `$`.
fn resolve_at<'a>(rest: &str, vars: &'a EnvMap) -> Option<(&'a str, usize)> {
    if let Some(inner) = rest.strip_prefix('{') {
        let close = inner.find('}')?;
        let value = vars.get(&inner[..close])?;
        return Some((value, close + 2));
    }

    vars.iter()
        .filter(|(key, _)| !key.is_empty() && rest.starts_with(key))
        .filter(|(key, _)| !rest[key.len()..].starts_with(is_word_char))
        .max_by_key(|(key, _)| key.len())
        .map(|(key, value)| (value, key.len()))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
