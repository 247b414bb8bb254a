//! Placeholder substitution for error message templates.

use indexmap::IndexMap;

/// The named values available to a template while it is being formatted.
pub type Context = IndexMap<String, String>;

/// Formats a message template against a context.
///
/// `{name}` tokens (`name` being alphanumeric or `_`) are replaced with the
/// context value registered under that name, or the empty string when the
/// context has no such entry. `{{` and `}}` emit literal braces. Anything
/// else is copied through unchanged, and the final string is trimmed.
pub fn format(template: &str, context: &Context) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            rest = after;
        } else if let Some(after) = tail.strip_prefix("}}") {
            out.push('}');
            rest = after;
        } else if tail.starts_with('{')
            && let Some((name, after)) = token(tail)
        {
            if let Some(value) = context.get(name) {
                out.push_str(value);
            }
            rest = after;
        } else {
            // A stray brace is not a token, keep it as-is.
            out.push_str(&tail[..1]);
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out.trim().to_string()
}

/// Splits a `{name}` token off the front of `tail`, which starts with `{`.
fn token(tail: &str) -> Option<(&str, &str)> {
    let body = &tail[1..];
    let end = body
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(body.len());
    if end > 0 && body[end..].starts_with('}') {
        Some((&body[..end], &body[end + 1..]))
    } else {
        None
    }
}
