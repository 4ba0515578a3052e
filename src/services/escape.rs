//! Output escaping for the three contexts the renderer writes into:
//! HTML attributes/text, URL attributes, and class names.
//!
//! Field data is author-controlled, so every value that reaches the
//! fragment goes through one of these. This is a correctness contract,
//! not cosmetics: an unescaped label is stored markup injection.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;
use std::sync::LazyLock;

/// Characters percent-encoded inside URL attribute values.
///
/// Valid URL structure (`/`, `?`, `#`, `%`, `&`, `=`) passes through;
/// anything that could terminate the attribute or smuggle markup does not.
const URL_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'\\')
    .add(b'^')
    .add(b'{')
    .add(b'}')
    .add(b'|');

static NON_CLASS_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("valid class pattern"));

/// Escape a string for use in HTML attribute values or text content.
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape a URL-like value for use in a `src` attribute.
///
/// Values with an explicit scheme other than http/https come back empty;
/// scheme-relative and path-relative values pass through percent-encoded.
/// Ampersands are entity-encoded last for the attribute context.
pub fn escape_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if let Some(scheme) = explicit_scheme(trimmed) {
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return String::new();
        }
    }

    utf8_percent_encode(trimmed, URL_UNSAFE)
        .to_string()
        .replace('&', "&amp;")
}

/// Extract an explicit scheme per RFC 3986 (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`).
fn explicit_scheme(url: &str) -> Option<&str> {
    let colon = url.find(':')?;
    let candidate = &url[..colon];

    let mut chars = candidate.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(candidate)
    } else {
        None
    }
}

/// Reduce a string to the characters allowed in a CSS class name.
pub fn sanitize_html_class(s: &str) -> String {
    NON_CLASS_CHARS.replace_all(s, "").into_owned()
}

/// Clean up a free-text value: trim, collapse whitespace runs to single
/// spaces, and strip remaining control characters.
pub fn sanitize_text_field(s: &str) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().filter(|c| !c.is_control()).collect()
}
