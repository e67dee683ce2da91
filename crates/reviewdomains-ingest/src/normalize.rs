//! Review text normalization.
//!
//! Steps run strictly in sequence; later steps see the artifacts of earlier ones:
//! 1. strip HTML tags
//! 2. drop non-ASCII characters (lossy, no transliteration)
//! 3. replace URLs with `[URL]`
//! 4. decode HTML entities
//! 5. collapse whitespace runs
//! 6. trim
//!
//! Entity decoding runs after the ASCII pass, so `&eacute;` still decodes to a
//! non-ASCII `é` while a literal `é` is dropped. That ordering is kept as-is.
//!
//! Whitespace is Unicode `White_Space` plus the ASCII separators `\x1c`–`\x1f`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").unwrap());
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"http[^\s\x1c-\x1f]+|www.[^\s\x1c-\x1f]+").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\x1c-\x1f]+").unwrap());
/// One character reference: decimal, hex, or up to 32 name characters, `;` optional.
static ENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[0-9]+;?|#[xX][0-9a-fA-F]+;?|[^\t\n\x0c <&#;]{1,32};?)").unwrap()
});

/// Placeholder substituted for every URL-like token.
pub const URL_TOKEN: &str = "[URL]";

/// Normalize one review text.
pub fn normalize(text: &str) -> String {
    let text = strip_html_tags(text);
    let text = strip_non_ascii(&text);
    let text = replace_urls(&text);
    let text = decode_entities(&text);
    let text = collapse_whitespace(&text);
    text.trim_matches(is_separator).to_string()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Remove `<...>` spans, shortest match first. Tags never span a newline.
pub fn strip_html_tags(text: &str) -> String {
    HTML_TAG_RE.replace_all(text, "").into_owned()
}

pub fn strip_non_ascii(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

/// Replace `http…` and `www?…` tokens, up to the next whitespace, with `[URL]`.
pub fn replace_urls(text: &str) -> String {
    URL_RE.replace_all(text, URL_TOKEN).into_owned()
}

/// Decode named and numeric HTML entities in a single left-to-right pass.
///
/// Follows the HTML5 rules: legacy names decode without a trailing `;`
/// (`&amp`, `&lt3`), C1 references are remapped through windows-1252
/// (`&#128;` → `€`), and NUL, surrogates or out-of-range values become U+FFFD.
/// References to other control or noncharacter code points decode to nothing.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    ENTITY_RE
        .replace_all(text, |caps: &Captures| {
            if is_dropped_charref(&caps[1]) {
                String::new()
            } else {
                htmlize::unescape(&caps[0]).into_owned()
            }
        })
        .into_owned()
}

/// Numeric references to control characters (outside the C1 block) and
/// noncharacters.
fn is_dropped_charref(body: &str) -> bool {
    let Some(digits) = body.strip_prefix('#') else {
        return false;
    };
    let digits = digits.trim_end_matches(';');
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => digits.parse::<u32>(),
    };
    let Ok(code) = code else {
        return false;
    };
    matches!(code, 0x01..=0x08 | 0x0b | 0x0e..=0x1f | 0x7f | 0xfdd0..=0xfdef)
        || (code <= 0x10ffff && code & 0xfffe == 0xfffe)
}

pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").into_owned()
}
