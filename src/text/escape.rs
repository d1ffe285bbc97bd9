use std::borrow::Cow;

use memchr::{memchr2, memchr2_iter};

use crate::constants::{BACKTICK, ESCAPED_BACKTICK, LINE_BREAK_MARKER};

/// Escape editor text so it fits in a single table row.
///
/// Line breaks become the `<br line/>` marker and backticks gain a
/// backslash. Input that was already encoded gets escaped again; callers
/// decode before re-encoding.
///
/// # Examples
/// ```
/// use pipegrid::encode_cell;
///
/// assert_eq!(encode_cell("a\nb"), "a<br line/>b");
/// assert_eq!(encode_cell("`x`"), "\\`x\\`");
/// ```
pub fn encode_cell(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    if memchr2(b'\n', b'`', bytes).is_none() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    let mut start = 0;
    for idx in memchr2_iter(b'\n', b'`', bytes) {
        out.push_str(&text[start..idx]);
        if bytes[idx] == b'\n' {
            out.push_str(LINE_BREAK_MARKER);
        } else {
            out.push_str(ESCAPED_BACKTICK);
        }
        start = idx + 1;
    }
    out.push_str(&text[start..]);
    Cow::Owned(out)
}

/// Inverse of [`encode_cell`].
///
/// # Examples
/// ```
/// use pipegrid::decode_cell;
///
/// assert_eq!(decode_cell("a<br line/>b"), "a\nb");
/// assert_eq!(decode_cell("\\`x\\`"), "`x`");
/// ```
pub fn decode_cell(value: &str) -> Cow<'_, str> {
    let bytes = value.as_bytes();
    if memchr2(b'<', b'\\', bytes).is_none() {
        return Cow::Borrowed(value);
    }

    let mut out: Option<String> = None;
    let mut start = 0;
    let mut idx = 0;
    while let Some(offset) = memchr2(b'<', b'\\', &bytes[idx..]) {
        let at = idx + offset;
        let rest = &value[at..];
        let (replacement, consumed) = if rest.starts_with(LINE_BREAK_MARKER) {
            ('\n', LINE_BREAK_MARKER.len())
        } else if rest.starts_with(ESCAPED_BACKTICK) {
            (BACKTICK, ESCAPED_BACKTICK.len())
        } else {
            idx = at + 1;
            continue;
        };
        let buf = out.get_or_insert_with(|| String::with_capacity(value.len()));
        buf.push_str(&value[start..at]);
        buf.push(replacement);
        idx = at + consumed;
        start = idx;
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&value[start..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(value),
    }
}
