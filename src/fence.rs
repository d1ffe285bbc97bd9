//! Fenced code-block framing for table text.
//!
//! A table lives in a document as
//!
//! ````text
//! ```tb
//! | A | B |
//! | --- | --- |
//! ```
//! ````
//!
//! Finding the block inside a larger document is left to the caller; these
//! helpers only add or strip the fence lines of a single block.

use crate::constants::FENCE;
use crate::{Error, FenceOptions, Result};

/// Whether `text` opens with a code fence.
pub fn is_fenced(text: &str) -> bool {
    text.trim_start().starts_with(FENCE)
}

/// Frame table text as a fenced block.
pub fn wrap(body: &str, options: &FenceOptions) -> String {
    let mut out = String::with_capacity(body.len() + options.info_string.len() + 8);
    out.push_str(FENCE);
    out.push_str(&options.info_string);
    out.push('\n');
    if !body.is_empty() {
        out.push_str(body);
        out.push('\n');
    }
    out.push_str(FENCE);
    out
}

/// Strip the fence lines from a single fenced block and return its body.
///
/// The opening line must be the fence followed by the configured info
/// string; the last non-blank line must be a bare fence.
pub fn unwrap_block<'a>(block: &'a str, options: &FenceOptions) -> Result<&'a str> {
    let block = block.trim();
    let (opening, rest) = match block.split_once('\n') {
        Some((opening, rest)) => (opening.trim_end(), rest),
        None => (block, ""),
    };

    let Some(info) = opening.strip_prefix(FENCE) else {
        return Err(Error::fence("block does not start with a fence"));
    };
    if info.trim() != options.info_string {
        return Err(Error::fence(format!(
            "expected info string \"{}\", found \"{}\"",
            options.info_string,
            info.trim()
        )));
    }

    let rest = rest.trim_end();
    let body = match rest.rsplit_once('\n') {
        Some((body, closing)) if closing.trim() == FENCE => body,
        None if rest.trim() == FENCE => "",
        _ => return Err(Error::fence("missing closing fence")),
    };
    Ok(body.strip_suffix('\r').unwrap_or(body))
}
