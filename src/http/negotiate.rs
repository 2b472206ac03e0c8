//! Content negotiation.
//!
//! This is a coarse heuristic, not a media-type parser: a file is acceptable
//! when the `Accept` value is exactly `*/*` or mentions the file's extension
//! anywhere in its text. `Accept: text/html` matches `index.html`, and so
//! does `Accept: foo/xhtml`. A file without an extension matches any
//! `Accept` value.

use std::path::Path;

const WILDCARD: &str = "*/*";

/// Decides whether a file with `extension` may be sent to a client that
/// declared `accept`. A missing `Accept` header is never negotiable.
pub fn is_acceptable(accept: Option<&str>, extension: &str) -> bool {
    match accept {
        Some(accept) => accept == WILDCARD || accept.contains(extension),
        None => false,
    }
}

/// The text after the last `.` of the path, without the dot.
///
/// Only a dot after the final `/` counts, and only if something other than
/// dots precedes it in that component. A trailing `/` therefore means no
/// extension, as do leading-dot names like `.profile` or `..a`.
pub fn extension_of(path: &Path) -> String {
    let path = path.to_string_lossy();
    let name_start = path.rfind('/').map_or(0, |i| i + 1);
    let name = &path[name_start..];

    match name.rfind('.') {
        Some(dot) if name[..dot].bytes().any(|b| b != b'.') => name[dot + 1..].to_string(),
        _ => String::new(),
    }
}
