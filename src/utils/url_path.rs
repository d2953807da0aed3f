use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Url;

/// Characters left alone by a browser's `encodeURIComponent`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Joins `route` (and an optional filename, escaped) onto the backend base URL.
pub fn endpoint(base: &Url, route: &str, filename: Option<&str>) -> String {
    let base = base.as_str().trim_end_matches('/');
    match filename {
        Some(name) => format!("{}/{}/{}", base, route, encode_segment(name)),
        None => format!("{}/{}", base, route),
    }
}
