/// The two-character token marking the variable suffix of a route pattern.
pub const WILDCARD: &str = "**";

/// Replace the single wildcard marker in `pattern` with `value`.
///
/// If the substituted path ends with `/`, exactly one trailing slash is
/// stripped, never more. Callers only invoke this on patterns that contain
/// the marker.
pub fn substitute(pattern: &str, value: &str) -> String {
    let path = pattern.replacen(WILDCARD, value, 1);
    match path.strip_suffix('/') {
        Some(trimmed) => trimmed.to_string(),
        None => path,
    }
}
