//! `H:MM:SS` durations as whole seconds.

/// Total seconds of an `H:MM:SS` duration: `h*3600 + m*60 + s`.
///
/// Anything that is not exactly three colon-separated integers collapses to 0, so an
/// empty gap and a garbled one compare equal. Each component carries its own sign,
/// so `-0:01:05` is 65 and `-1:01:05` is -3535.
pub fn to_seconds(value: Option<&str>) -> i64 {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return 0;
    };

    let mut parts = value.split(':');
    let (Some(h), Some(m), Some(s), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return 0;
    };

    match (component(h), component(m), component(s)) {
        (Some(h), Some(m), Some(s)) => h
            .saturating_mul(3600)
            .saturating_add(m.saturating_mul(60))
            .saturating_add(s),
        _ => 0,
    }
}

/// A trimmed, optionally signed integer.
fn component(part: &str) -> Option<i64> {
    let part = part.trim();
    let digits = part.strip_prefix(['-', '+']).unwrap_or(part);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
