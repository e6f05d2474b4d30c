//! Escaping transform protecting reserved routing characters.
//!
//! Argument values travel embedded in a delimiter-heavy route syntax, so
//! every character the route grammar reserves must be neutralized before
//! a value enters a route string and restored on the way out. Each
//! reserved character maps to a single-character Unicode stand-in
//! (fullwidth forms, control pictures for line breaks). The marker
//! alphabet is disjoint from the reserved set and every marker is one
//! scalar value, so no marker can overlap or prefix another.
//!
//! [`escape`] and [`unescape`] are mutual inverses on any string that
//! does not already contain a marker.

/// Reserved character → marker substitution table.
///
/// The order is fixed (`%` first) and shared by both directions.
const RESERVED: &[(char, char)] = &[
    ('%', '％'),
    ('&', '＆'),
    ('=', '＝'),
    ('?', '？'),
    ('/', '／'),
    ('$', '＄'),
    ('{', '｛'),
    ('}', '｝'),
    ('+', '＋'),
    ('\n', '␊'),
    ('\r', '␍'),
];

/// Replace every reserved routing character in `value` with its marker.
///
/// The result is safe to splice into a `name=value` route segment.
/// Reverse with [`unescape`].
#[must_use]
pub fn escape(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            RESERVED
                .iter()
                .find(|(reserved, _)| *reserved == c)
                .map_or(c, |(_, marker)| *marker)
        })
        .collect()
}

/// Recover the original string produced by [`escape`].
#[must_use]
pub fn unescape(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            RESERVED
                .iter()
                .find(|(_, marker)| *marker == c)
                .map_or(c, |(reserved, _)| *reserved)
        })
        .collect()
}
