//! Field value cleanup applied before anything is joined.

/// A field normalizer, selected per call site of [`crate::join::join`].
pub type Normalizer = fn(&str) -> String;

/// Invisible whitespace that form inputs pick up from copy-paste.
const INVISIBLE_CHARS: &[char] = &[
    '\u{00a0}', // Non-breaking space
    '\u{200b}', // Zero-width space
    '\u{200d}', // Zero-width joiner
    '\u{2060}', // Word joiner
];

/// Clean a single field value.
///
/// Removes every invisible whitespace character listed in [`INVISIBLE_CHARS`],
/// then trims leading and trailing ASCII whitespace. Internal spaces survive.
pub fn normalize(value: &str) -> String {
    let stripped: String = value
        .chars()
        .filter(|c| !INVISIBLE_CHARS.contains(c))
        .collect();

    stripped
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .to_string()
}

/// Ad-set variant for video: [`normalize`], then drop every ASCII space.
pub fn normalize_video_ad_set(value: &str) -> String {
    remove_spaces(&normalize(value))
}

/// Ad-set variant for static: [`normalize`], commas to dashes, then drop every ASCII space.
pub fn normalize_static_ad_set(value: &str) -> String {
    remove_spaces(&normalize(value).replace(',', "-"))
}

/// Final ad-level pass over the fully joined string: every `", "` becomes `-`.
pub fn replace_comma_space(joined: &str) -> String {
    joined.replace(", ", "-")
}

fn remove_spaces(value: &str) -> String {
    value.chars().filter(|c| *c != ' ').collect()
}
