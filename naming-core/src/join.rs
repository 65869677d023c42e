//! Skip-blank join shared by every output string.

use crate::normalize::Normalizer;

/// Normalize each value, drop the ones that come out empty, join the rest.
///
/// Blank fields never produce doubled, leading or trailing delimiters.
pub fn join<I, S>(delimiter: &str, values: I, normalizer: Normalizer) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = values
        .into_iter()
        .map(|value| normalizer(value.as_ref()))
        .filter(|value| !value.is_empty())
        .collect();

    parts.join(delimiter)
}
