//! Normalization of raw game titles into a canonical form used for matching.

use crate::utils::collapse_whitespace;

/// Ordered substitutions applied after separators have been replaced. Order matters: the GOTY
/// phrase has to be collapsed before a bare `edition` is removed.
const SUBSTITUTIONS: [(&str, &str); 3] = [
    ("game of the year edition", "goty"),
    ("directors cut", "directorscut"),
    ("edition", ""),
];

/// Normalizes a raw game title into a lowercase, punctuation free, whitespace collapsed form
///
/// e.g. `"The Elder Scrolls V: Skyrim - Game of the Year Edition"` becomes
/// `"the elder scrolls v skyrim goty"`
///
/// Stripping punctuation can expose new matches for the substitutions (`"Director's Cut"`
/// becomes `"directors cut"`), so the steps are repeated until the output stops changing.
/// This keeps the function idempotent.
pub fn normalize(raw: impl AsRef<str>) -> String {
    let mut current = normalize_once(raw.as_ref());

    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// A single pass of every normalization step
fn normalize_once(raw: &str) -> String {
    let mut name = raw.to_lowercase().replace(" - ", " ").replace('-', " ");

    for (pattern, replacement) in SUBSTITUTIONS {
        name = name.replace(pattern, replacement);
    }

    let stripped = name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect::<String>();

    collapse_whitespace(stripped)
}
