use itertools::Itertools;

/// Joins the whitespace separated tokens of a string with single spaces, dropping any leading
/// or trailing whitespace
pub fn collapse_whitespace(s: impl AsRef<str>) -> String {
    s.as_ref().split_whitespace().join(" ")
}

/// Sorts the whitespace separated tokens of a string and joins them back with single spaces
///
/// e.g. `"skyrim elder the"` becomes `"elder skyrim the"`
pub fn sorted_tokens(s: impl AsRef<str>) -> String {
    s.as_ref().split_whitespace().sorted_unstable().join(" ")
}
