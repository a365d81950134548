//! Greedy, threshold based clustering of normalized names.
//!
//! Clustering is an approximate nearest-representative assignment rather than a transitive
//! grouping: names are visited once in order, and each name which is not yet assigned pulls
//! every unassigned name within the threshold into the group of its best match. A name
//! which is similar to a member of an existing group, but not to the name which formed that
//! group, starts a group of its own.

use itertools::Itertools;

use crate::{
    data::{NameMapping, ScoredMatch},
    macros::logs::{debug_group, warn_no_names},
    normalizer::normalize,
    similarity::extract,
};

/// Minimum similarity for two names to be placed in the same cluster
pub const DEFAULT_MAPPING_THRESHOLD: f64 = 90.0;

/// Minimum similarity for a name to be reported by [`find_similar`]
pub const DEFAULT_LOOKUP_THRESHOLD: f64 = 85.0;

/// Maximum number of names reported by [`find_similar`]
pub const DEFAULT_LOOKUP_LIMIT: usize = 5;

const STAGE: &str = "clustering";

/// Builds a mapping from every given normalized name to the standard name of its cluster
///
/// Names are processed in iteration order, with repeated names ignored. For each name
/// without a standard name yet, every name scoring at least `threshold` against it is
/// retained, and all retained names which are not already assigned get the best scoring one
/// as their standard name. Ties in score go to the lexicographically smallest name.
///
/// A `threshold` above 100 maps each name to itself, while a `threshold` of 0 maps everything
/// to the first name.
#[tracing::instrument(level = "debug", skip(names))]
pub fn build_mapping<I, S>(names: I, threshold: f64) -> NameMapping
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let candidates = names
        .into_iter()
        .map(|name| name.as_ref().to_owned())
        .unique()
        .collect::<Vec<String>>();

    let mut mapping = NameMapping::new();

    if candidates.is_empty() {
        warn_no_names!();
        return mapping;
    }

    for name in &candidates {
        if mapping.contains(name) {
            continue;
        }

        let matches = extract(name, &candidates, threshold);

        // Matches are ranked best first
        let Some(representative) = matches.first().map(|m| m.name.clone()) else {
            mapping.assign(name, name);
            continue;
        };

        let members = matches
            .iter()
            .filter(|m| mapping.assign(&m.name, &representative))
            .map(|m| m.name.as_str())
            .collect::<Vec<&str>>();

        debug_group!(representative, members);
    }

    tracing::debug!(
        "{STAGE} - {} name(s) mapped to {} standard name(s)",
        mapping.len(),
        mapping.standard_names().len()
    );

    mapping
}

/// Finds the names in `candidates` which are similar to a raw `query`
///
/// The query is normalized before comparing. Matches scoring below `threshold` are dropped,
/// and the rest are ordered best first (ties by name) and cut down to `limit`, if given.
/// Nothing is assigned or cached.
#[tracing::instrument(level = "debug", skip(candidates))]
pub fn find_similar<S: AsRef<str>>(
    query: &str,
    candidates: &[S],
    threshold: f64,
    limit: Option<usize>,
) -> Vec<ScoredMatch> {
    let normalized = normalize(query);
    let candidates = candidates
        .iter()
        .map(|candidate| candidate.as_ref())
        .unique()
        .collect::<Vec<&str>>();

    let mut matches = extract(&normalized, &candidates, threshold);
    if let Some(limit) = limit {
        matches.truncate(limit);
    }

    matches
}
