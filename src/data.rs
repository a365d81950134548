use std::{
    collections::{BTreeMap, BTreeSet, btree_map},
    fmt::{self, Display, Formatter},
};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::normalizer::normalize;

/// A candidate name together with how similar it is to some query, on a 0-100 scale
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScoredMatch {
    pub name: String,
    pub score: f64,
}

impl ScoredMatch {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Association of every normalized name seen in a run to the standard name of its cluster
///
/// Each normalized name has exactly one standard name, and once assigned it is never
/// reassigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct NameMapping(BTreeMap<String, String>);

impl NameMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `standard` to `name`, unless `name` already has a standard name. Returns whether
    /// the assignment happened.
    pub(crate) fn assign(&mut self, name: &str, standard: &str) -> bool {
        match self.0.entry(name.to_owned()) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(entry) => {
                entry.insert(standard.to_owned());
                true
            }
        }
    }

    pub fn contains(&self, normalized_name: &str) -> bool {
        self.0.contains_key(normalized_name)
    }

    /// Standard name for an already normalized name
    pub fn get(&self, normalized_name: &str) -> Option<&str> {
        self.0.get(normalized_name).map(String::as_str)
    }

    /// Standard name for a raw title, normalizing it first
    pub fn standard_name(&self, raw_name: &str) -> Option<&str> {
        self.get(&normalize(raw_name))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(normalized name, standard name)` pairs, ordered by normalized name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All distinct standard names
    pub fn standard_names(&self) -> BTreeSet<&str> {
        self.0.values().map(String::as_str).collect()
    }

    /// Normalized names grouped by their standard name
    pub fn groups(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (name, standard) in self.iter() {
            groups.entry(standard).or_default().push(name);
        }
        groups
    }
}

impl<'a> IntoIterator for &'a NameMapping {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// What a user did with a game, as recorded by the dataset
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum Behaviour {
    Purchase,
    Play,
    Other(String),
}

impl From<&str> for Behaviour {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "purchase" => Behaviour::Purchase,
            "play" => Behaviour::Play,
            _ => Behaviour::Other(value.trim().to_owned()),
        }
    }
}

impl Display for Behaviour {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Behaviour::Purchase => "purchase",
                Behaviour::Play => "play",
                Behaviour::Other(other) => other.as_str(),
            }
        )
    }
}

/// Data structure for a single row of a user activity dataset
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GameActivityRecord {
    pub user_id: String,
    /// Raw game title, as written in the dataset
    pub game_name: String,
    pub behaviour: Behaviour,
    /// Hours played for [`Behaviour::Play`] rows, usually `1.0` for purchases
    pub value: f64,
}

/// A dataset row with its normalized and standardized game names attached
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AnnotatedRecord {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub record: GameActivityRecord,
    pub normalized_name: String,
    /// `None` when the mapping used doesn't cover the normalized name
    pub standard_name: Option<String>,
}

#[cfg(test)]
pub mod test {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_mapping_never_reassigns() {
        let mut mapping = NameMapping::new();

        assert!(mapping.assign("portal", "portal"));
        assert!(!mapping.assign("portal", "portal 2"));

        assert_eq!(mapping.get("portal"), Some("portal"));
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn test_mapping_lookup_by_raw_name() {
        let mut mapping = NameMapping::new();
        mapping.assign("the elder scrolls v skyrim goty", "the elder scrolls v skyrim");

        assert_eq!(
            mapping.standard_name("The Elder Scrolls V Skyrim - GOTY Edition"),
            Some("the elder scrolls v skyrim")
        );
        assert_eq!(mapping.standard_name("Skyrim"), None);
    }

    #[test]
    fn test_mapping_groups() {
        let mut mapping = NameMapping::new();
        mapping.assign("a", "a");
        mapping.assign("b", "a");
        mapping.assign("c", "c");

        let groups = mapping.groups();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["a"], vec!["a", "b"]);
        assert_eq!(groups["c"], vec!["c"]);
        assert_eq!(mapping.standard_names().len(), 2);
    }

    #[test_case("purchase", Behaviour::Purchase)]
    #[test_case(" Play ", Behaviour::Play)]
    #[test_case("refund", Behaviour::Other("refund".into()))]
    fn test_behaviour_from_str(value: &str, expected: Behaviour) {
        assert_eq!(Behaviour::from(value), expected);
    }
}
