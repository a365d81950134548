use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    io::Read,
    path::Path,
};

use itertools::Itertools;

use crate::{
    clustering::{build_mapping, find_similar},
    config::DedupConfig,
    data::{AnnotatedRecord, GameActivityRecord, NameMapping, ScoredMatch},
    dataset::{load_records, read_records},
    error::DedupError,
    macros::logs::warn_no_names,
    normalizer::normalize,
};

const STAGE: &str = "deduplicator";

/// Holds everything about a single deduplication run: the dataset rows, the normalized form of
/// each distinct raw name, and the pool of distinct normalized names to match against
#[derive(Debug, Clone)]
pub struct TitleDeduplicator {
    records: Vec<GameActivityRecord>,
    normalized_names: HashMap<String, String>,
    candidates: Vec<String>,
    config: DedupConfig,
}

impl TitleDeduplicator {
    /// Normalizes every distinct raw name once, and collects the distinct normalized names in
    /// order of first appearance
    #[tracing::instrument(level = "debug", skip(records))]
    pub fn new(records: Vec<GameActivityRecord>, config: DedupConfig) -> Self {
        let mut normalized_names = HashMap::new();
        for record in &records {
            normalized_names
                .entry(record.game_name.clone())
                .or_insert_with(|| normalize(&record.game_name));
        }

        let candidates = records
            .iter()
            .filter_map(|r| normalized_names.get(&r.game_name))
            .unique()
            .cloned()
            .collect::<Vec<String>>();

        tracing::debug!(
            "{STAGE} - {} record(s), {} distinct raw name(s), {} distinct normalized name(s)",
            records.len(),
            normalized_names.len(),
            candidates.len()
        );

        Self {
            records,
            normalized_names,
            candidates,
            config,
        }
    }

    /// Loads the dataset at `path` using the given configuration
    pub fn from_path(path: &Path, config: DedupConfig) -> Result<Self, DedupError> {
        let records = load_records(path, &config)?;
        Ok(Self::new(records, config))
    }

    /// Reads a CSV dataset from `reader` using the given configuration
    pub fn from_reader<R: Read>(reader: R, config: DedupConfig) -> Result<Self, DedupError> {
        let records = read_records(reader, &config)?;
        Ok(Self::new(records, config))
    }

    pub fn records(&self) -> &[GameActivityRecord] {
        &self.records
    }

    pub fn config(&self) -> &DedupConfig {
        &self.config
    }

    /// Distinct normalized names, in order of first appearance in the dataset
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Normalized form of a raw name, from the cache if the name is part of the dataset
    pub fn normalized_name(&self, raw_name: &str) -> String {
        self.normalized_names
            .get(raw_name)
            .cloned()
            .unwrap_or_else(|| normalize(raw_name))
    }

    /// Names in the dataset similar to `query`, using the configured lookup threshold and limit
    pub fn find_similar(&self, query: &str) -> Vec<ScoredMatch> {
        find_similar(
            query,
            &self.candidates,
            self.config.lookup_threshold,
            self.config.lookup_limit,
        )
    }

    /// Clusters the dataset's normalized names using the configured mapping threshold
    ///
    /// Fails with [`DedupError::NoGameNames`] if the dataset has no rows.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn build_mapping(&self) -> Result<NameMapping, DedupError> {
        if self.candidates.is_empty() {
            warn_no_names!();
            return Err(DedupError::NoGameNames);
        }

        Ok(build_mapping(&self.candidates, self.config.mapping_threshold))
    }

    /// Attaches the normalized and standard name to every row
    pub fn annotate(&self, mapping: &NameMapping) -> Vec<AnnotatedRecord> {
        self.records
            .iter()
            .map(|record| {
                let normalized_name = self.normalized_name(&record.game_name);
                let standard_name = mapping.get(&normalized_name).map(str::to_owned);

                if standard_name.is_none() {
                    tracing::warn!(
                        "{STAGE} - no standard name for {:?} (normalized to {normalized_name:?})",
                        record.game_name
                    );
                }

                AnnotatedRecord {
                    record: record.clone(),
                    normalized_name,
                    standard_name,
                }
            })
            .collect()
    }

    /// Standard names which more than one distinct raw spelling in the dataset was mapped to,
    /// with those spellings sorted
    pub fn potential_duplicates(&self, mapping: &NameMapping) -> BTreeMap<String, Vec<String>> {
        let mut spellings: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

        for (raw_name, normalized_name) in &self.normalized_names {
            if let Some(standard_name) = mapping.get(normalized_name) {
                spellings
                    .entry(standard_name)
                    .or_default()
                    .insert(raw_name.as_str());
            }
        }

        spellings
            .into_iter()
            .filter(|(_, raw_names)| raw_names.len() > 1)
            .map(|(standard_name, raw_names)| {
                (
                    standard_name.to_owned(),
                    raw_names.into_iter().map(str::to_owned).collect(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
pub mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data::Behaviour;

    fn record(user_id: &str, game_name: &str) -> GameActivityRecord {
        GameActivityRecord {
            user_id: user_id.into(),
            game_name: game_name.into(),
            behaviour: Behaviour::Purchase,
            value: 1.0,
        }
    }

    fn deduplicator() -> TitleDeduplicator {
        TitleDeduplicator::new(
            vec![
                record("1", "The Elder Scrolls V Skyrim"),
                record("2", "BioShock Infinite"),
                record("3", "The Elder Scrolls V: Skyrim"),
                record("4", "The Elder Scrolls V Skyrim - GOTY Edition"),
                record("5", "BioShock Infinite"),
                record("6", "BioShock 2"),
            ],
            DedupConfig::default(),
        )
    }

    #[test]
    fn test_candidates_in_first_appearance_order() {
        assert_eq!(
            deduplicator().candidates(),
            [
                "the elder scrolls v skyrim",
                "bioshock infinite",
                "the elder scrolls v skyrim goty",
                "bioshock 2",
            ]
        );
    }

    #[test]
    fn test_normalized_name() {
        let deduplicator = deduplicator();

        assert_eq!(
            deduplicator.normalized_name("The Elder Scrolls V: Skyrim"),
            "the elder scrolls v skyrim"
        );
        assert_eq!(deduplicator.normalized_name("Portal 2!"), "portal 2");
    }

    #[test]
    fn test_find_similar() {
        let matches = deduplicator().find_similar("BioShock Infinite");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "bioshock infinite");
    }

    #[test]
    fn test_annotate() -> Result<(), DedupError> {
        let deduplicator = deduplicator();
        let mapping = deduplicator.build_mapping()?;

        let annotated = deduplicator.annotate(&mapping);

        assert_eq!(annotated.len(), 6);
        assert_eq!(annotated[3].record.user_id, "4");
        assert_eq!(annotated[3].normalized_name, "the elder scrolls v skyrim goty");
        assert_eq!(
            annotated[3].standard_name.as_deref(),
            Some("the elder scrolls v skyrim")
        );
        assert_eq!(
            annotated[5].standard_name.as_deref(),
            Some("bioshock 2")
        );

        Ok(())
    }

    #[test]
    fn test_annotate_with_foreign_mapping() {
        let annotated = deduplicator().annotate(&NameMapping::new());

        assert!(annotated.iter().all(|a| a.standard_name.is_none()));
    }

    #[test]
    fn test_potential_duplicates() -> Result<(), DedupError> {
        let deduplicator = deduplicator();
        let mapping = deduplicator.build_mapping()?;

        let duplicates = deduplicator.potential_duplicates(&mapping);

        assert_eq!(duplicates.len(), 1);
        assert_eq!(
            duplicates["the elder scrolls v skyrim"],
            vec![
                "The Elder Scrolls V Skyrim",
                "The Elder Scrolls V Skyrim - GOTY Edition",
                "The Elder Scrolls V: Skyrim",
            ]
        );

        Ok(())
    }

    #[test]
    fn test_build_mapping_without_records() {
        let deduplicator = TitleDeduplicator::new(Vec::new(), DedupConfig::default());

        assert!(matches!(
            deduplicator.build_mapping(),
            Err(DedupError::NoGameNames)
        ));
    }
}
