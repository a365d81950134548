//! A Rust library for cleaning and deduplicating free-text game titles, such as those found in
//! user activity datasets.
//!
//! # Description
//!
//! Datasets built from user activity tend to spell the same game in many ways: `"The Elder
//! Scrolls V: Skyrim"`, `"The Elder Scrolls V Skyrim - GOTY Edition"`, and so on. This library
//! normalizes those titles, then clusters near-duplicate spellings under a single standard
//! name using a token-order-insensitive similarity score.
//!
//! Clustering is greedy: names are visited in order and each unassigned name claims every
//! unassigned name within the threshold. Groups are therefore not transitive, see
//! [`clustering`] for details.
//!
//! # Usage
//!
//! ```rust
//! use lib_game_title_dedup::{build_mapping, normalize, DEFAULT_MAPPING_THRESHOLD};
//!
//! let names = [
//!     normalize("The Elder Scrolls V: Skyrim"),
//!     normalize("The Elder Scrolls V Skyrim - GOTY Edition"),
//!     normalize("BioShock Infinite"),
//! ];
//!
//! let mapping = build_mapping(&names, DEFAULT_MAPPING_THRESHOLD);
//! assert_eq!(
//!     mapping.get("the elder scrolls v skyrim goty"),
//!     Some("the elder scrolls v skyrim")
//! );
//! ```
//!
//! For whole datasets, [`TitleDeduplicator`] reads CSV rows and caches normalized names:
//!
//! ```rust
//! use lib_game_title_dedup::{DedupConfig, TitleDeduplicator};
//!
//! let dataset = "1,BioShock Infinite,play,4.5,0\n2,Bioshock: Infinite,purchase,1.0,0\n";
//! let deduplicator = TitleDeduplicator::from_reader(dataset.as_bytes(), DedupConfig::default())?;
//!
//! let mapping = deduplicator.build_mapping()?;
//! let annotated = deduplicator.annotate(&mapping);
//! assert!(annotated.iter().all(|a| a.standard_name.as_deref() == Some("bioshock infinite")));
//! # Ok::<(), lib_game_title_dedup::error::DedupError>(())
//! ```

pub mod clustering;
pub mod config;
pub mod data;
pub mod dataset;
pub mod deduplicator;
pub mod error;
mod macros;
pub mod normalizer;
pub mod similarity;
mod utils;

pub use clustering::{
    DEFAULT_LOOKUP_LIMIT, DEFAULT_LOOKUP_THRESHOLD, DEFAULT_MAPPING_THRESHOLD, build_mapping,
    find_similar,
};
pub use config::{DatasetColumns, DedupConfig};
pub use data::{AnnotatedRecord, Behaviour, GameActivityRecord, NameMapping, ScoredMatch};
pub use deduplicator::TitleDeduplicator;
pub use normalizer::normalize;
pub use similarity::token_sort_ratio;
