use lib_game_title_dedup::{DedupConfig, TitleDeduplicator};
use tracing::debug;

// NOTE: run with, e.g. `cargo run --example 01_basic -- path/to/dataset.csv`
fn main() {
    // Init tracing
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("tests/fixtures/user_activity.csv"));

    debug!("Loading dataset from {path}");
    let deduplicator = TitleDeduplicator::from_path(path.as_ref(), DedupConfig::default())
        .expect("failed to load dataset");
    let mapping = deduplicator
        .build_mapping()
        .expect("failed to build mapping");

    dbg!(deduplicator.candidates());
    dbg!(&mapping);
    dbg!(deduplicator.annotate(&mapping));
}
