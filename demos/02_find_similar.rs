use lib_game_title_dedup::{DedupConfig, TitleDeduplicator};

fn main() {
    let deduplicator = TitleDeduplicator::from_path(
        "tests/fixtures/user_activity.csv".as_ref(),
        DedupConfig::default(),
    )
    .expect("failed to load dataset");

    for query in ["The Elder Scrolls V Skyrim", "BioShock Infinite"] {
        println!("Similar games to '{query}':");
        for found in deduplicator.find_similar(query) {
            println!("  {:<40} {:.1}", found.name, found.score);
        }
    }
}
