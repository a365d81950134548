use lib_game_title_dedup::{DedupConfig, TitleDeduplicator};

fn main() {
    let deduplicator = TitleDeduplicator::from_path(
        "tests/fixtures/user_activity.csv".as_ref(),
        DedupConfig::default(),
    )
    .expect("failed to load dataset");
    let mapping = deduplicator
        .build_mapping()
        .expect("failed to build mapping");

    let duplicates = deduplicator.potential_duplicates(&mapping);

    if duplicates.is_empty() {
        println!("No potential duplicates found.");
        return;
    }

    println!("Potential duplicates to review:");
    for (standard_name, raw_names) in duplicates {
        println!("{standard_name}");
        for raw_name in raw_names {
            println!("  - {raw_name}");
        }
    }
}
