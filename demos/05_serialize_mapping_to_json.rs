use std::io::{Write, stdout};

use lib_game_title_dedup::{DedupConfig, TitleDeduplicator};

fn main() {
    let deduplicator = TitleDeduplicator::from_path(
        "tests/fixtures/user_activity.csv".as_ref(),
        DedupConfig::default(),
    )
    .expect("failed to load dataset");

    match deduplicator.build_mapping() {
        Ok(mapping) => {
            let serialized =
                serde_json::to_string_pretty(&mapping).expect("failed to serialize mapping");
            let mut stdout = stdout().lock();
            writeln!(&mut stdout, "{serialized}").expect("failed to write to stdout");
        }
        Err(e) => println!("No mapping built: {e}"),
    }
}
