//! Loading of user activity datasets from CSV.
//!
//! Rows look like `user_id,game_name,behaviour,value,0` with no header row by default. Rows
//! may be short: a missing game name reads as an empty string and a missing value as `0.0`.

use std::{fs::File, io::Read, path::Path};

use crate::{
    config::DedupConfig,
    data::{Behaviour, GameActivityRecord},
    error::DedupError,
    macros::logs::warn_no_names,
};

const STAGE: &str = "dataset";

/// Reads every record of a CSV dataset from the given file path
#[tracing::instrument(level = "debug", skip(config))]
pub fn load_records(
    path: &Path,
    config: &DedupConfig,
) -> Result<Vec<GameActivityRecord>, DedupError> {
    let file = File::open(path)
        .inspect_err(|e| tracing::error!("{STAGE} - failed to open {path:?}: {e}"))?;

    read_records(file, config)
}

/// Reads every record of a CSV dataset from the given reader
pub fn read_records<R: Read>(
    reader: R,
    config: &DedupConfig,
) -> Result<Vec<GameActivityRecord>, DedupError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(config.has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        records.push(parse_row(&row, config)?);
    }

    if records.is_empty() {
        warn_no_names!();
    } else {
        tracing::debug!("{STAGE} - read {} record(s)", records.len());
    }

    Ok(records)
}

/// Builds a [`GameActivityRecord`] from a single CSV row
fn parse_row(
    row: &csv::StringRecord,
    config: &DedupConfig,
) -> Result<GameActivityRecord, DedupError> {
    let columns = &config.columns;
    let field = |index: usize| row.get(index).unwrap_or_default();

    let value = match field(columns.value) {
        "" => 0.0,
        raw => raw.parse::<f64>().map_err(|e| {
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            tracing::error!("{STAGE} - invalid value {raw:?} on line {line}: {e}");

            DedupError::InvalidRecord {
                line,
                reason: format!("value {raw:?} is not a number"),
            }
        })?,
    };

    Ok(GameActivityRecord {
        user_id: field(columns.user_id).to_owned(),
        game_name: field(columns.game_name).to_owned(),
        behaviour: Behaviour::from(field(columns.behaviour)),
        value,
    })
}
