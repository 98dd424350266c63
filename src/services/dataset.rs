use crate::domain::models::Record;
use anyhow::Context;
use std::io::Read;
use std::path::Path;

pub const REQUIRED_COLUMNS: [&str; 3] = ["crime_type", "toxicity_label", "matched_keywords"];

#[derive(Debug)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub missing_columns: Vec<String>,
    pub records: Vec<Record>,
}

pub fn load_dataset(path: &Path) -> anyhow::Result<Dataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open dataset {}", path.display()))?;
    let dataset =
        read_dataset(file).with_context(|| format!("failed to read dataset {}", path.display()))?;
    for col in &dataset.missing_columns {
        log::warn!(
            "dataset {} has no `{}` column; treating it as empty for every row",
            path.display(),
            col
        );
    }
    Ok(dataset)
}

/// Reads a header-led CSV document fully into memory. Fields are looked up by
/// header name; absent columns and short rows read as empty strings, unknown
/// columns are ignored.
pub fn read_dataset<R: Read>(reader: R) -> anyhow::Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    // Duplicate headers resolve to the last occurrence.
    let position = |name: &str| columns.iter().rposition(|h| h == name);
    let [crime_type, toxicity_label, matched_keywords] = REQUIRED_COLUMNS.map(position);
    let missing_columns = REQUIRED_COLUMNS
        .iter()
        .filter(|c| position(**c).is_none())
        .map(|c| c.to_string())
        .collect();

    let field = |row: &csv::StringRecord, idx: Option<usize>| {
        idx.and_then(|i| row.get(i)).unwrap_or_default().to_string()
    };
    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        records.push(Record {
            crime_type: field(&row, crime_type),
            toxicity_label: field(&row, toxicity_label),
            matched_keywords: field(&row, matched_keywords),
        });
    }
    log::debug!("loaded {} rows across {} columns", records.len(), columns.len());

    Ok(Dataset {
        columns,
        missing_columns,
        records,
    })
}
