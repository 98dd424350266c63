use crate::domain::models::{
    Bucket, CategoryRule, KeywordSummary, PassStats, Record, RuleTable,
};
use std::collections::BTreeSet;

const NO_KEYWORDS: &str = "none";

/// Splits a `matched_keywords` cell into its keywords.
///
/// Quote characters are stripped from both ends only; pieces are trimmed and
/// empty pieces dropped. An empty cell or the literal `none` yields nothing.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    if raw.is_empty() || raw == NO_KEYWORDS {
        return Vec::new();
    }
    raw.trim_matches('"')
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

impl CategoryRule {
    pub fn matches(&self, crime_type: &str, toxicity_label: &str) -> bool {
        self.crime_types
            .iter()
            .any(|t| crime_type.contains(t.as_str()))
            || self
                .toxicity_labels
                .iter()
                .any(|t| toxicity_label.contains(t.as_str()))
    }
}

/// Buckets whose rule accepts the record's labels.
pub fn classify(rules: &RuleTable, record: &Record) -> Vec<Bucket> {
    Bucket::ALL
        .into_iter()
        .filter(|b| {
            rules
                .rule(*b)
                .matches(&record.crime_type, &record.toxicity_label)
        })
        .collect()
}

/// Per-bucket keyword sets for a single pass over the dataset.
#[derive(Debug, Default)]
pub struct Aggregator {
    threats: BTreeSet<String>,
    harassment: BTreeSet<String>,
    fraud: BTreeSet<String>,
    stats: PassStats,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut BTreeSet<String> {
        match bucket {
            Bucket::Threats => &mut self.threats,
            Bucket::Harassment => &mut self.harassment,
            Bucket::Fraud => &mut self.fraud,
        }
    }

    /// Folds one record into the accumulators and returns the buckets it
    /// contributed to.
    pub fn ingest(&mut self, rules: &RuleTable, record: &Record) -> Vec<Bucket> {
        self.stats.rows += 1;
        let keywords = parse_keywords(&record.matched_keywords);
        if keywords.is_empty() {
            return Vec::new();
        }
        self.stats.rows_with_keywords += 1;

        let buckets = classify(rules, record);
        if buckets.is_empty() {
            self.stats.rows_unclassified += 1;
            log::debug!(
                "row {}: no bucket for crime_type={:?} toxicity_label={:?}",
                self.stats.rows,
                record.crime_type,
                record.toxicity_label
            );
        }
        for bucket in &buckets {
            self.bucket_mut(*bucket).extend(keywords.iter().cloned());
        }
        buckets
    }

    /// Sorted, deduplicated keywords per bucket.
    pub fn finish(self) -> (KeywordSummary, PassStats) {
        let summary = KeywordSummary {
            threats: self.threats.into_iter().collect(),
            harassment: self.harassment.into_iter().collect(),
            fraud: self.fraud.into_iter().collect(),
        };
        (summary, self.stats)
    }
}

pub fn aggregate<'a>(
    rules: &RuleTable,
    records: impl IntoIterator<Item = &'a Record>,
) -> (KeywordSummary, PassStats) {
    let mut agg = Aggregator::new();
    for record in records {
        agg.ingest(rules, record);
    }
    agg.finish()
}
