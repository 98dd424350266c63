use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Output category a keyword can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Threats,
    Harassment,
    Fraud,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Threats, Bucket::Harassment, Bucket::Fraud];

    pub fn key(self) -> &'static str {
        match self {
            Bucket::Threats => "threats",
            Bucket::Harassment => "harassment",
            Bucket::Fraud => "fraud",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One dataset row. Columns absent from the file read as empty strings.
#[derive(Debug, Clone, Default)]
pub struct Record {
    pub crime_type: String,
    pub toxicity_label: String,
    pub matched_keywords: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryRule {
    #[serde(default)]
    pub crime_types: Vec<String>,
    #[serde(default)]
    pub toxicity_labels: Vec<String>,
}

fn default_threats() -> CategoryRule {
    CategoryRule {
        crime_types: strings(&["Criminal Threat", "Blackmail", "Extortion", "Account Hacking"]),
        toxicity_labels: strings(&["Threat"]),
    }
}

fn default_harassment() -> CategoryRule {
    CategoryRule {
        crime_types: strings(&["Online Harassment", "Harassment", "Mild Toxicity"]),
        toxicity_labels: strings(&["Harassment", "Mild"]),
    }
}

fn default_fraud() -> CategoryRule {
    CategoryRule {
        crime_types: strings(&["Financial Fraud", "Account Hacking", "Scam"]),
        toxicity_labels: strings(&["Fraud"]),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Bucket inclusion rules. A bucket left out of a rules file keeps its
/// built-in rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleTable {
    #[serde(default = "default_threats")]
    pub threats: CategoryRule,
    #[serde(default = "default_harassment")]
    pub harassment: CategoryRule,
    #[serde(default = "default_fraud")]
    pub fraud: CategoryRule,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            threats: default_threats(),
            harassment: default_harassment(),
            fraud: default_fraud(),
        }
    }
}

impl RuleTable {
    pub fn rule(&self, bucket: Bucket) -> &CategoryRule {
        match bucket {
            Bucket::Threats => &self.threats,
            Bucket::Harassment => &self.harassment,
            Bucket::Fraud => &self.fraud,
        }
    }
}

/// The on-disk output contract: exactly these three keys, in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSummary {
    pub threats: Vec<String>,
    pub harassment: Vec<String>,
    pub fraud: Vec<String>,
}

impl KeywordSummary {
    pub fn bucket(&self, bucket: Bucket) -> &[String] {
        match bucket {
            Bucket::Threats => &self.threats,
            Bucket::Harassment => &self.harassment,
            Bucket::Fraud => &self.fraud,
        }
    }

    pub fn counts(&self) -> BucketCounts {
        BucketCounts {
            threats: self.threats.len(),
            harassment: self.harassment.len(),
            fraud: self.fraud.len(),
        }
    }

    /// First `n` keywords of every bucket.
    pub fn head(&self, n: usize) -> KeywordSummary {
        let take = |v: &[String]| v.iter().take(n).cloned().collect();
        KeywordSummary {
            threats: take(&self.threats),
            harassment: take(&self.harassment),
            fraud: take(&self.fraud),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BucketCounts {
    pub threats: usize,
    pub harassment: usize,
    pub fraud: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassStats {
    pub rows: usize,
    pub rows_with_keywords: usize,
    pub rows_unclassified: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractReport {
    pub input: String,
    pub output: String,
    #[serde(flatten)]
    pub stats: PassStats,
    pub missing_columns: Vec<String>,
    pub counts: BucketCounts,
    pub samples: KeywordSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidateReport {
    pub input: String,
    pub rows: usize,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleRow {
    pub bucket: Bucket,
    pub crime_types: Vec<String>,
    pub toxicity_labels: Vec<String>,
}
