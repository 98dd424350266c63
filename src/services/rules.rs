use crate::domain::models::{Bucket, RuleTable};
use anyhow::Context;
use std::path::Path;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("rule for `{bucket}` has an empty {field} pattern")]
    EmptyPattern { bucket: Bucket, field: &'static str },
}

/// Built-in table unless a TOML rules file is given.
pub fn load_rules(path: Option<&Path>) -> anyhow::Result<RuleTable> {
    let Some(path) = path else {
        return Ok(RuleTable::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rules file {}", path.display()))?;
    let table =
        parse_rules(&raw).with_context(|| format!("invalid rules file {}", path.display()))?;
    log::info!("using rules from {}", path.display());
    Ok(table)
}

pub fn parse_rules(raw: &str) -> anyhow::Result<RuleTable> {
    let table: RuleTable = toml::from_str(raw)?;
    validate_rules(&table)?;
    Ok(table)
}

pub fn validate_rules(table: &RuleTable) -> Result<(), RulesError> {
    for bucket in Bucket::ALL {
        let rule = table.rule(bucket);
        if rule.crime_types.iter().any(|p| p.is_empty()) {
            return Err(RulesError::EmptyPattern {
                bucket,
                field: "crime_types",
            });
        }
        if rule.toxicity_labels.iter().any(|p| p.is_empty()) {
            return Err(RulesError::EmptyPattern {
                bucket,
                field: "toxicity_labels",
            });
        }
    }
    Ok(())
}
