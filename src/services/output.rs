use crate::domain::models::{JsonOut, KeywordSummary};
use anyhow::Context;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Pretty JSON with two-space indent; non-ASCII is written verbatim.
pub fn render_summary(summary: &KeywordSummary) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Stages the summary under a unique name next to `path` and renames it into
/// place, so the target is either the complete new summary or untouched. The
/// staged file is removed on every failure path.
pub fn write_summary(path: &Path, summary: &KeywordSummary) -> anyhow::Result<()> {
    let body = render_summary(summary)?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .with_context(|| format!("failed to create {}", parent.display()))?;

    let mut staged = tempfile::Builder::new()
        .prefix(".incident-keywords-")
        .suffix(".tmp")
        .tempfile_in(parent)
        .with_context(|| format!("failed to stage {}", path.display()))?;
    staged
        .write_all(body.as_bytes())
        .and_then(|_| staged.as_file().sync_all())
        .with_context(|| format!("failed to write {}", path.display()))?;
    staged
        .persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
