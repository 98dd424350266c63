use crate::*;

pub fn handle_runtime_commands(cli: &Cli, rules: &RuleTable) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Extract {
            input,
            output,
            samples,
        } => {
            log::info!("extracting keywords from {}", input.display());
            let dataset = load_dataset(input)?;

            let (summary, stats) = aggregate(rules, &dataset.records);

            write_summary(output, &summary)?;
            log::info!("saved {}", output.display());

            let report = ExtractReport {
                input: input.display().to_string(),
                output: output.display().to_string(),
                stats,
                missing_columns: dataset.missing_columns,
                counts: summary.counts(),
                samples: summary.head(*samples),
            };
            print_one(cli.json, report, render_extract_report)?;
        }
        Commands::Validate { input } => {
            let dataset = load_dataset(input)?;
            if !dataset.missing_columns.is_empty() {
                anyhow::bail!(
                    "dataset {} is missing required columns: {}",
                    input.display(),
                    dataset.missing_columns.join(", ")
                );
            }
            let report = ValidateReport {
                input: input.display().to_string(),
                rows: dataset.records.len(),
                columns: dataset.columns,
            };
            print_one(cli.json, report, |r| {
                format!("dataset valid ({} rows)", r.rows)
            })?;
        }
        Commands::Rules => {
            let rows: Vec<RuleRow> = Bucket::ALL
                .into_iter()
                .map(|bucket| {
                    let rule = rules.rule(bucket);
                    RuleRow {
                        bucket,
                        crime_types: rule.crime_types.clone(),
                        toxicity_labels: rule.toxicity_labels.clone(),
                    }
                })
                .collect();
            print_out(cli.json, &rows, |r| {
                format!(
                    "{}\tcrime_type: {}\ttoxicity_label: {}",
                    r.bucket,
                    r.crime_types.join(" | "),
                    r.toxicity_labels.join(" | ")
                )
            })?;
        }
    }
    Ok(())
}

fn render_extract_report(r: &ExtractReport) -> String {
    let mut lines = vec![
        "extraction complete".to_string(),
        format!(
            "  rows: {} (with keywords: {}, unclassified: {})",
            r.stats.rows, r.stats.rows_with_keywords, r.stats.rows_unclassified
        ),
        format!("  threat keywords: {}", r.counts.threats),
        format!("  harassment keywords: {}", r.counts.harassment),
        format!("  fraud keywords: {}", r.counts.fraud),
    ];
    if !r.missing_columns.is_empty() {
        lines.push(format!(
            "  missing columns: {}",
            r.missing_columns.join(", ")
        ));
    }
    lines.push(format!("saved to: {}", r.output));
    for bucket in Bucket::ALL {
        let sample = r.samples.bucket(bucket);
        if !sample.is_empty() {
            lines.push(format!("sample {}: {}", bucket, sample.join(", ")));
        }
    }
    lines.join("\n")
}
