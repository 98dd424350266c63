use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use domain::models::*;
pub use services::classifier::aggregate;
pub use services::dataset::load_dataset;
pub use services::output::{print_one, print_out, write_summary};
pub use services::rules::load_rules;

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    // Keep stdout clean for machine-readable output.
    if cli.quiet || cli.json {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let rules = load_rules(cli.rules.as_deref())?;
    commands::handle_runtime_commands(&cli, &rules)
}
