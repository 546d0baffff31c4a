use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use olympics_cli::pipeline::{DataSources, LoadedDataset, load_dataset};
use olympics_cli::reports::{
    athletes_report, country_report, overview_report, selectors_report, tally_report,
};

use crate::cli::{Command, DataArgs, OutputFormatArg};
use crate::summary::{
    print_athletes, print_country, print_load_summary, print_overview, print_selectors,
    print_tally,
};

/// Load the dataset and run one subcommand against it.
pub fn run(command: Command, data: &DataArgs) -> Result<()> {
    let span = info_span!("command");
    let _guard = span.enter();

    let sources = DataSources {
        athletes: data.athletes.clone(),
        regions: data.regions.clone(),
    };
    let loaded = load_dataset(&sources, &data.normalize_options())?;
    if data.format == OutputFormatArg::Table {
        print_load_summary(&loaded);
    }
    run_loaded(command, data, &loaded)
}

fn run_loaded(command: Command, data: &DataArgs, loaded: &LoadedDataset) -> Result<()> {
    let dataset = &loaded.dataset;
    let limits = data.query_limits();
    let json = data.format == OutputFormatArg::Json;
    match command {
        Command::Tally { year, country } => {
            info!(%year, %country, "tally");
            let report = tally_report(dataset, year, country);
            render(&report, json, print_tally)
        }
        Command::Overview => {
            let report = overview_report(dataset);
            render(&report, json, print_overview)
        }
        Command::Country { country } => {
            info!(%country, "country");
            let report = country_report(dataset, &country, &limits);
            render(&report, json, print_country)
        }
        Command::Athletes { sport } => {
            info!(%sport, "athletes");
            let report = athletes_report(dataset, sport, &limits);
            render(&report, json, print_athletes)
        }
        Command::Selectors => {
            let report = selectors_report(dataset);
            render(&report, json, print_selectors)
        }
    }
}

fn render<T: Serialize>(report: &T, json: bool, print_table: fn(&T)) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(report).context("serialize report")?;
        println!("{text}");
    } else {
        print_table(report);
    }
    Ok(())
}
