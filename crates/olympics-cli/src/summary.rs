use std::collections::BTreeMap;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use olympics_cli::pipeline::LoadedDataset;
use olympics_cli::reports::{
    AthletesReport, CountryReport, OverviewReport, SelectorsReport, TallyReport,
};
use olympics_model::{AgeDistributions, AthleteMedals, Heatmap, Medal, Selection, Sex};

pub fn print_load_summary(loaded: &LoadedDataset) {
    let stats = &loaded.stats;
    eprintln!(
        "Loaded {} records ({} read, {} other season, {} duplicates, {} unmapped NOC codes, {} regions)",
        loaded.dataset.len(),
        stats.rows_read,
        stats.season_dropped,
        stats.duplicates_dropped,
        stats.unmapped_nocs,
        loaded.regions,
    );
}

pub fn print_tally(report: &TallyReport) {
    println!("Medal tally: year {}, country {}", report.year, report.country);
    let with_year = report.rows.iter().any(|row| row.year.is_some());
    let mut header = vec![header_cell("Region")];
    if with_year {
        header.push(header_cell("Year"));
    }
    header.extend(["Gold", "Silver", "Bronze", "Total"].map(header_cell));

    let mut table = Table::new();
    table.set_header(header);
    apply_table_style(&mut table);
    let first_count = if with_year { 2 } else { 1 };
    for index in first_count..first_count + 4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in &report.rows {
        let mut cells = vec![Cell::new(&row.region)];
        if with_year {
            cells.push(optional_cell(row.year));
        }
        cells.extend([
            medal_cell(row.gold, Medal::Gold),
            medal_cell(row.silver, Medal::Silver),
            medal_cell(row.bronze, Medal::Bronze),
            Cell::new(row.total).add_attribute(Attribute::Bold),
        ]);
        table.add_row(cells);
    }
    print_table_or_empty(&table, report.rows.is_empty());
}

pub fn print_overview(report: &OverviewReport) {
    let stats = &report.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, value) in [
        ("Editions", stats.editions),
        ("Host cities", stats.host_cities),
        ("Sports", stats.sports),
        ("Events", stats.events),
        ("Nations", stats.nations),
        ("Athletes", stats.athletes),
    ] {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    println!("{table}");

    let mut editions: BTreeMap<i32, [Option<usize>; 3]> = BTreeMap::new();
    for (slot, series) in [
        &report.nations_over_time,
        &report.events_over_time,
        &report.athletes_over_time,
    ]
    .into_iter()
    .enumerate()
    {
        for point in series {
            editions.entry(point.edition).or_default()[slot] = Some(point.count);
        }
    }
    let mut table = Table::new();
    table.set_header(["Edition", "Nations", "Events", "Athletes"].map(header_cell));
    apply_table_style(&mut table);
    for index in 1..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (edition, counts) in &editions {
        let mut cells = vec![Cell::new(edition)];
        cells.extend(counts.iter().map(|count| optional_cell(*count)));
        table.add_row(cells);
    }
    println!();
    println!("Participation over time:");
    print_table_or_empty(&table, editions.is_empty());

    println!();
    println!("Events per sport:");
    print_heatmap(&report.events_per_sport, "Sport");
}

pub fn print_country(report: &CountryReport) {
    println!("{}: medals per year", report.country);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Year"), header_cell("Medals")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for point in &report.medals_per_year {
        table.add_row(vec![Cell::new(point.year), Cell::new(point.medal_count)]);
    }
    print_table_or_empty(&table, report.medals_per_year.is_empty());

    println!();
    println!("{}: medals per sport and year", report.country);
    print_heatmap(&report.sport_heatmap, "Sport");

    println!();
    println!("{}: most successful athletes", report.country);
    print_athlete_ranking(&report.top_athletes);
}

pub fn print_athletes(report: &AthletesReport) {
    println!("Most successful athletes: sport {}", report.sport);
    print_athlete_ranking(&report.top_athletes);

    let measured = report
        .anthropometrics
        .iter()
        .filter(|row| row.height.is_some() && row.weight.is_some())
        .count();
    println!();
    println!(
        "Height/weight: {} athletes, {} with both measurements",
        report.anthropometrics.len(),
        measured
    );

    println!();
    println!("Men and women over the years:");
    let mut table = Table::new();
    table.set_header(["Year", "Male", "Female"].map(header_cell));
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in &report.sex_participation {
        table.add_row(vec![
            Cell::new(row.year),
            Cell::new(row.count(Sex::Male)),
            Cell::new(row.count(Sex::Female)),
        ]);
    }
    print_table_or_empty(&table, report.sex_participation.is_empty());

    println!();
    println!("Age distribution:");
    let mut table = Table::new();
    table.set_header(["Group", "Athletes", "Min", "Median", "Max"].map(header_cell));
    apply_table_style(&mut table);
    for index in 1..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let ages = &report.ages;
    let groups: [(&str, &[u32]); 4] = [
        ("Overall", ages.overall.as_slice()),
        ("Gold", ages.for_medal(Medal::Gold)),
        ("Silver", ages.for_medal(Medal::Silver)),
        ("Bronze", ages.for_medal(Medal::Bronze)),
    ];
    for (label, values) in groups {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(values.len()),
            optional_cell(values.first()),
            optional_cell(AgeDistributions::median(values)),
            optional_cell(values.last()),
        ]);
    }
    println!("{table}");
}

pub fn print_selectors(report: &SelectorsReport) {
    println!("Years: {}", join(&report.years));
    println!();
    println!("Countries: {}", join(&report.countries));
    println!();
    println!("Sports: {}", join(&report.sports));
}

fn print_athlete_ranking(rows: &[AthleteMedals]) {
    let mut table = Table::new();
    table.set_header(["Rank", "Athlete", "Medals"].map(header_cell));
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (rank, row) in rows.iter().enumerate() {
        table.add_row(vec![
            dim_cell(rank + 1),
            Cell::new(&row.athlete),
            Cell::new(row.medal_count).add_attribute(Attribute::Bold),
        ]);
    }
    print_table_or_empty(&table, rows.is_empty());
}

fn print_heatmap(heatmap: &Heatmap, row_label: &str) {
    let mut table = Table::new();
    let mut header = vec![header_cell(row_label)];
    header.extend(heatmap.columns.iter().map(|year| header_cell(&year.to_string())));
    table.set_header(header);
    apply_heatmap_style(&mut table);
    for index in 1..=heatmap.columns.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (label, counts) in heatmap.rows.iter().zip(&heatmap.cells) {
        let mut cells = vec![Cell::new(label)];
        cells.extend(counts.iter().map(|&count| match count {
            0 => dim_cell(0),
            value => Cell::new(value),
        }));
        table.add_row(cells);
    }
    print_table_or_empty(&table, heatmap.is_empty());
}

fn print_table_or_empty(table: &Table, empty: bool) {
    if empty {
        println!("(no data)");
    } else {
        println!("{table}");
    }
}

fn join<T: std::fmt::Display>(values: &[Selection<T>]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_heatmap_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Disabled);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn medal_cell(count: u64, medal: Medal) -> Cell {
    if count == 0 {
        return dim_cell(count);
    }
    let color = match medal {
        Medal::Gold => Color::Yellow,
        Medal::Silver => Color::Grey,
        Medal::Bronze => Color::DarkYellow,
    };
    Cell::new(count).fg(color)
}

fn optional_cell<T: ToString>(value: Option<T>) -> Cell {
    match value {
        Some(value) => Cell::new(value.to_string()),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
