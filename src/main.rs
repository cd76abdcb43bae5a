mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::info;

use reportcal::configuration::CalendarConfiguration;
use reportcal::report::reportrun::ReportRun;
use reportcal::time::calendar::businessdaycalendar::BusinessDayCalendar;
use reportcal::time::calendar::holidaycalendar::YearRange;

use crate::cli::{Cli, Command, HolidaysArgs, PreviousArgs, WindowArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let configuration = match &cli.config {
        Some(path) => CalendarConfiguration::from_reader(path)
            .with_context(|| format!("loading calendar configuration from {}", path.display()))?,
        None => CalendarConfiguration::company(),
    };
    let today = Local::now().date_naive();

    match cli.command {
        Command::Holidays(args) => holidays(&configuration, today, args),
        Command::Previous(args) => previous(&configuration, today, args),
        Command::Window(args) => window(&configuration, today, args),
    }
}

fn holidays(configuration: &CalendarConfiguration, today: NaiveDate, args: HolidaysArgs) -> Result<()> {
    let years = match args.year {
        Some(year) => YearRange::new(year, year),
        None => configuration
            .year_range(today, args.years.start_year, args.years.end_year)
            .context("resolving the year range")?,
    };

    for year in years.years() {
        let mut named = configuration
            .calendar()
            .named_holidays(year)
            .with_context(|| format!("computing holidays for {year}"))?;
        named.sort_by_key(|&(_, d)| d);
        for (name, d) in named {
            println!("{}  {}  {}", d, d.format("%a"), name);
        }
    }
    Ok(())
}

fn previous(configuration: &CalendarConfiguration, today: NaiveDate, args: PreviousArgs) -> Result<()> {
    let reference = args.date.unwrap_or(today);
    let years = configuration
        .year_range(today, args.years.start_year, args.years.end_year)
        .context("resolving the year range")?;
    let resolver = configuration
        .resolver(years)
        .context("building the holiday set")?;

    let previous = resolver.previous_business_day(reference);
    info!(%reference, %previous, "resolved previous business day");
    println!("{previous}");
    Ok(())
}

fn window(configuration: &CalendarConfiguration, today: NaiveDate, args: WindowArgs) -> Result<()> {
    let run_date = args.date.unwrap_or(today);
    let years = configuration
        .year_range(today, args.years.start_year, args.years.end_year)
        .context("resolving the year range")?;
    let resolver = configuration
        .resolver(years)
        .context("building the holiday set")?;

    let run = ReportRun::from(args.run);
    let window = run
        .window(run_date, &resolver)
        .with_context(|| format!("computing the {run:?} window for {run_date}"))?;
    info!(?run, %window, "resolved report window");
    println!("{}\t{}", window.start(), window.end());
    Ok(())
}
