use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use reportcal::report::reportrun::ReportRun;

/// Business-day calendar for the daily completion reports.
#[derive(Parser)]
#[command(name = "reportcal", version, about = "Business-day calendar for report runs")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// JSON calendar configuration; the built-in company calendar if omitted.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List holidays for a year or a span of years.
    Holidays(HolidaysArgs),
    /// Print the business day before a date.
    Previous(PreviousArgs),
    /// Print the completion window a report run exports.
    Window(WindowArgs),
}

#[derive(clap::Args)]
pub struct YearArgs {
    /// First year of holidays to load (default from configuration).
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Last year of holidays to load (default: this year plus the horizon).
    #[arg(long)]
    pub end_year: Option<i32>,
}

#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Single year to list; overrides the year span.
    #[arg(short, long, conflicts_with_all = ["start_year", "end_year"])]
    pub year: Option<i32>,

    #[command(flatten)]
    pub years: YearArgs,
}

#[derive(clap::Args)]
pub struct PreviousArgs {
    /// Reference date (YYYY-MM-DD); today if omitted.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    #[command(flatten)]
    pub years: YearArgs,
}

#[derive(clap::Args)]
pub struct WindowArgs {
    /// Which report run.
    #[arg(short, long, value_enum)]
    pub run: RunArg,

    /// Run date (YYYY-MM-DD); today if omitted.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    #[command(flatten)]
    pub years: YearArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RunArg {
    PreviousBusinessDay,
    Midday,
    MidAfternoon,
}

impl From<RunArg> for ReportRun {
    fn from(run: RunArg) -> Self {
        match run {
            RunArg::PreviousBusinessDay => ReportRun::PreviousBusinessDay,
            RunArg::Midday => ReportRun::Midday,
            RunArg::MidAfternoon => ReportRun::MidAfternoon,
        }
    }
}
