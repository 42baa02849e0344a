use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use feiertage::configuration::Configuration;
use feiertage::time::calendar::holidaycalendar::HolidayCalendar;
use feiertage::time::region::Region;
use feiertage::{HolidayError, Result};

#[derive(Parser)]
#[command(name = "feiertage", version, about = "Public holidays and working days of the German federal states")]
struct Cli {
    /// JSON configuration with region and calendar overrides
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Two-letter code or name of the federal state, overrides the configuration
    #[arg(long, short, global = true)]
    region: Option<Region>,

    #[command(subcommand)]
    command: Command
}

#[derive(Subcommand)]
enum Command {
    /// Observed holidays of a year
    List {
        year: i32,
        #[arg(long)]
        json: bool
    },
    /// Holiday, weekend and working-day verdict for a date
    Check {
        date: NaiveDate
    },
    /// First working day on or after a date
    Next {
        date: NaiveDate
    },
    /// The federal states and their codes
    Regions
}

fn run(cli: Cli) -> Result<()> {
    let mut configuration = match &cli.config {
        Some(path) => Configuration::from_file(path)?,
        None => Configuration::new()
    };
    if let Some(region) = cli.region {
        configuration.set_region(region);
    }
    let calendar = configuration.calendar();

    match cli.command {
        Command::List { year, json } => {
            let holidays = calendar.listed_holidays(year)?;
            if json {
                let output = serde_json::to_string_pretty(&holidays).map_err(HolidayError::Output)?;
                println!("{}", output);
            } else {
                println!("{} {}", configuration.region(), year);
                for holiday in holidays {
                    match holiday.name() {
                        Some(name) => println!("  {}  {:<22} {}", holiday.date(), name, name.german_name()),
                        None => println!("  {}  (additional holiday)", holiday.date())
                    }
                }
            }
        },
        Command::Check { date } => {
            let verdict = match calendar.holiday_name(date) {
                Some(name) => format!("holiday ({})", name),
                None if calendar.is_holiday(date) => "holiday (additional)".to_owned(),
                None if calendar.is_working_day(date) => "working day".to_owned(),
                None => "weekend".to_owned()
            };
            println!("{} {} in {}: {}", date.format("%a"), date, configuration.region(), verdict);
        },
        Command::Next { date } => {
            println!("{}", calendar.next_working_day(date)?);
        },
        Command::Regions => {
            for region in Region::ALL {
                println!("{}  {}", region.code(), region);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
