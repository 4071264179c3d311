mod list;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use safecal_core::{
    parse_entry, DailyRecord, FileRecordRepository, MonthlyViewUseCase, RecordRepository,
};

#[derive(Parser)]
#[command(name = "safecal")]
#[command(about = "A calendar heatmap for daily incident and risk counts", long_about = None)]
struct Cli {
    /// Directory holding records.json (defaults to ~/.safecal)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the calendar Terminal User Interface
    Tui,
    /// Print one month as a table
    List {
        /// Year to show (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Month to show, 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,
    },
    /// Record counts for a day (usage: add 2025-02-24 incidents:2 risks:1)
    Add {
        /// Date plus key:value counts
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let repo = FileRecordRepository::new(cli.data_dir)?;

    match cli.command {
        Some(Commands::List { year, month }) => {
            let now = Local::now();
            let year = year.unwrap_or_else(|| now.year());
            let month0 = match month {
                Some(m @ 1..=12) => m - 1,
                Some(m) => {
                    println!("Error: month must be 1-12, got {}.", m);
                    return Ok(());
                }
                None => now.month0(),
            };
            let usecase = MonthlyViewUseCase::new(&repo);
            let view = usecase.month_view(year, month0)?;
            list::show_month(&view);
        }
        Some(Commands::Add { args }) => {
            if args.is_empty() {
                println!("Error: a date is required.");
                return Ok(());
            }

            let entry = match parse_entry(&args) {
                Ok(e) => e,
                Err(e) => {
                    println!("Error: {}", e);
                    return Ok(());
                }
            };
            let date = match NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d") {
                Ok(d) => d,
                Err(_) => {
                    println!("Error: invalid date '{}', expected YYYY-MM-DD.", entry.date);
                    return Ok(());
                }
            };

            let incidents = entry.incidents.unwrap_or(0.0);
            let risks = entry.risks.unwrap_or(0.0);

            repo.upsert(DailyRecord::new(date, incidents, risks))?;
            println!(
                "Recorded {}: incidents {:.0}, risks {:.0}",
                date.format("%Y-%m-%d"),
                incidents,
                risks
            );
        }
        Some(Commands::Tui) | None => {
            let records = repo.load()?;
            tui::run(records)?;
        }
    }
    Ok(())
}
