//! CSV Loader - parse a `time,temperature` file and print the rows.
//!
//! ```bash
//! csv-loader temperature_data.csv --max-rows 300
//! ```

use clap::Parser;
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;
use thermal_analysis::config::DEFAULT_CSV_FILE;
use thermal_analysis::data::{DataLoader, Series, LOADER_MAX_ROWS};

#[derive(Parser)]
#[command(name = "csv-loader")]
#[command(author, version, about = "Parse and print a time,temperature CSV", long_about = None)]
struct Cli {
    /// Input CSV file (one header line, then `seconds,temperature` rows)
    #[arg(value_name = "FILE", default_value = DEFAULT_CSV_FILE)]
    input: PathBuf,

    /// Maximum number of data rows to read
    #[arg(short = 'n', long, default_value_t = LOADER_MAX_ROWS)]
    max_rows: usize,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn render_table(series: &Series) -> String {
    let mut out = String::from("Time (s), Temperature (°C)\n");
    for sample in series {
        out.push_str(&format!("{:.6}, {:.6}\n", sample.time, sample.temperature));
    }
    out
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    ExitCode::from(run(&cli))
}

/// Load and print the file; the return value is the process exit status.
fn run(cli: &Cli) -> u8 {
    let loader = DataLoader::seconds().with_max_rows(cli.max_rows);
    match loader.load_csv(&cli.input) {
        Ok(report) => {
            print!("{}", render_table(&report.series));
            0
        }
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}
