//! ECI to ECEF conversion tool
//!
//! Rotates an inertial position into the Earth-fixed frame at a UTC instant and
//! prints the x, y and z components in kilometers, one per line.
//!
//! Usage:
//!   cargo run --bin eci_to_ecef -- year month day hour minute second eci_x_km eci_y_km eci_z_km

use std::process::ExitCode;

use clap::{ArgAction, Parser};
use eci2ecef::cli::{self, Invocation};
use tracing_subscriber::filter::LevelFilter;

/// ECI to ECEF conversion tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Converts an ECI position (km) into the ECEF frame at a UTC instant",
    long_about = None
)]
struct Args {
    /// Log the Julian date and GMST angle to stderr
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Print the ECEF vector as a JSON object
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// year month day hour minute second eci_x_km eci_y_km eci_z_km
    ///
    /// Flags go before the values. Every token from the first value on is
    /// taken as a value, so `-1e-3`, `-.5` and `-inf` reach the number parser.
    #[arg(value_name = "VALUE", allow_hyphen_values = true, trailing_var_arg = true)]
    values: Vec<String>,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    // Ignore a second initialization
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: &Args) -> eci2ecef::Result<()> {
    let request = match cli::parse_arguments(args.values.as_slice())? {
        Invocation::Usage => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        Invocation::Transform(request) => request,
    };

    let ecef = request.transform();
    if args.json {
        println!("{}", serde_json::to_string(&ecef)?);
    } else {
        println!("{}", ecef);
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
