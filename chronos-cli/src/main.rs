//! Prints the current chronos, or converts between a chronos and a clock time.
//!
//! ```text
//! $ chronos
//! 9A3F
//! $ chronos 8000
//! 12:00:00
//! $ chronos 18:00:00
//! C000
//! ```

use chronos::{Chronos, ParsePolicy};
use clap::Parser;
use ringlog::*;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::Time;

const CLOCK_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second]");

const USAGE: &str = "chronos: first argument should be of the form `CCCC` or `HH:MM:SS`";

#[derive(Parser, Debug)]
#[command(name = "chronos", version)]
#[command(about = "Show the time of day as four hex digits", long_about = None)]
struct Config {
    /// A chronos (`CCCC`) to show as clock time, or a clock time (`HH:MM:SS`)
    /// to show as a chronos
    time: Option<String>,
    /// Keep only the first four characters of a longer chronos instead of
    /// rejecting it
    #[arg(long, default_value_t = false)]
    truncate: bool,
    /// Log level filter
    #[arg(long, env = "CHRONOS_LOG", default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
    /// Raise the log level, may be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Config {
    fn policy(&self) -> ParsePolicy {
        if self.truncate {
            ParsePolicy::Truncate
        } else {
            ParsePolicy::Strict
        }
    }

    fn level_filter(&self) -> LevelFilter {
        let mut level = self.log_level;
        for _ in 0..self.verbose {
            level = match level {
                LevelFilter::Off => LevelFilter::Error,
                LevelFilter::Error => LevelFilter::Warn,
                LevelFilter::Warn => LevelFilter::Info,
                LevelFilter::Info => LevelFilter::Debug,
                LevelFilter::Debug | LevelFilter::Trace => LevelFilter::Trace,
            };
        }
        level
    }
}

fn main() {
    let config = Config::parse();

    let log = match LogBuilder::new().output(Box::new(Stderr::new())).build() {
        Ok(log) => log,
        Err(e) => {
            eprintln!("chronos: failed to initialize log: {e}");
            std::process::exit(1);
        }
    };
    let mut drain = MultiLogBuilder::new()
        .level_filter(config.level_filter())
        .default(log)
        .build()
        .start();

    let status = run(&config);

    let _ = drain.flush();
    std::process::exit(status);
}

fn run(config: &Config) -> i32 {
    let Some(input) = config.time.as_deref() else {
        println!("{}", Chronos::now());
        return 0;
    };

    match convert(input, config.policy()) {
        Some(output) => {
            println!("{output}");
            0
        }
        None => {
            eprintln!("{USAGE}");
            1
        }
    }
}

/// Interpret the input as a chronos first and as a clock time second,
/// returning the other representation.
fn convert(input: &str, policy: ParsePolicy) -> Option<String> {
    match Chronos::parse_with(input, policy) {
        Ok(chronos) => match chronos.to_time().format(CLOCK_FORMAT) {
            Ok(clock) => return Some(clock),
            Err(e) => error!("failed to format {chronos}: {e}"),
        },
        Err(e) => debug!("{input:?} is not a chronos: {e}"),
    }

    match Time::parse(input, CLOCK_FORMAT) {
        Ok(time) => Some(Chronos::from_time(time).to_string()),
        Err(e) => {
            debug!("{input:?} is not a clock time: {e}");
            None
        }
    }
}
