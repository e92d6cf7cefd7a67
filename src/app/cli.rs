use clap::{ArgAction, Parser};
use std::path::PathBuf;
use termcolor::ColorChoice;

/// Reads `BASE EXPONENT` from stdin and prints BASE raised to EXPONENT.
#[derive(Parser)]
#[command(name = "binpow", version)]
pub struct Opts {
    /// Fail when the result does not fit in a 64-bit signed integer instead of
    /// wrapping around.
    #[arg(long = "checked")]
    pub checked: bool,

    /// Run every `test_N` directory under this path instead of reading stdin.
    /// Each one holds an `input.txt` and the expected `output.txt`.
    #[arg(long = "cases", value_name = "DIR")]
    pub cases: Option<PathBuf>,

    /// With `--cases`, keep running after a case fails.
    #[arg(short = 'k', long = "keep-going", requires = "cases")]
    pub keep_going: bool,

    /// Sets the log level: (default)=+error+warning, 1=+info, 2=+debug, 3=+trace
    /// The `quiet` flag can be used to turn off logging completely.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disables logging.
    #[arg(short, long)]
    pub quiet: bool,

    /// Coloring: auto, always, never, and always-ansi (only uses ansi color codes).
    #[arg(long = "color", default_value = "auto", value_parser = parse_colorchoice)]
    pub color_choice: ColorChoice,
}

impl Opts {
    pub fn log_level_filter(&self) -> log::LevelFilter {
        use log::LevelFilter;

        if self.quiet {
            return LevelFilter::Off;
        }

        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

pub fn parse_colorchoice(s: &str) -> Result<ColorChoice, String> {
    if s.eq_ignore_ascii_case("auto") {
        Ok(ColorChoice::Auto)
    } else if s.eq_ignore_ascii_case("always") {
        Ok(ColorChoice::Always)
    } else if s.eq_ignore_ascii_case("never") {
        Ok(ColorChoice::Never)
    } else if s.eq_ignore_ascii_case("always-ansi") {
        Ok(ColorChoice::AlwaysAnsi)
    } else {
        Err(format!("{} is not a valid color value", s))
    }
}
