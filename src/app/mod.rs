pub mod cli;
pub mod logging;
mod printer;

use crate::util::DurationDisplay;
use anyhow::Context as _;
use binpow::cases;
use binpow::input;
use binpow::power::{power_with, Overflow};
use clap::Parser as _;
use cli::Opts;
use logging::AppLogger;
use std::io::Write as _;
use std::path::Path;
use std::time::Instant;
use termcolor::{ColorChoice, StandardStream};

pub fn run() -> anyhow::Result<()> {
    let opts = Opts::parse();

    AppLogger::instance().set_level(opts.log_level_filter());
    let color_choice = match opts.color_choice {
        ColorChoice::Auto => {
            AppLogger::instance().set_color_choice(if atty::is(atty::Stream::Stderr) {
                ColorChoice::Always
            } else {
                ColorChoice::Never
            });

            if atty::is(atty::Stream::Stdout) {
                ColorChoice::Always
            } else {
                ColorChoice::Never
            }
        }

        choice => {
            AppLogger::instance().set_color_choice(choice);
            choice
        }
    };

    let overflow = if opts.checked {
        Overflow::Checked
    } else {
        Overflow::Wrapping
    };
    log::debug!("overflow policy: {:?}", overflow);

    match opts.cases {
        Some(ref dir) => run_cases(dir, overflow, opts.keep_going, color_choice),
        None => run_stdin(overflow),
    }
}

fn run_stdin(overflow: Overflow) -> anyhow::Result<()> {
    let parsed = input::read(std::io::stdin().lock()).context("failed to read the problem")?;
    if parsed.ignored_tokens > 0 {
        log::debug!("ignoring {} trailing token(s)", parsed.ignored_tokens);
    }

    let problem = parsed.problem;
    log::debug!("computing {}^{}", problem.base, problem.exponent);
    let result = power_with(problem.base, problem.exponent, overflow)?;

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    writeln!(stdout, "{}", result).context("failed to write the result")?;
    stdout.flush().context("failed to write the result")?;
    Ok(())
}

fn run_cases(
    dir: &Path,
    overflow: Overflow,
    keep_going: bool,
    color_choice: ColorChoice,
) -> anyhow::Result<()> {
    let found = cases::discover(dir)?;
    if found.is_empty() {
        return Err(anyhow::anyhow!(
            "no cases were found in `{}`",
            dir.display()
        ));
    }
    log::debug!("found {} case(s) in {}", found.len(), dir.display());

    let start = Instant::now();
    let summary = cases::run_all(&found, overflow, keep_going);
    log::info!(
        "ran {} case(s) in {}",
        summary.reports.len(),
        DurationDisplay(start.elapsed())
    );

    let mut stdout = StandardStream::stdout(color_choice);
    printer::print_summary(&mut stdout, &summary)
        .context("error occurred while printing the case report")?;

    if summary.all_passed() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "{} of {} case(s) did not pass",
            summary.total - summary.passed(),
            summary.total
        ))
    }
}
