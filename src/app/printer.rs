use binpow::cases::{Summary, Verdict};
use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

/// Prints one line per case that ran, then a closing total.
pub fn print_summary(out: &mut dyn WriteColor, summary: &Summary) -> io::Result<()> {
    let clr_norm = ColorSpec::new(); // normal color

    let mut clr_detail = ColorSpec::new(); // produced/expected output and errors
    clr_detail.set_fg(Some(Color::Yellow));

    for report in summary.reports.iter() {
        let mut clr_verdict = ColorSpec::new();
        clr_verdict.set_bold(true);
        clr_verdict.set_fg(Some(if report.verdict.is_ok() {
            Color::Green
        } else {
            Color::Red
        }));

        out.set_color(&clr_verdict)?;
        write!(out, "{}", report.verdict.short_name())?;
        out.set_color(&clr_norm)?;
        writeln!(out, "{}{}", Spacing(2), report.case.name())?;

        match report.verdict {
            Verdict::Ok => {}
            Verdict::WrongAnswer {
                ref produced,
                ref expected,
            } => {
                print_detail(out, &clr_detail, "produced:", produced)?;
                print_detail(out, &clr_detail, "expected:", expected)?;
            }
            Verdict::RuntimeError { ref message } => {
                print_detail(out, &clr_detail, "error:", message)?;
            }
        }
    }

    out.set_color(&clr_norm)?;
    if summary.all_passed() {
        writeln!(out, "All tests passed")?;
    } else {
        writeln!(out, "{} / {} tests passed", summary.passed(), summary.total)?;
    }
    out.reset()
}

fn print_detail(
    out: &mut dyn WriteColor,
    color: &ColorSpec,
    label: &str,
    text: &str,
) -> io::Result<()> {
    out.set_color(&ColorSpec::new())?;
    writeln!(out, "{}{}", Spacing(4), label)?;
    out.set_color(color)?;
    for line in text.lines() {
        writeln!(out, "{}{}", Spacing(6), line)?;
    }
    out.set_color(&ColorSpec::new())
}

pub struct Spacing(usize);

impl std::fmt::Display for Spacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:1$}", "", self.0)
    }
}
