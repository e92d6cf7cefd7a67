//! Runs a directory of recorded cases against the exponentiator.
//!
//! A case directory holds one subdirectory per case (`test_1`, `test_2`, ...),
//! each containing an `input.txt` and the expected `output.txt`. Outputs are
//! compared line by line after trimming, with blank lines dropped.

use crate::error::{Error, ErrorKind};
use crate::input;
use crate::power::{power_with, Overflow};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

pub const INPUT_FILE: &str = "input.txt";
pub const OUTPUT_FILE: &str = "output.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    name: String,
    dir: PathBuf,
}

impl Case {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Case {
        let dir = dir.into();
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Case { name, dir }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The number after the last `_` in the name, if any.
    fn number(&self) -> Option<u64> {
        self.name.rsplit('_').next()?.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    WrongAnswer { produced: String, expected: String },
    RuntimeError { message: String },
}

impl Verdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok)
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Verdict::Ok => "OK",
            Verdict::WrongAnswer { .. } => "WA",
            Verdict::RuntimeError { .. } => "RE",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CaseReport {
    pub case: Case,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub reports: Vec<CaseReport>,
    pub total: usize,
}

impl Summary {
    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.verdict.is_ok()).count()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total
    }
}

/// Lists the cases in `dir`: subdirectories with `test` in their name, in
/// numeric order of their suffix. Names without a numeric suffix come last.
pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Vec<Case>, Error> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|err| {
        Error::new(
            ErrorKind::Io,
            format!("failed to read case directory `{}`", dir.display()),
            Box::new(err),
        )
    })?;

    let mut cases = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| {
            Error::new(
                ErrorKind::Io,
                format!("failed to list case directory `{}`", dir.display()),
                Box::new(err),
            )
        })?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let case = Case::new(path);
        if case.name().contains("test") {
            cases.push(case);
        } else {
            log::trace!("skipping `{}`", case.dir().display());
        }
    }

    cases.sort_by(|a, b| match (a.number(), b.number()) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.name.cmp(&b.name)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.name.cmp(&b.name),
    });

    Ok(cases)
}

/// Output the program would print for `input_text`.
pub fn evaluate(input_text: &str, overflow: Overflow) -> Result<String, Error> {
    let problem = input::parse_problem(input_text)?;
    let result = power_with(problem.base, problem.exponent, overflow)?;
    Ok(format!("{}\n", result))
}

pub fn run_case(case: &Case, overflow: Overflow) -> CaseReport {
    let verdict = match check(case, overflow) {
        Ok(verdict) => verdict,
        Err(err) => Verdict::RuntimeError {
            message: err.to_string(),
        },
    };

    log::debug!("case {}: {}", case.name(), verdict.short_name());
    CaseReport {
        case: case.clone(),
        verdict,
    }
}

fn check(case: &Case, overflow: Overflow) -> Result<Verdict, Error> {
    let input_text = read_case_file(case, INPUT_FILE)?;
    let expected = read_case_file(case, OUTPUT_FILE)?;
    let produced = evaluate(&input_text, overflow)?;

    let produced = normalize(&produced);
    let expected = normalize(&expected);
    if produced == expected {
        Ok(Verdict::Ok)
    } else {
        Ok(Verdict::WrongAnswer { produced, expected })
    }
}

/// Runs the cases in order. Unless `keep_going` is set this stops at the first
/// case that does not pass.
pub fn run_all(cases: &[Case], overflow: Overflow, keep_going: bool) -> Summary {
    let mut summary = Summary {
        reports: Vec::with_capacity(cases.len()),
        total: cases.len(),
    };

    for case in cases {
        let report = run_case(case, overflow);
        let failed = !report.verdict.is_ok();
        summary.reports.push(report);
        if failed && !keep_going {
            break;
        }
    }

    summary
}

fn read_case_file(case: &Case, file: &str) -> Result<String, Error> {
    let path = case.dir().join(file);
    fs::read_to_string(&path).map_err(|err| {
        Error::new(
            ErrorKind::Io,
            format!("failed to read `{}`", path.display()),
            Box::new(err),
        )
    })
}

fn normalize(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
    }

    #[test]
    fn normalize_drops_blank_lines_and_padding() {
        assert_eq!(normalize("\n  1024 \r\n\n"), "1024");
        assert_eq!(normalize("a\n\n b\n"), "a\nb");
    }

    #[test]
    fn case_numbers() {
        assert_eq!(Case::new("cases/test_12").number(), Some(12));
        assert_eq!(Case::new("cases/test_x").number(), None);
        assert_eq!(Case::new("cases/test").number(), None);
    }

    #[test]
    fn evaluate_formats_one_line() {
        assert_eq!(evaluate("2 10", Overflow::Wrapping).unwrap(), "1024\n");
        assert_eq!(
            evaluate("2 63", Overflow::Checked).unwrap_err().kind(),
            ErrorKind::Overflow
        );
    }

    #[test]
    fn discovers_in_numeric_order() {
        let cases = discover(fixtures().join("cases")).unwrap();
        let names = cases.iter().map(Case::name).collect::<Vec<_>>();
        assert_eq!(
            names,
            ["test_1", "test_2", "test_3", "test_4", "test_5", "test_6", "test_10"]
        );
    }

    #[test]
    fn missing_directory() {
        let err = discover(fixtures().join("no-such-cases")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn all_recorded_cases_pass() {
        let cases = discover(fixtures().join("cases")).unwrap();
        let summary = run_all(&cases, Overflow::Wrapping, false);
        assert_eq!(summary.total, 7);
        assert!(summary.all_passed(), "{:?}", summary.reports);
    }

    #[test]
    fn failing_cases() {
        let cases = discover(fixtures().join("failing-cases")).unwrap();
        assert_eq!(cases.len(), 3);

        let summary = run_all(&cases, Overflow::Wrapping, false);
        assert_eq!(summary.reports.len(), 2);
        assert!(!summary.all_passed());
        match &summary.reports[1].verdict {
            Verdict::WrongAnswer { produced, expected } => {
                assert_eq!(produced, "8");
                assert_eq!(expected, "9");
            }
            other => panic!("unexpected verdict {:?}", other),
        }

        let summary = run_all(&cases, Overflow::Wrapping, true);
        assert_eq!(summary.reports.len(), 3);
        assert_eq!(summary.passed(), 1);
        assert_eq!(summary.reports[2].verdict.short_name(), "RE");
    }
}
