//! Output formatting for solver results

use crate::executor::{Phase, PhaseOutcome, PhaseResult};
use aoc_solver::Verdict;
use chrono::TimeDelta;

const DAY_WIDTH: usize = 7;
const PHASE_WIDTH: usize = 6;
const VALUE_WIDTH: usize = 40;
const TIME_WIDTH: usize = 9;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    pub fn print_header(&self) {
        if self.quiet {
            return;
        }
        println!("{}", border());
        println!(
            "| {:<DAY_WIDTH$} | {:<PHASE_WIDTH$} | {:<VALUE_WIDTH$} | {:>TIME_WIDTH$} |   |",
            "Day", "Phase", "Value", "Time"
        );
        println!("{}", border());
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &PhaseResult) {
        if self.quiet {
            print_quiet(result);
            return;
        }
        println!("{}", format_row(result));
        if result.phase == Phase::Total {
            println!("{}", border());
        }
    }

    /// Print a summary after all results.
    /// Shows both total compute time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, summary: &Summary) {
        if self.quiet {
            return;
        }

        let total_compute_time = summary.parse_time + summary.solve_time;
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!(
            "Parts: {} verified, {} unverified, {} failed, {} skipped",
            summary.verified, summary.unverified, summary.failed, summary.skipped
        );
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if !elapsed_time.is_zero() {
            let total_compute_secs =
                total_compute_time.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            let speedup = total_compute_secs / elapsed_time.as_secs_f64();
            println!("Speedup factor: {:.2}x", speedup);
        }
    }
}

/// Counts and timings over every printed row
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub verified: usize,
    pub unverified: usize,
    /// Error rows, including failed setups
    pub failed: usize,
    pub skipped: usize,
    pub parse_time: TimeDelta,
    pub solve_time: TimeDelta,
}

impl Summary {
    pub fn from_results(results: &[PhaseResult]) -> Self {
        results.iter().fold(Summary::default(), |mut acc, r| {
            match (&r.phase, &r.outcome) {
                (_, Err(_)) => acc.failed += 1,
                (Phase::Setup, Ok(_)) => acc.parse_time += r.duration,
                (Phase::Part(_), Ok(PhaseOutcome::Skipped)) => acc.skipped += 1,
                (Phase::Part(_), Ok(PhaseOutcome::Answer { verdict, .. })) => {
                    acc.solve_time += r.duration;
                    match verdict {
                        Verdict::Verified => acc.verified += 1,
                        _ => acc.unverified += 1,
                    }
                }
                _ => {}
            }
            acc
        })
    }
}

fn print_quiet(result: &PhaseResult) {
    match &result.outcome {
        Ok(PhaseOutcome::Answer { value, .. }) => println!("{}", value),
        Err(e) if result.phase != Phase::Total => eprintln!("Error: {}", e),
        _ => {}
    }
}

fn border() -> String {
    format!(
        "+{}+{}+{}+{}+---+",
        "-".repeat(DAY_WIDTH + 2),
        "-".repeat(PHASE_WIDTH + 2),
        "-".repeat(VALUE_WIDTH + 2),
        "-".repeat(TIME_WIDTH + 2)
    )
}

fn phase_label(phase: Phase) -> String {
    match phase {
        Phase::Setup => "Setup".to_string(),
        Phase::Part(n) => format!("Part {}", n),
        Phase::Total => "Total".to_string(),
    }
}

/// One table row: day label, phase, value, elapsed time and a verdict mark
fn format_row(result: &PhaseResult) -> String {
    let (value, mark) = match &result.outcome {
        Ok(PhaseOutcome::Parsed) | Ok(PhaseOutcome::Total) => (String::new(), ' '),
        Ok(PhaseOutcome::Answer { value, verdict }) => (
            value.clone(),
            match verdict {
                Verdict::Verified => '✓',
                Verdict::Unverified => '?',
                Verdict::Mismatch { .. } => '✗',
            },
        ),
        Ok(PhaseOutcome::Skipped) => ("skipped".to_string(), '-'),
        Err(e) => (e.to_string(), '✗'),
    };
    let time = match result.outcome {
        Ok(PhaseOutcome::Skipped) | Err(_) => String::new(),
        _ => format_duration(result.duration),
    };

    format!(
        "| {:<DAY_WIDTH$} | {:<PHASE_WIDTH$} | {:<VALUE_WIDTH$} | {:>TIME_WIDTH$} | {} |",
        format!("{}/{:02}", result.year, result.day),
        phase_label(result.phase),
        fit_value(&value),
        time,
        mark
    )
}

/// Cut text longer than the Value column, marking the cut with `…`
fn fit_value(text: &str) -> String {
    match text.char_indices().nth(VALUE_WIDTH - 1) {
        Some((end, _)) if text.chars().count() > VALUE_WIDTH => format!("{}…", &text[..end]),
        _ => text.to_string(),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    match TimeDelta::from_std(d) {
        Ok(delta) => format_duration(delta),
        Err(_) => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArcExecutorError, ExecutorError};

    fn row(phase: Phase, outcome: Result<PhaseOutcome, ArcExecutorError>, micros: i64) -> PhaseResult {
        PhaseResult {
            year: 2024,
            day: 7,
            phase,
            outcome,
            duration: TimeDelta::microseconds(micros),
        }
    }

    fn answer(value: &str, verdict: Verdict) -> Result<PhaseOutcome, ArcExecutorError> {
        Ok(PhaseOutcome::Answer {
            value: value.to_string(),
            verdict,
        })
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1_500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::microseconds(2_345_678)), "2.35s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
        assert_eq!(
            format_std_duration(std::time::Duration::from_millis(12)),
            "12.00ms"
        );
    }

    #[test]
    fn test_rows_share_border_width() {
        let rows = [
            format_row(&row(Phase::Setup, Ok(PhaseOutcome::Parsed), 120)),
            format_row(&row(Phase::Part(1), answer("3749", Verdict::Verified), 4_200)),
            format_row(&row(Phase::Part(2), Ok(PhaseOutcome::Skipped), 0)),
            format_row(&row(Phase::Total, Ok(PhaseOutcome::Total), 4_320)),
        ];
        let width = border().chars().count();
        for r in &rows {
            assert_eq!(r.chars().count(), width, "{r}");
        }
        assert!(rows[1].starts_with("| 2024/07 | Part 1 | 3749 "));
        assert!(rows[1].ends_with("|    4.20ms | ✓ |"));
        assert!(rows[2].contains("skipped"));
        assert!(rows[3].contains("| Total  |"));
    }

    #[test]
    fn test_error_row_shows_message() {
        let error = ExecutorError::Mismatch {
            year: 2024,
            day: 7,
            part: 2,
            expected: "11387".to_string(),
            actual: "11386".to_string(),
        };
        let line = format_row(&row(Phase::Part(2), Err(error.into()), 50));
        assert!(line.contains("| For Part 2 of 2024/07, expected 11387 b… |"));
        assert!(line.ends_with("| ✗ |"));
        assert_eq!(line.chars().count(), border().chars().count(), "{line}");
    }

    #[test]
    fn test_long_values_are_cut_to_column() {
        let wires = "ffh,hwm,mjb,rvg,tgd,wpb,z02,z03,z05,z06,z07,z08,z10,z11,z12";
        let line = format_row(&row(Phase::Part(2), answer(wires, Verdict::Unverified), 900));
        assert_eq!(line.chars().count(), border().chars().count(), "{line}");
        assert!(line.contains("| ffh,hwm,mjb,rvg,tgd,wpb,z02,z03,z05,z06… |"));

        assert_eq!(fit_value(&"x".repeat(VALUE_WIDTH)), "x".repeat(VALUE_WIDTH));
        assert_eq!(fit_value("ünïcödé"), "ünïcödé");
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![
            row(Phase::Setup, Ok(PhaseOutcome::Parsed), 100),
            row(Phase::Part(1), answer("1", Verdict::Verified), 1_000),
            row(Phase::Part(2), answer("2", Verdict::Unverified), 2_000),
            row(Phase::Total, Ok(PhaseOutcome::Total), 3_100),
            row(Phase::Setup, Err(ExecutorError::ChannelSend.into()), 0),
            row(Phase::Part(1), Ok(PhaseOutcome::Skipped), 0),
        ];
        let summary = Summary::from_results(&results);
        assert_eq!(
            summary,
            Summary {
                verified: 1,
                unverified: 1,
                failed: 1,
                skipped: 1,
                parse_time: TimeDelta::microseconds(100),
                solve_time: TimeDelta::microseconds(3_000),
            }
        );
    }
}
