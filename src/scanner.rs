//! Byte-level divergence scanner
//!
//! Walks two equal-length buffers in lockstep, finds maximal runs of unequal
//! bytes, classifies each run as printable or binary, and renders a bounded
//! preview of the context around each run.

use crate::config::ReportLimits;
use crate::CONTEXT_BYTES;
use std::fmt::Write as _;

/// A maximal contiguous span `[start, end)` where two buffers differ.
///
/// Invariant: `start < end <= buffer length`. `printable` is true iff every
/// byte of both buffers within the span has code point >= 32.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivergenceRun {
    pub start: usize,
    pub end: usize,
    pub printable: bool,
}

/// Result of scanning one pair of equal-length buffers
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub equal: bool,
    pub runs: Vec<DivergenceRun>,
    pub report: String,
}

fn is_byte_visible(byte: u8) -> bool {
    byte >= 32
}

/// Scan two equal-length buffers for divergence runs.
///
/// The caller guarantees equal lengths; a length mismatch is a distinct,
/// cheaper failure mode reported without byte comparison.
pub fn scan(buffer1: &[u8], buffer2: &[u8], limits: &ReportLimits) -> ScanOutcome {
    debug_assert_eq!(buffer1.len(), buffer2.len());
    let stop = buffer1.len().min(buffer2.len());

    let mut runs: Vec<DivergenceRun> = Vec::new();
    let mut report = String::new();
    let mut in_run = false;
    let mut run_printable = true;
    let mut start = 0usize;
    let mut limit_reached = false;

    for i in 0..stop {
        let c1 = buffer1[i];
        let c2 = buffer2[i];

        if c1 != c2 {
            if !in_run {
                start = i;
                run_printable = true;
                in_run = true;
            }
            if run_printable && (!is_byte_visible(c1) || !is_byte_visible(c2)) {
                run_printable = false;
            }
        } else if in_run {
            in_run = false;
            let run = DivergenceRun {
                start,
                end: i,
                printable: run_printable,
            };
            render_run(&mut report, buffer1, buffer2, run, i, stop, limits);
            runs.push(run);

            if runs.len() >= limits.max_runs {
                limit_reached = true;
                break;
            }
        }
    }

    // End of buffer closes a still-open run.
    if in_run {
        let run = DivergenceRun {
            start,
            end: stop,
            printable: run_printable,
        };
        render_run(&mut report, buffer1, buffer2, run, stop, stop, limits);
        runs.push(run);
    }

    if limit_reached {
        let _ = write!(
            report,
            "\n[display maximum of {} runs reached]\n",
            limits.max_runs
        );
    }

    let total = report.chars().count();
    if total > limits.max_total_chars {
        let mut truncated: String = report.chars().take(limits.max_total_chars).collect();
        let _ = write!(truncated, "[+{} more]", total - limits.max_total_chars);
        report = truncated;
    }

    ScanOutcome {
        equal: runs.is_empty(),
        runs,
        report,
    }
}

/// Render one run with up to `CONTEXT_BYTES` of context on each side.
/// `close` is the index that terminated the run (`stop` for a trailing run).
fn render_run(
    report: &mut String,
    buffer1: &[u8],
    buffer2: &[u8],
    run: DivergenceRun,
    close: usize,
    stop: usize,
    limits: &ReportLimits,
) {
    let a = run.start.saturating_sub(CONTEXT_BYTES);
    let b = (close + CONTEXT_BYTES).min(stop - 1);

    let _ = write!(report, "\nNOT EQUAL at {}\n", run.start);
    render_line(report, &buffer1[a..b], run.printable, limits);
    render_line(report, &buffer2[a..b], run.printable, limits);
}

fn render_line(report: &mut String, slice: &[u8], printable: bool, limits: &ReportLimits) {
    let (rendered, omitted) = if printable {
        let shown = slice.len().min(limits.max_line_chars);
        let text: String = slice[..shown].iter().map(|&b| b as char).collect();
        (text, slice.len() - shown)
    } else {
        let shown = slice.len().min(limits.max_line_chars / 2);
        let hex: String = slice[..shown].iter().map(|b| format!("{:02x}", b)).collect();
        (hex, slice.len() - shown)
    };

    if omitted > 0 {
        let _ = writeln!(report, "...{}... [+{} more]", rendered, omitted);
    } else {
        let _ = writeln!(report, "...{}...", rendered);
    }
}
