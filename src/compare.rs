//! File pair and directory tree comparison
//!
//! Orchestrates comparison across a single file pair or a directory-tree
//! pair, delegating byte comparison to the scanner and aggregating pass/fail
//! results with structural mismatch checks.

use crate::config::ReportLimits;
use crate::error::{BytediffError, Result};
use crate::output::Reporter;
use crate::scanner;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of comparing one pair of entries.
///
/// Mismatches are comparison results, not errors: the comparator records
/// them and keeps processing remaining pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    ContentDiffer { report: String },
    SizeDiffer { size1: u64, size2: u64 },
    NameMismatch { name1: String, name2: String },
    TypeMismatch { first_is_file: bool },
    CountMismatch { count1: usize, count2: usize },
}

impl Comparison {
    pub fn is_equal(&self) -> bool {
        matches!(self, Comparison::Equal)
    }
}

/// Deterministic recursive listing of a directory tree.
///
/// Both sides of a tree comparison go through this lister so positional
/// pairing is meaningful: depth-first, entries sorted by file name at every
/// level, the root directory itself excluded.
pub fn list_tree(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        entries.push(entry?.into_path());
    }
    Ok(entries)
}

/// Compares two files or two directory trees, writing report lines to a sink
pub struct Comparator<'a, W: io::Write> {
    limits: &'a ReportLimits,
    reporter: Reporter<W>,
}

impl<'a, W: io::Write> Comparator<'a, W> {
    pub fn new(limits: &'a ReportLimits, sink: W) -> Self {
        Self {
            limits,
            reporter: Reporter::new(sink),
        }
    }

    /// Consume the comparator, returning the underlying sink
    pub fn into_sink(self) -> W {
        self.reporter.into_sink()
    }

    /// Top-level comparison: classify the two paths, compare, print the
    /// final summary, and return whether everything was equal.
    pub fn run(&mut self, path1: &Path, path2: &Path) -> Result<bool> {
        for path in [path1, path2] {
            if !path.exists() {
                return Err(BytediffError::invalid_input(format!(
                    "path does not exist: {}",
                    path.display()
                )));
            }
        }

        let equal = if path1.is_file() && path2.is_file() {
            let comparison = self.compare_files(path1, path2)?;
            self.reporter.print_comparison(path1, path2, &comparison)?;
            comparison.is_equal()
        } else if path1.is_dir() && path2.is_dir() {
            self.compare_trees(path1, path2)?
        } else {
            let comparison = Comparison::TypeMismatch {
                first_is_file: path1.is_file(),
            };
            self.reporter.print_comparison(path1, path2, &comparison)?;
            false
        };

        self.reporter.print_summary(equal)?;
        Ok(equal)
    }

    /// Compare two files byte for byte. A length mismatch short-circuits
    /// without invoking the scanner.
    fn compare_files(&mut self, path1: &Path, path2: &Path) -> Result<Comparison> {
        let buffer1 = fs::read(path1)?;
        let buffer2 = fs::read(path2)?;

        if buffer1.len() != buffer2.len() {
            return Ok(Comparison::SizeDiffer {
                size1: buffer1.len() as u64,
                size2: buffer2.len() as u64,
            });
        }

        let outcome = scanner::scan(&buffer1, &buffer2, self.limits);
        log::debug!(
            "{} vs {}: {} divergence run(s)",
            path1.display(),
            path2.display(),
            outcome.runs.len()
        );

        if outcome.equal {
            Ok(Comparison::Equal)
        } else {
            Ok(Comparison::ContentDiffer {
                report: outcome.report,
            })
        }
    }

    /// Compare two directory trees by positional pairing. Every pair is
    /// visited and reported; there is no short-circuit on first failure.
    fn compare_trees(&mut self, dir1: &Path, dir2: &Path) -> Result<bool> {
        let tree1 = list_tree(dir1)?;
        let tree2 = list_tree(dir2)?;
        log::debug!(
            "{}: {} entries, {}: {} entries",
            dir1.display(),
            tree1.len(),
            dir2.display(),
            tree2.len()
        );

        if tree1.len() != tree2.len() {
            let comparison = Comparison::CountMismatch {
                count1: tree1.len(),
                count2: tree2.len(),
            };
            self.reporter.print_comparison(dir1, dir2, &comparison)?;
            return Ok(false);
        }

        let mut all_equal = true;
        for (index, (entry1, entry2)) in tree1.iter().zip(tree2.iter()).enumerate() {
            if index > 0 {
                self.reporter.print_separator()?;
            }
            self.reporter.print_pair_header(entry1, entry2)?;

            let comparison = self.compare_entry(entry1, entry2)?;
            self.reporter.print_comparison(entry1, entry2, &comparison)?;
            self.reporter.print_verdict(comparison.is_equal())?;
            all_equal &= comparison.is_equal();
        }

        Ok(all_equal)
    }

    /// Compare one positionally paired entry. Subdirectory pairs are checked
    /// by base name only; their contents are already paired by the flattened
    /// tree listing.
    fn compare_entry(&mut self, entry1: &Path, entry2: &Path) -> Result<Comparison> {
        if entry1.is_file() && entry2.is_file() {
            self.compare_files(entry1, entry2)
        } else if entry1.is_dir() && entry2.is_dir() {
            let name1 = base_name(entry1);
            let name2 = base_name(entry2);
            if name1 != name2 {
                Ok(Comparison::NameMismatch { name1, name2 })
            } else {
                Ok(Comparison::Equal)
            }
        } else {
            Ok(Comparison::TypeMismatch {
                first_is_file: entry1.is_file(),
            })
        }
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
