//! Output formatting for comparison reports

use crate::compare::Comparison;
use crate::error::Result;
use std::io;
use std::path::Path;

/// Writes formatted report lines to a text sink
pub struct Reporter<W: io::Write> {
    sink: W,
}

impl<W: io::Write> Reporter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    /// `#1 = <path>` / `#2 = <path>` header for a paired entry
    pub fn print_pair_header(&mut self, path1: &Path, path2: &Path) -> Result<()> {
        writeln!(
            self.sink,
            "\n#1 = {}\n#2 = {}",
            path1.display(),
            path2.display()
        )?;
        Ok(())
    }

    pub fn print_separator(&mut self) -> Result<()> {
        writeln!(self.sink, "\n{}\n", "- ".repeat(50))?;
        Ok(())
    }

    pub fn print_verdict(&mut self, matched: bool) -> Result<()> {
        if matched {
            writeln!(self.sink, ">>> they matched.")?;
        } else {
            writeln!(self.sink, "\n>>> they didn't match.")?;
        }
        Ok(())
    }

    /// Print the detail for one comparison outcome. Equal pairs print nothing
    /// here; the verdict line carries the positive case.
    pub fn print_comparison(
        &mut self,
        path1: &Path,
        path2: &Path,
        comparison: &Comparison,
    ) -> Result<()> {
        match comparison {
            Comparison::Equal => {}
            Comparison::ContentDiffer { report } => {
                writeln!(self.sink, "\ncontent differs: ")?;
                writeln!(self.sink, "{}", report)?;
            }
            Comparison::SizeDiffer { size1, size2 } => {
                writeln!(self.sink, "\ncontent differs: ")?;
                writeln!(
                    self.sink,
                    "{} size = {}",
                    path1.display(),
                    format_bytes(*size1)
                )?;
                writeln!(
                    self.sink,
                    "{} size = {}",
                    path2.display(),
                    format_bytes(*size2)
                )?;
            }
            Comparison::NameMismatch { name1, name2 } => {
                writeln!(self.sink, "\ndirectory names don't match: ")?;
                writeln!(self.sink, "{} name = \"{}\"", path1.display(), name1)?;
                writeln!(self.sink, "{} name = \"{}\"", path2.display(), name2)?;
            }
            Comparison::TypeMismatch { first_is_file } => {
                let (kind1, kind2) = if *first_is_file {
                    ("file", "directory")
                } else {
                    ("directory", "file")
                };
                writeln!(self.sink, "\ntypes don't match: ")?;
                writeln!(self.sink, "{} is a {}", path1.display(), kind1)?;
                writeln!(self.sink, "{} is a {}", path2.display(), kind2)?;
            }
            Comparison::CountMismatch { count1, count2 } => {
                writeln!(self.sink, "\ndirectory sizes don't match: ")?;
                writeln!(self.sink, "{} has {} contents", path1.display(), count1)?;
                writeln!(self.sink, "{} has {} contents", path2.display(), count2)?;
            }
        }
        Ok(())
    }

    /// Final banner and overall verdict
    pub fn print_summary(&mut self, equal: bool) -> Result<()> {
        self.print_separator()?;
        if equal {
            writeln!(self.sink, ">>> everything was equal.")?;
        } else {
            writeln!(self.sink, ">>> there were differences.")?;
        }
        Ok(())
    }
}

/// Format bytes in human-readable format
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
