//! CLI report formatting.
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! # Output Format
//!
//! ```text
//! Makefile → Makefile.md
//! kernel/
//!     sched.c → kernel/sched.c.md
//!     sched.h → kernel/sched.h.md
//!
//! Generated 3 documents, 1 categories → structure.md
//! ```

use crate::naming;
use crate::summary;
use crate::types::{Entry, EntryKind};

/// Indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format the post-run report: one line per entry with its target path,
/// then a totals line.
pub fn format_generate_report(entries: &[Entry]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut files = 0;
    let mut dirs = 0;

    for entry in entries {
        match entry.kind {
            EntryKind::Directory => {
                dirs += 1;
                lines.push(format!("{}{}/", indent(entry.depth), entry.name()));
            }
            EntryKind::File => {
                files += 1;
                lines.push(format!(
                    "{}{} \u{2192} {}",
                    indent(entry.depth),
                    entry.name(),
                    naming::target_rel_path(&entry.path)
                ));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} documents, {} categories \u{2192} {}",
        files,
        dirs,
        summary::SUMMARY_FILE_NAME
    ));
    lines
}

/// Print the post-run report to stdout.
pub fn print_generate_report(entries: &[Entry]) {
    for line in format_generate_report(entries) {
        println!("{}", line);
    }
}

/// Format the `check` report.
pub fn format_check_report(files: usize, dirs: usize) -> Vec<String> {
    vec![format!("{} files in {} directories", files, dirs)]
}

/// Print the `check` report to stdout.
pub fn print_check_report(files: usize, dirs: usize) {
    for line in format_check_report(files, dirs) {
        println!("{}", line);
    }
}
