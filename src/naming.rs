//! Centralized name logic for the generated documentation tree.
//!
//! All destination names derive deterministically from the source name:
//!
//! - `main.c` → `main.c.md` — the original extension is kept in front of
//!   `.md`, so sibling files that differ only in extension (`main.c`,
//!   `main.h`) never collide on the same destination name
//! - `Makefile` → `Makefile.md`
//! - `.gitignore` → `dotfiles-gitignore.md`
//!
//! Directory names are never rewritten; they carry over unchanged and get a
//! display label (`my-api_docs` → "My Api Docs") for the category
//! descriptor.
//!
//! ## Natural ordering
//!
//! Siblings are visited in natural, case-insensitive order: digit runs
//! compare as numbers (`file2` before `file10`) and `A`/`a` interleave the
//! way a human would expect.

use std::cmp::Ordering;

/// Destination base name for a source file name.
///
/// - `main.c` → `main.c.md`
/// - `archive.tar.gz` → `archive.tar.gz.md`
/// - `Makefile` → `Makefile.md`
/// - `.gitignore` → `dotfiles-gitignore.md`
/// - `foo.` → `foo.md` (a trailing dot carries no extension)
pub fn target_file_name(name: &str) -> String {
    if let Some(stripped) = name.strip_prefix('.') {
        return format!("dotfiles-{stripped}.md");
    }
    match name.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() => format!("{stem}.{ext}.md"),
        Some((stem, _)) => format!("{stem}.md"),
        None => format!("{name}.md"),
    }
}

/// Destination path for a source file's relative path.
///
/// Only the base name is rewritten; the directory part carries over
/// unchanged.
pub fn target_rel_path(rel_path: &str) -> String {
    match rel_path.rsplit_once('/') {
        Some((dir, name)) => format!("{dir}/{}", target_file_name(name)),
        None => target_file_name(rel_path),
    }
}

/// Fenced-code-block language tag for a source file name.
///
/// The text after the last `.` when non-empty (`.gitignore` tags as
/// `gitignore`), the fallback otherwise.
pub fn language_tag<'a>(name: &'a str, fallback: &'a str) -> &'a str {
    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext,
        _ => fallback,
    }
}

/// Human-readable category label for a directory name.
///
/// Hyphens and underscores become spaces; each word's first letter is
/// uppercased, the rest is left as-is.
pub fn category_label(dir_name: &str) -> String {
    dir_name
        .replace(['-', '_'], " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Natural, case-insensitive ordering.
///
/// Digit runs compare as numbers; other characters compare lowercased. Raw
/// string order breaks case and zero-padding ties, keeping the ordering
/// total and deterministic.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (mut i, mut j) = (0, 0);

    while i < a_chars.len() && j < b_chars.len() {
        let (ca, cb) = (a_chars[i], b_chars[j]);

        if ca.is_ascii_digit() && cb.is_ascii_digit() {
            let run_a = digit_run(&a_chars, &mut i);
            let run_b = digit_run(&b_chars, &mut j);
            // Compare by numeric value: more significant digits wins, then
            // the digits themselves. Runs are compared as strings so huge
            // digit sequences never overflow.
            let sig_a = run_a.trim_start_matches('0');
            let sig_b = run_b.trim_start_matches('0');
            let ord = sig_a.len().cmp(&sig_b.len()).then_with(|| sig_a.cmp(sig_b));
            if ord != Ordering::Equal {
                return ord;
            }
        } else {
            let la = lowercase(ca);
            let lb = lowercase(cb);
            if la != lb {
                return la.cmp(&lb);
            }
            i += 1;
            j += 1;
        }
    }

    let remaining = (a_chars.len() - i).cmp(&(b_chars.len() - j));
    remaining.then_with(|| a.cmp(b))
}

fn digit_run(chars: &[char], idx: &mut usize) -> String {
    let start = *idx;
    while *idx < chars.len() && chars[*idx].is_ascii_digit() {
        *idx += 1;
    }
    chars[start..*idx].iter().collect()
}

fn lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
