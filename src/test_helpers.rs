//! Shared test utilities for the docutree test suite.
//!
//! Provides a source-tree builder and lookup helpers for conversion tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let source = build_tree(&[("kernel/sched.c", "void schedule(void);")]);
//! let doc = read_doc(dest.path(), "kernel/sched.c.md");
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::types::{Entry, EntryKind};

/// Create a source tree from `(path, content)` pairs inside a fresh temp
/// directory. Paths use forward slashes; parent directories are created as
/// needed. A path ending in `/` creates an empty directory instead.
pub fn build_tree(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (path, content) in files {
        if let Some(dir) = path.strip_suffix('/') {
            fs::create_dir_all(tmp.path().join(dir)).unwrap();
        } else {
            let full = tmp.path().join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(full, content).unwrap();
        }
    }
    tmp
}

/// Entry paths in recorded order.
pub fn entry_paths(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.path.as_str()).collect()
}

/// File entry paths only, in recorded order.
pub fn file_paths(entries: &[Entry]) -> Vec<&str> {
    entries
        .iter()
        .filter(|e| e.kind == EntryKind::File)
        .map(|e| e.path.as_str())
        .collect()
}

/// Read a destination file to a string. Panics with the path on miss.
pub fn read_doc(root: &Path, rel: &str) -> String {
    let path = root.join(rel);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}
