//! Tree conversion — walks the source tree and writes the documentation tree.
//!
//! The walk is a single synchronous depth-first pass. Each directory's
//! children are visited in natural, case-insensitive order; files are
//! rendered as they are visited and the directory's category descriptor is
//! written once its whole subtree has been processed. The walk returns the
//! ordered entry sequence it recorded, which feeds the structure summary.
//!
//! ## Destination layout
//!
//! ```text
//! docs/
//! ├── structure.md               # Whole-tree summary (sidebar position 0)
//! ├── Makefile.md
//! ├── dotfiles-gitignore.md      # From .gitignore
//! └── kernel/
//!     ├── _category_.json        # label "Kernel", position 100
//!     ├── sched.c.md
//!     └── sched.h.md
//! ```
//!
//! The first I/O failure aborts the run. There is no per-file recovery or
//! skip-and-continue mode; a rerun regenerates the full tree.

use crate::category::{self, CategoryDescriptor};
use crate::config::{self, DocsConfig};
use crate::naming;
use crate::render::{self, DocumentSource};
use crate::summary;
use crate::types::{Entry, EntryKind};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Source directory does not exist: {0}")]
    SourceMissing(PathBuf),
    #[error("Source path is not a directory: {0}")]
    SourceNotADirectory(PathBuf),
}

/// Names that never appear in the converted tree.
fn is_reserved(name: &str) -> bool {
    name == category::CATEGORY_FILE_NAME || name == config::CONFIG_FILE_NAME
}

/// Converts a source tree into a mirrored documentation tree.
pub struct Converter {
    source: PathBuf,
    dest: PathBuf,
    config: DocsConfig,
}

impl Converter {
    pub fn new(source: &Path, dest: &Path, config: DocsConfig) -> Self {
        Self {
            source: source.to_path_buf(),
            dest: dest.to_path_buf(),
            config,
        }
    }

    /// Run the full conversion. Returns the recorded entry sequence.
    pub fn generate(&self) -> Result<Vec<Entry>, ConvertError> {
        check_source(&self.source)?;
        fs::create_dir_all(&self.dest)?;

        let entries = self.convert_directory(&self.source, "", 0)?;

        let summary_doc = summary::render_summary(&entries, &self.config);
        fs::write(self.dest.join(summary::SUMMARY_FILE_NAME), summary_doc)?;

        Ok(entries)
    }

    /// Convert one directory level and recurse into subdirectories.
    ///
    /// `rel` is the directory's path relative to the source root (empty for
    /// the root itself); `level` is its nesting level (root = 0). The
    /// sibling position counter is local to this call — each directory
    /// numbers its own file children from 1, and subdirectories do not
    /// consume positions.
    fn convert_directory(
        &self,
        dir: &Path,
        rel: &str,
        level: usize,
    ) -> Result<Vec<Entry>, ConvertError> {
        let mut names: Vec<String> = fs::read_dir(dir)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| !is_reserved(name))
            .collect();
        names.sort_by(|a, b| naming::natural_cmp(a, b));

        let mut entries = Vec::new();
        let mut position = 0;

        for name in &names {
            let source_path = dir.join(name);
            let entry_rel = if rel.is_empty() {
                name.clone()
            } else {
                format!("{rel}/{name}")
            };

            if source_path.is_dir() {
                fs::create_dir_all(self.dest.join(&entry_rel))?;
                entries.push(Entry {
                    kind: EntryKind::Directory,
                    path: entry_rel.clone(),
                    depth: level,
                });
                entries.extend(self.convert_directory(&source_path, &entry_rel, level + 1)?);
            } else {
                position += 1;
                entries.push(Entry {
                    kind: EntryKind::File,
                    path: entry_rel.clone(),
                    depth: level,
                });
                self.render_file(&source_path, &entry_rel, name, position)?;
            }
        }

        // Post-order: the descriptor reflects a fully converted subtree.
        if level > 0 {
            let dir_name = rel.rsplit('/').next().unwrap_or(rel);
            let descriptor = CategoryDescriptor::new(dir_name, level);
            fs::write(
                self.dest.join(rel).join(category::CATEGORY_FILE_NAME),
                descriptor.to_json()?,
            )?;
        }

        Ok(entries)
    }

    fn render_file(
        &self,
        source_path: &Path,
        entry_rel: &str,
        file_name: &str,
        position: usize,
    ) -> Result<(), ConvertError> {
        let content = fs::read(source_path)?;
        let language = naming::language_tag(file_name, &self.config.fallback_language);

        let doc = render::render_document(&DocumentSource {
            file_name,
            relative_path: entry_rel,
            position,
            language,
            content: &content,
        });

        let target_path = self.dest.join(naming::target_rel_path(entry_rel));
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(target_path, doc)?;
        Ok(())
    }
}

/// Verify the source root exists and is a directory.
pub fn check_source(source: &Path) -> Result<(), ConvertError> {
    if !source.exists() {
        return Err(ConvertError::SourceMissing(source.to_path_buf()));
    }
    if !source.is_dir() {
        return Err(ConvertError::SourceNotADirectory(source.to_path_buf()));
    }
    Ok(())
}

/// Count files and directories under `root`, skipping reserved names.
///
/// Used for the pre-run "Converting N files" line and the `check` command.
/// The conversion itself does not depend on this count.
pub fn count_entries(root: &Path) -> (usize, usize) {
    let mut files = 0;
    let mut dirs = 0;
    for entry in WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| !is_reserved(&e.file_name().to_string_lossy()))
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_dir() {
            dirs += 1;
        } else {
            files += 1;
        }
    }
    (files, dirs)
}
