//! # docutree
//!
//! Convert a source directory tree into a Docusaurus documentation tree.
//! Every file becomes a Markdown page embedding its original content in a
//! fenced code block, every directory gains a `_category_.json` sidebar
//! descriptor, and a `structure.md` page at the destination root lists the
//! whole hierarchy.
//!
//! # Architecture: One Walk, Pure Templates
//!
//! ```text
//! source/  →  [walk]  →  docs/**/*.md           (one page per source file)
//!                     →  docs/**/_category_.json (one per directory)
//!                     →  docs/structure.md       (whole-tree summary)
//! ```
//!
//! The conversion is a single synchronous depth-first pass over the source
//! tree. Rendering is interleaved with the walk — each file is read and its
//! page written as it is visited — while every document template is a pure
//! function from inputs to bytes, so the page, descriptor, and summary
//! layouts are all testable without a filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`convert`] | The walk itself — traversal order, position counters, interleaved I/O |
//! | [`naming`] | Destination names, category labels, fence tags, natural ordering |
//! | [`render`] | Markdown page template (front matter, heading, file info, content fence) |
//! | [`category`] | `_category_.json` descriptor structure and serialization |
//! | [`summary`] | `structure.md` rendering from the recorded walk sequence |
//! | [`config`] | `docutree.toml` loading, validation, stock config |
//! | [`output`] | CLI report formatting — pure `format_*` + `print_*` wrappers |
//! | [`types`] | Shared `Entry` type recorded by the walk |
//!
//! # Design Decisions
//!
//! ## Extension-Preserving Names
//!
//! A source file keeps its extension in front of `.md` (`main.c` →
//! `main.c.md`), so sibling files that differ only in extension never
//! collide on the same destination name, and the original name stays
//! recognizable in the docs tree. Hidden files turn their leading dot into
//! a `dotfiles-` prefix (`.gitignore` → `dotfiles-gitignore.md`) so the
//! generated page is never itself hidden.
//!
//! ## Natural Sibling Order
//!
//! Children are visited in natural, case-insensitive order: `file2` sorts
//! before `file10`, and `A`/`a` interleave the way a directory listing
//! reads to a human. The same order drives the per-directory
//! `sidebar_position` counters and the summary page, so navigation,
//! positions, and the structure listing always agree.
//!
//! ## Post-Order Category Descriptors
//!
//! A directory's `_category_.json` is written only after its whole subtree
//! has been converted, so a descriptor on disk always describes a fully
//! populated directory. Positions step by 100 per nesting level, leaving
//! room to slot manually curated categories between generated ones.
//!
//! ## Fail-Fast Error Policy
//!
//! The first I/O failure aborts the run with a single terminal error. There
//! is no per-file retry or skip-and-continue: this is a one-shot batch tool
//! whose output is cheap to regenerate, and a partially converted tree with
//! silently missing pages would be worse than a failed run.

pub mod category;
pub mod config;
pub mod convert;
pub mod naming;
pub mod output;
pub mod render;
pub mod summary;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
