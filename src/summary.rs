//! Structure summary — the `structure.md` page listing the whole tree.
//!
//! Rendered once from the entry sequence the walk recorded, in the same
//! order. Each entry takes one line, indented two spaces per depth level
//! and prefixed with a directory or file marker. The linked variant (the
//! default) links directories to their generated index and files to their
//! rendered page under `site_base`; the compact variant lists plain names.

use crate::config::{DocsConfig, SummaryStyle};
use crate::naming;
use crate::render;
use crate::types::{Entry, EntryKind};

/// Fixed name of the summary document at the destination root.
pub const SUMMARY_FILE_NAME: &str = "structure.md";

/// Render the structure summary from the recorded walk sequence.
pub fn render_summary(entries: &[Entry], config: &DocsConfig) -> String {
    let mut out = render::front_matter(0);
    out.push_str("# Project Structure\n\n### Directory Hierarchy\n\n");

    for entry in entries {
        let indent = "  ".repeat(entry.depth);
        let marker = match entry.kind {
            EntryKind::Directory => "\u{1F4C1} ",
            EntryKind::File => "\u{1F4C4} ",
        };
        let display = match (config.summary, entry.kind) {
            (SummaryStyle::Compact, _) => entry.name().to_string(),
            (SummaryStyle::Linked, EntryKind::Directory) => {
                format!("[{}]({}/{}/)", entry.name(), config.site_base, entry.path)
            }
            (SummaryStyle::Linked, EntryKind::File) => format!(
                "[{}]({}/{})",
                entry.name(),
                config.site_base,
                naming::target_rel_path(&entry.path)
            ),
        };
        out.push_str(&indent);
        out.push_str(marker);
        out.push_str(&display);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<Entry> {
        vec![
            Entry {
                kind: EntryKind::File,
                path: "a.txt".to_string(),
                depth: 0,
            },
            Entry {
                kind: EntryKind::Directory,
                path: "Sub".to_string(),
                depth: 0,
            },
            Entry {
                kind: EntryKind::File,
                path: "Sub/c.txt".to_string(),
                depth: 1,
            },
        ]
    }

    #[test]
    fn starts_with_front_matter_and_headings() {
        let doc = render_summary(&sample_entries(), &DocsConfig::default());
        assert!(doc.starts_with(
            "---\nsidebar_position: 0\n---\n# Project Structure\n\n### Directory Hierarchy\n\n"
        ));
    }

    #[test]
    fn linked_variant_targets_rendered_pages() {
        let doc = render_summary(&sample_entries(), &DocsConfig::default());
        assert!(doc.contains("\u{1F4C4} [a.txt](/docs/a.txt.md)\n"));
        assert!(doc.contains("\u{1F4C1} [Sub](/docs/Sub/)\n"));
        assert!(doc.contains("  \u{1F4C4} [c.txt](/docs/Sub/c.txt.md)\n"));
    }

    #[test]
    fn linked_variant_uses_renamed_dotfile_targets() {
        let entries = vec![Entry {
            kind: EntryKind::File,
            path: "tools/.gitignore".to_string(),
            depth: 1,
        }];
        let doc = render_summary(&entries, &DocsConfig::default());
        assert!(doc.contains("[.gitignore](/docs/tools/dotfiles-gitignore.md)"));
    }

    #[test]
    fn compact_variant_lists_plain_names() {
        let config = DocsConfig {
            summary: SummaryStyle::Compact,
            ..DocsConfig::default()
        };
        let doc = render_summary(&sample_entries(), &config);
        assert!(doc.contains("\u{1F4C4} a.txt\n"));
        assert!(doc.contains("\u{1F4C1} Sub\n"));
        assert!(doc.contains("  \u{1F4C4} c.txt\n"));
        assert!(!doc.contains("]("));
    }

    #[test]
    fn indentation_follows_depth() {
        let entries = vec![Entry {
            kind: EntryKind::File,
            path: "a/b/c/deep.txt".to_string(),
            depth: 3,
        }];
        let config = DocsConfig {
            summary: SummaryStyle::Compact,
            ..DocsConfig::default()
        };
        let doc = render_summary(&entries, &config);
        assert!(doc.contains("\n      \u{1F4C4} deep.txt\n"));
    }

    #[test]
    fn custom_site_base() {
        let config = DocsConfig {
            site_base: "/reference".to_string(),
            ..DocsConfig::default()
        };
        let entries = vec![Entry {
            kind: EntryKind::File,
            path: "main.c".to_string(),
            depth: 0,
        }];
        let doc = render_summary(&entries, &config);
        assert!(doc.contains("[main.c](/reference/main.c.md)"));
    }
}
